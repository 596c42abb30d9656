//! Coordinate reference systems.
//!
//! A file describes its coordinate reference system either with GeoTIFF keys or with an OGC WKT
//! string. [resolve_geokeys] folds the keys, in file order, into a [CrsSlot] holding an
//! ellipsoid, a projection, units and a vertical code. Later keys for the same attribute
//! overwrite earlier ones. WKT strings are detected but not interpreted, so the WKT slot of a
//! [Crs] is always empty.
//!
//! ```
//! use las_validate::crs::{self, Status};
//! use las_validate::geokey::{GeoKeys, PROJECTED_CS_TYPE};
//! let mut geokeys = GeoKeys::default();
//! geokeys.push_short(PROJECTED_CS_TYPE, 32617);
//! let resolution = crs::resolve_geokeys(&geokeys);
//! assert_eq!(Status::Determined, resolution.status);
//! assert_eq!(Some("UTM 17 northern hemisphere"), resolution.description.as_deref());
//! ```

pub mod ellipsoid;
pub mod epsg;
mod projection;
mod registry;
pub mod state_plane;

pub use self::ellipsoid::{Ellipsoid, ResolvedEllipsoid};
pub use self::projection::{Projection, ProjectionKind, utm_central_meridian};

use crate::geokey::{self, GeoKeyEntry, GeoKeyValue, GeoKeys};
use log::{debug, warn};
use std::fmt;

/// A linear unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    /// No unit was given.
    #[default]
    Unspecified,
    /// EPSG 9001.
    Meter,
    /// EPSG 9002, the international foot.
    Foot,
    /// EPSG 9003, the U.S. survey foot.
    SurveyFoot,
}

impl Unit {
    /// Maps an EPSG unit code to a unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::Unit;
    /// assert_eq!(Some(Unit::Foot), Unit::from_epsg(9002));
    /// assert_eq!(None, Unit::from_epsg(9036));
    /// ```
    pub fn from_epsg(code: u16) -> Option<Unit> {
        match code {
            9001 => Some(Unit::Meter),
            9002 => Some(Unit::Foot),
            9003 => Some(Unit::SurveyFoot),
            _ => None,
        }
    }

    /// The number of meters in one of this unit.
    ///
    /// An unspecified unit is taken to be meters.
    pub fn to_meters(&self) -> f64 {
        match self {
            Unit::Unspecified | Unit::Meter => 1.0,
            Unit::Foot => 0.3048,
            Unit::SurveyFoot => 1200.0 / 3937.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Unspecified => write!(f, "unspecified"),
            Unit::Meter => write!(f, "meter"),
            Unit::Foot => write!(f, "foot"),
            Unit::SurveyFoot => write!(f, "US survey foot"),
        }
    }
}

/// One resolved coordinate reference system.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrsSlot {
    /// The ellipsoid, if one was given or implied.
    pub ellipsoid: Option<ResolvedEllipsoid>,
    /// The projection, if one was determined.
    pub projection: Option<Projection>,
    /// The unit of x and y.
    pub coordinate_unit: Unit,
    /// The unit of z.
    pub elevation_unit: Unit,
    /// The EPSG code of the vertical coordinate system.
    pub vertical_epsg: Option<u16>,
}

impl CrsSlot {
    /// Re-derives the `ProjectedCSTypeGeoKey` value of this slot.
    ///
    /// That is the code the projection was resolved from, or for a utm zone without a code the
    /// code of the zone on the slot's ellipsoid.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs;
    /// use las_validate::geokey::{GeoKeys, PROJECTED_CS_TYPE};
    /// let mut geokeys = GeoKeys::default();
    /// geokeys.push_short(PROJECTED_CS_TYPE, 26917);
    /// let slot = crs::resolve_geokeys(&geokeys).slot;
    /// assert_eq!(Some(26917), slot.projected_cs_type());
    /// ```
    pub fn projected_cs_type(&self) -> Option<u16> {
        let projection = self.projection.as_ref()?;
        projection.epsg.or_else(|| {
            epsg::reverse(
                &projection.kind,
                self.ellipsoid.as_ref().map(ResolvedEllipsoid::id),
            )
        })
    }
}

/// How far the resolver got.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// A projection was determined (possibly the intentional absence of one).
    Determined,
    /// The projected code is recognized, but its projection is not modeled.
    Recognized(u16),
    /// The projected code is a valid EPSG code that is not known.
    Unknown(u16),
    /// The projected code is outside of the EPSG range.
    Invalid(u16),
    /// The keys do not describe a projection.
    Undetermined,
}

/// The result of folding a set of geokeys.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// The resolved slot.
    pub slot: CrsSlot,
    /// A short human readable description, e.g. "stateplane83 TX_C".
    pub description: Option<String>,
    /// How far the resolver got.
    pub status: Status,
}

/// The coordinate reference systems of a file, one slot per source.
#[derive(Clone, Debug, PartialEq)]
pub struct Crs {
    /// The system described by the GeoTIFF keys.
    pub from_geokeys: Option<CrsSlot>,
    /// The system described by the OGC WKT string. Never populated.
    pub from_wkt: Option<CrsSlot>,
    /// The description of the geokey resolution.
    pub description: Option<String>,
    /// The status of the geokey resolution.
    pub status: Status,
}

impl Crs {
    /// Resolves whichever sources are present.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::{Crs, Status};
    /// let crs = Crs::resolve(None, Some("PROJCS[...]"));
    /// assert!(crs.from_wkt.is_none());
    /// assert_eq!(Status::Undetermined, crs.status);
    /// ```
    pub fn resolve(geokeys: Option<&GeoKeys>, wkt: Option<&str>) -> Crs {
        if wkt.is_some() {
            debug!("ogc wkt is present but not interpreted");
        }
        match geokeys.map(resolve_geokeys) {
            Some(resolution) => Crs {
                from_geokeys: Some(resolution.slot),
                from_wkt: None,
                description: resolution.description,
                status: resolution.status,
            },
            None => Crs {
                from_geokeys: None,
                from_wkt: None,
                description: None,
                status: Status::Undetermined,
            },
        }
    }
}

/// Folds geokeys into a slot.
///
/// The fold is pure: resolving the same keys twice gives the same resolution.
///
/// # Examples
///
/// ```
/// use las_validate::crs::{self, Unit};
/// use las_validate::geokey::{GeoKeys, PROJ_LINEAR_UNITS};
/// let mut geokeys = GeoKeys::default();
/// geokeys.push_short(PROJ_LINEAR_UNITS, 9002);
/// let slot = crs::resolve_geokeys(&geokeys).slot;
/// assert_eq!(Unit::Foot, slot.coordinate_unit);
/// assert!(slot.projection.is_none());
/// assert!(slot.ellipsoid.is_none());
/// ```
pub fn resolve_geokeys(geokeys: &GeoKeys) -> Resolution {
    let mut resolver = Resolver::default();
    for entry in &geokeys.entries {
        match geokeys.value(entry) {
            Ok(value) => resolver.add(entry, value),
            Err(err) => warn!("skipping geokey: {err}"),
        }
    }
    resolver.finish()
}

enum Projected {
    Modeled,
    Described(u16, &'static str),
    Unknown(u16),
    Invalid(u16),
}

#[derive(Default)]
struct RawParams {
    false_easting: Option<f64>,
    false_northing: Option<f64>,
    lat_origin: Option<f64>,
    long_meridian: Option<f64>,
    scale_factor: Option<f64>,
    first_std_parallel: Option<f64>,
    second_std_parallel: Option<f64>,
}

const COORD_TRANS_TRANSVERSE_MERCATOR: u16 = 1;
const COORD_TRANS_LAMBERT_CONFORMAL_CONIC_2SP: u16 = 8;

#[derive(Default)]
struct Resolver {
    slot: CrsSlot,
    explicit_ellipsoid: Option<u16>,
    implied_ellipsoid: Option<u16>,
    projected: Option<Projected>,
    coord_trans: Option<u16>,
    raw: RawParams,
}

fn is_vertical_cs(code: u16) -> bool {
    matches!(code, 5000..=5099 | 5101..=5199 | 5200..=5999)
}

impl Resolver {
    fn add(&mut self, entry: &GeoKeyEntry, value: GeoKeyValue) {
        let key_id = entry.key_id;
        match (key_id, value) {
            (geokey::GT_MODEL_TYPE, GeoKeyValue::Short(model)) => self.add_model_type(model),
            (geokey::GEOGRAPHIC_TYPE, GeoKeyValue::Short(code)) => {
                self.add_ellipsoid_hint(key_id, code, ellipsoid::from_geographic_code(code))
            }
            (geokey::GEOG_GEODETIC_DATUM, GeoKeyValue::Short(code)) => {
                self.add_ellipsoid_hint(key_id, code, ellipsoid::from_datum_code(code))
            }
            (geokey::GEOG_ELLIPSOID, GeoKeyValue::Short(code)) => {
                self.add_ellipsoid_hint(key_id, code, ellipsoid::from_ellipsoid_code(code))
            }
            (geokey::PROJECTED_CS_TYPE, GeoKeyValue::Short(code)) => self.add_projected(code),
            (geokey::PROJ_COORD_TRANS, GeoKeyValue::Short(code)) => self.coord_trans = Some(code),
            (geokey::PROJ_LINEAR_UNITS, GeoKeyValue::Short(code)) => match Unit::from_epsg(code) {
                Some(unit) => self.slot.coordinate_unit = unit,
                None => debug!("ignoring linear unit {code}"),
            },
            (geokey::VERTICAL_UNITS, GeoKeyValue::Short(code)) => match Unit::from_epsg(code) {
                Some(unit) => self.slot.elevation_unit = unit,
                None => debug!("ignoring vertical unit {code}"),
            },
            (geokey::VERTICAL_CS_TYPE, GeoKeyValue::Short(code)) => {
                if is_vertical_cs(code) {
                    self.slot.vertical_epsg = Some(code);
                } else {
                    warn!("vertical cs type {code} is not in an EPSG vertical range");
                }
            }
            (key_id, GeoKeyValue::Double(value)) => self.add_raw(key_id, value),
            (key_id, GeoKeyValue::Short(value)) if is_raw(key_id) => {
                self.add_raw(key_id, f64::from(value))
            }
            (key_id, value) => debug!("ignoring geokey {key_id} with value {value:?}"),
        }
    }

    fn add_model_type(&mut self, model: u16) {
        match model {
            1 => debug!("model type is projected"),
            2 => self.slot.projection = Some(Projection::latlong()),
            3 => self.slot.projection = Some(Projection::ecef()),
            0 | geokey::USER_DEFINED => self.slot.projection = Some(Projection::none()),
            _ => warn!("unknown model type {model}"),
        }
    }

    fn add_ellipsoid_hint(&mut self, key_id: u16, code: u16, id: Option<u16>) {
        match id {
            Some(id) => self.explicit_ellipsoid = Some(id),
            None => debug!("geokey {key_id} value {code} does not map to an ellipsoid"),
        }
    }

    fn add_projected(&mut self, code: u16) {
        if code == 0 || code == geokey::USER_DEFINED {
            debug!("projected cs type {code} is not a code");
            return;
        }
        // Later keys win, even when this code is not modeled.
        self.slot.projection = None;
        self.implied_ellipsoid = None;
        if !epsg::is_valid_code(code) {
            self.projected = Some(Projected::Invalid(code));
            return;
        }
        self.projected = Some(match epsg::lookup(code) {
            Ok(Some(epsg::Match::Modeled(modeled))) => {
                self.slot.projection = Some(modeled.projection);
                self.slot.coordinate_unit = modeled.unit;
                self.implied_ellipsoid = Some(modeled.ellipsoid);
                Projected::Modeled
            }
            Ok(Some(epsg::Match::Described(description))) => {
                debug!("epsg code {code} is {description}, which is not modeled");
                Projected::Described(code, description)
            }
            Ok(None) => Projected::Unknown(code),
            Err(err) => {
                warn!("epsg code {code} could not be modeled: {err}");
                Projected::Unknown(code)
            }
        });
    }

    fn add_raw(&mut self, key_id: u16, value: f64) {
        let raw = &mut self.raw;
        let slot = match key_id {
            geokey::PROJ_FALSE_EASTING | geokey::PROJ_FALSE_ORIGIN_EASTING => &mut raw.false_easting,
            geokey::PROJ_FALSE_NORTHING | geokey::PROJ_FALSE_ORIGIN_NORTHING => {
                &mut raw.false_northing
            }
            geokey::PROJ_NAT_ORIGIN_LAT | geokey::PROJ_FALSE_ORIGIN_LAT | geokey::PROJ_CENTER_LAT => {
                &mut raw.lat_origin
            }
            geokey::PROJ_NAT_ORIGIN_LONG
            | geokey::PROJ_FALSE_ORIGIN_LONG
            | geokey::PROJ_CENTER_LONG => &mut raw.long_meridian,
            geokey::PROJ_SCALE_AT_NAT_ORIGIN | geokey::PROJ_SCALE_AT_CENTER => {
                &mut raw.scale_factor
            }
            geokey::PROJ_STD_PARALLEL_1 => &mut raw.first_std_parallel,
            geokey::PROJ_STD_PARALLEL_2 => &mut raw.second_std_parallel,
            _ => {
                debug!("ignoring geokey {key_id} with value {value}");
                return;
            }
        };
        *slot = Some(value);
    }

    fn synthesize(&self) -> Option<Projection> {
        let raw = &self.raw;
        let to_meters = self.slot.coordinate_unit.to_meters();
        let false_easting = raw.false_easting? * to_meters;
        let false_northing = raw.false_northing? * to_meters;
        let lat_origin = raw.lat_origin?;
        let long_meridian = raw.long_meridian?;
        let projection = match self.coord_trans? {
            COORD_TRANS_TRANSVERSE_MERCATOR => Projection::transverse_mercator(
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                raw.scale_factor?,
                "generic transverse mercator",
            ),
            COORD_TRANS_LAMBERT_CONFORMAL_CONIC_2SP => Projection::lambert_conformal_conic(
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                raw.first_std_parallel?,
                raw.second_std_parallel?,
                "generic lambert conformal conic",
            ),
            other => {
                debug!("coordinate transformation {other} is not modeled");
                return None;
            }
        };
        projection
            .map_err(|err| warn!("user defined projection is invalid: {err}"))
            .ok()
    }

    fn finish(mut self) -> Resolution {
        if self.projected.is_none() && self.slot.projection.is_none() {
            self.slot.projection = self.synthesize();
        }
        self.slot.ellipsoid = self
            .explicit_ellipsoid
            .or(self.implied_ellipsoid)
            .and_then(Ellipsoid::get)
            .map(Ellipsoid::resolve);
        let (description, status) = match (&self.slot.projection, &self.projected) {
            (Some(projection), _) => (Some(projection.name.clone()), Status::Determined),
            (None, Some(Projected::Described(code, description))) => {
                (Some(description.to_string()), Status::Recognized(*code))
            }
            (None, Some(Projected::Unknown(code))) => (None, Status::Unknown(*code)),
            (None, Some(Projected::Invalid(code))) => (None, Status::Invalid(*code)),
            (None, _) => (None, Status::Undetermined),
        };
        Resolution {
            slot: self.slot,
            description,
            status,
        }
    }
}

fn is_raw(key_id: u16) -> bool {
    (geokey::PROJ_STD_PARALLEL_1..=geokey::PROJ_SCALE_AT_CENTER).contains(&key_id)
}
