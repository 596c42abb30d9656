//! Projection descriptors and the functions that build them.
//!
//! Builders validate their parameters and return an error instead of an inconsistent
//! descriptor. Nothing here transforms coordinates.

use crate::{Error, Result};
use std::fmt;

/// The family of a projection and its parameters.
///
/// Angles are in degrees and false eastings/northings in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectionKind {
    /// Intentionally no projection ("user defined" or undefined model type).
    None,
    /// Geographic latitude/longitude.
    LatLong,
    /// Geographic longitude/latitude.
    LongLat,
    /// Earth centered, earth fixed.
    Ecef,
    /// Universal transverse mercator.
    Utm {
        /// Zone number, 1 through 60.
        zone_number: u8,
        /// Latitude band letter, if the zone was given as a designator.
        zone_letter: Option<char>,
        /// Northern or southern hemisphere.
        northern: bool,
        /// Central meridian of the zone.
        central_meridian: f64,
    },
    /// Lambert conformal conic with two standard parallels.
    Lcc {
        #[allow(missing_docs)]
        false_easting: f64,
        #[allow(missing_docs)]
        false_northing: f64,
        #[allow(missing_docs)]
        lat_origin: f64,
        #[allow(missing_docs)]
        long_meridian: f64,
        #[allow(missing_docs)]
        first_std_parallel: f64,
        #[allow(missing_docs)]
        second_std_parallel: f64,
    },
    /// Transverse mercator.
    Tm {
        #[allow(missing_docs)]
        false_easting: f64,
        #[allow(missing_docs)]
        false_northing: f64,
        #[allow(missing_docs)]
        lat_origin: f64,
        #[allow(missing_docs)]
        long_meridian: f64,
        #[allow(missing_docs)]
        scale_factor: f64,
    },
}

/// A projection with a descriptive name.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    /// The family and its parameters.
    pub kind: ProjectionKind,
    /// A short human readable name, e.g. "UTM 17 northern hemisphere".
    pub name: String,
    /// The EPSG code this projection was resolved from, if any.
    pub epsg: Option<u16>,
}

/// Returns the central meridian of a utm zone.
///
/// # Examples
///
/// ```
/// use las_validate::crs::utm_central_meridian;
/// assert_eq!(-81.0, utm_central_meridian(17));
/// assert_eq!(-177.0, utm_central_meridian(1));
/// assert_eq!(177.0, utm_central_meridian(60));
/// ```
pub fn utm_central_meridian(zone_number: u8) -> f64 {
    (f64::from(zone_number) - 1.0) * 6.0 - 180.0 + 3.0
}

fn check(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(Error::InvalidProjectionParameter { name, value })
    }
}

impl Projection {
    fn new(kind: ProjectionKind, name: impl Into<String>) -> Projection {
        Projection {
            kind,
            name: name.into(),
            epsg: None,
        }
    }

    /// Records the EPSG code this projection came from.
    pub fn with_epsg(mut self, code: u16) -> Projection {
        self.epsg = Some(code);
        self
    }

    /// Intentionally no projection.
    pub fn none() -> Projection {
        Projection::new(ProjectionKind::None, "intentionally no projection")
    }

    /// Geographic latitude/longitude.
    pub fn latlong() -> Projection {
        Projection::new(ProjectionKind::LatLong, "latitude/longitude")
    }

    /// Geographic longitude/latitude.
    pub fn longlat() -> Projection {
        Projection::new(ProjectionKind::LongLat, "longitude/latitude")
    }

    /// Earth centered, earth fixed.
    pub fn ecef() -> Projection {
        Projection::new(ProjectionKind::Ecef, "earth-centered earth-fixed")
    }

    /// A utm zone.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::{Projection, ProjectionKind};
    /// let utm = Projection::utm(17, true).unwrap();
    /// assert_eq!("UTM 17 northern hemisphere", utm.name);
    /// assert!(Projection::utm(61, true).is_err());
    /// ```
    pub fn utm(zone: i32, northern: bool) -> Result<Projection> {
        let zone_number = u8::try_from(zone)
            .ok()
            .filter(|zone| (1..=60).contains(zone))
            .ok_or(Error::InvalidUtmZone(zone))?;
        let hemisphere = if northern { "northern" } else { "southern" };
        Ok(Projection::new(
            ProjectionKind::Utm {
                zone_number,
                zone_letter: None,
                northern,
                central_meridian: utm_central_meridian(zone_number),
            },
            format!("UTM {zone_number} {hemisphere} hemisphere"),
        ))
    }

    /// A utm zone from a designator like "17N" or "33T".
    ///
    /// Latitude band letters N through X are northern, C through M southern.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::{Projection, ProjectionKind};
    /// let utm = Projection::utm_from_designator("33T").unwrap();
    /// if let ProjectionKind::Utm { zone_number, zone_letter, northern, .. } = utm.kind {
    ///     assert_eq!(33, zone_number);
    ///     assert_eq!(Some('T'), zone_letter);
    ///     assert!(northern);
    /// } else {
    ///     panic!("not utm");
    /// }
    /// ```
    pub fn utm_from_designator(designator: &str) -> Result<Projection> {
        let invalid = || Error::InvalidUtmDesignator(designator.to_string());
        let designator = designator.trim();
        let split = designator
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (digits, rest) = designator.split_at(split);
        let zone: i32 = digits.parse().map_err(|_| invalid())?;
        let mut chars = rest.chars();
        let letter = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| ('C'..='X').contains(c) && *c != 'I' && *c != 'O')
            .ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        let mut projection = Projection::utm(zone, letter >= 'N')?;
        if let ProjectionKind::Utm { zone_letter, .. } = &mut projection.kind {
            *zone_letter = Some(letter);
        }
        Ok(projection)
    }

    /// A zone of the Map Grid of Australia, which is utm on GDA94 or GDA2020.
    pub fn mga(zone: i32, northern: bool) -> Result<Projection> {
        let mut projection = Projection::utm(zone, northern)?;
        projection.name = format!("MGA zone {zone}");
        Ok(projection)
    }

    /// A lambert conformal conic projection with two standard parallels.
    ///
    /// The standard parallels may not be symmetric about the equator, since then the cone
    /// degenerates into a cylinder.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::Projection;
    /// let lcc = Projection::lambert_conformal_conic(
    ///     700000.0, 3000000.0, 29.6666666667, -100.3333333333, 31.8833333333, 30.1166666667,
    ///     "stateplane83 TX_C",
    /// );
    /// assert!(lcc.is_ok());
    /// let degenerate = Projection::lambert_conformal_conic(0.0, 0.0, 0.0, 0.0, 30.0, -30.0, "");
    /// assert!(degenerate.is_err());
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn lambert_conformal_conic(
        false_easting: f64,
        false_northing: f64,
        lat_origin: f64,
        long_meridian: f64,
        first_std_parallel: f64,
        second_std_parallel: f64,
        name: impl Into<String>,
    ) -> Result<Projection> {
        check("false easting", false_easting, f64::MIN, f64::MAX)?;
        check("false northing", false_northing, f64::MIN, f64::MAX)?;
        check("latitude of origin", lat_origin, -90.0, 90.0)?;
        check("longitude of meridian", long_meridian, -180.0, 180.0)?;
        check("first standard parallel", first_std_parallel, -90.0, 90.0)?;
        check("second standard parallel", second_std_parallel, -90.0, 90.0)?;
        if (first_std_parallel + second_std_parallel).abs() < 1e-10 {
            return Err(Error::InvalidProjectionParameter {
                name: "second standard parallel",
                value: second_std_parallel,
            });
        }
        Ok(Projection::new(
            ProjectionKind::Lcc {
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                first_std_parallel,
                second_std_parallel,
            },
            name,
        ))
    }

    /// A transverse mercator projection.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::Projection;
    /// assert!(Projection::transverse_mercator(600000.0, 750000.0, 53.5, -8.0, 0.99982, "ITM").is_ok());
    /// assert!(Projection::transverse_mercator(0.0, 0.0, 0.0, 0.0, 0.0, "").is_err());
    /// ```
    pub fn transverse_mercator(
        false_easting: f64,
        false_northing: f64,
        lat_origin: f64,
        long_meridian: f64,
        scale_factor: f64,
        name: impl Into<String>,
    ) -> Result<Projection> {
        check("false easting", false_easting, f64::MIN, f64::MAX)?;
        check("false northing", false_northing, f64::MIN, f64::MAX)?;
        check("latitude of origin", lat_origin, -90.0, 90.0)?;
        check("longitude of meridian", long_meridian, -180.0, 180.0)?;
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return Err(Error::InvalidProjectionParameter {
                name: "scale factor",
                value: scale_factor,
            });
        }
        Ok(Projection::new(
            ProjectionKind::Tm {
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                scale_factor,
            },
            name,
        ))
    }

    /// Is this the intentional absence of a projection?
    pub fn is_none(&self) -> bool {
        self.kind == ProjectionKind::None
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
