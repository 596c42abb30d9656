//! EPSG projected coordinate reference system codes.
//!
//! A code is resolved by four tiers, first match wins:
//!
//! 1. [utm]: contiguous code ranges of utm zones, one per datum and hemisphere,
//! 2. [state_plane]: U.S. State Plane codes in meters, resolved through the zone tables,
//! 3. [singleton]: individually defined national and regional grids,
//! 4. [describe]: a registry of codes that are recognized but not modeled.
//!
//! A code that none of the tiers know is unknown, not invalid, as long as it lies within
//! [MIN_CODE] and [MAX_CODE].

use crate::Result;
use crate::crs::ellipsoid::{
    AIRY, AUSTRALIAN_NATIONAL, BESSEL_1841, CLARKE_1866, GRS_1980, INDONESIAN_NATIONAL,
    INTERNATIONAL_1924, KRASSOVSKY, MODIFIED_AIRY, SOUTH_AMERICAN_1969, WGS_72, WGS_84,
};
use crate::crs::state_plane::{self, Datum};
use crate::crs::{Projection, ProjectionKind, Unit, registry};
use log::debug;

/// The smallest valid EPSG code.
pub const MIN_CODE: u16 = 1024;

/// The largest valid EPSG code, since 32767 means "user defined".
pub const MAX_CODE: u16 = 32766;

/// Is this code in the range EPSG assigns codes from?
///
/// # Examples
///
/// ```
/// use las_validate::crs::epsg;
/// assert!(epsg::is_valid_code(32617));
/// assert!(!epsg::is_valid_code(1023));
/// assert!(!epsg::is_valid_code(32767));
/// ```
pub fn is_valid_code(code: u16) -> bool {
    (MIN_CODE..=MAX_CODE).contains(&code)
}

/// A code whose projection is modeled.
#[derive(Clone, Debug, PartialEq)]
pub struct Modeled {
    /// The projection, tagged with the code.
    pub projection: Projection,
    /// The registry id of the ellipsoid the code implies.
    pub ellipsoid: u16,
    /// The linear unit of the projected coordinates.
    pub unit: Unit,
}

/// The outcome of a successful lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum Match {
    /// The code is modeled, with projection parameters.
    Modeled(Modeled),
    /// The code is recognized, but only its description is known.
    Described(&'static str),
}

impl Match {
    /// A human readable description of the match.
    pub fn description(&self) -> &str {
        match self {
            Match::Modeled(modeled) => modeled.projection.name.as_str(),
            Match::Described(description) => *description,
        }
    }
}

/// Looks a code up through every tier.
///
/// Returns `Ok(None)` if the code is unknown.
///
/// # Examples
///
/// ```
/// use las_validate::crs::epsg::{self, Match};
/// let utm = epsg::lookup(32617).unwrap().unwrap();
/// assert_eq!("UTM 17 northern hemisphere", utm.description());
/// assert_eq!(Match::Described("WGS 84 / Pseudo-Mercator"), epsg::lookup(3857).unwrap().unwrap());
/// assert!(epsg::lookup(9999).unwrap().is_none());
/// ```
pub fn lookup(code: u16) -> Result<Option<Match>> {
    if let Some(modeled) = utm(code)
        .or_else(|| state_plane(code))
        .or_else(|| singleton(code))
    {
        let modeled = modeled?;
        debug!("epsg code {code} is {}", modeled.projection);
        return Ok(Some(Match::Modeled(modeled)));
    }
    Ok(describe(code).map(Match::Described))
}

struct UtmRange {
    first: u16,
    last: u16,
    first_zone: u8,
    northern: bool,
    ellipsoid: u16,
    mga: bool,
}

const fn range(first: u16, last: u16, first_zone: u8, northern: bool, ellipsoid: u16) -> UtmRange {
    UtmRange {
        first,
        last,
        first_zone,
        northern,
        ellipsoid,
        mga: false,
    }
}

const fn mga(first: u16, last: u16, first_zone: u8) -> UtmRange {
    UtmRange {
        first,
        last,
        first_zone,
        northern: false,
        ellipsoid: GRS_1980,
        mga: true,
    }
}

// Reverse lookups take the first range that matches, so the common datums come first.
const UTM_RANGES: &[UtmRange] = &[
    range(32601, 32660, 1, true, WGS_84),
    range(32701, 32760, 1, false, WGS_84),
    range(26901, 26923, 1, true, GRS_1980),
    range(26701, 26722, 1, true, CLARKE_1866),
    range(32201, 32260, 1, true, WGS_72),
    range(32301, 32360, 1, false, WGS_72),
    range(32401, 32460, 1, true, WGS_72),
    range(32501, 32560, 1, false, WGS_72),
    range(25828, 25838, 28, true, GRS_1980),
    range(23028, 23038, 28, true, INTERNATIONAL_1924),
    range(29118, 29122, 18, true, SOUTH_AMERICAN_1969),
    range(29177, 29185, 17, false, SOUTH_AMERICAN_1969),
    range(23846, 23853, 46, true, INDONESIAN_NATIONAL),
    range(23886, 23894, 46, false, INDONESIAN_NATIONAL),
    mga(28348, 28358, 48),
    mga(7846, 7859, 46),
    range(2133, 2135, 58, false, GRS_1980),
    range(3097, 3101, 51, true, GRS_1980),
    range(31965, 31976, 11, true, GRS_1980),
    range(31977, 31985, 17, false, GRS_1980),
    range(6330, 6348, 1, true, GRS_1980),
    range(3740, 3749, 10, true, GRS_1980),
    range(3717, 3726, 10, true, GRS_1980),
    range(3706, 3707, 59, true, GRS_1980),
    range(3708, 3716, 1, true, GRS_1980),
    range(3750, 3751, 4, true, GRS_1980),
    range(6328, 6329, 59, true, GRS_1980),
    range(2955, 2957, 11, true, GRS_1980),
    range(2958, 2962, 17, true, GRS_1980),
    range(3154, 3157, 7, true, GRS_1980),
    range(3158, 3160, 14, true, GRS_1980),
    range(3761, 3761, 22, true, GRS_1980),
    range(6688, 6692, 51, true, GRS_1980),
    range(3092, 3096, 51, true, BESSEL_1841),
    range(20248, 20258, 48, false, AUSTRALIAN_NATIONAL),
    range(20348, 20358, 48, false, AUSTRALIAN_NATIONAL),
];

/// Resolves a code from one of the utm ranges.
///
/// # Examples
///
/// ```
/// use las_validate::crs::{ellipsoid, epsg};
/// let modeled = epsg::utm(26917).unwrap().unwrap();
/// assert_eq!(ellipsoid::GRS_1980, modeled.ellipsoid);
/// assert!(epsg::utm(26924).is_none());
/// ```
pub fn utm(code: u16) -> Option<Result<Modeled>> {
    let range = UTM_RANGES
        .iter()
        .find(|range| (range.first..=range.last).contains(&code))?;
    let zone = i32::from(range.first_zone) + i32::from(code - range.first);
    let projection = if range.mga {
        Projection::mga(zone, range.northern)
    } else {
        Projection::utm(zone, range.northern)
    };
    Some(projection.map(|projection| Modeled {
        projection: projection.with_epsg(code),
        ellipsoid: range.ellipsoid,
        unit: Unit::Meter,
    }))
}

/// Finds the code of a utm zone on an ellipsoid.
///
/// When several datums share the ellipsoid, the first one in the range table wins, e.g. NAD83
/// over ETRS89 for GRS 1980.
///
/// # Examples
///
/// ```
/// use las_validate::crs::{ellipsoid, epsg};
/// assert_eq!(Some(32617), epsg::utm_code(17, true, ellipsoid::WGS_84));
/// assert_eq!(Some(26917), epsg::utm_code(17, true, ellipsoid::GRS_1980));
/// assert_eq!(Some(32755), epsg::utm_code(55, false, ellipsoid::WGS_84));
/// ```
pub fn utm_code(zone_number: u8, northern: bool, ellipsoid: u16) -> Option<u16> {
    UTM_RANGES
        .iter()
        .filter(|range| !range.mga && range.northern == northern && range.ellipsoid == ellipsoid)
        .find_map(|range| {
            let offset = zone_number.checked_sub(range.first_zone)?;
            let code = range.first.checked_add(u16::from(offset))?;
            (code <= range.last).then_some(code)
        })
}

/// Resolves a State Plane code in meters through the zone tables.
///
/// NAD83(HARN) codes share the parameters of the NAD83 zones. Alaska zone 1 uses an oblique
/// mercator projection and is not modeled.
///
/// # Examples
///
/// ```
/// use las_validate::crs::epsg;
/// let tx_c = epsg::state_plane(32139).unwrap().unwrap();
/// assert_eq!("stateplane83 TX_C", tx_c.projection.name);
/// let harn_fl_e = epsg::state_plane(2777).unwrap().unwrap();
/// assert_eq!("stateplane83 FL_E", harn_fl_e.projection.name);
/// assert!(epsg::state_plane(26931).is_none());
/// ```
pub fn state_plane(code: u16) -> Option<Result<Modeled>> {
    let (datum, name) = state_plane_zone(code)?;
    let projection = state_plane::projection(datum, name)?;
    Some(projection.map(|projection| Modeled {
        projection: projection.with_epsg(code),
        ellipsoid: datum.ellipsoid_id(),
        unit: Unit::Meter,
    }))
}

fn state_plane_zone(code: u16) -> Option<(Datum, &'static str)> {
    if let Ok(i) = STATE_PLANE_CODES.binary_search_by_key(&code, |&(code, _, _)| code) {
        let (_, datum, name) = STATE_PLANE_CODES[i];
        return Some((datum, name));
    }
    let i = code.checked_sub(HARN_STATE_PLANE_FIRST_CODE)?;
    HARN_STATE_PLANE_ZONES
        .get(usize::from(i))
        .map(|&name| (Datum::Nad83, name))
}

#[derive(Clone, Copy)]
enum Params {
    Tm {
        false_easting: f64,
        false_northing: f64,
        lat_origin: f64,
        long_meridian: f64,
        scale_factor: f64,
    },
    Lcc {
        false_easting: f64,
        false_northing: f64,
        lat_origin: f64,
        long_meridian: f64,
        first_std_parallel: f64,
        second_std_parallel: f64,
    },
}

impl Params {
    fn build(self, name: String) -> Result<Projection> {
        match self {
            Params::Tm {
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                scale_factor,
            } => Projection::transverse_mercator(
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                scale_factor,
                name,
            ),
            Params::Lcc {
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                first_std_parallel,
                second_std_parallel,
            } => Projection::lambert_conformal_conic(
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                first_std_parallel,
                second_std_parallel,
                name,
            ),
        }
    }
}

struct Singleton {
    code: u16,
    name: &'static str,
    ellipsoid: u16,
    unit: Unit,
    params: Params,
}

const fn tm(
    code: u16,
    name: &'static str,
    ellipsoid: u16,
    [false_easting, false_northing, lat_origin, long_meridian, scale_factor]: [f64; 5],
) -> Singleton {
    Singleton {
        code,
        name,
        ellipsoid,
        unit: Unit::Meter,
        params: Params::Tm {
            false_easting,
            false_northing,
            lat_origin,
            long_meridian,
            scale_factor,
        },
    }
}

const fn lcc(
    code: u16,
    name: &'static str,
    ellipsoid: u16,
    unit: Unit,
    [
        false_easting,
        false_northing,
        lat_origin,
        long_meridian,
        first_std_parallel,
        second_std_parallel,
    ]: [f64; 6],
) -> Singleton {
    Singleton {
        code,
        name,
        ellipsoid,
        unit,
        params: Params::Lcc {
            false_easting,
            false_northing,
            lat_origin,
            long_meridian,
            first_std_parallel,
            second_std_parallel,
        },
    }
}

const SINGLETONS: &[Singleton] = &[
    tm(2039, "Israel 1993 / Israeli TM Grid", GRS_1980, [219529.584, 626907.39, 31.734393611, 35.204516944, 1.0000067]),
    tm(2100, "GGRS87 / Greek Grid", GRS_1980, [500000.0, 0.0, 0.0, 24.0, 0.9996]),
    lcc(2154, "RGF93 / Lambert-93", GRS_1980, Unit::Meter, [700000.0, 6600000.0, 46.5, 3.0, 49.0, 44.0]),
    tm(2157, "IRENET95 / Irish Transverse Mercator", GRS_1980, [600000.0, 750000.0, 53.5, -8.0, 0.99982]),
    tm(2180, "ETRS89 / Poland CS92", GRS_1980, [500000.0, -5300000.0, 0.0, 19.0, 0.9993]),
    tm(2193, "NZGD2000 / New Zealand Transverse Mercator 2000", GRS_1980, [1600000.0, 10000000.0, 0.0, 173.0, 0.9996]),
    lcc(2248, "NAD83 / Maryland (ftUS)", GRS_1980, Unit::SurveyFoot, [400000.0, 0.0, 37.666666667, -77.0, 38.3, 39.45]),
    tm(3006, "SWEREF99 TM", GRS_1980, [500000.0, 0.0, 0.0, 15.0, 0.9996]),
    lcc(3034, "ETRS89 / LCC Europe", GRS_1980, Unit::Meter, [4000000.0, 2800000.0, 52.0, 10.0, 35.0, 65.0]),
    tm(3059, "LKS92 / Latvia TM", GRS_1980, [500000.0, -6000000.0, 0.0, 24.0, 0.9996]),
    tm(3067, "ETRS89 / TM35FIN(E,N)", GRS_1980, [500000.0, 0.0, 0.0, 27.0, 0.9996]),
    lcc(3111, "GDA94 / Vicgrid", GRS_1980, Unit::Meter, [2500000.0, 2500000.0, -37.0, 145.0, -36.0, -38.0]),
    lcc(3308, "GDA94 / NSW Lambert", GRS_1980, Unit::Meter, [9300000.0, 4500000.0, -33.25, 147.0, -30.75, -35.75]),
    tm(3346, "LKS94 / Lithuania TM", GRS_1980, [500000.0, 0.0, 0.0, 24.0, 0.9998]),
    tm(3414, "SVY21 / Singapore TM", WGS_84, [28001.642, 38744.572, 1.366666667, 103.833333333, 1.0]),
    lcc(3416, "ETRS89 / Austria Lambert", GRS_1980, Unit::Meter, [400000.0, 400000.0, 47.5, 13.333333333, 49.0, 46.0]),
    tm(3460, "Fiji 1986 / Fiji Map Grid", WGS_72, [2000000.0, 4000000.0, -17.0, 178.75, 0.99985]),
    tm(3763, "ETRS89 / Portugal TM06", GRS_1980, [0.0, 0.0, 39.668258333, -8.133108333, 1.0]),
    tm(3765, "HTRS96 / Croatia TM", GRS_1980, [500000.0, 0.0, 0.0, 16.5, 0.9999]),
    lcc(3812, "ETRS89 / Belgian Lambert 2008", GRS_1980, Unit::Meter, [649328.0, 665262.0, 50.797815, 4.359215833, 49.833333333, 51.166666667]),
    tm(27700, "OSGB 1936 / British National Grid", AIRY, [400000.0, -100000.0, 49.0, -2.0, 0.9996012717]),
    tm(29902, "TM65 / Irish Grid", MODIFIED_AIRY, [200000.0, 250000.0, 53.5, -8.0, 1.000035]),
    tm(29903, "TM75 / Irish Grid", MODIFIED_AIRY, [200000.0, 250000.0, 53.5, -8.0, 1.000035]),
    lcc(31287, "MGI / Austria Lambert", BESSEL_1841, Unit::Meter, [400000.0, 400000.0, 47.5, 13.333333333, 49.0, 46.0]),
    lcc(31370, "Belge 1972 / Belgian Lambert 72", INTERNATIONAL_1924, Unit::Meter, [150000.013, 5400088.438, 90.0, 4.367486667, 51.166667233, 49.8333339]),
];

/// Resolves an individually defined grid.
///
/// Besides the literal table this covers four parametrized families: `RGF93 / CC42` through
/// `CC50`, `ETRS89 / DKTM1` through `DKTM4`, the DHDN Gauss-Kruger zones 2 through 5, and the
/// Pulkovo 1942 Gauss-Kruger zones 4 through 32.
///
/// # Examples
///
/// ```
/// use las_validate::crs::{ProjectionKind, epsg};
/// let cc45 = epsg::singleton(3945).unwrap().unwrap();
/// assert_eq!("RGF93 / CC45", cc45.projection.name);
/// if let ProjectionKind::Lcc { false_northing, .. } = cc45.projection.kind {
///     assert_eq!(4200000.0, false_northing);
/// }
/// ```
pub fn singleton(code: u16) -> Option<Result<Modeled>> {
    let (name, ellipsoid, unit, params) = match SINGLETONS
        .binary_search_by_key(&code, |singleton| singleton.code)
    {
        Ok(i) => {
            let singleton = &SINGLETONS[i];
            (
                singleton.name.to_string(),
                singleton.ellipsoid,
                singleton.unit,
                singleton.params,
            )
        }
        Err(_) => family(code)?,
    };
    Some(params.build(name).map(|projection| Modeled {
        projection: projection.with_epsg(code),
        ellipsoid,
        unit,
    }))
}

fn family(code: u16) -> Option<(String, u16, Unit, Params)> {
    match code {
        3942..=3950 => {
            let n = f64::from(code - 3900);
            Some((
                format!("RGF93 / CC{}", code - 3900),
                GRS_1980,
                Unit::Meter,
                Params::Lcc {
                    false_easting: 1700000.0,
                    false_northing: (n - 41.0) * 1000000.0 + 200000.0,
                    lat_origin: n,
                    long_meridian: 3.0,
                    first_std_parallel: n - 0.75,
                    second_std_parallel: n + 0.75,
                },
            ))
        }
        4093..=4096 => {
            let i = usize::from(code - 4093);
            Some((
                format!("ETRS89 / DKTM{}", i + 1),
                GRS_1980,
                Unit::Meter,
                Params::Tm {
                    false_easting: [200000.0, 400000.0, 600000.0, 800000.0][i],
                    false_northing: -5000000.0,
                    lat_origin: 0.0,
                    long_meridian: [9.0, 10.0, 11.75, 15.0][i],
                    scale_factor: 0.99998,
                },
            ))
        }
        31466..=31469 => {
            let zone = code - 31464;
            Some((
                format!("DHDN / 3-degree Gauss-Kruger zone {zone}"),
                BESSEL_1841,
                Unit::Meter,
                Params::Tm {
                    false_easting: f64::from(zone) * 1000000.0 + 500000.0,
                    false_northing: 0.0,
                    lat_origin: 0.0,
                    long_meridian: f64::from(zone) * 3.0,
                    scale_factor: 1.0,
                },
            ))
        }
        28404..=28432 => {
            let zone = code - 28400;
            Some((
                format!("Pulkovo 1942 / Gauss-Kruger zone {zone}"),
                KRASSOVSKY,
                Unit::Meter,
                Params::Tm {
                    false_easting: f64::from(zone) * 1000000.0 + 500000.0,
                    false_northing: 0.0,
                    lat_origin: 0.0,
                    long_meridian: f64::from(zone) * 6.0 - 3.0,
                    scale_factor: 1.0,
                },
            ))
        }
        _ => None,
    }
}

/// Describes a code that is recognized but not modeled.
///
/// # Examples
///
/// ```
/// use las_validate::crs::epsg;
/// assert_eq!(Some("Amersfoort / RD New"), epsg::describe(28992));
/// assert_eq!(Some("NAD83(2011) / Illinois West (ftUS)"), epsg::describe(6457));
/// assert_eq!(None, epsg::describe(32617));
/// ```
pub fn describe(code: u16) -> Option<&'static str> {
    registry::describe(code)
}

/// Re-derives the code of a modeled projection that was not resolved from a code.
///
/// Only utm zones can be reversed.
pub(crate) fn reverse(kind: &ProjectionKind, ellipsoid: Option<u16>) -> Option<u16> {
    match *kind {
        ProjectionKind::Utm {
            zone_number,
            northern,
            ..
        } => utm_code(zone_number, northern, ellipsoid?),
        _ => None,
    }
}

const STATE_PLANE_CODES: &[(u16, Datum, &str)] = &[
    (26729, Datum::Nad27, "AL_E"),
    (26730, Datum::Nad27, "AL_W"),
    (26732, Datum::Nad27, "AK_2"),
    (26733, Datum::Nad27, "AK_3"),
    (26734, Datum::Nad27, "AK_4"),
    (26735, Datum::Nad27, "AK_5"),
    (26736, Datum::Nad27, "AK_6"),
    (26737, Datum::Nad27, "AK_7"),
    (26738, Datum::Nad27, "AK_8"),
    (26739, Datum::Nad27, "AK_9"),
    (26740, Datum::Nad27, "AK_10"),
    (26741, Datum::Nad27, "CA_I"),
    (26742, Datum::Nad27, "CA_II"),
    (26743, Datum::Nad27, "CA_III"),
    (26744, Datum::Nad27, "CA_IV"),
    (26745, Datum::Nad27, "CA_V"),
    (26746, Datum::Nad27, "CA_VI"),
    (26747, Datum::Nad27, "CA_VII"),
    (26748, Datum::Nad27, "AZ_E"),
    (26749, Datum::Nad27, "AZ_C"),
    (26750, Datum::Nad27, "AZ_W"),
    (26751, Datum::Nad27, "AR_N"),
    (26752, Datum::Nad27, "AR_S"),
    (26753, Datum::Nad27, "CO_N"),
    (26754, Datum::Nad27, "CO_C"),
    (26755, Datum::Nad27, "CO_S"),
    (26756, Datum::Nad27, "CT"),
    (26757, Datum::Nad27, "DE"),
    (26758, Datum::Nad27, "FL_E"),
    (26759, Datum::Nad27, "FL_W"),
    (26760, Datum::Nad27, "FL_N"),
    (26766, Datum::Nad27, "GA_E"),
    (26767, Datum::Nad27, "GA_W"),
    (26768, Datum::Nad27, "ID_E"),
    (26769, Datum::Nad27, "ID_C"),
    (26770, Datum::Nad27, "ID_W"),
    (26771, Datum::Nad27, "IL_E"),
    (26772, Datum::Nad27, "IL_W"),
    (26773, Datum::Nad27, "IN_E"),
    (26774, Datum::Nad27, "IN_W"),
    (26775, Datum::Nad27, "IA_N"),
    (26776, Datum::Nad27, "IA_S"),
    (26777, Datum::Nad27, "KS_N"),
    (26778, Datum::Nad27, "KS_S"),
    (26779, Datum::Nad27, "KY_N"),
    (26780, Datum::Nad27, "KY_S"),
    (26781, Datum::Nad27, "LA_N"),
    (26782, Datum::Nad27, "LA_S"),
    (26783, Datum::Nad27, "ME_E"),
    (26784, Datum::Nad27, "ME_W"),
    (26785, Datum::Nad27, "MD"),
    (26786, Datum::Nad27, "MA_M"),
    (26787, Datum::Nad27, "MA_I"),
    (26788, Datum::Nad27, "MI_N"),
    (26789, Datum::Nad27, "MI_C"),
    (26790, Datum::Nad27, "MI_S"),
    (26791, Datum::Nad27, "MN_N"),
    (26792, Datum::Nad27, "MN_C"),
    (26793, Datum::Nad27, "MN_S"),
    (26794, Datum::Nad27, "MS_E"),
    (26795, Datum::Nad27, "MS_W"),
    (26796, Datum::Nad27, "MO_E"),
    (26797, Datum::Nad27, "MO_C"),
    (26798, Datum::Nad27, "MO_W"),
    (26929, Datum::Nad83, "AL_E"),
    (26930, Datum::Nad83, "AL_W"),
    (26932, Datum::Nad83, "AK_2"),
    (26933, Datum::Nad83, "AK_3"),
    (26934, Datum::Nad83, "AK_4"),
    (26935, Datum::Nad83, "AK_5"),
    (26936, Datum::Nad83, "AK_6"),
    (26937, Datum::Nad83, "AK_7"),
    (26938, Datum::Nad83, "AK_8"),
    (26939, Datum::Nad83, "AK_9"),
    (26940, Datum::Nad83, "AK_10"),
    (26941, Datum::Nad83, "CA_I"),
    (26942, Datum::Nad83, "CA_II"),
    (26943, Datum::Nad83, "CA_III"),
    (26944, Datum::Nad83, "CA_IV"),
    (26945, Datum::Nad83, "CA_V"),
    (26946, Datum::Nad83, "CA_VI"),
    (26948, Datum::Nad83, "AZ_E"),
    (26949, Datum::Nad83, "AZ_C"),
    (26950, Datum::Nad83, "AZ_W"),
    (26951, Datum::Nad83, "AR_N"),
    (26952, Datum::Nad83, "AR_S"),
    (26953, Datum::Nad83, "CO_N"),
    (26954, Datum::Nad83, "CO_C"),
    (26955, Datum::Nad83, "CO_S"),
    (26956, Datum::Nad83, "CT"),
    (26957, Datum::Nad83, "DE"),
    (26958, Datum::Nad83, "FL_E"),
    (26959, Datum::Nad83, "FL_W"),
    (26960, Datum::Nad83, "FL_N"),
    (26961, Datum::Nad83, "HI_1"),
    (26962, Datum::Nad83, "HI_2"),
    (26963, Datum::Nad83, "HI_3"),
    (26964, Datum::Nad83, "HI_4"),
    (26965, Datum::Nad83, "HI_5"),
    (26966, Datum::Nad83, "GA_E"),
    (26967, Datum::Nad83, "GA_W"),
    (26968, Datum::Nad83, "ID_E"),
    (26969, Datum::Nad83, "ID_C"),
    (26970, Datum::Nad83, "ID_W"),
    (26971, Datum::Nad83, "IL_E"),
    (26972, Datum::Nad83, "IL_W"),
    (26973, Datum::Nad83, "IN_E"),
    (26974, Datum::Nad83, "IN_W"),
    (26975, Datum::Nad83, "IA_N"),
    (26976, Datum::Nad83, "IA_S"),
    (26977, Datum::Nad83, "KS_N"),
    (26978, Datum::Nad83, "KS_S"),
    (26979, Datum::Nad83, "KY_N"),
    (26980, Datum::Nad83, "KY_S"),
    (26981, Datum::Nad83, "LA_N"),
    (26982, Datum::Nad83, "LA_S"),
    (26983, Datum::Nad83, "ME_E"),
    (26984, Datum::Nad83, "ME_W"),
    (26985, Datum::Nad83, "MD"),
    (26986, Datum::Nad83, "MA_M"),
    (26987, Datum::Nad83, "MA_I"),
    (26988, Datum::Nad83, "MI_N"),
    (26989, Datum::Nad83, "MI_C"),
    (26990, Datum::Nad83, "MI_S"),
    (26991, Datum::Nad83, "MN_N"),
    (26992, Datum::Nad83, "MN_C"),
    (26993, Datum::Nad83, "MN_S"),
    (26994, Datum::Nad83, "MS_E"),
    (26995, Datum::Nad83, "MS_W"),
    (26996, Datum::Nad83, "MO_E"),
    (26997, Datum::Nad83, "MO_C"),
    (26998, Datum::Nad83, "MO_W"),
    (32001, Datum::Nad27, "MT_N"),
    (32002, Datum::Nad27, "MT_C"),
    (32003, Datum::Nad27, "MT_S"),
    (32005, Datum::Nad27, "NE_N"),
    (32006, Datum::Nad27, "NE_S"),
    (32007, Datum::Nad27, "NV_E"),
    (32008, Datum::Nad27, "NV_C"),
    (32009, Datum::Nad27, "NV_W"),
    (32010, Datum::Nad27, "NH"),
    (32011, Datum::Nad27, "NJ"),
    (32012, Datum::Nad27, "NM_E"),
    (32013, Datum::Nad27, "NM_C"),
    (32014, Datum::Nad27, "NM_W"),
    (32015, Datum::Nad27, "NY_E"),
    (32016, Datum::Nad27, "NY_C"),
    (32017, Datum::Nad27, "NY_W"),
    (32018, Datum::Nad27, "NY_LI"),
    (32019, Datum::Nad27, "NC"),
    (32020, Datum::Nad27, "ND_N"),
    (32021, Datum::Nad27, "ND_S"),
    (32022, Datum::Nad27, "OH_N"),
    (32023, Datum::Nad27, "OH_S"),
    (32024, Datum::Nad27, "OK_N"),
    (32025, Datum::Nad27, "OK_S"),
    (32026, Datum::Nad27, "OR_N"),
    (32027, Datum::Nad27, "OR_S"),
    (32028, Datum::Nad27, "PA_N"),
    (32029, Datum::Nad27, "PA_S"),
    (32030, Datum::Nad27, "RI"),
    (32031, Datum::Nad27, "SC_N"),
    (32033, Datum::Nad27, "SC_S"),
    (32034, Datum::Nad27, "SD_N"),
    (32035, Datum::Nad27, "SD_S"),
    (32036, Datum::Nad27, "TN"),
    (32037, Datum::Nad27, "TX_N"),
    (32038, Datum::Nad27, "TX_NC"),
    (32039, Datum::Nad27, "TX_C"),
    (32040, Datum::Nad27, "TX_SC"),
    (32041, Datum::Nad27, "TX_S"),
    (32042, Datum::Nad27, "UT_N"),
    (32043, Datum::Nad27, "UT_C"),
    (32044, Datum::Nad27, "UT_S"),
    (32045, Datum::Nad27, "VT"),
    (32046, Datum::Nad27, "VA_N"),
    (32047, Datum::Nad27, "VA_S"),
    (32048, Datum::Nad27, "WA_N"),
    (32049, Datum::Nad27, "WA_S"),
    (32050, Datum::Nad27, "WV_N"),
    (32051, Datum::Nad27, "WV_S"),
    (32052, Datum::Nad27, "WI_N"),
    (32053, Datum::Nad27, "WI_C"),
    (32054, Datum::Nad27, "WI_S"),
    (32055, Datum::Nad27, "WY_E"),
    (32056, Datum::Nad27, "WY_EC"),
    (32057, Datum::Nad27, "WY_WC"),
    (32058, Datum::Nad27, "WY_W"),
    (32100, Datum::Nad83, "MT"),
    (32104, Datum::Nad83, "NE"),
    (32107, Datum::Nad83, "NV_E"),
    (32108, Datum::Nad83, "NV_C"),
    (32109, Datum::Nad83, "NV_W"),
    (32110, Datum::Nad83, "NH"),
    (32111, Datum::Nad83, "NJ"),
    (32112, Datum::Nad83, "NM_E"),
    (32113, Datum::Nad83, "NM_C"),
    (32114, Datum::Nad83, "NM_W"),
    (32115, Datum::Nad83, "NY_E"),
    (32116, Datum::Nad83, "NY_C"),
    (32117, Datum::Nad83, "NY_W"),
    (32118, Datum::Nad83, "NY_LI"),
    (32119, Datum::Nad83, "NC"),
    (32120, Datum::Nad83, "ND_N"),
    (32121, Datum::Nad83, "ND_S"),
    (32122, Datum::Nad83, "OH_N"),
    (32123, Datum::Nad83, "OH_S"),
    (32124, Datum::Nad83, "OK_N"),
    (32125, Datum::Nad83, "OK_S"),
    (32126, Datum::Nad83, "OR_N"),
    (32127, Datum::Nad83, "OR_S"),
    (32128, Datum::Nad83, "PA_N"),
    (32129, Datum::Nad83, "PA_S"),
    (32130, Datum::Nad83, "RI"),
    (32133, Datum::Nad83, "SC"),
    (32134, Datum::Nad83, "SD_N"),
    (32135, Datum::Nad83, "SD_S"),
    (32136, Datum::Nad83, "TN"),
    (32137, Datum::Nad83, "TX_N"),
    (32138, Datum::Nad83, "TX_NC"),
    (32139, Datum::Nad83, "TX_C"),
    (32140, Datum::Nad83, "TX_SC"),
    (32141, Datum::Nad83, "TX_S"),
    (32142, Datum::Nad83, "UT_N"),
    (32143, Datum::Nad83, "UT_C"),
    (32144, Datum::Nad83, "UT_S"),
    (32145, Datum::Nad83, "VT"),
    (32146, Datum::Nad83, "VA_N"),
    (32147, Datum::Nad83, "VA_S"),
    (32148, Datum::Nad83, "WA_N"),
    (32149, Datum::Nad83, "WA_S"),
    (32150, Datum::Nad83, "WV_N"),
    (32151, Datum::Nad83, "WV_S"),
    (32152, Datum::Nad83, "WI_N"),
    (32153, Datum::Nad83, "WI_C"),
    (32154, Datum::Nad83, "WI_S"),
    (32155, Datum::Nad83, "WY_E"),
    (32156, Datum::Nad83, "WY_EC"),
    (32157, Datum::Nad83, "WY_WC"),
    (32158, Datum::Nad83, "WY_W"),
    (32161, Datum::Nad83, "PR"),
];

const HARN_STATE_PLANE_FIRST_CODE: u16 = 2759;

// NAD83(HARN) zones in meters, 2759 through 2866.
const HARN_STATE_PLANE_ZONES: &[&str] = &[
    "AL_E", "AL_W", "AZ_E", "AZ_C", "AZ_W", "AR_N", "AR_S", "CA_I", "CA_II", "CA_III", "CA_IV",
    "CA_V", "CA_VI", "CO_N", "CO_C", "CO_S", "CT", "DE", "FL_E", "FL_W", "FL_N", "GA_E", "GA_W",
    "HI_1", "HI_2", "HI_3", "HI_4", "HI_5", "ID_E", "ID_C", "ID_W", "IL_E", "IL_W", "IN_E", "IN_W",
    "IA_N", "IA_S", "KS_N", "KS_S", "KY_N", "KY_S", "LA_N", "LA_S", "ME_E", "ME_W", "MD", "MA_M",
    "MA_I", "MI_N", "MI_C", "MI_S", "MN_N", "MN_C", "MN_S", "MS_E", "MS_W", "MO_E", "MO_C", "MO_W",
    "MT", "NE", "NV_E", "NV_C", "NV_W", "NH", "NJ", "NM_E", "NM_C", "NM_W", "NY_E", "NY_C", "NY_W",
    "NY_LI", "ND_N", "ND_S", "OH_N", "OH_S", "OK_N", "OK_S", "OR_N", "OR_S", "RI", "SD_N", "SD_S",
    "TN", "TX_N", "TX_NC", "TX_C", "TX_SC", "TX_S", "UT_N", "UT_C", "UT_S", "VT", "VA_N", "VA_S",
    "WA_N", "WA_S", "WV_N", "WV_S", "WI_N", "WI_C", "WI_S", "WY_E", "WY_EC", "WY_WC", "WY_W", "PR",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs84_utm() {
        let modeled = utm(32617).unwrap().unwrap();
        assert_eq!(WGS_84, modeled.ellipsoid);
        assert_eq!(Some(32617), modeled.projection.epsg);
        match modeled.projection.kind {
            ProjectionKind::Utm {
                zone_number,
                northern,
                central_meridian,
                ..
            } => {
                assert_eq!(17, zone_number);
                assert!(northern);
                assert_eq!(-81.0, central_meridian);
            }
            _ => panic!("not utm"),
        }
    }

    #[test]
    fn nad83_utm() {
        let modeled = utm(26917).unwrap().unwrap();
        assert_eq!(GRS_1980, modeled.ellipsoid);
        assert!(matches!(
            modeled.projection.kind,
            ProjectionKind::Utm {
                zone_number: 17,
                northern: true,
                ..
            }
        ));
    }

    #[test]
    fn southern_and_mga() {
        let sad69 = utm(29177).unwrap().unwrap();
        assert!(matches!(
            sad69.projection.kind,
            ProjectionKind::Utm {
                zone_number: 17,
                northern: false,
                ..
            }
        ));
        let mga = utm(28355).unwrap().unwrap();
        assert_eq!("MGA zone 55", mga.projection.name);
    }

    #[test]
    fn utm_ranges_do_not_overlap() {
        for (i, a) in UTM_RANGES.iter().enumerate() {
            assert!(a.first <= a.last);
            assert!(u16::from(a.first_zone) + (a.last - a.first) <= 60);
            for b in &UTM_RANGES[i + 1..] {
                assert!(a.last < b.first || b.last < a.first, "{} and {}", a.first, b.first);
            }
        }
    }

    #[test]
    fn utm_round_trip() {
        for range in UTM_RANGES.iter().filter(|range| !range.mga) {
            for code in range.first..=range.last {
                let modeled = utm(code).unwrap().unwrap();
                let code_again = reverse(&modeled.projection.kind, Some(modeled.ellipsoid)).unwrap();
                let again = utm(code_again).unwrap().unwrap();
                assert_eq!(modeled.projection.kind, again.projection.kind);
                assert_eq!(modeled.ellipsoid, again.ellipsoid);
            }
        }
    }

    #[test]
    fn every_state_plane_code_resolves() {
        assert!(STATE_PLANE_CODES.windows(2).all(|w| w[0].0 < w[1].0));
        for &(code, datum, name) in STATE_PLANE_CODES {
            let modeled = state_plane(code)
                .unwrap_or_else(|| panic!("{code} {name}"))
                .unwrap();
            assert_eq!(datum.ellipsoid_id(), modeled.ellipsoid);
            assert_eq!(format!("{datum} {name}"), modeled.projection.name);
        }
        for (i, name) in HARN_STATE_PLANE_ZONES.iter().enumerate() {
            let code = HARN_STATE_PLANE_FIRST_CODE + i as u16;
            let modeled = state_plane(code)
                .unwrap_or_else(|| panic!("{code} {name}"))
                .unwrap();
            assert_eq!(format!("stateplane83 {name}"), modeled.projection.name);
        }
        assert!(state_plane(HARN_STATE_PLANE_FIRST_CODE - 1).is_none());
        assert!(state_plane(2867).is_none());
    }

    #[test]
    fn harn_state_plane_shares_nad83_parameters() {
        let harn = state_plane(2777).unwrap().unwrap();
        let nad83 = state_plane(26958).unwrap().unwrap();
        assert_eq!(nad83.projection.kind, harn.projection.kind);
        assert_eq!(GRS_1980, harn.ellipsoid);
        assert_eq!(Some(2777), harn.projection.epsg);
        let pr = state_plane(2866).unwrap().unwrap();
        assert_eq!("stateplane83 PR", pr.projection.name);
    }

    #[test]
    fn state_plane_series() {
        assert!(matches!(lookup(2777), Ok(Some(Match::Modeled(_)))));
        for (code, description) in [
            (2882, "NAD83(HARN) / Florida West (ftUS)"),
            (3512, "NAD83(NSRS2007) / Florida East (ftUS)"),
            (3601, "NAD83(NSRS2007) / Missouri Central"),
            (6443, "NAD83(2011) / Florida West (ftUS)"),
            (6457, "NAD83(2011) / Illinois West (ftUS)"),
            (26857, "NAD83(HARN) / Minnesota North (ftUS)"),
        ] {
            assert_eq!(Some(Match::Described(description)), lookup(code).unwrap());
        }
    }

    #[test]
    fn state_plane_prefers_lcc() {
        let modeled = state_plane(32139).unwrap().unwrap();
        match modeled.projection.kind {
            ProjectionKind::Lcc {
                false_easting,
                false_northing,
                ..
            } => {
                assert_eq!(700000.0, false_easting);
                assert_eq!(3000000.0, false_northing);
            }
            _ => panic!("TX_C is lambert conformal conic"),
        }
        let al_e = state_plane(26729).unwrap().unwrap();
        assert!(matches!(al_e.projection.kind, ProjectionKind::Tm { .. }));
        assert_eq!(CLARKE_1866, al_e.ellipsoid);
    }

    #[test]
    fn singletons() {
        assert!(SINGLETONS.windows(2).all(|w| w[0].code < w[1].code));
        for singleton in SINGLETONS {
            let modeled = super::singleton(singleton.code).unwrap().unwrap();
            assert_eq!(singleton.name, modeled.projection.name);
        }
        for code in (3942..=3950).chain(4093..=4096).chain(31466..=31469) {
            assert!(super::singleton(code).unwrap().is_ok(), "{code}");
        }
        assert_eq!(
            Unit::SurveyFoot,
            super::singleton(2248).unwrap().unwrap().unit
        );
        assert!(super::singleton(2155).is_none());
    }

    #[test]
    fn gauss_kruger() {
        let modeled = super::singleton(31468).unwrap().unwrap();
        match modeled.projection.kind {
            ProjectionKind::Tm {
                false_easting,
                long_meridian,
                ..
            } => {
                assert_eq!(4500000.0, false_easting);
                assert_eq!(12.0, long_meridian);
            }
            _ => panic!("gauss-kruger is transverse mercator"),
        }
    }

    #[test]
    fn pulkovo_gauss_kruger() {
        let modeled = super::singleton(28407).unwrap().unwrap();
        assert_eq!(KRASSOVSKY, modeled.ellipsoid);
        match modeled.projection.kind {
            ProjectionKind::Tm {
                false_easting,
                long_meridian,
                ..
            } => {
                assert_eq!(7500000.0, false_easting);
                assert_eq!(39.0, long_meridian);
            }
            _ => panic!("gauss-kruger is transverse mercator"),
        }
        assert!(super::singleton(28433).is_none());
    }

    #[test]
    fn national_utm_ranges() {
        let amg = utm(20355).unwrap().unwrap();
        assert_eq!(AUSTRALIAN_NATIONAL, amg.ellipsoid);
        assert!(matches!(
            amg.projection.kind,
            ProjectionKind::Utm {
                zone_number: 55,
                northern: false,
                ..
            }
        ));
        let tokyo = utm(3094).unwrap().unwrap();
        assert_eq!(BESSEL_1841, tokyo.ellipsoid);
        assert_eq!(Some(26901), utm_code(1, true, GRS_1980));
        assert_eq!(Some(3706), utm_code(59, true, GRS_1980));
    }

    #[test]
    fn descriptions_are_not_modeled() {
        for run in registry::RUNS {
            for code in run.codes() {
                assert!(is_valid_code(code));
                assert!(utm(code).is_none(), "{code}");
                assert!(state_plane(code).is_none(), "{code}");
                assert!(singleton(code).is_none(), "{code}");
            }
        }
    }

    #[test]
    fn unknown() {
        assert_eq!(None, lookup(4999).unwrap());
    }
}
