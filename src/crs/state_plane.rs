//! U.S. State Plane zones.
//!
//! Each datum has a table of lambert conformal conic zones and a table of transverse mercator
//! zones. Zone names are shared between datums and occasionally between the two families, so a
//! lookup names both the datum and the family. False eastings and northings are in meters.

use crate::Result;
use crate::crs::Projection;
use crate::crs::ellipsoid::{CLARKE_1866, GRS_1980};
use std::fmt;

/// The datum of a State Plane zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Datum {
    /// North American Datum of 1927, on the Clarke 1866 ellipsoid.
    Nad27,
    /// North American Datum of 1983, on the GRS 1980 ellipsoid.
    Nad83,
}

impl Datum {
    /// The registry id of the ellipsoid the datum is defined on.
    pub fn ellipsoid_id(&self) -> u16 {
        match self {
            Datum::Nad27 => CLARKE_1866,
            Datum::Nad83 => GRS_1980,
        }
    }

    fn lcc_zones(&self) -> &'static [LccZone] {
        match self {
            Datum::Nad27 => NAD27_LCC,
            Datum::Nad83 => NAD83_LCC,
        }
    }

    fn tm_zones(&self) -> &'static [TmZone] {
        match self {
            Datum::Nad27 => NAD27_TM,
            Datum::Nad83 => NAD83_TM,
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Nad27 => write!(f, "stateplane27"),
            Datum::Nad83 => write!(f, "stateplane83"),
        }
    }
}

/// A lambert conformal conic State Plane zone.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct LccZone {
    pub name: &'static str,
    pub false_easting: f64,
    pub false_northing: f64,
    pub lat_origin: f64,
    pub long_meridian: f64,
    pub first_std_parallel: f64,
    pub second_std_parallel: f64,
}

/// A transverse mercator State Plane zone.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct TmZone {
    pub name: &'static str,
    pub false_easting: f64,
    pub false_northing: f64,
    pub lat_origin: f64,
    pub long_meridian: f64,
    pub scale_factor: f64,
}

const fn lcc(
    name: &'static str,
    false_easting: f64,
    false_northing: f64,
    lat_origin: f64,
    long_meridian: f64,
    first_std_parallel: f64,
    second_std_parallel: f64,
) -> LccZone {
    LccZone {
        name,
        false_easting,
        false_northing,
        lat_origin,
        long_meridian,
        first_std_parallel,
        second_std_parallel,
    }
}

const fn tm(
    name: &'static str,
    false_easting: f64,
    false_northing: f64,
    lat_origin: f64,
    long_meridian: f64,
    scale_factor: f64,
) -> TmZone {
    TmZone {
        name,
        false_easting,
        false_northing,
        lat_origin,
        long_meridian,
        scale_factor,
    }
}

/// Finds a lambert conformal conic zone by name.
///
/// # Examples
///
/// ```
/// use las_validate::crs::state_plane::{self, Datum};
/// let zone = state_plane::lcc_zone(Datum::Nad83, "TX_C").unwrap();
/// assert_eq!(700000.0, zone.false_easting);
/// assert!(state_plane::lcc_zone(Datum::Nad83, "AL_E").is_none());
/// ```
pub fn lcc_zone(datum: Datum, name: &str) -> Option<&'static LccZone> {
    datum.lcc_zones().iter().find(|zone| zone.name == name)
}

/// Finds a transverse mercator zone by name.
pub fn tm_zone(datum: Datum, name: &str) -> Option<&'static TmZone> {
    datum.tm_zones().iter().find(|zone| zone.name == name)
}

/// Builds the projection of a named zone, trying lambert conformal conic first.
///
/// Returns `None` if neither table of the datum has the zone.
///
/// # Examples
///
/// ```
/// use las_validate::crs::state_plane::{self, Datum};
/// let projection = state_plane::projection(Datum::Nad83, "AL_E").unwrap().unwrap();
/// assert_eq!("stateplane83 AL_E", projection.name);
/// ```
pub fn projection(datum: Datum, name: &str) -> Option<Result<Projection>> {
    let description = format!("{datum} {name}");
    if let Some(zone) = lcc_zone(datum, name) {
        Some(Projection::lambert_conformal_conic(
            zone.false_easting,
            zone.false_northing,
            zone.lat_origin,
            zone.long_meridian,
            zone.first_std_parallel,
            zone.second_std_parallel,
            description,
        ))
    } else {
        tm_zone(datum, name).map(|zone| {
            Projection::transverse_mercator(
                zone.false_easting,
                zone.false_northing,
                zone.lat_origin,
                zone.long_meridian,
                zone.scale_factor,
                description,
            )
        })
    }
}

const NAD27_LCC: &[LccZone] = &[
    lcc("AK_10", 914401.8289, 0.0, 51.0, -176.0, 51.833333, 53.833333),
    lcc("AR_N", 609601.2192, 0.0, 34.333333, -92.0, 34.933333, 36.233333),
    lcc("AR_S", 609601.2192, 0.0, 32.666667, -92.0, 33.3, 34.766667),
    lcc("CA_I", 609601.2192, 0.0, 39.333333, -122.0, 40.0, 41.666667),
    lcc("CA_II", 609601.2192, 0.0, 37.666667, -122.0, 38.333333, 39.833333),
    lcc("CA_III", 609601.2192, 0.0, 36.5, -120.5, 37.066667, 38.433333),
    lcc("CA_IV", 609601.2192, 0.0, 35.333333, -119.0, 36.0, 37.25),
    lcc("CA_V", 609601.2192, 0.0, 33.5, -118.0, 34.033333, 35.466667),
    lcc("CA_VI", 609601.2192, 0.0, 32.166667, -116.25, 32.783333, 33.883333),
    lcc("CA_VII", 1276106.451, 1268253.007, 34.133333, -118.333333, 33.866667, 34.416667),
    lcc("CO_N", 609601.2192, 0.0, 39.333333, -105.5, 39.716667, 40.783333),
    lcc("CO_C", 609601.2192, 0.0, 37.833333, -105.5, 38.45, 39.75),
    lcc("CO_S", 609601.2192, 0.0, 36.666667, -105.5, 37.233333, 38.433333),
    lcc("CT", 182880.3658, 0.0, 40.833333, -72.75, 41.2, 41.866667),
    lcc("FL_N", 609601.2192, 0.0, 29.0, -84.5, 29.583333, 30.75),
    lcc("IA_N", 609601.2192, 0.0, 41.5, -93.5, 42.066667, 43.266667),
    lcc("IA_S", 609601.2192, 0.0, 40.0, -93.5, 40.616667, 41.783333),
    lcc("KS_N", 609601.2192, 0.0, 38.333333, -98.0, 38.716667, 39.783333),
    lcc("KS_S", 609601.2192, 0.0, 36.666667, -98.5, 37.266667, 38.566667),
    lcc("KY_N", 609601.2192, 0.0, 37.5, -84.25, 37.966667, 38.966667),
    lcc("KY_S", 609601.2192, 0.0, 36.333333, -85.75, 36.733333, 37.933333),
    lcc("LA_N", 609601.2192, 0.0, 30.666667, -92.5, 31.166667, 32.666667),
    lcc("LA_S", 609601.2192, 0.0, 28.666667, -91.333333, 29.3, 30.7),
    lcc("LA_O", 609601.2192, 0.0, 25.666667, -91.333333, 26.166667, 27.833333),
    lcc("MD", 243840.4877, 0.0, 37.833333, -77.0, 38.3, 39.45),
    lcc("MA_M", 182880.3658, 0.0, 41.0, -71.5, 41.716667, 42.683333),
    lcc("MA_I", 60960.12192, 0.0, 41.0, -70.5, 41.283333, 41.483333),
    lcc("MI_N", 609601.2192, 0.0, 44.783333, -87.0, 45.483333, 47.083333),
    lcc("MI_C", 609601.2192, 0.0, 43.316667, -84.333333, 44.183333, 45.7),
    lcc("MI_S", 609601.2192, 0.0, 41.5, -84.333333, 42.1, 43.666667),
    lcc("MN_N", 609601.2192, 0.0, 46.5, -93.1, 47.033333, 48.633333),
    lcc("MN_C", 609601.2192, 0.0, 45.0, -94.25, 45.616667, 47.05),
    lcc("MN_S", 609601.2192, 0.0, 43.0, -94.0, 43.783333, 45.216667),
    lcc("MT_N", 609601.2192, 0.0, 47.0, -109.5, 47.85, 48.716667),
    lcc("MT_C", 609601.2192, 0.0, 45.833333, -109.5, 46.45, 47.883333),
    lcc("MT_S", 609601.2192, 0.0, 44.0, -109.5, 44.866667, 46.4),
    lcc("NE_N", 609601.2192, 0.0, 41.333333, -100.0, 41.85, 42.816667),
    lcc("NE_S", 609601.2192, 0.0, 39.666667, -99.5, 40.283333, 41.716667),
    lcc("NY_LI", 609601.2192, 30480.06096, 40.5, -74.0, 40.666667, 41.033333),
    lcc("NC", 609601.2192, 0.0, 33.75, -79.0, 34.333333, 36.166667),
    lcc("ND_N", 609601.2192, 0.0, 47.0, -100.5, 47.433333, 48.733333),
    lcc("ND_S", 609601.2192, 0.0, 45.666667, -100.5, 46.183333, 47.483333),
    lcc("OH_N", 609601.2192, 0.0, 39.666667, -82.5, 40.433333, 41.7),
    lcc("OH_S", 609601.2192, 0.0, 38.0, -82.5, 38.733333, 40.033333),
    lcc("OK_N", 609601.2192, 0.0, 35.0, -98.0, 35.566667, 36.766667),
    lcc("OK_S", 609601.2192, 0.0, 33.333333, -98.0, 33.933333, 35.233333),
    lcc("OR_N", 609601.2192, 0.0, 43.666667, -120.5, 44.333333, 46.0),
    lcc("OR_S", 609601.2192, 0.0, 41.666667, -120.5, 42.333333, 44.0),
    lcc("PA_N", 609601.2192, 0.0, 40.166667, -77.75, 40.883333, 41.95),
    lcc("PA_S", 609601.2192, 0.0, 39.333333, -77.75, 39.933333, 40.966667),
    lcc("PR", 152400.3048, 0.0, 17.833333, -66.433333, 18.033333, 18.433333),
    lcc("SC_N", 609601.2192, 0.0, 33.0, -81.0, 33.766667, 34.966667),
    lcc("SC_S", 609601.2192, 0.0, 31.833333, -81.0, 32.333333, 33.666667),
    lcc("SD_N", 609601.2192, 0.0, 43.833333, -100.0, 44.416667, 45.683333),
    lcc("SD_S", 609601.2192, 0.0, 42.333333, -100.333333, 42.833333, 44.4),
    lcc("TN", 609601.2192, 30480.06096, 34.666667, -86.0, 35.25, 36.416667),
    lcc("TX_N", 609601.2192, 0.0, 34.0, -101.5, 34.65, 36.183333),
    lcc("TX_NC", 609601.2192, 0.0, 31.666667, -97.5, 32.133333, 33.966667),
    lcc("TX_C", 609601.2192, 0.0, 29.666667, -100.333333, 30.116667, 31.883333),
    lcc("TX_SC", 609601.2192, 0.0, 27.833333, -99.0, 28.383333, 30.283333),
    lcc("TX_S", 609601.2192, 0.0, 25.666667, -98.5, 26.166667, 27.833333),
    lcc("UT_N", 609601.2192, 0.0, 40.333333, -111.5, 40.716667, 41.783333),
    lcc("UT_C", 609601.2192, 0.0, 38.333333, -111.5, 39.016667, 40.65),
    lcc("UT_S", 609601.2192, 0.0, 36.666667, -111.5, 37.216667, 38.35),
    lcc("VA_N", 609601.2192, 0.0, 37.666667, -78.5, 38.033333, 39.2),
    lcc("VA_S", 609601.2192, 0.0, 36.333333, -78.5, 36.766667, 37.966667),
    lcc("WA_N", 609601.2192, 0.0, 47.0, -120.833333, 47.5, 48.733333),
    lcc("WA_S", 609601.2192, 0.0, 45.333333, -120.5, 45.833333, 47.333333),
    lcc("WV_N", 609601.2192, 0.0, 38.5, -79.5, 39.0, 40.25),
    lcc("WV_S", 609601.2192, 0.0, 37.0, -81.0, 37.483333, 38.883333),
    lcc("WI_N", 609601.2192, 0.0, 45.166667, -90.0, 45.566667, 46.766667),
    lcc("WI_C", 609601.2192, 0.0, 43.833333, -90.0, 44.25, 45.5),
    lcc("WI_S", 609601.2192, 0.0, 42.0, -90.0, 42.733333, 44.066667),
];

const NAD83_LCC: &[LccZone] = &[
    lcc("AK_10", 1000000.0, 0.0, 51.0, -176.0, 51.833333, 53.833333),
    lcc("AR_N", 400000.0, 0.0, 34.333333, -92.0, 34.933333, 36.233333),
    lcc("AR_S", 400000.0, 400000.0, 32.666667, -92.0, 33.3, 34.766667),
    lcc("CA_I", 2000000.0, 500000.0, 39.333333, -122.0, 40.0, 41.666667),
    lcc("CA_II", 2000000.0, 500000.0, 37.666667, -122.0, 38.333333, 39.833333),
    lcc("CA_III", 2000000.0, 500000.0, 36.5, -120.5, 37.066667, 38.433333),
    lcc("CA_IV", 2000000.0, 500000.0, 35.333333, -119.0, 36.0, 37.25),
    lcc("CA_V", 2000000.0, 500000.0, 33.5, -118.0, 34.033333, 35.466667),
    lcc("CA_VI", 2000000.0, 500000.0, 32.166667, -116.25, 32.783333, 33.883333),
    lcc("CO_N", 914401.8289, 304800.6096, 39.333333, -105.5, 39.716667, 40.783333),
    lcc("CO_C", 914401.8289, 304800.6096, 37.833333, -105.5, 38.45, 39.75),
    lcc("CO_S", 914401.8289, 304800.6096, 36.666667, -105.5, 37.233333, 38.433333),
    lcc("CT", 304800.6096, 152400.3048, 40.833333, -72.75, 41.2, 41.866667),
    lcc("FL_N", 600000.0, 0.0, 29.0, -84.5, 29.583333, 30.75),
    lcc("IA_N", 1500000.0, 1000000.0, 41.5, -93.5, 42.066667, 43.266667),
    lcc("IA_S", 500000.0, 0.0, 40.0, -93.5, 40.616667, 41.783333),
    lcc("KS_N", 400000.0, 0.0, 38.333333, -98.0, 38.716667, 39.783333),
    lcc("KS_S", 400000.0, 400000.0, 36.666667, -98.5, 37.266667, 38.566667),
    lcc("KY_N", 500000.0, 0.0, 37.5, -84.25, 37.966667, 38.966667),
    lcc("KY_S", 500000.0, 500000.0, 36.333333, -85.75, 36.733333, 37.933333),
    lcc("LA_N", 1000000.0, 0.0, 30.5, -92.5, 31.166667, 32.666667),
    lcc("LA_S", 1000000.0, 0.0, 28.5, -91.333333, 29.3, 30.7),
    lcc("LA_O", 1000000.0, 0.0, 25.5, -91.333333, 26.166667, 27.833333),
    lcc("MD", 400000.0, 0.0, 37.666667, -77.0, 38.3, 39.45),
    lcc("MA_M", 200000.0, 750000.0, 41.0, -71.5, 41.716667, 42.683333),
    lcc("MA_I", 500000.0, 0.0, 41.0, -70.5, 41.283333, 41.483333),
    lcc("MI_N", 8000000.0, 0.0, 44.783333, -87.0, 45.483333, 47.083333),
    lcc("MI_C", 6000000.0, 0.0, 43.316667, -84.366667, 44.183333, 45.7),
    lcc("MI_S", 4000000.0, 0.0, 41.5, -84.366667, 42.1, 43.666667),
    lcc("MN_N", 800000.0, 100000.0, 46.5, -93.1, 47.033333, 48.633333),
    lcc("MN_C", 800000.0, 100000.0, 45.0, -94.25, 45.616667, 47.05),
    lcc("MN_S", 800000.0, 100000.0, 43.0, -94.0, 43.783333, 45.216667),
    lcc("MT", 600000.0, 0.0, 44.25, -109.5, 45.0, 49.0),
    lcc("NE", 500000.0, 0.0, 39.833333, -100.0, 40.0, 43.0),
    lcc("NY_LI", 300000.0, 0.0, 40.166667, -74.0, 40.666667, 41.033333),
    lcc("NC", 609601.22, 0.0, 33.75, -79.0, 34.333333, 36.166667),
    lcc("ND_N", 600000.0, 0.0, 47.0, -100.5, 47.433333, 48.733333),
    lcc("ND_S", 600000.0, 0.0, 45.666667, -100.5, 46.183333, 47.483333),
    lcc("OH_N", 600000.0, 0.0, 39.666667, -82.5, 40.433333, 41.7),
    lcc("OH_S", 600000.0, 0.0, 38.0, -82.5, 38.733333, 40.033333),
    lcc("OK_N", 600000.0, 0.0, 35.0, -98.0, 35.566667, 36.766667),
    lcc("OK_S", 600000.0, 0.0, 33.333333, -98.0, 33.933333, 35.233333),
    lcc("OR_N", 2500000.0, 0.0, 43.666667, -120.5, 44.333333, 46.0),
    lcc("OR_S", 1500000.0, 0.0, 41.666667, -120.5, 42.333333, 44.0),
    lcc("PA_N", 600000.0, 0.0, 40.166667, -77.75, 40.883333, 41.95),
    lcc("PA_S", 600000.0, 0.0, 39.333333, -77.75, 39.933333, 40.966667),
    lcc("PR", 200000.0, 200000.0, 17.833333, -66.433333, 18.033333, 18.433333),
    lcc("SC", 609600.0, 0.0, 31.833333, -81.0, 32.5, 34.833333),
    lcc("SD_N", 600000.0, 0.0, 43.833333, -100.0, 44.416667, 45.683333),
    lcc("SD_S", 600000.0, 0.0, 42.333333, -100.333333, 42.833333, 44.4),
    lcc("TN", 600000.0, 0.0, 34.333333, -86.0, 35.25, 36.416667),
    lcc("TX_N", 200000.0, 1000000.0, 34.0, -101.5, 34.65, 36.183333),
    lcc("TX_NC", 600000.0, 2000000.0, 31.666667, -98.5, 32.133333, 33.966667),
    lcc("TX_C", 700000.0, 3000000.0, 29.666667, -100.333333, 30.116667, 31.883333),
    lcc("TX_SC", 600000.0, 4000000.0, 27.833333, -99.0, 28.383333, 30.283333),
    lcc("TX_S", 300000.0, 5000000.0, 25.666667, -98.5, 26.166667, 27.833333),
    lcc("UT_N", 500000.0, 1000000.0, 40.333333, -111.5, 40.716667, 41.783333),
    lcc("UT_C", 500000.0, 2000000.0, 38.333333, -111.5, 39.016667, 40.65),
    lcc("UT_S", 500000.0, 3000000.0, 36.666667, -111.5, 37.216667, 38.35),
    lcc("VA_N", 3500000.0, 2000000.0, 37.666667, -78.5, 38.033333, 39.2),
    lcc("VA_S", 3500000.0, 1000000.0, 36.333333, -78.5, 36.766667, 37.966667),
    lcc("WA_N", 500000.0, 0.0, 47.0, -120.833333, 47.5, 48.733333),
    lcc("WA_S", 500000.0, 0.0, 45.333333, -120.5, 45.833333, 47.333333),
    lcc("WV_N", 600000.0, 0.0, 38.5, -79.5, 39.0, 40.25),
    lcc("WV_S", 600000.0, 0.0, 37.0, -81.0, 37.483333, 38.883333),
    lcc("WI_N", 600000.0, 0.0, 45.166667, -90.0, 45.566667, 46.766667),
    lcc("WI_C", 600000.0, 0.0, 43.833333, -90.0, 44.25, 45.5),
    lcc("WI_S", 600000.0, 0.0, 42.0, -90.0, 42.733333, 44.066667),
];

const NAD27_TM: &[TmZone] = &[
    tm("AL_E", 152400.3048, 0.0, 30.5, -85.833333, 0.99996),
    tm("AL_W", 152400.3048, 0.0, 30.0, -87.5, 0.999933333),
    tm("AK_2", 152400.3048, 0.0, 54.0, -142.0, 0.9999),
    tm("AK_3", 152400.3048, 0.0, 54.0, -146.0, 0.9999),
    tm("AK_4", 152400.3048, 0.0, 54.0, -150.0, 0.9999),
    tm("AK_5", 152400.3048, 0.0, 54.0, -154.0, 0.9999),
    tm("AK_6", 152400.3048, 0.0, 54.0, -158.0, 0.9999),
    tm("AK_7", 213360.4267, 0.0, 54.0, -162.0, 0.9999),
    tm("AK_8", 152400.3048, 0.0, 54.0, -166.0, 0.9999),
    tm("AK_9", 182880.3658, 0.0, 54.0, -170.0, 0.9999),
    tm("AZ_E", 152400.3048, 0.0, 31.0, -110.166667, 0.9999),
    tm("AZ_C", 152400.3048, 0.0, 31.0, -111.916667, 0.9999),
    tm("AZ_W", 152400.3048, 0.0, 31.0, -113.75, 0.999933333),
    tm("DE", 152400.3048, 0.0, 38.0, -75.416667, 0.999995),
    tm("FL_E", 152400.3048, 0.0, 24.333333, -81.0, 0.999941177),
    tm("FL_W", 152400.3048, 0.0, 24.333333, -82.0, 0.999941177),
    tm("GA_E", 152400.3048, 0.0, 30.0, -82.166667, 0.9999),
    tm("GA_W", 152400.3048, 0.0, 30.0, -84.166667, 0.9999),
    tm("HI_1", 152400.3048, 0.0, 18.833333, -155.5, 0.999966667),
    tm("HI_2", 152400.3048, 0.0, 20.333333, -156.666667, 0.999966667),
    tm("HI_3", 152400.3048, 0.0, 21.166667, -158.0, 0.99999),
    tm("HI_4", 152400.3048, 0.0, 21.833333, -159.5, 0.99999),
    tm("HI_5", 152400.3048, 0.0, 21.666667, -160.166667, 1.0),
    tm("ID_E", 152400.3048, 0.0, 41.666667, -112.166667, 0.999947368),
    tm("ID_C", 152400.3048, 0.0, 41.666667, -114.0, 0.999947368),
    tm("ID_W", 152400.3048, 0.0, 41.666667, -115.75, 0.999933333),
    tm("IL_E", 152400.3048, 0.0, 36.666667, -88.333333, 0.999975),
    tm("IL_W", 152400.3048, 0.0, 36.666667, -90.166667, 0.999941177),
    tm("IN_E", 152400.3048, 0.0, 37.5, -85.666667, 0.999966667),
    tm("IN_W", 152400.3048, 0.0, 37.5, -87.083333, 0.999966667),
    tm("ME_E", 152400.3048, 0.0, 43.833333, -68.5, 0.9999),
    tm("ME_W", 152400.3048, 0.0, 42.833333, -70.166667, 0.999966667),
    tm("MS_E", 152400.3048, 0.0, 29.666667, -88.833333, 0.99996),
    tm("MS_W", 152400.3048, 0.0, 30.5, -90.333333, 0.999941177),
    tm("MO_E", 152400.3048, 0.0, 35.833333, -90.5, 0.999933333),
    tm("MO_C", 152400.3048, 0.0, 35.833333, -92.5, 0.999933333),
    tm("MO_W", 152400.3048, 0.0, 36.166667, -94.5, 0.999941177),
    tm("NV_E", 152400.3048, 0.0, 34.75, -115.583333, 0.9999),
    tm("NV_C", 152400.3048, 0.0, 34.75, -116.666667, 0.9999),
    tm("NV_W", 152400.3048, 0.0, 34.75, -118.583333, 0.9999),
    tm("NH", 152400.3048, 0.0, 42.5, -71.666667, 0.999966667),
    tm("NJ", 609601.2192, 0.0, 38.833333, -74.666667, 0.999975),
    tm("NM_E", 152400.3048, 0.0, 31.0, -104.333333, 0.999909091),
    tm("NM_C", 152400.3048, 0.0, 31.0, -106.25, 0.9999),
    tm("NM_W", 152400.3048, 0.0, 31.0, -107.833333, 0.999916667),
    tm("NY_E", 152400.3048, 0.0, 40.0, -74.333333, 0.999966667),
    tm("NY_C", 152400.3048, 0.0, 40.0, -76.583333, 0.9999375),
    tm("NY_W", 152400.3048, 0.0, 40.0, -78.583333, 0.9999375),
    tm("RI", 152400.3048, 0.0, 41.083333, -71.5, 0.99999375),
    tm("VT", 152400.3048, 0.0, 42.5, -72.5, 0.999964286),
    tm("WY_E", 152400.3048, 0.0, 40.666667, -105.166667, 0.999941177),
    tm("WY_EC", 152400.3048, 0.0, 40.666667, -107.333333, 0.999941177),
    tm("WY_WC", 152400.3048, 0.0, 40.666667, -108.75, 0.999941177),
    tm("WY_W", 152400.3048, 0.0, 40.666667, -110.083333, 0.999941177),
];

const NAD83_TM: &[TmZone] = &[
    tm("AL_E", 200000.0, 0.0, 30.5, -85.833333, 0.99996),
    tm("AL_W", 600000.0, 0.0, 30.0, -87.5, 0.999933333),
    tm("AK_2", 500000.0, 0.0, 54.0, -142.0, 0.9999),
    tm("AK_3", 500000.0, 0.0, 54.0, -146.0, 0.9999),
    tm("AK_4", 500000.0, 0.0, 54.0, -150.0, 0.9999),
    tm("AK_5", 500000.0, 0.0, 54.0, -154.0, 0.9999),
    tm("AK_6", 500000.0, 0.0, 54.0, -158.0, 0.9999),
    tm("AK_7", 500000.0, 0.0, 54.0, -162.0, 0.9999),
    tm("AK_8", 500000.0, 0.0, 54.0, -166.0, 0.9999),
    tm("AK_9", 500000.0, 0.0, 54.0, -170.0, 0.9999),
    tm("AZ_E", 213360.0, 0.0, 31.0, -110.166667, 0.9999),
    tm("AZ_C", 213360.0, 0.0, 31.0, -111.916667, 0.9999),
    tm("AZ_W", 213360.0, 0.0, 31.0, -113.75, 0.999933333),
    tm("DE", 200000.0, 0.0, 38.0, -75.416667, 0.999995),
    tm("FL_E", 200000.0, 0.0, 24.333333, -81.0, 0.999941177),
    tm("FL_W", 200000.0, 0.0, 24.333333, -82.0, 0.999941177),
    tm("GA_E", 200000.0, 0.0, 30.0, -82.166667, 0.9999),
    tm("GA_W", 700000.0, 0.0, 30.0, -84.166667, 0.9999),
    tm("HI_1", 500000.0, 0.0, 18.833333, -155.5, 0.999966667),
    tm("HI_2", 500000.0, 0.0, 20.333333, -156.666667, 0.999966667),
    tm("HI_3", 500000.0, 0.0, 21.166667, -158.0, 0.99999),
    tm("HI_4", 500000.0, 0.0, 21.833333, -159.5, 0.99999),
    tm("HI_5", 500000.0, 0.0, 21.666667, -160.166667, 1.0),
    tm("ID_E", 200000.0, 0.0, 41.666667, -112.166667, 0.999947368),
    tm("ID_C", 500000.0, 0.0, 41.666667, -114.0, 0.999947368),
    tm("ID_W", 800000.0, 0.0, 41.666667, -115.75, 0.999933333),
    tm("IL_E", 300000.0, 0.0, 36.666667, -88.333333, 0.999975),
    tm("IL_W", 700000.0, 0.0, 36.666667, -90.166667, 0.999941177),
    tm("IN_E", 100000.0, 250000.0, 37.5, -85.666667, 0.999966667),
    tm("IN_W", 900000.0, 250000.0, 37.5, -87.083333, 0.999966667),
    tm("ME_E", 300000.0, 0.0, 43.666667, -68.5, 0.9999),
    tm("ME_W", 900000.0, 0.0, 42.833333, -70.166667, 0.999966667),
    tm("MS_E", 300000.0, 0.0, 29.5, -88.833333, 0.99995),
    tm("MS_W", 700000.0, 0.0, 29.5, -90.333333, 0.99995),
    tm("MO_E", 250000.0, 0.0, 35.833333, -90.5, 0.999933333),
    tm("MO_C", 500000.0, 0.0, 35.833333, -92.5, 0.999933333),
    tm("MO_W", 850000.0, 0.0, 36.166667, -94.5, 0.999941177),
    tm("NV_E", 200000.0, 8000000.0, 34.75, -115.583333, 0.9999),
    tm("NV_C", 500000.0, 6000000.0, 34.75, -116.666667, 0.9999),
    tm("NV_W", 800000.0, 4000000.0, 34.75, -118.583333, 0.9999),
    tm("NH", 300000.0, 0.0, 42.5, -71.666667, 0.999966667),
    tm("NJ", 150000.0, 0.0, 38.833333, -74.5, 0.9999),
    tm("NM_E", 165000.0, 0.0, 31.0, -104.333333, 0.999909091),
    tm("NM_C", 500000.0, 0.0, 31.0, -106.25, 0.9999),
    tm("NM_W", 830000.0, 0.0, 31.0, -107.833333, 0.999916667),
    tm("NY_E", 150000.0, 0.0, 38.833333, -74.5, 0.9999),
    tm("NY_C", 250000.0, 0.0, 40.0, -76.583333, 0.9999375),
    tm("NY_W", 350000.0, 0.0, 40.0, -78.583333, 0.9999375),
    tm("RI", 100000.0, 0.0, 41.083333, -71.5, 0.99999375),
    tm("VT", 500000.0, 0.0, 42.5, -72.5, 0.999964286),
    tm("WY_E", 200000.0, 0.0, 40.5, -105.166667, 0.9999375),
    tm("WY_EC", 400000.0, 100000.0, 40.5, -107.333333, 0.9999375),
    tm("WY_WC", 600000.0, 0.0, 40.5, -108.75, 0.9999375),
    tm("WY_W", 800000.0, 100000.0, 40.5, -110.083333, 0.9999375),
];
