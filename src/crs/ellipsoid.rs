//! Reference ellipsoids.

use std::fmt;

/// A reference ellipsoid as stored in the registry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Registry id, 1 through 24.
    pub id: u16,
    /// Human readable name.
    pub name: &'static str,
    /// Equatorial radius in meters.
    pub equatorial_radius: f64,
    /// Eccentricity squared.
    pub eccentricity_squared: f64,
    /// Inverse flattening.
    pub inverse_flattening: f64,
}

/// Clarke 1866, the NAD27 ellipsoid.
pub const CLARKE_1866: u16 = 5;
/// GRS 1980, the NAD83 ellipsoid.
pub const GRS_1980: u16 = 11;
/// International 1924 (Hayford).
pub const INTERNATIONAL_1924: u16 = 14;
/// South American 1969.
pub const SOUTH_AMERICAN_1969: u16 = 19;
/// WGS 72.
pub const WGS_72: u16 = 22;
/// WGS 84.
pub const WGS_84: u16 = 23;
/// Bessel 1841.
pub const BESSEL_1841: u16 = 3;
/// Airy 1830.
pub const AIRY: u16 = 1;
/// Modified Airy, used in Ireland.
pub const MODIFIED_AIRY: u16 = 16;
/// Indonesian National.
pub const INDONESIAN_NATIONAL: u16 = 24;
/// Australian National, used by AGD66 and AGD84.
pub const AUSTRALIAN_NATIONAL: u16 = 2;
/// Krassovsky, used by Pulkovo 1942.
pub const KRASSOVSKY: u16 = 15;

macro_rules! ellipsoids {
    ($(($id:expr, $name:expr, $radius:expr, $ecc:expr, $inv:expr),)+) => {
        const ELLIPSOIDS: &[Ellipsoid] = &[
            $(Ellipsoid {
                id: $id,
                name: $name,
                equatorial_radius: $radius,
                eccentricity_squared: $ecc,
                inverse_flattening: $inv,
            },)+
        ];
    };
}

ellipsoids! {
    (1, "Airy", 6377563.396, 0.00667054, 299.3249646),
    (2, "Australian National", 6378160.0, 0.006694542, 298.25),
    (3, "Bessel 1841", 6377397.155, 0.006674372, 299.1528128),
    (4, "Bessel 1841 (Namibia)", 6377483.865, 0.006674372, 299.1528128),
    (5, "Clarke 1866 (NAD-27)", 6378206.4, 0.006768658, 294.9786982),
    (6, "Clarke 1880", 6378249.145, 0.006803511, 293.465),
    (7, "Everest 1830", 6377276.345, 0.006637847, 300.8017),
    (8, "Fischer 1960 (Mercury)", 6378166.0, 0.006693422, 298.3),
    (9, "Fischer 1968", 6378150.0, 0.006693422, 298.3),
    (10, "GRS 1967", 6378160.0, 0.006694605, 298.247167427),
    (11, "GRS 1980 (NAD-83)", 6378137.0, 0.00669438002290, 298.257222101),
    (12, "Helmert 1906", 6378200.0, 0.006693422, 298.3),
    (13, "Hough", 6378270.0, 0.00672267, 297.0),
    (14, "International 1924", 6378388.0, 0.00672267, 297.0),
    (15, "Krassovsky", 6378245.0, 0.006693422, 298.3),
    (16, "Modified Airy", 6377340.189, 0.00667054, 299.3249646),
    (17, "Modified Everest", 6377304.063, 0.006637847, 300.8017),
    (18, "Modified Fischer 1960", 6378155.0, 0.006693422, 298.3),
    (19, "South American 1969", 6378160.0, 0.006694542, 298.25),
    (20, "WGS 60", 6378165.0, 0.006693422, 298.3),
    (21, "WGS 66", 6378145.0, 0.006694542, 298.25),
    (22, "WGS-72", 6378135.0, 0.006694318, 298.26),
    (23, "WGS-84", 6378137.0, 0.00669437999013, 298.257223563),
    (24, "Indonesian National 1974", 6378160.0, 0.006694542, 298.247),
}

impl Ellipsoid {
    /// Looks an ellipsoid up by its registry id.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::Ellipsoid;
    /// let wgs84 = Ellipsoid::get(23).unwrap();
    /// assert_eq!(6378137.0, wgs84.equatorial_radius);
    /// assert!(Ellipsoid::get(0).is_none());
    /// ```
    pub fn get(id: u16) -> Option<&'static Ellipsoid> {
        ELLIPSOIDS.iter().find(|ellipsoid| ellipsoid.id == id)
    }

    /// Returns every registered ellipsoid.
    pub fn all() -> &'static [Ellipsoid] {
        ELLIPSOIDS
    }

    /// Derives the constants a projection needs from this ellipsoid.
    pub fn resolve(&self) -> ResolvedEllipsoid {
        ResolvedEllipsoid::new(*self)
    }
}

/// Maps an EPSG geographic CRS code (`GeographicTypeGeoKey`) to a registry ellipsoid id.
///
/// # Examples
///
/// ```
/// use las_validate::crs::ellipsoid;
/// assert_eq!(Some(ellipsoid::WGS_84), ellipsoid::from_geographic_code(4326));
/// assert_eq!(None, ellipsoid::from_geographic_code(4999));
/// ```
pub fn from_geographic_code(code: u16) -> Option<u16> {
    lookup(GEOGRAPHIC_CODES, code)
}

/// Maps an EPSG geodetic datum code (`GeogGeodeticDatumGeoKey`) to a registry ellipsoid id.
pub fn from_datum_code(code: u16) -> Option<u16> {
    lookup(DATUM_CODES, code)
}

/// Maps an EPSG ellipsoid code (`GeogEllipsoidGeoKey`) to a registry ellipsoid id.
pub fn from_ellipsoid_code(code: u16) -> Option<u16> {
    lookup(ELLIPSOID_CODES, code)
}

fn lookup(table: &[(u16, u16)], code: u16) -> Option<u16> {
    table
        .binary_search_by_key(&code, |&(code, _)| code)
        .ok()
        .map(|i| table[i].1)
}

const GEOGRAPHIC_CODES: &[(u16, u16)] = &[
    (4001, AIRY),
    (4002, MODIFIED_AIRY),
    (4003, 2),
    (4004, BESSEL_1841),
    (4006, 4),
    (4008, CLARKE_1866),
    (4012, 6),
    (4015, 7),
    (4019, GRS_1980),
    (4020, 12),
    (4022, INTERNATIONAL_1924),
    (4024, 15),
    (4030, WGS_84),
    (4152, GRS_1980),
    (4167, GRS_1980),
    (4230, INTERNATIONAL_1924),
    (4238, INDONESIAN_NATIONAL),
    (4258, GRS_1980),
    (4267, CLARKE_1866),
    (4269, GRS_1980),
    (4277, AIRY),
    (4283, GRS_1980),
    (4300, MODIFIED_AIRY),
    (4312, BESSEL_1841),
    (4314, BESSEL_1841),
    (4322, WGS_72),
    (4326, WGS_84),
    (4612, GRS_1980),
    (4617, GRS_1980),
    (4618, SOUTH_AMERICAN_1969),
    (4674, GRS_1980),
    (4759, GRS_1980),
    (6318, GRS_1980),
];

const DATUM_CODES: &[(u16, u16)] = &[
    (6152, GRS_1980),
    (6167, GRS_1980),
    (6230, INTERNATIONAL_1924),
    (6238, INDONESIAN_NATIONAL),
    (6258, GRS_1980),
    (6267, CLARKE_1866),
    (6269, GRS_1980),
    (6277, AIRY),
    (6283, GRS_1980),
    (6300, MODIFIED_AIRY),
    (6312, BESSEL_1841),
    (6314, BESSEL_1841),
    (6322, WGS_72),
    (6326, WGS_84),
    (6612, GRS_1980),
    (6617, GRS_1980),
    (6618, SOUTH_AMERICAN_1969),
    (6674, GRS_1980),
    (6759, GRS_1980),
];

const ELLIPSOID_CODES: &[(u16, u16)] = &[
    (7001, AIRY),
    (7002, MODIFIED_AIRY),
    (7003, 2),
    (7004, BESSEL_1841),
    (7006, 4),
    (7008, CLARKE_1866),
    (7012, 6),
    (7015, 7),
    (7018, 17),
    (7019, GRS_1980),
    (7020, 12),
    (7021, INDONESIAN_NATIONAL),
    (7022, INTERNATIONAL_1924),
    (7024, 15),
    (7030, WGS_84),
    (7036, 10),
    (7043, WGS_72),
    (7050, SOUTH_AMERICAN_1969),
];

/// An ellipsoid selected for a coordinate reference system, with its derived constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedEllipsoid {
    /// The registry entry.
    pub ellipsoid: Ellipsoid,
    /// Polar radius in meters.
    pub polar_radius: f64,
    /// Second eccentricity squared.
    pub eccentricity_prime_squared: f64,
    /// First eccentricity.
    pub eccentricity: f64,
    /// The e1 series constant used by transverse mercator.
    pub eccentricity_e1: f64,
}

impl ResolvedEllipsoid {
    fn new(ellipsoid: Ellipsoid) -> ResolvedEllipsoid {
        let e2 = ellipsoid.eccentricity_squared;
        let root = (1.0 - e2).sqrt();
        ResolvedEllipsoid {
            ellipsoid,
            polar_radius: ellipsoid.equatorial_radius * root,
            eccentricity_prime_squared: e2 / (1.0 - e2),
            eccentricity: e2.sqrt(),
            eccentricity_e1: (1.0 - root) / (1.0 + root),
        }
    }

    /// The registry id.
    pub fn id(&self) -> u16 {
        self.ellipsoid.id
    }
}

impl fmt::Display for ResolvedEllipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ellipsoid.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense() {
        for (i, ellipsoid) in Ellipsoid::all().iter().enumerate() {
            assert_eq!(i + 1, usize::from(ellipsoid.id));
        }
        assert_eq!(24, Ellipsoid::all().len());
    }

    #[test]
    fn derived_constants() {
        for ellipsoid in Ellipsoid::all() {
            let e2 = ellipsoid.eccentricity_squared;
            assert!(e2 > 0.0 && e2 < 1.0, "{}", ellipsoid.name);
            let resolved = ellipsoid.resolve();
            let expected = ellipsoid.equatorial_radius * (1.0 - e2).sqrt();
            assert!((resolved.polar_radius - expected).abs() < 1e-6);
            assert!(resolved.polar_radius < ellipsoid.equatorial_radius);
        }
    }

    #[test]
    fn code_tables_are_sorted() {
        for table in [GEOGRAPHIC_CODES, DATUM_CODES, ELLIPSOID_CODES] {
            assert!(table.windows(2).all(|w| w[0].0 < w[1].0));
            assert!(table.iter().all(|&(_, id)| Ellipsoid::get(id).is_some()));
        }
    }

    #[test]
    fn datum_codes() {
        assert_eq!(Some(CLARKE_1866), from_datum_code(6267));
        assert_eq!(Some(GRS_1980), from_ellipsoid_code(7019));
        assert_eq!(None, from_ellipsoid_code(32767));
    }

    #[test]
    fn grs80_polar_radius() {
        let grs80 = Ellipsoid::get(GRS_1980).unwrap().resolve();
        assert!((grs80.polar_radius - 6356752.314).abs() < 0.001);
    }
}
