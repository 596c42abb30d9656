//! GeoTIFF keys, as stored in the `LASF_Projection` variable length records.
//!
//! The key directory (record id 34735) holds `(key id, location, count, value)` quadruples. A
//! location of zero means the value is stored inline, otherwise the value is an index into the
//! double parameters (34736) or the ascii parameters (34737).

use crate::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use log::warn;
use std::io::Cursor;

/// Record id of the key directory.
pub const GEO_KEY_DIRECTORY_RECORD_ID: u16 = 34735;
/// Record id of the double parameters.
pub const GEO_DOUBLE_PARAMS_RECORD_ID: u16 = 34736;
/// Record id of the ascii parameters.
pub const GEO_ASCII_PARAMS_RECORD_ID: u16 = 34737;

/// Model type (projected, geographic, geocentric).
pub const GT_MODEL_TYPE: u16 = 1024;
/// Raster type, carried along but not used.
pub const GT_RASTER_TYPE: u16 = 1025;
/// Citation, carried along but not used.
pub const GT_CITATION: u16 = 1026;
/// Geographic coordinate system code.
pub const GEOGRAPHIC_TYPE: u16 = 2048;
/// Geodetic datum code.
pub const GEOG_GEODETIC_DATUM: u16 = 2050;
/// Angular units of the geographic system.
pub const GEOG_ANGULAR_UNITS: u16 = 2054;
/// Ellipsoid code.
pub const GEOG_ELLIPSOID: u16 = 2056;
/// Projected coordinate system code.
pub const PROJECTED_CS_TYPE: u16 = 3072;
/// Projection code.
pub const PROJECTION: u16 = 3074;
/// Coordinate transformation method of a user defined projection.
pub const PROJ_COORD_TRANS: u16 = 3075;
/// Linear units of the projected system.
pub const PROJ_LINEAR_UNITS: u16 = 3076;
/// First standard parallel.
pub const PROJ_STD_PARALLEL_1: u16 = 3078;
/// Second standard parallel.
pub const PROJ_STD_PARALLEL_2: u16 = 3079;
/// Longitude of the natural origin.
pub const PROJ_NAT_ORIGIN_LONG: u16 = 3080;
/// Latitude of the natural origin.
pub const PROJ_NAT_ORIGIN_LAT: u16 = 3081;
/// False easting.
pub const PROJ_FALSE_EASTING: u16 = 3082;
/// False northing.
pub const PROJ_FALSE_NORTHING: u16 = 3083;
/// Longitude of the false origin.
pub const PROJ_FALSE_ORIGIN_LONG: u16 = 3084;
/// Latitude of the false origin.
pub const PROJ_FALSE_ORIGIN_LAT: u16 = 3085;
/// Easting at the false origin.
pub const PROJ_FALSE_ORIGIN_EASTING: u16 = 3086;
/// Northing at the false origin.
pub const PROJ_FALSE_ORIGIN_NORTHING: u16 = 3087;
/// Longitude of the projection center.
pub const PROJ_CENTER_LONG: u16 = 3088;
/// Latitude of the projection center.
pub const PROJ_CENTER_LAT: u16 = 3089;
/// Scale factor at the natural origin.
pub const PROJ_SCALE_AT_NAT_ORIGIN: u16 = 3092;
/// Scale factor at the projection center.
pub const PROJ_SCALE_AT_CENTER: u16 = 3093;
/// Vertical coordinate system code.
pub const VERTICAL_CS_TYPE: u16 = 4096;
/// Vertical datum code.
pub const VERTICAL_DATUM: u16 = 4098;
/// Vertical units.
pub const VERTICAL_UNITS: u16 = 4099;

/// The value of a coded key meaning "user defined".
pub const USER_DEFINED: u16 = 32767;

const DIRECTORY_HEADER_LEN: usize = 8;
const ENTRY_LEN: usize = 8;

/// A single entry of the key directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeoKeyEntry {
    /// The key id, e.g. [PROJECTED_CS_TYPE].
    pub key_id: u16,
    /// Zero for an inline value, else the record id of the store holding the value.
    pub tiff_tag_location: u16,
    /// Number of values.
    pub count: u16,
    /// The inline value, or the index into the store.
    pub value_offset: u16,
}

/// The value of a key, resolved through its location.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoKeyValue {
    /// An inline short, usually an EPSG or GeoTIFF code.
    Short(u16),
    /// A double parameter.
    Double(f64),
    /// An ascii parameter.
    Ascii(String),
}

/// The GeoTIFF keys of a file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoKeys {
    /// The directory entries, in file order.
    pub entries: Vec<GeoKeyEntry>,
    /// The double parameters.
    pub double_params: Vec<f64>,
    /// The ascii parameters.
    pub ascii_params: String,
}

impl GeoKeys {
    /// Parses the keys from the payloads of the three projection records.
    ///
    /// The directory is required, the parameter stores are optional.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::geokey::{GeoKeys, PROJECTED_CS_TYPE};
    /// let directory: Vec<u8> = [1u16, 1, 0, 1, 3072, 0, 1, 32617]
    ///     .iter()
    ///     .flat_map(|n| n.to_le_bytes())
    ///     .collect();
    /// let geokeys = GeoKeys::read_from(&directory, None, None).unwrap();
    /// assert_eq!(PROJECTED_CS_TYPE, geokeys.entries[0].key_id);
    /// ```
    pub fn read_from(directory: &[u8], doubles: Option<&[u8]>, ascii: Option<&[u8]>) -> Result<GeoKeys> {
        if directory.len() < DIRECTORY_HEADER_LEN {
            return Err(Error::InvalidGeoKeyDirectory("shorter than its header"));
        }
        let mut cursor = Cursor::new(directory);
        let key_directory_version = cursor.read_u16::<LittleEndian>()?;
        let _key_revision = cursor.read_u16::<LittleEndian>()?;
        let _minor_revision = cursor.read_u16::<LittleEndian>()?;
        let number_of_keys = cursor.read_u16::<LittleEndian>()?;
        if key_directory_version != 1 {
            warn!("geokey directory version is {key_directory_version}, expected 1");
        }
        let needed = DIRECTORY_HEADER_LEN + usize::from(number_of_keys) * ENTRY_LEN;
        if directory.len() < needed {
            return Err(Error::InvalidGeoKeyDirectory(
                "shorter than its number of keys requires",
            ));
        }
        let mut entries = Vec::with_capacity(usize::from(number_of_keys));
        for _ in 0..number_of_keys {
            entries.push(GeoKeyEntry {
                key_id: cursor.read_u16::<LittleEndian>()?,
                tiff_tag_location: cursor.read_u16::<LittleEndian>()?,
                count: cursor.read_u16::<LittleEndian>()?,
                value_offset: cursor.read_u16::<LittleEndian>()?,
            });
        }

        let mut double_params = Vec::new();
        if let Some(doubles) = doubles {
            let mut cursor = Cursor::new(doubles);
            for _ in 0..doubles.len() / 8 {
                double_params.push(cursor.read_f64::<LittleEndian>()?);
            }
        }
        let ascii_params = ascii
            .map(|bytes| bytes.iter().map(|&b| b as char).collect())
            .unwrap_or_default();

        Ok(GeoKeys {
            entries,
            double_params,
            ascii_params,
        })
    }

    /// Appends a key with an inline value.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::geokey::{GeoKeys, GeoKeyValue, PROJ_LINEAR_UNITS};
    /// let mut geokeys = GeoKeys::default();
    /// geokeys.push_short(PROJ_LINEAR_UNITS, 9002);
    /// assert_eq!(GeoKeyValue::Short(9002), geokeys.value(&geokeys.entries[0]).unwrap());
    /// ```
    pub fn push_short(&mut self, key_id: u16, value: u16) -> &mut GeoKeys {
        self.entries.push(GeoKeyEntry {
            key_id,
            tiff_tag_location: 0,
            count: 1,
            value_offset: value,
        });
        self
    }

    /// Appends a key whose value goes into the double parameters.
    pub fn push_double(&mut self, key_id: u16, value: f64) -> &mut GeoKeys {
        let index = self.double_params.len();
        self.double_params.push(value);
        self.entries.push(GeoKeyEntry {
            key_id,
            tiff_tag_location: GEO_DOUBLE_PARAMS_RECORD_ID,
            count: 1,
            value_offset: u16::try_from(index).unwrap_or(u16::MAX),
        });
        self
    }

    /// Looks up the value of an entry.
    ///
    /// Returns an error if the entry points outside of its store, or into a store this crate
    /// does not know.
    pub fn value(&self, entry: &GeoKeyEntry) -> Result<GeoKeyValue> {
        let missing = || Error::MissingGeoKeyParameter {
            key_id: entry.key_id,
            location: entry.tiff_tag_location,
            index: entry.value_offset,
        };
        match entry.tiff_tag_location {
            0 => Ok(GeoKeyValue::Short(entry.value_offset)),
            GEO_DOUBLE_PARAMS_RECORD_ID => self
                .double_params
                .get(usize::from(entry.value_offset))
                .map(|&value| GeoKeyValue::Double(value))
                .ok_or_else(missing),
            GEO_ASCII_PARAMS_RECORD_ID => {
                let start = usize::from(entry.value_offset);
                let end = start + usize::from(entry.count);
                self.ascii_params
                    .get(start..end)
                    .map(|s| GeoKeyValue::Ascii(s.trim_end_matches(['|', '\0']).to_string()))
                    .ok_or_else(missing)
            }
            _ => Err(missing()),
        }
    }

    /// Serializes the entries as a key directory payload.
    pub fn directory_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(DIRECTORY_HEADER_LEN + self.entries.len() * ENTRY_LEN);
        let number_of_keys = u16::try_from(self.entries.len()).unwrap_or(u16::MAX);
        for n in [1, 1, 0, number_of_keys] {
            bytes.extend_from_slice(&n.to_le_bytes());
        }
        for entry in self.entries.iter().take(usize::from(number_of_keys)) {
            for n in [
                entry.key_id,
                entry.tiff_tag_location,
                entry.count,
                entry.value_offset,
            ] {
                bytes.extend_from_slice(&n.to_le_bytes());
            }
        }
        bytes
    }

    /// Serializes the double parameters as a payload.
    pub fn double_params_bytes(&self) -> Vec<u8> {
        self.double_params
            .iter()
            .flat_map(|n| n.to_le_bytes())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_doubles() {
        let mut geokeys = GeoKeys::default();
        let _ = geokeys
            .push_short(PROJ_COORD_TRANS, 1)
            .push_double(PROJ_FALSE_EASTING, 500000.)
            .push_double(PROJ_SCALE_AT_NAT_ORIGIN, 0.9996);
        let read = GeoKeys::read_from(
            &geokeys.directory_bytes(),
            Some(&geokeys.double_params_bytes()),
            None,
        )
        .unwrap();
        assert_eq!(geokeys, read);
        assert_eq!(
            GeoKeyValue::Double(0.9996),
            read.value(&read.entries[2]).unwrap()
        );
    }

    #[test]
    fn short_directory() {
        assert!(GeoKeys::read_from(&[1, 0, 1, 0], None, None).is_err());
        let directory: Vec<u8> = [1u16, 1, 0, 2, 3072, 0, 1, 32617]
            .iter()
            .flat_map(|n| n.to_le_bytes())
            .collect();
        assert!(GeoKeys::read_from(&directory, None, None).is_err());
    }

    #[test]
    fn missing_double() {
        let geokeys = GeoKeys {
            entries: vec![GeoKeyEntry {
                key_id: PROJ_FALSE_EASTING,
                tiff_tag_location: GEO_DOUBLE_PARAMS_RECORD_ID,
                count: 1,
                value_offset: 3,
            }],
            ..Default::default()
        };
        assert!(geokeys.value(&geokeys.entries[0]).is_err());
    }

    #[test]
    fn ascii() {
        let directory: Vec<u8> = [1u16, 1, 0, 1, GT_CITATION, GEO_ASCII_PARAMS_RECORD_ID, 6, 0]
            .iter()
            .flat_map(|n| n.to_le_bytes())
            .collect();
        let geokeys = GeoKeys::read_from(&directory, None, Some(b"UTM17|")).unwrap();
        assert_eq!(
            GeoKeyValue::Ascii("UTM17".to_string()),
            geokeys.value(&geokeys.entries[0]).unwrap()
        );
    }
}
