//! The las header as the validator sees it.
//!
//! Unlike a header used for writing, nothing here is normalized. Every field keeps the value it
//! had in the file, so that the checks can report on it. The variable length records are kept
//! as-is too, and the ones the checks care about (GeoTIFF keys, OGC WKT, wave packet
//! descriptors) are interpreted into their own fields by [Header::interpret_vlrs].

use crate::geokey::{
    GEO_ASCII_PARAMS_RECORD_ID, GEO_DOUBLE_PARAMS_RECORD_ID, GEO_KEY_DIRECTORY_RECORD_ID, GeoKeys,
};
use crate::point::Format;
use crate::{Bounds, GlobalEncoding, Result, Transform, Vector, Version};
use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::io::Cursor;

/// The size of a vlr header, in bytes.
pub const VLR_HEADER_SIZE: u32 = 54;

/// Record id of the OGC WKT coordinate system record.
pub const OGC_WKT_RECORD_ID: u16 = 2112;

const LASF_PROJECTION: &str = "LASF_Projection";
const LASF_SPEC: &str = "LASF_Spec";
const WAVE_PACKET_DESCRIPTOR_RECORD_IDS: std::ops::RangeInclusive<u16> = 100..=354;

/// A variable length record, regular or extended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vlr {
    /// The user that created this record, e.g. "LASF_Projection".
    pub user_id: String,
    /// This value specifies the type of record, and depends on the user id.
    pub record_id: u16,
    /// Textual description of these data.
    pub description: String,
    /// The data themselves.
    pub data: Vec<u8>,
    /// The payload length the file declared, which can be more than was there to read.
    ///
    /// `None` means the length of `data`.
    pub declared_length: Option<u64>,
}

impl Vlr {
    /// Returns the length of the payload after the vlr header, as declared in the file.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Vlr;
    /// let vlr = Vlr { data: vec![0; 2], ..Default::default() };
    /// assert_eq!(2, vlr.record_length_after_header());
    /// let truncated = Vlr { declared_length: Some(100), ..vlr };
    /// assert_eq!(100, truncated.record_length_after_header());
    /// ```
    pub fn record_length_after_header(&self) -> u64 {
        self.declared_length.unwrap_or(self.data.len() as u64)
    }

    /// Returns the total length of this vlr, header and data.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Vlr;
    /// let vlr = Vlr { data: vec![0; 10], ..Default::default() };
    /// assert_eq!(64, vlr.len());
    /// ```
    pub fn len(&self) -> u64 {
        u64::from(VLR_HEADER_SIZE) + self.record_length_after_header()
    }

    /// Is this an empty vlr, i.e. one without data?
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn is_projection(&self) -> bool {
        self.user_id == LASF_PROJECTION
    }

    fn wave_packet_index(&self) -> Option<u8> {
        if self.user_id == LASF_SPEC && WAVE_PACKET_DESCRIPTOR_RECORD_IDS.contains(&self.record_id) {
            u8::try_from(self.record_id - 99).ok()
        } else {
            None
        }
    }
}

/// Describes the waveform samples that points of a given index reference.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WavePacketDescriptor {
    /// Bits per sample, 2 to 32.
    pub bits_per_sample: u8,
    /// Zero means no compression.
    pub waveform_compression_type: u8,
    /// Number of samples in the packet.
    pub number_of_samples: u32,
    /// Temporal sample spacing in picoseconds.
    pub temporal_sample_spacing: u32,
    /// Digitizer gain.
    pub digitizer_gain: f64,
    /// Digitizer offset.
    pub digitizer_offset: f64,
}

impl WavePacketDescriptor {
    /// Reads a descriptor from a vlr payload.
    pub fn read_from(data: &[u8]) -> Result<WavePacketDescriptor> {
        let mut cursor = Cursor::new(data);
        Ok(WavePacketDescriptor {
            bits_per_sample: cursor.read_u8()?,
            waveform_compression_type: cursor.read_u8()?,
            number_of_samples: cursor.read_u32::<LittleEndian>()?,
            temporal_sample_spacing: cursor.read_u32::<LittleEndian>()?,
            digitizer_gain: cursor.read_f64::<LittleEndian>()?,
            digitizer_offset: cursor.read_f64::<LittleEndian>()?,
        })
    }
}

/// A las header.
///
/// The legacy and the 64-bit point counts are both kept, since several checks compare them.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    /// Should always be "LASF".
    pub file_signature: [u8; 4],
    /// A project-wide unique ID for the file, zero if unassigned.
    pub file_source_id: u16,
    /// The global encoding bit field.
    pub global_encoding: GlobalEncoding,
    /// The las version of this file.
    pub version: Version,
    /// The system that produced this file, nul padded.
    pub system_identifier: [u8; 32],
    /// The software which generated these data, nul padded.
    pub generating_software: [u8; 32],
    /// Day of the year the file was created, January 1 is day 1.
    pub file_creation_day_of_year: u16,
    /// Year the file was created.
    pub file_creation_year: u16,
    /// The size of the public header block.
    pub header_size: u16,
    /// Bytes from the beginning of the file to the first point record.
    pub offset_to_point_data: u32,
    /// The point data format id.
    pub point_data_format: u8,
    /// The size of one point record, including extra bytes.
    pub point_data_record_length: u16,
    /// The 32-bit point count.
    pub legacy_number_of_point_records: u32,
    /// The 32-bit point counts for returns one through five.
    pub legacy_number_of_points_by_return: [u32; 5],
    /// The 64-bit point count of las 1.4.
    pub number_of_point_records: u64,
    /// The 64-bit point counts for returns one through fifteen, las 1.4.
    pub number_of_points_by_return: [u64; 15],
    /// Scales and offsets.
    pub transforms: Vector<Transform>,
    /// The declared extent of the points, in real coordinates.
    pub bounds: Bounds,
    /// Byte offset of the waveform data packet record, las 1.3 and up.
    pub start_of_waveform_data_packet_record: u64,
    /// Variable length records stored after the header.
    pub vlrs: Vec<Vlr>,
    /// Extended variable length records stored after the points, las 1.4.
    pub evlrs: Vec<Vlr>,
    /// Wave packet descriptors, keyed by the index points use to reference them.
    pub wave_packet_descriptors: BTreeMap<u8, WavePacketDescriptor>,
    /// The GeoTIFF keys, if the file has a key directory.
    pub geokeys: Option<GeoKeys>,
    /// The OGC WKT coordinate system, if the file has one.
    pub ogc_wkt: Option<String>,
}

impl Header {
    /// Returns the point format.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Header;
    /// let header = Header { point_data_format: 3, ..Default::default() };
    /// assert!(header.format().has_color());
    /// ```
    pub fn format(&self) -> Format {
        Format::new(self.point_data_format)
    }

    /// Returns the smallest offset to point data that fits the header and all vlrs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::{Header, Vlr};
    /// let mut header = Header::default();
    /// header.vlrs.push(Vlr { data: vec![0; 6], ..Default::default() });
    /// assert_eq!(227 + 54 + 6, header.min_offset_to_point_data());
    /// ```
    pub fn min_offset_to_point_data(&self) -> u64 {
        self.vlrs
            .iter()
            .fold(u64::from(self.header_size), |acc, vlr| acc + vlr.len())
    }

    /// Interprets the projection and wave packet descriptor records.
    ///
    /// Regular vlrs are looked at first, then evlrs, and later records win. A malformed key
    /// directory is logged and ignored, so the file reads as if it had no GeoTIFF keys.
    pub fn interpret_vlrs(&mut self) {
        let mut directory = None;
        let mut doubles = None;
        let mut ascii = None;
        let mut ogc_wkt = None;
        let mut wave_packet_descriptors = BTreeMap::new();
        for vlr in self.vlrs.iter().chain(self.evlrs.iter()) {
            if vlr.is_projection() {
                match vlr.record_id {
                    GEO_KEY_DIRECTORY_RECORD_ID => directory = Some(vlr.data.as_slice()),
                    GEO_DOUBLE_PARAMS_RECORD_ID => doubles = Some(vlr.data.as_slice()),
                    GEO_ASCII_PARAMS_RECORD_ID => ascii = Some(vlr.data.as_slice()),
                    OGC_WKT_RECORD_ID => {
                        let wkt = String::from_utf8_lossy(&vlr.data);
                        ogc_wkt = Some(wkt.trim_end_matches('\0').to_string());
                    }
                    record_id => debug!("ignoring projection record {record_id}"),
                }
            } else if let Some(index) = vlr.wave_packet_index() {
                match WavePacketDescriptor::read_from(&vlr.data) {
                    Ok(descriptor) => {
                        let _ = wave_packet_descriptors.insert(index, descriptor);
                    }
                    Err(err) => warn!("wave packet descriptor {index} is unreadable: {err}"),
                }
            }
        }
        self.geokeys = directory.and_then(|directory| {
            GeoKeys::read_from(directory, doubles, ascii)
                .map_err(|err| warn!("ignoring geokeys: {err}"))
                .ok()
        });
        self.ogc_wkt = ogc_wkt;
        self.wave_packet_descriptors = wave_packet_descriptors;
    }
}

impl Default for Header {
    fn default() -> Header {
        let mut system_identifier = [0; 32];
        system_identifier[..5].copy_from_slice(b"OTHER");
        let mut generating_software = [0; 32];
        generating_software[..12].copy_from_slice(b"las-validate");
        Header {
            file_signature: *b"LASF",
            file_source_id: 0,
            global_encoding: GlobalEncoding::default(),
            version: Version::new(1, 2),
            system_identifier,
            generating_software,
            file_creation_day_of_year: 1,
            file_creation_year: 2020,
            header_size: 227,
            offset_to_point_data: 227,
            point_data_format: 0,
            point_data_record_length: 20,
            legacy_number_of_point_records: 0,
            legacy_number_of_points_by_return: [0; 5],
            number_of_point_records: 0,
            number_of_points_by_return: [0; 15],
            transforms: Vector {
                x: Transform::default(),
                y: Transform::default(),
                z: Transform::default(),
            },
            bounds: Bounds {
                min: Vector::default(),
                max: Vector::default(),
            },
            start_of_waveform_data_packet_record: 0,
            vlrs: Vec::new(),
            evlrs: Vec::new(),
            wave_packet_descriptors: BTreeMap::new(),
            geokeys: None,
            ogc_wkt: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geokey::PROJECTED_CS_TYPE;

    fn projection_vlr(record_id: u16, data: Vec<u8>) -> Vlr {
        Vlr {
            user_id: LASF_PROJECTION.to_string(),
            record_id,
            description: String::new(),
            data,
            declared_length: None,
        }
    }

    #[test]
    fn geokeys_from_vlrs() {
        let mut geokeys = GeoKeys::default();
        let _ = geokeys.push_short(PROJECTED_CS_TYPE, 32617);
        let mut header = Header::default();
        header.vlrs.push(projection_vlr(
            GEO_KEY_DIRECTORY_RECORD_ID,
            geokeys.directory_bytes(),
        ));
        header.interpret_vlrs();
        assert_eq!(Some(geokeys), header.geokeys);
        assert!(header.ogc_wkt.is_none());
    }

    #[test]
    fn malformed_directory_is_ignored() {
        let mut header = Header::default();
        header
            .vlrs
            .push(projection_vlr(GEO_KEY_DIRECTORY_RECORD_ID, vec![1, 0]));
        header.interpret_vlrs();
        assert!(header.geokeys.is_none());
    }

    #[test]
    fn wkt_from_evlr() {
        let mut header = Header {
            version: Version::new(1, 4),
            ..Default::default()
        };
        header.evlrs.push(projection_vlr(
            OGC_WKT_RECORD_ID,
            b"PROJCS[\"NAD83 / UTM zone 17N\"]\0".to_vec(),
        ));
        header.interpret_vlrs();
        assert_eq!(
            Some("PROJCS[\"NAD83 / UTM zone 17N\"]".to_string()),
            header.ogc_wkt
        );
    }

    #[test]
    fn wave_packet_descriptors() {
        let mut data = vec![8, 0];
        data.extend_from_slice(&256u32.to_le_bytes());
        data.extend_from_slice(&1000u32.to_le_bytes());
        data.extend_from_slice(&1.0f64.to_le_bytes());
        data.extend_from_slice(&0.0f64.to_le_bytes());
        let mut header = Header::default();
        header.vlrs.push(Vlr {
            user_id: LASF_SPEC.to_string(),
            record_id: 100,
            description: String::new(),
            data,
            declared_length: None,
        });
        header.interpret_vlrs();
        let descriptor = header.wave_packet_descriptors[&1];
        assert_eq!(8, descriptor.bits_per_sample);
        assert_eq!(256, descriptor.number_of_samples);
    }

    #[test]
    fn min_offset() {
        let header = Header::default();
        assert_eq!(227, header.min_offset_to_point_data());
    }

    #[test]
    fn min_offset_counts_declared_lengths() {
        let mut header = Header::default();
        header.vlrs.push(Vlr {
            data: vec![0; 2],
            declared_length: Some(100),
            ..Default::default()
        });
        header.vlrs.push(Vlr {
            data: vec![0; 6],
            ..Default::default()
        });
        assert_eq!(227 + 54 + 100 + 54 + 6, header.min_offset_to_point_data());
    }
}
