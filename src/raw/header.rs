//! The public header block, exactly as stored.

use crate::feature::{Evlrs, LargeFiles, Waveforms};
use crate::{Bounds, GlobalEncoding, Result, Transform, Vector, Version, Vlr};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

const IS_COMPRESSED_MASK: u8 = 0xc0;
const POINT_DATA_FORMAT_MASK: u8 = 0x3f;

/// A raw las header.
///
/// Fields are stored as they were read, with no checks at all, since checking them is the
/// validator's job.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Header {
    /// Should be "LASF".
    pub file_signature: [u8; 4],
    /// Zero means unassigned.
    pub file_source_id: u16,
    /// Bit field of global properties.
    pub global_encoding: u16,
    /// Project id.
    pub guid: [u8; 16],
    /// Major and minor version.
    pub version: Version,
    /// "MERGE", "MODIFICATION", "EXTRACTION", "TRANSFORMATION", "OTHER" or a hardware name.
    pub system_identifier: [u8; 32],
    /// The software that wrote the file.
    pub generating_software: [u8; 32],
    /// January 1 is day 1.
    pub file_creation_day_of_year: u16,
    #[allow(missing_docs)]
    pub file_creation_year: u16,
    /// The size of this block, in bytes.
    pub header_size: u16,
    /// Bytes from the start of the file to the first point record.
    pub offset_to_point_data: u32,
    #[allow(missing_docs)]
    pub number_of_variable_length_records: u32,
    /// The point data format. Laszip sets one of the two high bits to flag compression.
    pub point_data_format_id: u8,
    /// The size of one point record, including extra bytes.
    pub point_data_record_length: u16,
    /// The 32-bit point count.
    pub number_of_point_records: u32,
    /// The 32-bit point counts for returns one through five.
    pub number_of_points_by_return: [u32; 5],
    #[allow(missing_docs)]
    pub x_scale_factor: f64,
    #[allow(missing_docs)]
    pub y_scale_factor: f64,
    #[allow(missing_docs)]
    pub z_scale_factor: f64,
    #[allow(missing_docs)]
    pub x_offset: f64,
    #[allow(missing_docs)]
    pub y_offset: f64,
    #[allow(missing_docs)]
    pub z_offset: f64,
    #[allow(missing_docs)]
    pub max_x: f64,
    #[allow(missing_docs)]
    pub min_x: f64,
    #[allow(missing_docs)]
    pub max_y: f64,
    #[allow(missing_docs)]
    pub min_y: f64,
    #[allow(missing_docs)]
    pub max_z: f64,
    #[allow(missing_docs)]
    pub min_z: f64,
    /// **las 1.3 and 1.4**: offset of the waveform data packet record.
    pub start_of_waveform_data_packet_record: Option<u64>,
    /// **las 1.4**: where the extended variable length records are.
    pub evlr: Option<Evlr>,
    /// **las 1.4**: the 64-bit point counts.
    pub large_file: Option<LargeFile>,
}

/// Location of the extended variable length records.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Evlr {
    /// Offset of the first evlr.
    pub start_of_first_evlr: u64,
    /// The number of evlrs.
    pub number_of_evlrs: u32,
}

/// The 64-bit point counts of las 1.4.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LargeFile {
    #[allow(missing_docs)]
    pub number_of_point_records: u64,
    /// Returns one through fifteen.
    pub number_of_points_by_return: [u64; 15],
}

impl Header {
    /// Reads a raw header.
    ///
    /// Only the fields of the header's own version are read, so the reader is positioned at the
    /// end of the standard header for that version.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las_validate::raw::Header;
    /// let mut bytes = vec![0u8; 227];
    /// bytes[..4].copy_from_slice(b"LASF");
    /// bytes[24] = 1;
    /// bytes[25] = 2;
    /// let header = Header::read_from(Cursor::new(bytes)).unwrap();
    /// assert_eq!(*b"LASF", header.file_signature);
    /// assert!(header.large_file.is_none());
    /// ```
    pub fn read_from<R: Read>(mut read: R) -> Result<Header> {
        let mut file_signature = [0; 4];
        read.read_exact(&mut file_signature)?;
        let file_source_id = read.read_u16::<LittleEndian>()?;
        let global_encoding = read.read_u16::<LittleEndian>()?;
        let mut guid = [0; 16];
        read.read_exact(&mut guid)?;
        let version_major = read.read_u8()?;
        let version_minor = read.read_u8()?;
        let version = Version::new(version_major, version_minor);
        let mut system_identifier = [0; 32];
        read.read_exact(&mut system_identifier)?;
        let mut generating_software = [0; 32];
        read.read_exact(&mut generating_software)?;
        let file_creation_day_of_year = read.read_u16::<LittleEndian>()?;
        let file_creation_year = read.read_u16::<LittleEndian>()?;
        let header_size = read.read_u16::<LittleEndian>()?;
        let offset_to_point_data = read.read_u32::<LittleEndian>()?;
        let number_of_variable_length_records = read.read_u32::<LittleEndian>()?;
        let point_data_format_id = read.read_u8()?;
        let point_data_record_length = read.read_u16::<LittleEndian>()?;
        let number_of_point_records = read.read_u32::<LittleEndian>()?;
        let mut number_of_points_by_return = [0; 5];
        for n in number_of_points_by_return.iter_mut() {
            *n = read.read_u32::<LittleEndian>()?;
        }
        let x_scale_factor = read.read_f64::<LittleEndian>()?;
        let y_scale_factor = read.read_f64::<LittleEndian>()?;
        let z_scale_factor = read.read_f64::<LittleEndian>()?;
        let x_offset = read.read_f64::<LittleEndian>()?;
        let y_offset = read.read_f64::<LittleEndian>()?;
        let z_offset = read.read_f64::<LittleEndian>()?;
        let max_x = read.read_f64::<LittleEndian>()?;
        let min_x = read.read_f64::<LittleEndian>()?;
        let max_y = read.read_f64::<LittleEndian>()?;
        let min_y = read.read_f64::<LittleEndian>()?;
        let max_z = read.read_f64::<LittleEndian>()?;
        let min_z = read.read_f64::<LittleEndian>()?;
        let start_of_waveform_data_packet_record = if version.supports::<Waveforms>() {
            Some(read.read_u64::<LittleEndian>()?)
        } else {
            None
        };
        let evlr = if version.supports::<Evlrs>() {
            Some(Evlr::read_from(&mut read)?)
        } else {
            None
        };
        let large_file = if version.supports::<LargeFiles>() {
            Some(LargeFile::read_from(&mut read)?)
        } else {
            None
        };
        Ok(Header {
            file_signature,
            file_source_id,
            global_encoding,
            guid,
            version,
            system_identifier,
            generating_software,
            file_creation_day_of_year,
            file_creation_year,
            header_size,
            offset_to_point_data,
            number_of_variable_length_records,
            point_data_format_id,
            point_data_record_length,
            number_of_point_records,
            number_of_points_by_return,
            x_scale_factor,
            y_scale_factor,
            z_scale_factor,
            x_offset,
            y_offset,
            z_offset,
            max_x,
            min_x,
            max_y,
            min_y,
            max_z,
            min_z,
            start_of_waveform_data_packet_record,
            evlr,
            large_file,
        })
    }

    /// Returns true if the point data are laszip compressed.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::raw::Header;
    /// let mut header = Header::default();
    /// assert!(!header.is_compressed());
    /// header.point_data_format_id = 131;
    /// assert!(header.is_compressed());
    /// ```
    pub fn is_compressed(&self) -> bool {
        self.point_data_format_id & IS_COMPRESSED_MASK != 0
    }

    /// Returns the point data format without the compression bits.
    pub fn point_data_format(&self) -> u8 {
        self.point_data_format_id & POINT_DATA_FORMAT_MASK
    }

    /// Converts this raw header into a [crate::Header], interpreting the given records.
    pub fn into_header(self, vlrs: Vec<Vlr>, evlrs: Vec<Vlr>) -> crate::Header {
        let large_file = self.large_file.unwrap_or_default();
        let mut header = crate::Header {
            file_signature: self.file_signature,
            file_source_id: self.file_source_id,
            global_encoding: GlobalEncoding(self.global_encoding),
            version: self.version,
            system_identifier: self.system_identifier,
            generating_software: self.generating_software,
            file_creation_day_of_year: self.file_creation_day_of_year,
            file_creation_year: self.file_creation_year,
            header_size: self.header_size,
            offset_to_point_data: self.offset_to_point_data,
            point_data_format: self.point_data_format(),
            point_data_record_length: self.point_data_record_length,
            legacy_number_of_point_records: self.number_of_point_records,
            legacy_number_of_points_by_return: self.number_of_points_by_return,
            number_of_point_records: large_file.number_of_point_records,
            number_of_points_by_return: large_file.number_of_points_by_return,
            transforms: Vector {
                x: Transform {
                    scale: self.x_scale_factor,
                    offset: self.x_offset,
                },
                y: Transform {
                    scale: self.y_scale_factor,
                    offset: self.y_offset,
                },
                z: Transform {
                    scale: self.z_scale_factor,
                    offset: self.z_offset,
                },
            },
            bounds: Bounds {
                min: Vector {
                    x: self.min_x,
                    y: self.min_y,
                    z: self.min_z,
                },
                max: Vector {
                    x: self.max_x,
                    y: self.max_y,
                    z: self.max_z,
                },
            },
            start_of_waveform_data_packet_record: self
                .start_of_waveform_data_packet_record
                .unwrap_or(0),
            vlrs,
            evlrs,
            ..Default::default()
        };
        header.interpret_vlrs();
        header
    }
}

impl Evlr {
    fn read_from<R: Read>(mut read: R) -> Result<Evlr> {
        Ok(Evlr {
            start_of_first_evlr: read.read_u64::<LittleEndian>()?,
            number_of_evlrs: read.read_u32::<LittleEndian>()?,
        })
    }
}

impl LargeFile {
    fn read_from<R: Read>(mut read: R) -> Result<LargeFile> {
        let number_of_point_records = read.read_u64::<LittleEndian>()?;
        let mut number_of_points_by_return = [0; 15];
        for n in number_of_points_by_return.iter_mut() {
            *n = read.read_u64::<LittleEndian>()?;
        }
        Ok(LargeFile {
            number_of_point_records,
            number_of_points_by_return,
        })
    }
}
