//! Raw point records and the bit fields they carry.

use crate::point::Format;
use crate::{Color, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read};

/// A raw point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// The quantized coordinates.
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
    #[allow(missing_docs)]
    pub z: i32,
    /// The integer representation of the pulse return magnitude.
    pub intensity: u16,
    /// Return number, number of returns, and the other bit fields.
    pub flags: Flags,
    /// Used at the user's discretion.
    pub user_data: u8,
    /// The scan angle, as a rank or as a scaled value.
    pub scan_angle: ScanAngle,
    /// The file from which this point originated.
    pub point_source_id: u16,
    /// **Point formats 1, 3-10**: the time at which the point was acquired.
    pub gps_time: Option<f64>,
    /// **Point formats 2, 3, 5, 7, 8, 10**: the point's color.
    pub color: Option<Color>,
    /// **Point formats 8 and 10**: the near infrared channel.
    pub nir: Option<u16>,
    /// **Point formats 4, 5, 9, 10**: the waveform packet.
    pub waveform: Option<Waveform>,
}

/// The bit fields of a point, two bytes in the legacy formats and three in the extended ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Flags {
    /// Bit fields in the first byte, classification in the second.
    TwoByte(u8, u8),
    /// Return bit fields in the first byte, flags in the second, classification in the third.
    ThreeByte(u8, u8, u8),
}

/// The scan angle, which changed representation in the extended formats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScanAngle {
    /// Whole degrees, for formats 0 through 5.
    Rank(i8),
    /// Increments of 0.006 degrees, for formats 6 through 10.
    Scaled(i16),
}

/// A point's reference into its waveform data.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Waveform {
    /// Index of the wave packet descriptor, zero means no waveform.
    pub wave_packet_descriptor_index: u8,
    /// Byte offset into the waveform data.
    pub byte_offset_to_waveform_data: u64,
    /// Size of the waveform packet, in bytes.
    pub waveform_packet_size_in_bytes: u32,
    /// Offset in picoseconds from the first digitized value to the location of this return.
    pub return_point_waveform_location: f32,
    /// Parametric line equation parameters.
    pub x_t: f32,
    #[allow(missing_docs)]
    pub y_t: f32,
    #[allow(missing_docs)]
    pub z_t: f32,
}

impl Point {
    /// Reads a raw point of the given format.
    ///
    /// Extra bytes past the end of the format's fields are skipped, so the reader ends up at the
    /// start of the next record.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las_validate::point::Format;
    /// use las_validate::raw::Point;
    /// let mut bytes = vec![0; 20];
    /// bytes[14] = 0b0001_0001;
    /// let point = Point::read_from(Cursor::new(bytes), Format::new(0), 20).unwrap();
    /// assert_eq!(1, point.flags.return_number());
    /// assert_eq!(2, point.flags.number_of_returns());
    /// ```
    pub fn read_from<R: Read>(mut read: R, format: Format, record_length: u16) -> Result<Point> {
        let x = read.read_i32::<LittleEndian>()?;
        let y = read.read_i32::<LittleEndian>()?;
        let z = read.read_i32::<LittleEndian>()?;
        let intensity = read.read_u16::<LittleEndian>()?;
        let (flags, user_data, scan_angle) = if format.is_extended() {
            let flags = Flags::ThreeByte(read.read_u8()?, read.read_u8()?, read.read_u8()?);
            let user_data = read.read_u8()?;
            let scan_angle = ScanAngle::Scaled(read.read_i16::<LittleEndian>()?);
            (flags, user_data, scan_angle)
        } else {
            let flags = Flags::TwoByte(read.read_u8()?, read.read_u8()?);
            let scan_angle = ScanAngle::Rank(read.read_i8()?);
            let user_data = read.read_u8()?;
            (flags, user_data, scan_angle)
        };
        let point_source_id = read.read_u16::<LittleEndian>()?;
        let gps_time = if format.has_gps_time() {
            Some(read.read_f64::<LittleEndian>()?)
        } else {
            None
        };
        let color = if format.has_color() {
            let red = read.read_u16::<LittleEndian>()?;
            let green = read.read_u16::<LittleEndian>()?;
            let blue = read.read_u16::<LittleEndian>()?;
            Some(Color::new(red, green, blue))
        } else {
            None
        };
        let nir = if format.has_nir() {
            Some(read.read_u16::<LittleEndian>()?)
        } else {
            None
        };
        let waveform = if format.has_waveform() {
            Some(Waveform::read_from(&mut read)?)
        } else {
            None
        };
        let extra_bytes = record_length.saturating_sub(format.min_record_length());
        if extra_bytes > 0 {
            let skipped = io::copy(
                &mut read.by_ref().take(u64::from(extra_bytes)),
                &mut io::sink(),
            )?;
            if skipped < u64::from(extra_bytes) {
                return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
            }
        }
        Ok(Point {
            x,
            y,
            z,
            intensity,
            flags,
            user_data,
            scan_angle,
            point_source_id,
            gps_time,
            color,
            nir,
            waveform,
        })
    }
}

impl From<Point> for crate::Point {
    fn from(raw: Point) -> crate::Point {
        let (scan_angle_rank, scan_angle) = match raw.scan_angle {
            ScanAngle::Rank(rank) => (rank, 0),
            ScanAngle::Scaled(scaled) => (0, scaled),
        };
        crate::Point {
            x: raw.x,
            y: raw.y,
            z: raw.z,
            intensity: raw.intensity,
            return_number: raw.flags.return_number(),
            number_of_returns: raw.flags.number_of_returns(),
            scan_angle_rank,
            scan_angle,
            point_source_id: raw.point_source_id,
            gps_time: raw.gps_time,
            color: raw.color,
            wave_packet_descriptor_index: raw
                .waveform
                .map(|waveform| waveform.wave_packet_descriptor_index)
                .unwrap_or(0),
        }
    }
}

impl Flags {
    /// Returns the return number, three bits wide in the legacy formats and four in the extended.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::raw::Flags;
    /// assert_eq!(5, Flags::TwoByte(0b1111_1101, 0).return_number());
    /// assert_eq!(13, Flags::ThreeByte(0b1111_1101, 0, 0).return_number());
    /// ```
    pub fn return_number(&self) -> u8 {
        match *self {
            Flags::TwoByte(a, _) => a & 0b0000_0111,
            Flags::ThreeByte(a, _, _) => a & 0b0000_1111,
        }
    }

    /// Returns the number of returns of the pulse.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::raw::Flags;
    /// assert_eq!(7, Flags::TwoByte(0b1011_1000, 0).number_of_returns());
    /// assert_eq!(11, Flags::ThreeByte(0b1011_0000, 0, 0).number_of_returns());
    /// ```
    pub fn number_of_returns(&self) -> u8 {
        match *self {
            Flags::TwoByte(a, _) => (a >> 3) & 0b0000_0111,
            Flags::ThreeByte(a, _, _) => (a >> 4) & 0b0000_1111,
        }
    }
}

impl Default for Flags {
    fn default() -> Flags {
        Flags::TwoByte(0, 0)
    }
}

impl Default for ScanAngle {
    fn default() -> ScanAngle {
        ScanAngle::Rank(0)
    }
}

impl Waveform {
    fn read_from<R: Read>(mut read: R) -> Result<Waveform> {
        Ok(Waveform {
            wave_packet_descriptor_index: read.read_u8()?,
            byte_offset_to_waveform_data: read.read_u64::<LittleEndian>()?,
            waveform_packet_size_in_bytes: read.read_u32::<LittleEndian>()?,
            return_point_waveform_location: read.read_f32::<LittleEndian>()?,
            x_t: read.read_f32::<LittleEndian>()?,
            y_t: read.read_f32::<LittleEndian>()?,
            z_t: read.read_f32::<LittleEndian>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;
    use std::io::Cursor;

    fn core(bytes: &mut Vec<u8>) {
        bytes.write_i32::<LittleEndian>(-1).unwrap();
        bytes.write_i32::<LittleEndian>(2).unwrap();
        bytes.write_i32::<LittleEndian>(3).unwrap();
        bytes.write_u16::<LittleEndian>(40).unwrap();
    }

    #[test]
    fn legacy_layout() {
        let mut bytes = Vec::new();
        core(&mut bytes);
        bytes.extend_from_slice(&[0b0001_0010, 2]);
        bytes.write_i8(-12).unwrap();
        bytes.write_u8(7).unwrap();
        bytes.write_u16::<LittleEndian>(99).unwrap();
        bytes.write_f64::<LittleEndian>(1.5).unwrap();
        for value in [1, 2, 3] {
            bytes.write_u16::<LittleEndian>(value).unwrap();
        }
        assert_eq!(34, bytes.len());
        let point = Point::read_from(Cursor::new(bytes), Format::new(3), 34).unwrap();
        assert_eq!(ScanAngle::Rank(-12), point.scan_angle);
        assert_eq!(7, point.user_data);
        let point = crate::Point::from(point);
        assert_eq!(-1, point.x);
        assert_eq!(40, point.intensity);
        assert_eq!(2, point.return_number);
        assert_eq!(2, point.number_of_returns);
        assert_eq!(-12, point.scan_angle_rank);
        assert_eq!(99, point.point_source_id);
        assert_eq!(Some(1.5), point.gps_time);
        assert_eq!(Some(Color::new(1, 2, 3)), point.color);
    }

    #[test]
    fn extended_layout() {
        let mut bytes = Vec::new();
        core(&mut bytes);
        bytes.extend_from_slice(&[0b1111_1001, 0, 2]);
        bytes.write_u8(7).unwrap();
        bytes.write_i16::<LittleEndian>(-1000).unwrap();
        bytes.write_u16::<LittleEndian>(99).unwrap();
        bytes.write_f64::<LittleEndian>(2.5).unwrap();
        for value in [1, 2, 3, 4] {
            bytes.write_u16::<LittleEndian>(value).unwrap();
        }
        bytes.write_u8(1).unwrap();
        bytes.write_u64::<LittleEndian>(0).unwrap();
        bytes.write_u32::<LittleEndian>(256).unwrap();
        for _ in 0..4 {
            bytes.write_f32::<LittleEndian>(0.).unwrap();
        }
        assert_eq!(67, bytes.len());
        let point = Point::read_from(Cursor::new(bytes), Format::new(10), 67).unwrap();
        assert_eq!(7, point.user_data);
        assert_eq!(ScanAngle::Scaled(-1000), point.scan_angle);
        assert_eq!(Some(4), point.nir);
        assert_eq!(256, point.waveform.unwrap().waveform_packet_size_in_bytes);
        let point = crate::Point::from(point);
        assert_eq!(9, point.return_number);
        assert_eq!(15, point.number_of_returns);
        assert_eq!(-1000, point.scan_angle);
        assert_eq!(1, point.wave_packet_descriptor_index);
    }

    #[test]
    fn extra_bytes_are_skipped() {
        let mut bytes = vec![0; 24];
        bytes.extend_from_slice(&[1; 20]);
        let mut cursor = Cursor::new(bytes);
        let _ = Point::read_from(&mut cursor, Format::new(0), 24).unwrap();
        assert_eq!(24, cursor.position());
        let point = Point::read_from(&mut cursor, Format::new(0), 24);
        assert!(point.is_err());
    }
}
