//! Point records and point data formats.

use crate::Color;

const MIN_RECORD_LENGTHS: [u16; 11] = [20, 28, 26, 34, 57, 63, 30, 36, 38, 59, 67];

/// The smallest point data format id that uses the extended (las 1.4) layout.
pub const FIRST_EXTENDED_FORMAT: u8 = 6;

/// Point data record format.
///
/// Unlike the header's raw byte, a format knows which optional fields its records carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Format(u8);

impl Format {
    /// Creates a format from its id.
    pub fn new(n: u8) -> Format {
        Format(n)
    }

    /// Is this one of the formats defined through las 1.4 (0 to 10)?
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::point::Format;
    /// assert!(Format::new(10).is_defined());
    /// assert!(!Format::new(11).is_defined());
    /// ```
    pub fn is_defined(&self) -> bool {
        self.0 <= 10
    }

    /// Does this point format have a gps_time field?
    ///
    /// Every format except 0 and 2 does.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::point::Format;
    /// assert!(!Format::new(0).has_gps_time());
    /// assert!(Format::new(1).has_gps_time());
    /// assert!(!Format::new(2).has_gps_time());
    /// assert!(Format::new(6).has_gps_time());
    /// ```
    pub fn has_gps_time(&self) -> bool {
        !matches!(self.0, 0 | 2)
    }

    /// Does this point format have color fields?
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::point::Format;
    /// assert!(Format::new(2).has_color());
    /// assert!(!Format::new(4).has_color());
    /// assert!(Format::new(10).has_color());
    /// ```
    pub fn has_color(&self) -> bool {
        matches!(self.0, 2 | 3 | 5 | 7 | 8 | 10)
    }

    /// Does this point format have a near infrared channel?
    pub fn has_nir(&self) -> bool {
        matches!(self.0, 8 | 10)
    }

    /// Does this point format reference waveform data packets?
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::point::Format;
    /// assert!(Format::new(4).has_waveform());
    /// assert!(Format::new(9).has_waveform());
    /// assert!(!Format::new(6).has_waveform());
    /// ```
    pub fn has_waveform(&self) -> bool {
        matches!(self.0, 4 | 5 | 9 | 10)
    }

    /// Does this point format use the extended layout of las 1.4?
    ///
    /// Extended formats have four bits for return numbers and a scaled 16-bit scan angle.
    pub fn is_extended(&self) -> bool {
        self.0 >= FIRST_EXTENDED_FORMAT
    }

    /// The smallest legal point data record length for this format.
    ///
    /// Unknown formats get the length of format 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::point::Format;
    /// assert_eq!(20, Format::new(0).min_record_length());
    /// assert_eq!(67, Format::new(10).min_record_length());
    /// assert_eq!(20, Format::new(42).min_record_length());
    /// ```
    pub fn min_record_length(&self) -> u16 {
        MIN_RECORD_LENGTHS
            .get(usize::from(self.0))
            .copied()
            .unwrap_or(MIN_RECORD_LENGTHS[0])
    }
}

impl From<u8> for Format {
    fn from(n: u8) -> Format {
        Format(n)
    }
}

impl From<Format> for u8 {
    fn from(format: Format) -> u8 {
        format.0
    }
}

/// A point record, as far as validation is concerned.
///
/// Coordinates are kept in their quantized integer form, since that is what the inventory and
/// the bounding box check operate on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// The quantized x coordinate.
    pub x: i32,
    /// The quantized y coordinate.
    pub y: i32,
    /// The quantized z coordinate.
    pub z: i32,
    /// The integer representation of the pulse return magnitude.
    pub intensity: u16,
    /// The pulse return number for a given output pulse.
    ///
    /// Three bits in the legacy formats, four bits in the extended ones.
    pub return_number: u8,
    /// The total number of returns for a given pulse.
    pub number_of_returns: u8,
    /// The scan angle rank in degrees, for formats 0 through 5.
    pub scan_angle_rank: i8,
    /// The scan angle in increments of 0.006 degrees, for formats 6 through 10.
    pub scan_angle: i16,
    /// The file from which this point originated.
    pub point_source_id: u16,
    /// The time at which the point was acquired.
    pub gps_time: Option<f64>,
    /// This point's color.
    pub color: Option<Color>,
    /// Index into the header's wave packet descriptors, zero if the point has no waveform.
    pub wave_packet_descriptor_index: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gps_time_formats() {
        let with: Vec<u8> = (0..=10)
            .filter(|&n| Format::new(n).has_gps_time())
            .collect();
        assert_eq!(vec![1, 3, 4, 5, 6, 7, 8, 9, 10], with);
    }

    #[test]
    fn color_formats() {
        let with: Vec<u8> = (0..=10).filter(|&n| Format::new(n).has_color()).collect();
        assert_eq!(vec![2, 3, 5, 7, 8, 10], with);
    }

    #[test]
    fn min_record_lengths() {
        assert_eq!(28, Format::new(1).min_record_length());
        assert_eq!(34, Format::new(3).min_record_length());
        assert_eq!(57, Format::new(4).min_record_length());
        assert_eq!(63, Format::new(5).min_record_length());
        assert_eq!(30, Format::new(6).min_record_length());
        assert_eq!(38, Format::new(8).min_record_length());
        assert_eq!(59, Format::new(9).min_record_length());
    }

    #[test]
    fn extended() {
        assert!(!Format::new(5).is_extended());
        assert!(Format::new(6).is_extended());
    }
}
