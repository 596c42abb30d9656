//! Global properties about LAS data.

use std::fmt;

const GPS_STANDARD_TIME: u16 = 1;
const WAVEFORMS_INTERNAL: u16 = 2;
const WAVEFORMS_EXTERNAL: u16 = 4;
const SYNTHETIC_RETURN_NUMBERS: u16 = 8;
const WKT_CRS: u16 = 16;

/// A typed view over the global encoding bit field of the header.
///
/// | Bit | Meaning | las versions |
/// | --- | ------- | ------------ |
/// | 0 | GPS time is adjusted standard GPS time, not GPS week time | 1.2 and above |
/// | 1 | Waveform data packets are internal (deprecated in 1.4) | 1.3 and above |
/// | 2 | Waveform data packets are external | 1.3 and above |
/// | 3 | Return numbers are synthetic | 1.3 and above |
/// | 4 | The coordinate reference system is OGC WKT | 1.4 |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlobalEncoding(pub u16);

impl GlobalEncoding {
    /// Is the GPS time of the points adjusted standard GPS time?
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::GlobalEncoding;
    /// assert!(!GlobalEncoding(0).is_gps_standard_time());
    /// assert!(GlobalEncoding(1).is_gps_standard_time());
    /// ```
    pub fn is_gps_standard_time(&self) -> bool {
        self.0 & GPS_STANDARD_TIME != 0
    }

    /// Are the waveform data packets stored inside the file?
    pub fn has_internal_waveforms(&self) -> bool {
        self.0 & WAVEFORMS_INTERNAL != 0
    }

    /// Are the waveform data packets stored in an auxiliary file?
    pub fn has_external_waveforms(&self) -> bool {
        self.0 & WAVEFORMS_EXTERNAL != 0
    }

    /// Were the return numbers generated synthetically?
    pub fn has_synthetic_return_numbers(&self) -> bool {
        self.0 & SYNTHETIC_RETURN_NUMBERS != 0
    }

    /// Is the coordinate reference system stored as OGC WKT?
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::GlobalEncoding;
    /// assert!(GlobalEncoding(17).is_wkt_crs());
    /// assert!(!GlobalEncoding(15).is_wkt_crs());
    /// ```
    pub fn is_wkt_crs(&self) -> bool {
        self.0 & WKT_CRS != 0
    }
}

impl From<u16> for GlobalEncoding {
    fn from(n: u16) -> GlobalEncoding {
        GlobalEncoding(n)
    }
}

impl fmt::Display for GlobalEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits() {
        let encoding = GlobalEncoding(2 | 8);
        assert!(!encoding.is_gps_standard_time());
        assert!(encoding.has_internal_waveforms());
        assert!(!encoding.has_external_waveforms());
        assert!(encoding.has_synthetic_return_numbers());
        assert!(!encoding.is_wkt_crs());
    }
}
