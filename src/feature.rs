//! Programmatically determine whether a las version supports a feature.
//!
//! The validator gates many of its checks on features rather than on raw version numbers:
//!
//! ```
//! use las_validate::feature::Waveforms;
//! use las_validate::Version;
//!
//! assert!(!Version::new(1, 2).supports::<Waveforms>());
//! assert!(Version::new(1, 4).supports::<Waveforms>());
//! ```

use crate::Version;

const MAJOR: u8 = 1;

/// A trait implemented by each feature.
pub trait Feature {
    /// Is this feature supported by this version?
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::feature::{WktCrs, Feature};
    /// use las_validate::Version;
    /// assert!(!WktCrs::is_supported_by(Version::new(1, 3)));
    /// assert!(WktCrs::is_supported_by(Version::new(1, 4)));
    /// ```
    fn is_supported_by(version: Version) -> bool;

    /// Returns the name of this feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::feature::{Waveforms, Feature};
    /// assert_eq!("Waveforms", Waveforms::name());
    /// ```
    fn name() -> &'static str;
}

macro_rules! features {
    (   $(
            $(#[$meta:meta])*
            $name:ident ($($versions:expr),+);
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug)]
            pub struct $name {}

            impl Feature for $name {
                fn is_supported_by(version: Version) -> bool {
                    [$($versions),+]
                        .into_iter()
                        .map(|minor| Version::new(MAJOR, minor))
                        .any(|v| version == v)
                }

                fn name() -> &'static str {
                    stringify!($name)
                }
            }
        )+
    }
}

features! {
    /// Is there a global encoding bit for adjusted standard GPS time (bit 0)?
    GpsStandardTime(2, 3, 4);
    /// Are there global encoding bits for waveform data packets (bits 1 and 2)?
    Waveforms(3, 4);
    /// Is there a global encoding bit for synthetic return numbers (bit 3)?
    SyntheticReturnNumbers(3, 4);
    /// Is there a global encoding bit declaring an OGC WKT coordinate reference system (bit 4)?
    WktCrs(4);
    /// Does the header carry 64-bit point counts?
    LargeFiles(4);
    /// Can the file carry extended variable length records?
    Evlrs(4);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gps_standard_time() {
        assert!(!Version::new(1, 1).supports::<GpsStandardTime>());
        assert!(Version::new(1, 2).supports::<GpsStandardTime>());
        assert!(Version::new(1, 4).supports::<GpsStandardTime>());
    }

    #[test]
    fn unknown_major_supports_nothing() {
        let version = Version::new(2, 4);
        assert!(!version.supports::<Waveforms>());
        assert!(!version.supports::<SyntheticReturnNumbers>());
        assert!(!version.supports::<LargeFiles>());
    }
}
