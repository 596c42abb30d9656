use crate::feature::Feature;
use std::fmt;

const BASE_HEADER_SIZE: u16 = 227;

/// LAS version.
///
/// Most checks depend on the version, either directly through [Version::min_header_size] and
/// [Version::max_point_format] or through a [Feature].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    /// The major version.
    ///
    /// Should always be 1.
    pub major: u8,
    /// The minor version.
    pub minor: u8,
}

impl Version {
    /// Creates a new version.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Version;
    /// let version = Version::new(1, 2);
    /// ```
    pub fn new(major: u8, minor: u8) -> Version {
        Version { major, minor }
    }

    /// Is this version a 1.x version whose minor number is at least `minor`?
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Version;
    /// assert!(Version::new(1, 4).is_at_least(3));
    /// assert!(!Version::new(1, 2).is_at_least(3));
    /// assert!(!Version::new(2, 4).is_at_least(3));
    /// ```
    pub fn is_at_least(&self, minor: u8) -> bool {
        self.major == 1 && self.minor >= minor
    }

    /// Is this a 1.x version whose minor number is at most `minor`?
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Version;
    /// assert!(Version::new(1, 1).is_at_most(1));
    /// assert!(!Version::new(1, 2).is_at_most(1));
    /// ```
    pub fn is_at_most(&self, minor: u8) -> bool {
        self.major == 1 && self.minor <= minor
    }

    /// Does this version support the feature?
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::Version;
    /// use las_validate::feature::Waveforms;
    /// assert!(Version::new(1, 3).supports::<Waveforms>());
    /// assert!(!Version::new(1, 2).supports::<Waveforms>());
    /// ```
    pub fn supports<F: Feature>(&self) -> bool {
        F::is_supported_by(*self)
    }

    /// The smallest legal header size for this version.
    ///
    /// Las 1.3 adds the start of the waveform data packet record, and las 1.4 adds evlrs and the
    /// 64-bit point counts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Version;
    /// assert_eq!(227, Version::new(1, 2).min_header_size());
    /// assert_eq!(235, Version::new(1, 3).min_header_size());
    /// assert_eq!(375, Version::new(1, 4).min_header_size());
    /// ```
    pub fn min_header_size(&self) -> u16 {
        let mut size = BASE_HEADER_SIZE;
        if self.is_at_least(3) {
            size += 8;
        }
        if self.is_at_least(4) {
            size += 40;
        }
        size
    }

    /// The largest point data format defined by this version.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Version;
    /// assert_eq!(1, Version::new(1, 1).max_point_format());
    /// assert_eq!(3, Version::new(1, 2).max_point_format());
    /// assert_eq!(5, Version::new(1, 3).max_point_format());
    /// assert_eq!(10, Version::new(1, 4).max_point_format());
    /// ```
    pub fn max_point_format(&self) -> u8 {
        if self.major != 1 {
            return 1;
        }
        match self.minor {
            2 => 3,
            3 => 5,
            4 => 10,
            _ => 1,
        }
    }
}

impl From<(u8, u8)> for Version {
    fn from((major, minor): (u8, u8)) -> Version {
        Version { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_header_size_grows() {
        assert_eq!(227, Version::new(1, 0).min_header_size());
        assert_eq!(227, Version::new(1, 1).min_header_size());
        assert_eq!(235, Version::new(1, 3).min_header_size());
        assert_eq!(375, Version::new(1, 4).min_header_size());
        assert_eq!(227, Version::new(2, 4).min_header_size());
    }

    #[test]
    fn max_point_format() {
        assert_eq!(1, Version::new(1, 0).max_point_format());
        assert_eq!(3, Version::new(1, 2).max_point_format());
        assert_eq!(10, Version::new(1, 4).max_point_format());
        assert_eq!(1, Version::new(1, 5).max_point_format());
        assert_eq!(1, Version::new(2, 4).max_point_format());
    }

    #[test]
    fn ordering() {
        assert!(Version::new(1, 2) < Version::new(1, 4));
        assert_eq!("1.4", Version::new(1, 4).to_string());
    }
}
