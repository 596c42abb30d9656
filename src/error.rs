use crate::Version;
use thiserror::Error;

/// Crate-specific error enum.
///
/// Validation problems are never errors, they are reported as
/// [Finding](crate::Finding)s. Errors are reserved for data that cannot be read at all and for
/// projection parameters that cannot describe a projection.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The point data is compressed, which is not supported.
    #[error("compressed (laz) point data is not supported, point data format id is {0}")]
    Compressed(u8),

    /// The geokey directory is too short or its header is inconsistent.
    #[error("the geokey directory is malformed: {0}")]
    InvalidGeoKeyDirectory(&'static str),

    /// A geokey points into a parameter store that does not exist or is too short.
    #[error("geokey {key_id} references location {location} at index {index}, which does not exist")]
    MissingGeoKeyParameter {
        /// The key id.
        key_id: u16,
        /// The TIFF tag location of the referenced store.
        location: u16,
        /// The index into that store.
        index: u16,
    },

    /// A projection parameter is out of range.
    #[error("projection parameter {name} cannot be {value}")]
    InvalidProjectionParameter {
        /// The parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The UTM zone is not between 1 and 60.
    #[error("utm zone must be between 1 and 60, not {0}")]
    InvalidUtmZone(i32),

    /// The UTM zone designator could not be parsed.
    #[error("invalid utm zone designator: {0}")]
    InvalidUtmDesignator(String),

    /// Wrapper around `std::io::Error`.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The point record length is smaller than the format requires, so points cannot be read.
    #[error("point data record length {len} is too short for point format {format}")]
    PointDataRecordLength {
        /// The point format.
        format: u8,
        /// The record length.
        len: u16,
    },

    /// The point format is unknown, so points cannot be decoded.
    #[error("points of format {format} cannot be decoded in las {version}")]
    UnsupportedPointFormat {
        /// The point format.
        format: u8,
        /// The las version.
        version: Version,
    },
}
