//! Raw structures that map directly onto the las format.
//!
//! Nothing here is checked. The raw header is read field by field and handed to the validator
//! as-is:
//!
//! ```
//! let raw_header = las_validate::raw::Header::default();
//! assert_eq!(las_validate::Version::new(0, 0), raw_header.version);
//! assert_eq!([0; 4], raw_header.file_signature);
//! ```

mod header;
mod point;
mod vlr;

pub use self::header::{Evlr, Header, LargeFile};
pub use self::point::{Flags, Point, ScanAngle, Waveform};
pub use self::vlr::Vlr;

/// The file magic number used for all las files.
pub const LASF: [u8; 4] = *b"LASF";
