//! Validate [ASPRS LAS](https://www.asprs.org/committee-general/laser-las-file-format-exchange-activities.html)
//! point cloud files.
//!
//! The validator reads a file's header, its variable length records, and every point, then
//! reports everything that violates the las specification or contradicts itself as a list of
//! [Finding]s. It also works out the file's coordinate reference system from its GeoTIFF keys.
//!
//! # Validating
//!
//! Validate a file on disk:
//!
//! ```no_run
//! let findings = las_validate::validate_path("points.las").unwrap();
//! println!("{}", findings.verdict());
//! for finding in &findings {
//!     println!("{}", finding);
//! }
//! ```
//!
//! Or anything that implements `Read + Seek`, with a configured [Validator]:
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use las_validate::Validator;
//! let read = BufReader::new(File::open("points.las").unwrap());
//! let findings = Validator::new().no_crs_fail(true).validate(read).unwrap();
//! ```
//!
//! # Checking without a file
//!
//! The checks only need a [Header] and the [Inventory] of the points, so they can be run on data
//! that came from anywhere:
//!
//! ```
//! use las_validate::{Header, Inventory, Point, Validator};
//! let header = Header::default();
//! let mut inventory = Inventory::new(&header);
//! inventory.add(&Point { return_number: 1, number_of_returns: 1, ..Default::default() });
//! let findings = Validator::new().check(&header, &inventory);
//! assert!(findings.for_field("number of point records").next().is_some());
//! ```
//!
//! # Compression
//!
//! Compressed (laz) files are not supported, and reading one returns [Error::Compressed].

#![deny(
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces
)]

pub mod crs;
pub mod feature;
pub mod finding;
pub mod geokey;
pub mod header;
pub mod inventory;
pub mod point;
pub mod raw;
pub mod reader;
pub mod validator;

mod bounds;
mod color;
mod error;
mod global_encoding;
mod transform;
mod utils;
mod vector;
mod version;

pub use crate::bounds::Bounds;
pub use crate::color::{Color, ColorRange};
pub use crate::error::Error;
pub use crate::feature::Feature;
pub use crate::finding::{Finding, Findings, Severity, Verdict};
pub use crate::global_encoding::GlobalEncoding;
pub use crate::header::{Header, Vlr, WavePacketDescriptor};
pub use crate::inventory::Inventory;
pub use crate::point::Point;
pub use crate::reader::Reader;
pub use crate::transform::Transform;
pub use crate::validator::Validator;
pub use crate::vector::Vector;
pub use crate::version::Version;

use std::io::{Read, Seek};
use std::path::Path;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Validates a las file with the default [Validator].
pub fn validate<R: Read + Seek>(read: R) -> Result<Findings> {
    Validator::default().validate(read)
}

/// Validates the las file at a path with the default [Validator].
pub fn validate_path<P: AsRef<Path>>(path: P) -> Result<Findings> {
    Validator::default().validate_path(path)
}
