//! Read las files for validation.
//!
//! A [Reader] reads the header and all variable length records up front, then streams points.
//! It is more forgiving than a reader meant for processing: the only things that stop it are data
//! it cannot read at all. Wrap your `Read` in a `BufReader`, or use [Reader::from_path] which does
//! it for you.
//!
//! The number of points is taken from the size of the point data, not from the header, since the
//! header's counts are one of the things being checked.

use crate::point::Format;
use crate::{Error, Header, Point, Result, raw};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

/// Reads the header, records, and points of an uncompressed las file.
#[derive(Debug)]
pub struct Reader<R: Read + Seek> {
    read: R,
    header: Header,
    format: Format,
    number_of_points: u64,
    index: u64,
}

/// An iterator over the points of a [Reader].
#[derive(Debug)]
pub struct PointIterator<'a, R: Read + Seek> {
    reader: &'a mut Reader<R>,
}

impl Reader<BufReader<File>> {
    /// Opens a reader for the given path, wrapping the file in a `BufReader`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Reader<BufReader<File>>> {
        File::open(path)
            .map_err(Error::from)
            .and_then(|file| Reader::new(BufReader::new(file)))
    }
}

impl<R: Read + Seek> Reader<R> {
    /// Creates a new reader.
    ///
    /// Returns an error if the header or the records cannot be read, or if the point data are
    /// compressed. A point format that cannot be decoded is not an error here, since the header
    /// can still be checked, but [Reader::read_point] will refuse to read.
    pub fn new(mut read: R) -> Result<Reader<R>> {
        let start = read.stream_position()?;
        let raw_header = raw::Header::read_from(&mut read)?;
        if raw_header.is_compressed() {
            return Err(Error::Compressed(raw_header.point_data_format_id));
        }
        let end = read.seek(SeekFrom::End(0))?;

        let _ = read.seek(SeekFrom::Start(start + u64::from(raw_header.header_size)))?;
        let mut vlrs = Vec::new();
        for _ in 0..raw_header.number_of_variable_length_records {
            vlrs.push(raw::Vlr::read_from(&mut read, false)?.into());
        }

        let offset_to_point_data = start + u64::from(raw_header.offset_to_point_data);
        let mut point_data_end = end;
        let mut evlrs = Vec::new();
        if let Some(evlr) = raw_header.evlr.filter(|evlr| evlr.number_of_evlrs > 0) {
            let start_of_first_evlr = start + evlr.start_of_first_evlr;
            if start_of_first_evlr < offset_to_point_data || start_of_first_evlr > end {
                warn!(
                    "ignoring {} evlrs at {}, which is outside of the point data",
                    evlr.number_of_evlrs, evlr.start_of_first_evlr
                );
            } else {
                point_data_end = start_of_first_evlr;
                let _ = read.seek(SeekFrom::Start(start_of_first_evlr))?;
                for _ in 0..evlr.number_of_evlrs {
                    evlrs.push(raw::Vlr::read_from(&mut read, true)?.into());
                }
            }
        }

        let format = Format::new(raw_header.point_data_format());
        let record_length = u64::from(raw_header.point_data_record_length);
        let span = point_data_end.saturating_sub(offset_to_point_data);
        let number_of_points = if record_length == 0 {
            0
        } else {
            if span % record_length != 0 {
                warn!(
                    "point data end with {} bytes that do not make a whole record",
                    span % record_length
                );
            }
            span / record_length
        };
        debug!(
            "point data span {span} bytes, {number_of_points} records of format {}",
            u8::from(format)
        );

        let header = raw_header.into_header(vlrs, evlrs);
        let _ = read.seek(SeekFrom::Start(offset_to_point_data))?;
        Ok(Reader {
            read,
            header,
            format,
            number_of_points,
            index: 0,
        })
    }

    /// Returns the header, with its records interpreted.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the number of whole point records in the point data.
    pub fn number_of_points(&self) -> u64 {
        self.number_of_points
    }

    /// Returns an error if points of this file cannot be decoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Error, Reader};
    /// # use std::io::Cursor;
    /// # let mut bytes = vec![0u8; 227];
    /// # bytes[..4].copy_from_slice(b"LASF");
    /// # bytes[24..26].copy_from_slice(&[1, 2]);
    /// # bytes[94..96].copy_from_slice(&227u16.to_le_bytes());
    /// # bytes[96..100].copy_from_slice(&227u32.to_le_bytes());
    /// # bytes[105..107].copy_from_slice(&19u16.to_le_bytes());
    /// let reader = Reader::new(Cursor::new(bytes)).unwrap();
    /// assert!(matches!(
    ///     reader.can_read_points(),
    ///     Err(Error::PointDataRecordLength { format: 0, len: 19 })
    /// ));
    /// ```
    pub fn can_read_points(&self) -> Result<()> {
        if !self.format.is_defined() {
            Err(Error::UnsupportedPointFormat {
                format: self.format.into(),
                version: self.header.version,
            })
        } else if self.header.point_data_record_length < self.format.min_record_length() {
            Err(Error::PointDataRecordLength {
                format: self.format.into(),
                len: self.header.point_data_record_length,
            })
        } else {
            Ok(())
        }
    }

    /// Reads the next point, or `None` once the point data are exhausted.
    ///
    /// A record that is cut short by the end of the stream ends the points with a warning.
    pub fn read_point(&mut self) -> Result<Option<Point>> {
        if self.index >= self.number_of_points {
            return Ok(None);
        }
        self.can_read_points()?;
        match raw::Point::read_from(
            &mut self.read,
            self.format,
            self.header.point_data_record_length,
        ) {
            Ok(point) => {
                self.index += 1;
                Ok(Some(point.into()))
            }
            Err(Error::Io(err)) if err.kind() == ErrorKind::UnexpectedEof => {
                warn!("point record {} is truncated", self.index);
                self.number_of_points = self.index;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Returns an iterator over the remaining points.
    pub fn points(&mut self) -> PointIterator<'_, R> {
        PointIterator { reader: self }
    }
}

impl<R: Read + Seek> Iterator for PointIterator<'_, R> {
    type Item = Result<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_point().transpose()
    }
}
