use crate::Result;
use byteorder::{LittleEndian, ReadBytesExt};
use log::warn;
use std::io::Read;

/// A raw variable length record, regular or extended.
#[derive(Clone, Debug, Default, PartialEq)]
#[allow(missing_docs)]
pub struct Vlr {
    pub reserved: u16,
    pub user_id: [u8; 16],
    pub record_id: u16,
    /// Two bytes for a regular vlr, eight for an extended one.
    pub record_length_after_header: u64,
    pub description: [u8; 32],
    pub data: Vec<u8>,
}

impl Vlr {
    /// Reads a raw vlr, or an extended one if `extended` is true.
    ///
    /// A record whose data are cut short by the end of the stream keeps whatever could be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las_validate::raw::Vlr;
    /// let mut bytes = vec![0; 54];
    /// bytes[20] = 2;
    /// bytes.extend_from_slice(&[1, 2]);
    /// let vlr = Vlr::read_from(Cursor::new(bytes), false).unwrap();
    /// assert_eq!(vec![1, 2], vlr.data);
    /// ```
    pub fn read_from<R: Read>(mut read: R, extended: bool) -> Result<Vlr> {
        let reserved = read.read_u16::<LittleEndian>()?;
        let mut user_id = [0; 16];
        read.read_exact(&mut user_id)?;
        let record_id = read.read_u16::<LittleEndian>()?;
        let record_length_after_header = if extended {
            read.read_u64::<LittleEndian>()?
        } else {
            u64::from(read.read_u16::<LittleEndian>()?)
        };
        let mut description = [0; 32];
        read.read_exact(&mut description)?;
        let mut data = Vec::new();
        let _ = read
            .by_ref()
            .take(record_length_after_header)
            .read_to_end(&mut data)?;
        if (data.len() as u64) < record_length_after_header {
            warn!(
                "record {record_id} should have {record_length_after_header} bytes of data but only {} could be read",
                data.len()
            );
        }
        Ok(Vlr {
            reserved,
            user_id,
            record_id,
            record_length_after_header,
            description,
            data,
        })
    }
}

impl From<Vlr> for crate::Vlr {
    fn from(raw: Vlr) -> crate::Vlr {
        crate::Vlr {
            user_id: to_string(&raw.user_id),
            record_id: raw.record_id,
            description: to_string(&raw.description),
            data: raw.data,
            declared_length: Some(raw.record_length_after_header),
        }
    }
}

fn to_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;
    use std::io::Cursor;

    fn bytes(extended: bool, data: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.write_u16::<LittleEndian>(0).unwrap();
        let mut user_id = [0; 16];
        user_id[..15].copy_from_slice(b"LASF_Projection");
        bytes.extend_from_slice(&user_id);
        bytes.write_u16::<LittleEndian>(34735).unwrap();
        if extended {
            bytes.write_u64::<LittleEndian>(data.len() as u64).unwrap();
        } else {
            bytes.write_u16::<LittleEndian>(data.len() as u16).unwrap();
        }
        let mut description = [0; 32];
        description[..4].copy_from_slice(b"keys");
        bytes.extend_from_slice(&description);
        bytes.extend_from_slice(data);
        bytes
    }

    #[test]
    fn regular() {
        let mut cursor = Cursor::new(bytes(false, &[1, 2, 3]));
        let vlr = Vlr::read_from(&mut cursor, false).unwrap();
        assert_eq!(57, cursor.position());
        let vlr = crate::Vlr::from(vlr);
        assert_eq!("LASF_Projection", vlr.user_id);
        assert_eq!(34735, vlr.record_id);
        assert_eq!("keys", vlr.description);
        assert_eq!(vec![1, 2, 3], vlr.data);
    }

    #[test]
    fn extended() {
        let mut cursor = Cursor::new(bytes(true, &[4; 10]));
        let vlr = Vlr::read_from(&mut cursor, true).unwrap();
        assert_eq!(70, cursor.position());
        assert_eq!(10, vlr.record_length_after_header);
    }

    #[test]
    fn short_data() {
        let mut bytes = bytes(false, &[1, 2, 3]);
        bytes.truncate(55);
        let vlr = Vlr::read_from(Cursor::new(bytes), false).unwrap();
        assert_eq!(3, vlr.record_length_after_header);
        assert_eq!(vec![1], vlr.data);
        let vlr = crate::Vlr::from(vlr);
        assert_eq!(3, vlr.record_length_after_header());
        assert_eq!(57, vlr.len());
    }

    #[test]
    fn truncated_header() {
        assert!(Vlr::read_from(Cursor::new(vec![0; 20]), false).is_err());
    }
}
