use byteorder::{LittleEndian, WriteBytesExt};
use chrono::NaiveDate;
use las_validate::geokey::{GEO_KEY_DIRECTORY_RECORD_ID, GT_MODEL_TYPE, PROJECTED_CS_TYPE};
use las_validate::header::OGC_WKT_RECORD_ID;
use las_validate::{
    Bounds, Error, Findings, GlobalEncoding, Header, Point, Reader, Validator, Vector,
    Verdict, Version,
};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

struct Record {
    user_id: &'static str,
    record_id: u16,
    data: Vec<u8>,
}

fn validator() -> Validator {
    Validator::new().today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
}

fn geokey_directory(code: u16) -> Record {
    let data = [1, 1, 0, 2, GT_MODEL_TYPE, 0, 1, 1, PROJECTED_CS_TYPE, 0, 1, code]
        .iter()
        .flat_map(|n: &u16| n.to_le_bytes())
        .collect();
    Record {
        user_id: "LASF_Projection",
        record_id: GEO_KEY_DIRECTORY_RECORD_ID,
        data,
    }
}

fn ogc_wkt(wkt: &str) -> Record {
    let mut data = wkt.as_bytes().to_vec();
    data.push(0);
    Record {
        user_id: "LASF_Projection",
        record_id: OGC_WKT_RECORD_ID,
        data,
    }
}

fn header() -> Header {
    Header {
        legacy_number_of_point_records: 2,
        legacy_number_of_points_by_return: [1, 1, 0, 0, 0],
        bounds: Bounds {
            min: Vector {
                x: 0.,
                y: 0.,
                z: 0.,
            },
            max: Vector {
                x: 10.,
                y: 10.,
                z: 10.,
            },
        },
        ..Default::default()
    }
}

fn points() -> Vec<Point> {
    vec![
        Point {
            x: 1,
            y: 2,
            z: 3,
            intensity: 10,
            return_number: 1,
            number_of_returns: 2,
            scan_angle_rank: -5,
            scan_angle: -100,
            point_source_id: 1,
            gps_time: Some(1.),
            ..Default::default()
        },
        Point {
            x: 9_999,
            y: 5_003,
            z: 7_007,
            intensity: 20,
            return_number: 2,
            number_of_returns: 2,
            scan_angle_rank: 5,
            scan_angle: 100,
            point_source_id: 2,
            gps_time: Some(2.),
            ..Default::default()
        },
    ]
}

fn write_string(bytes: &mut Vec<u8>, s: &str, len: usize) {
    let mut field = vec![0; len];
    field[..s.len()].copy_from_slice(s.as_bytes());
    bytes.extend_from_slice(&field);
}

fn write_point(bytes: &mut Vec<u8>, point: &Point, header: &Header) {
    let start = bytes.len();
    bytes.write_i32::<LittleEndian>(point.x).unwrap();
    bytes.write_i32::<LittleEndian>(point.y).unwrap();
    bytes.write_i32::<LittleEndian>(point.z).unwrap();
    bytes.write_u16::<LittleEndian>(point.intensity).unwrap();
    let format = header.format();
    if format.is_extended() {
        bytes
            .write_u8(point.return_number | (point.number_of_returns << 4))
            .unwrap();
        bytes.extend_from_slice(&[0, 1, 0]);
        bytes.write_i16::<LittleEndian>(point.scan_angle).unwrap();
    } else {
        bytes
            .write_u8(point.return_number | (point.number_of_returns << 3))
            .unwrap();
        bytes.write_u8(1).unwrap();
        bytes.write_i8(point.scan_angle_rank).unwrap();
        bytes.write_u8(0).unwrap();
    }
    bytes.write_u16::<LittleEndian>(point.point_source_id).unwrap();
    if format.has_gps_time() {
        bytes
            .write_f64::<LittleEndian>(point.gps_time.unwrap_or_default())
            .unwrap();
    }
    let len = start + usize::from(header.point_data_record_length);
    bytes.resize(len, 0);
}

/// Writes a las file, with the offset to point data computed from the vlrs and evlrs placed after
/// the points.
fn las(header: &Header, vlrs: &[Record], evlrs: &[Record], points: &[Point]) -> Vec<u8> {
    let version = header.version;
    let offset_to_point_data = u32::from(header.header_size)
        + vlrs.iter().map(|r| 54 + r.data.len() as u32).sum::<u32>();
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&header.file_signature);
    bytes.write_u16::<LittleEndian>(header.file_source_id).unwrap();
    bytes.write_u16::<LittleEndian>(header.global_encoding.0).unwrap();
    bytes.extend_from_slice(&[0; 16]);
    bytes.extend_from_slice(&[version.major, version.minor]);
    bytes.extend_from_slice(&header.system_identifier);
    bytes.extend_from_slice(&header.generating_software);
    bytes.write_u16::<LittleEndian>(header.file_creation_day_of_year).unwrap();
    bytes.write_u16::<LittleEndian>(header.file_creation_year).unwrap();
    bytes.write_u16::<LittleEndian>(header.header_size).unwrap();
    bytes.write_u32::<LittleEndian>(offset_to_point_data).unwrap();
    bytes.write_u32::<LittleEndian>(vlrs.len() as u32).unwrap();
    bytes.write_u8(header.point_data_format).unwrap();
    bytes.write_u16::<LittleEndian>(header.point_data_record_length).unwrap();
    bytes.write_u32::<LittleEndian>(header.legacy_number_of_point_records).unwrap();
    for n in header.legacy_number_of_points_by_return {
        bytes.write_u32::<LittleEndian>(n).unwrap();
    }
    for (_, transform) in header.transforms.labelled() {
        bytes.write_f64::<LittleEndian>(transform.scale).unwrap();
    }
    for (_, transform) in header.transforms.labelled() {
        bytes.write_f64::<LittleEndian>(transform.offset).unwrap();
    }
    let bounds = header.bounds;
    for (max, min) in [
        (bounds.max.x, bounds.min.x),
        (bounds.max.y, bounds.min.y),
        (bounds.max.z, bounds.min.z),
    ] {
        bytes.write_f64::<LittleEndian>(max).unwrap();
        bytes.write_f64::<LittleEndian>(min).unwrap();
    }
    let start_of_first_evlr_position = if version.minor >= 3 {
        bytes
            .write_u64::<LittleEndian>(header.start_of_waveform_data_packet_record)
            .unwrap();
        if version.minor >= 4 {
            let position = bytes.len();
            bytes.write_u64::<LittleEndian>(0).unwrap();
            bytes.write_u32::<LittleEndian>(evlrs.len() as u32).unwrap();
            bytes.write_u64::<LittleEndian>(header.number_of_point_records).unwrap();
            for n in header.number_of_points_by_return {
                bytes.write_u64::<LittleEndian>(n).unwrap();
            }
            Some(position)
        } else {
            None
        }
    } else {
        None
    };
    bytes.resize(usize::from(header.header_size), 0);
    for vlr in vlrs {
        bytes.write_u16::<LittleEndian>(0).unwrap();
        write_string(&mut bytes, vlr.user_id, 16);
        bytes.write_u16::<LittleEndian>(vlr.record_id).unwrap();
        bytes.write_u16::<LittleEndian>(vlr.data.len() as u16).unwrap();
        write_string(&mut bytes, "", 32);
        bytes.extend_from_slice(&vlr.data);
    }
    assert_eq!(offset_to_point_data as usize, bytes.len());
    for point in points {
        write_point(&mut bytes, point, header);
    }
    if let Some(position) = start_of_first_evlr_position.filter(|_| !evlrs.is_empty()) {
        let start = (bytes.len() as u64).to_le_bytes();
        bytes[position..position + 8].copy_from_slice(&start);
        for evlr in evlrs {
            bytes.write_u16::<LittleEndian>(0).unwrap();
            write_string(&mut bytes, evlr.user_id, 16);
            bytes.write_u16::<LittleEndian>(evlr.record_id).unwrap();
            bytes.write_u64::<LittleEndian>(evlr.data.len() as u64).unwrap();
            write_string(&mut bytes, "", 32);
            bytes.extend_from_slice(&evlr.data);
        }
    }
    bytes
}

fn validate(bytes: Vec<u8>) -> Findings {
    validator().validate(Cursor::new(bytes)).unwrap()
}

fn messages<'a>(findings: &'a Findings, field: &'a str) -> Vec<&'a str> {
    findings
        .for_field(field)
        .map(|f| f.message.as_str())
        .collect()
}

#[test]
fn clean_file() {
    let findings = validate(las(&header(), &[geokey_directory(32617)], &[], &points()));
    assert!(findings.is_empty(), "{:?}", findings);
    assert_eq!(Verdict::Pass, findings.verdict());
    assert_eq!("UTM 17 northern hemisphere", findings.crs_description);
}

#[test]
fn reader_sees_the_file() {
    let bytes = las(&header(), &[geokey_directory(32617)], &[], &points());
    let mut reader = Reader::new(Cursor::new(bytes)).unwrap();
    assert_eq!(305, reader.header().offset_to_point_data);
    assert!(reader.header().geokeys.is_some());
    let read = reader.points().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(2, read.len());
    for (expected, point) in points().iter().zip(&read) {
        assert_eq!((expected.x, expected.y, expected.z), (point.x, point.y, point.z));
        assert_eq!(expected.return_number, point.return_number);
        assert_eq!(expected.number_of_returns, point.number_of_returns);
        assert_eq!(expected.scan_angle_rank, point.scan_angle_rank);
        assert_eq!(expected.point_source_id, point.point_source_id);
        assert_eq!(None, point.gps_time);
    }
}

#[test]
fn header_counts_are_checked_against_the_points() {
    let header = Header {
        legacy_number_of_point_records: 3,
        legacy_number_of_points_by_return: [2, 1, 0, 0, 0],
        ..header()
    };
    let findings = validate(las(&header, &[geokey_directory(32617)], &[], &points()));
    assert_eq!(Verdict::Fail, findings.verdict());
    assert_eq!(
        vec!["there are only 2 point records and not 3"],
        messages(&findings, "number of point records")
    );
    assert_eq!(
        vec!["the number of 1st returns is 1 and not 2"],
        messages(&findings, "number of points by return[0]")
    );
}

#[test]
fn missing_crs() {
    let bytes = las(&header(), &[], &[], &points());
    let findings = validate(bytes.clone());
    assert_eq!(Verdict::Fail, findings.verdict());
    assert_eq!(
        vec!["file does not specify a Coordinate Reference System with GEOTIFF tags"],
        messages(&findings, "CRS")
    );
    assert_eq!("not valid or not specified", findings.crs_description);

    let findings = validator()
        .no_crs_fail(true)
        .validate(Cursor::new(bytes))
        .unwrap();
    assert_eq!(Verdict::Warning, findings.verdict());
}

#[test]
fn invalid_epsg_code() {
    let findings = validate(las(&header(), &[geokey_directory(1000)], &[], &points()));
    assert_eq!(vec!["1000 is not a valid EPSG code"], messages(&findings, "CRS"));
    let findings = validator()
        .no_crs_fail(true)
        .validate(Cursor::new(las(&header(), &[geokey_directory(1000)], &[], &points())))
        .unwrap();
    assert_eq!(Verdict::Fail, findings.verdict());
}

#[test]
fn las_1_4_with_wkt_evlr() {
    let header = Header {
        version: Version::new(1, 4),
        global_encoding: GlobalEncoding(16),
        header_size: 375,
        point_data_format: 6,
        point_data_record_length: 30,
        legacy_number_of_point_records: 0,
        legacy_number_of_points_by_return: [0; 5],
        number_of_point_records: 2,
        number_of_points_by_return: [1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ..header()
    };
    let bytes = las(
        &header,
        &[],
        &[ogc_wkt("PROJCS[\"WGS 84 / UTM zone 17N\"]")],
        &points(),
    );
    let reader = Reader::new(Cursor::new(bytes.clone())).unwrap();
    assert_eq!(2, reader.number_of_points());
    assert_eq!(1, reader.header().evlrs.len());

    let findings = validate(bytes);
    assert_eq!(Verdict::Warning, findings.verdict(), "{:?}", findings);
    assert_eq!(
        vec!["OGC WKT string is present but its correctness is not checked"],
        messages(&findings, "CRS")
    );
}

#[test]
fn compressed() {
    let header = Header {
        point_data_format: 0x80,
        ..header()
    };
    let bytes = las(&header, &[], &[], &[]);
    assert!(matches!(
        validator().validate(Cursor::new(bytes)),
        Err(Error::Compressed(0x80))
    ));
}

#[test]
fn undecodable_points_still_check_the_header() {
    let header = Header {
        point_data_format: 1,
        point_data_record_length: 20,
        ..header()
    };
    let mut bytes = las(&header, &[geokey_directory(32617)], &[], &[]);
    bytes.extend_from_slice(&[0; 40]);
    let findings = validate(bytes);
    assert_eq!(
        vec!["should be at least 28 and not 20"],
        messages(&findings, "point data record length")
    );
    assert!(messages(&findings, "number of point records").is_empty());
}

#[test]
fn truncated_vlr_counts_its_declared_length() {
    let record = Record {
        user_id: "example",
        record_id: 1,
        data: vec![1, 2],
    };
    let mut bytes = las(&header(), &[record], &[], &[]);
    bytes[227 + 20..227 + 22].copy_from_slice(&100u16.to_le_bytes());
    let reader = Reader::new(Cursor::new(bytes.clone())).unwrap();
    assert_eq!(vec![1, 2], reader.header().vlrs[0].data);
    assert_eq!(381, reader.header().min_offset_to_point_data());

    let findings = validate(bytes);
    assert_eq!(
        vec!["should be at least 381 and not 283"],
        messages(&findings, "offset to point data")
    );
}

#[test]
fn every_finding_is_reported() {
    let header = Header {
        file_signature: *b"LASX",
        file_creation_year: 2030,
        ..header()
    };
    let findings = validate(las(&header, &[], &[], &points()));
    let fields: Vec<&str> = findings
        .fails()
        .map(|finding| finding.field.as_str())
        .collect();
    assert!(fields.contains(&"file signature"));
    assert!(fields.contains(&"file creation year"));
    assert!(fields.contains(&"CRS"));
    assert_eq!(Verdict::Fail, findings.verdict());
}

#[test]
fn validate_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&las(&header(), &[geokey_directory(32617)], &[], &points()))
        .unwrap();
    file.flush().unwrap();
    let findings = validator().validate_path(file.path()).unwrap();
    assert_eq!(Verdict::Pass, findings.verdict());
}

#[test]
fn validate_path_missing_file() {
    assert!(matches!(
        las_validate::validate_path("does/not/exist.las"),
        Err(Error::Io(_))
    ));
}
