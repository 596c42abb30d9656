//! Check a header and the inventory of its points against the las specification.
//!
//! A [Validator] never stops at the first problem. Every check family runs and adds zero or more
//! findings, so one pass reports everything that is wrong with a file:
//!
//! ```
//! use las_validate::{Header, Inventory, Validator, Verdict};
//! let header = Header { file_signature: *b"LASX", ..Default::default() };
//! let inventory = Inventory::new(&header);
//! let findings = Validator::default().check(&header, &inventory);
//! assert_eq!(Verdict::Fail, findings.verdict());
//! assert!(findings.for_field("file signature").next().is_some());
//! assert!(findings.for_field("zero points in file").next().is_some());
//! ```

use crate::crs::{Crs, Projection, Status};
use crate::feature::{Feature, GpsStandardTime, SyntheticReturnNumbers, Waveforms, WktCrs};
use crate::inventory::Fluff;
use crate::raw::LASF;
use crate::utils::{
    TOLERANCE, clamp_u32, format_general, format_trimmed, format_with_scale, is_close,
    ordinal_suffix,
};
use crate::{Findings, Header, Inventory, Reader, Result};
use chrono::{Datelike, NaiveDate, Utc};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

const MIN_CREATION_YEAR: i32 = 1990;
const SECONDS_PER_WEEK: f64 = 604_800.;
const SCAN_ANGLE_INCREMENT: f64 = 0.006;
const CRS: &str = "CRS";

/// Scale factors that are a power of ten times 1, 2.5 or 5.
const CANONICAL_SCALE_FACTORS: [f64; 23] = [
    0.01,
    0.001,
    0.1,
    0.000_001,
    0.000_000_1,
    0.000_000_01,
    0.000_1,
    0.000_01,
    1.0,
    0.25,
    0.025,
    0.002_5,
    0.000_25,
    0.000_025,
    0.000_002_5,
    0.5,
    0.05,
    0.005,
    0.000_5,
    0.000_05,
    0.000_005,
    0.000_000_5,
    0.000_000_05,
];

/// Is this scale factor, within tolerance, a power of ten times 1, 2.5 or 5?
///
/// # Examples
///
/// ```
/// use las_validate::validator::is_canonical_scale_factor;
/// assert!(is_canonical_scale_factor(0.01));
/// assert!(is_canonical_scale_factor(0.00999999));
/// assert!(!is_canonical_scale_factor(0.017));
/// ```
pub fn is_canonical_scale_factor(scale: f64) -> bool {
    CANONICAL_SCALE_FACTORS
        .iter()
        .any(|&canonical| is_close(scale, canonical, TOLERANCE))
}

/// Checks files.
///
/// The only configuration is whether a missing or unresolvable coordinate reference system is a
/// failure, and the date used to judge the file creation date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use las_validate::Validator;
/// let validator = Validator::new()
///     .no_crs_fail(true)
///     .today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validator {
    no_crs_fail: bool,
    today: NaiveDate,
}

impl Validator {
    /// Creates a validator that fails files without a coordinate reference system and uses
    /// today's UTC date.
    pub fn new() -> Validator {
        Validator::default()
    }

    /// Reports a missing or unresolvable coordinate reference system as a warning instead of a
    /// failure.
    pub fn no_crs_fail(mut self, no_crs_fail: bool) -> Validator {
        self.no_crs_fail = no_crs_fail;
        self
    }

    /// Sets the date that file creation dates may not be after.
    pub fn today(mut self, today: NaiveDate) -> Validator {
        self.today = today;
        self
    }

    /// Checks a header and the inventory of its points.
    pub fn check(&self, header: &Header, inventory: &Inventory) -> Findings {
        debug!(
            "checking las {} point data format {} with {} points",
            header.version, header.point_data_format, inventory.number_of_point_records
        );
        let mut check = Check {
            validator: self,
            header,
            inventory,
            findings: Findings::default(),
        };
        check.file_signature();
        check.global_encoding();
        check.version();
        check.identifier("system identifier", &header.system_identifier);
        check.identifier("generating software", &header.generating_software);
        check.creation_date();
        check.header_size();
        check.offset_to_point_data();
        check.point_data_format();
        check.point_data_record_length();
        check.point_counts();
        check.scale_factors();
        check.offsets();
        check.waveform_start();
        check.fluff();
        check.bounding_box();
        check.return_numbers();
        check.number_of_returns();
        check.return_number_tally();
        check.uniform_attributes();
        check.point_source_ids();
        check.crs_presence();
        check.wave_packets();
        check.crs();
        check.findings
    }

    /// Reads a las file, takes the inventory of its points, and checks it.
    ///
    /// Points that cannot be decoded, because of an unknown format or a record length that is too
    /// short, are skipped with a warning and the header is checked against an empty inventory.
    pub fn validate<R: Read + Seek>(&self, read: R) -> Result<Findings> {
        let mut reader = Reader::new(read)?;
        let mut inventory = Inventory::new(reader.header());
        match reader.can_read_points() {
            Ok(()) => {
                for point in reader.points() {
                    inventory.add(&point?);
                }
            }
            Err(err) => warn!("not reading points: {err}"),
        }
        let findings = self.check(reader.header(), &inventory);
        info!(
            "{} with {} finding(s), crs: {}",
            findings.verdict(),
            findings.len(),
            findings.crs_description
        );
        Ok(findings)
    }

    /// Opens a las file and validates it.
    pub fn validate_path<P: AsRef<Path>>(&self, path: P) -> Result<Findings> {
        let path = path.as_ref();
        info!("validating {}", path.display());
        self.validate(BufReader::new(File::open(path)?))
    }
}

impl Default for Validator {
    fn default() -> Validator {
        Validator {
            no_crs_fail: false,
            today: Utc::now().date_naive(),
        }
    }
}

struct Check<'a> {
    validator: &'a Validator,
    header: &'a Header,
    inventory: &'a Inventory,
    findings: Findings,
}

impl Check<'_> {
    fn fail(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.findings.fail(field, message);
    }

    fn warn(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.findings.warn(field, message);
    }

    fn crs_problem(&mut self, message: impl Into<String>) {
        if self.validator.no_crs_fail {
            self.warn(CRS, message);
        } else {
            self.fail(CRS, message);
        }
    }

    fn is_known_version(&self) -> bool {
        self.header.version.is_at_most(4)
    }

    fn lacks<F: Feature>(&self) -> bool {
        self.is_known_version() && !self.header.version.supports::<F>()
    }

    fn max_global_encoding(&self) -> Option<u16> {
        if !self.is_known_version() {
            return None;
        }
        let version = self.header.version;
        let mut max = 0;
        if version.supports::<GpsStandardTime>() {
            max |= 1;
        }
        if version.supports::<Waveforms>() {
            max |= 2 | 4;
        }
        if version.supports::<SyntheticReturnNumbers>() {
            max |= 8;
        }
        if version.supports::<WktCrs>() {
            max |= 16;
        }
        Some(max)
    }

    fn file_signature(&mut self) {
        let signature = self.header.file_signature;
        if signature != LASF {
            self.fail(
                "file signature",
                format!(
                    "should be 'LASF' and not '{}'",
                    String::from_utf8_lossy(&signature)
                ),
            );
        }
    }

    fn global_encoding(&mut self) {
        const FIELD: &str = "global encoding";
        let header = self.header;
        let version = header.version;
        let encoding = header.global_encoding;
        let format = header.format();
        let pdf = header.point_data_format;

        if let Some(max) = self.max_global_encoding() {
            if encoding.0 > max {
                let message = if max == 0 {
                    format!("should be 0 for LAS version {version} but is {encoding}")
                } else {
                    format!(
                        "should not be greater than {max} for LAS version {version} but is {encoding}"
                    )
                };
                self.fail(FIELD, message);
            }
        }

        if encoding.is_wkt_crs() {
            if self.lacks::<WktCrs>() {
                self.fail(FIELD, format!("set bit 4 not defined for LAS version {version}"));
            }
        } else if version.is_at_least(4) && format.is_extended() {
            self.fail(
                FIELD,
                format!("bit 4 must be set (OGC WKT must be used) for point data format {pdf}"),
            );
        }

        if encoding.has_synthetic_return_numbers() && self.lacks::<SyntheticReturnNumbers>() {
            self.fail(FIELD, format!("set bit 3 not defined for LAS version {version}"));
        }

        if encoding.has_external_waveforms() {
            if self.lacks::<Waveforms>() {
                self.fail(FIELD, format!("set bit 2 not defined for LAS version {version}"));
            }
            if !format.has_waveform() {
                self.fail(FIELD, format!("set bit 2 not defined for point data format {pdf}"));
            }
            if encoding.has_internal_waveforms() {
                self.fail(
                    FIELD,
                    "although bit 1 and bit 2 are mutually exclusive they are both set",
                );
            }
        } else if version.is_at_least(3)
            && format.has_waveform()
            && !encoding.has_internal_waveforms()
        {
            self.fail(
                FIELD,
                format!("neither bit 1 nor bit 2 are set for point data format {pdf}"),
            );
        }

        if encoding.has_internal_waveforms() {
            if self.lacks::<Waveforms>() {
                self.fail(FIELD, format!("set bit 1 not defined for LAS version {version}"));
            }
            if !format.has_waveform() {
                self.fail(FIELD, format!("set bit 1 not defined for point data format {pdf}"));
            }
        }

        if encoding.is_gps_standard_time() {
            if self.lacks::<GpsStandardTime>() {
                self.fail(FIELD, format!("set bit 0 not defined for LAS version {version}"));
            }
            if pdf == 0 {
                self.fail(FIELD, "set bit 0 not defined for point data format 0");
            }
        } else if let Some(gps_time) = self.inventory.gps_time {
            if gps_time.min < 0. || gps_time.max > SECONDS_PER_WEEK {
                self.fail(
                    FIELD,
                    format!(
                        "unset bit 0 suggests GPS week time but GPS time ranges from {} to {}",
                        format_with_scale(gps_time.min, 0.000_001),
                        format_with_scale(gps_time.max, 0.000_001)
                    ),
                );
            }
        }
    }

    fn version(&mut self) {
        let version = self.header.version;
        if version.major != 1 {
            self.fail(
                "version major",
                format!("should be 1 and not {}", version.major),
            );
        }
        if version.minor > 4 {
            self.fail(
                "version minor",
                format!("should be between 0 and 4 and not {}", version.minor),
            );
        }
    }

    fn identifier(&mut self, field: &str, bytes: &[u8; 32]) {
        match bytes.iter().position(|&b| b == 0) {
            None => self.fail(field, "string should be terminated by a '\\0' character"),
            Some(end) => {
                if end == 0 {
                    self.warn(field, "empty string. first character is '\\0'");
                }
                if bytes[end..].iter().any(|&b| b != 0) {
                    self.fail(field, "remaining characters should all be '\\0'");
                }
            }
        }
    }

    fn creation_date(&mut self) {
        const DAY: &str = "file creation day";
        const YEAR: &str = "file creation year";
        let day = self.header.file_creation_day_of_year;
        let year = self.header.file_creation_year;

        if year == 0 {
            if day == 0 {
                self.fail(DAY, "not set");
            } else if day > 365 {
                self.fail(DAY, format!("should be between 1 and 365 and not {day}"));
            }
            self.fail(YEAR, "not set");
            return;
        }

        let today = self.validator.today;
        let year = i32::from(year);
        if year < MIN_CREATION_YEAR || year > today.year() {
            self.fail(
                YEAR,
                format!(
                    "should be between {MIN_CREATION_YEAR} and {} and not {year}",
                    today.year()
                ),
            );
        }
        let max_day = if year == today.year() {
            today.ordinal()
        } else if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
            366
        } else {
            365
        };
        if day == 0 {
            self.fail(DAY, "not set");
        } else if u32::from(day) > max_day {
            self.fail(
                DAY,
                format!("should be between 1 and {max_day} and not {day}"),
            );
        }
    }

    fn header_size(&mut self) {
        let min = self.header.version.min_header_size();
        let size = self.header.header_size;
        if size < min {
            self.fail(
                "header size",
                format!("should be at least {min} and not {size}"),
            );
        }
    }

    fn offset_to_point_data(&mut self) {
        let min = self.header.min_offset_to_point_data();
        let offset = self.header.offset_to_point_data;
        if u64::from(offset) < min {
            self.fail(
                "offset to point data",
                format!("should be at least {min} and not {offset}"),
            );
        }
    }

    fn point_data_format(&mut self) {
        let max = self.header.version.max_point_format();
        let format = self.header.point_data_format;
        if format > max {
            self.fail(
                "point data format",
                format!("should be between 0 and {max} and not {format}"),
            );
        }
    }

    fn point_data_record_length(&mut self) {
        let min = self.header.format().min_record_length();
        let len = self.header.point_data_record_length;
        if len < min {
            self.fail(
                "point data record length",
                format!("should be at least {min} and not {len}"),
            );
        }
    }

    fn point_counts(&mut self) {
        let header = self.header;
        let inventory = self.inventory;
        let modern = header.version.is_at_least(4);

        if header.legacy_number_of_point_records == 0
            && (!modern || header.number_of_point_records == 0)
        {
            self.fail(
                "zero points in file",
                "files must contain at least one point record to be considered valid",
            );
        }

        if modern {
            let legacy = header.legacy_number_of_point_records;
            let expected = clamp_u32(header.number_of_point_records);
            if legacy != 0 && legacy != expected {
                self.fail(
                    "legacy number of point records",
                    format!(
                        "should be consistent with number of point records and either be 0 or {expected} and not {legacy}"
                    ),
                );
            }
            for (i, &legacy) in header.legacy_number_of_points_by_return.iter().enumerate() {
                let count = header.number_of_points_by_return[i];
                if legacy == 0 {
                    continue;
                }
                if count == 0 {
                    self.fail(
                        format!("number of points by return[{i}]"),
                        format!(
                            "is zero but should be identical to the (non-zero) legacy number of points by return of {legacy}"
                        ),
                    );
                } else if legacy != clamp_u32(count) {
                    self.fail(
                        format!("legacy number of points by return[{i}]"),
                        format!(
                            "should be consistent with number of points by return and either be 0 or {} and not {legacy}",
                            clamp_u32(count)
                        ),
                    );
                }
            }
        }

        if !inventory.is_active() {
            return;
        }

        if modern {
            if header.number_of_point_records != inventory.number_of_point_records {
                self.fail(
                    "number of point records",
                    format!(
                        "there are only {} point records and not {}",
                        inventory.number_of_point_records, header.number_of_point_records
                    ),
                );
            }
            for (i, &declared) in header.number_of_points_by_return.iter().enumerate() {
                let counted = inventory.number_of_points_by_return[i + 1];
                if declared != counted {
                    self.fail(
                        format!("number of points by return[{i}]"),
                        format!(
                            "the number of {}{} returns is {counted} and not {declared}",
                            i + 1,
                            ordinal_suffix(i + 1)
                        ),
                    );
                }
            }
        } else {
            let counted = clamp_u32(inventory.number_of_point_records);
            let declared = header.legacy_number_of_point_records;
            if declared != counted {
                self.fail(
                    "number of point records",
                    format!("there are only {counted} point records and not {declared}"),
                );
            }
            for (i, &declared) in header.legacy_number_of_points_by_return.iter().enumerate() {
                let counted = clamp_u32(inventory.number_of_points_by_return[i + 1]);
                if declared != counted {
                    self.fail(
                        format!("number of points by return[{i}]"),
                        format!(
                            "the number of {}{} returns is {counted} and not {declared}",
                            i + 1,
                            ordinal_suffix(i + 1)
                        ),
                    );
                }
            }
        }
    }

    fn scale_factors(&mut self) {
        let transforms = self.header.transforms;
        for (axis, transform) in transforms.labelled() {
            let scale = transform.scale;
            let field = format!("{axis} scale factor");
            if scale <= 0. {
                self.fail(
                    field,
                    format!("{} is equal to or smaller than zero", format_general(scale)),
                );
            } else if !is_canonical_scale_factor(scale) {
                self.warn(
                    field,
                    format!(
                        "should be factor ten of 0.1 or 0.5 or 0.25 and not {}",
                        format_trimmed(scale)
                    ),
                );
            }
        }
    }

    fn offsets(&mut self) {
        let transforms = self.header.transforms;
        for (axis, transform) in transforms.labelled() {
            if transform.has_offset_fluff() {
                self.warn(
                    format!("{axis} offset"),
                    format!(
                        "translation fluff: decimal digits of {} do not match scale factor {}",
                        format_trimmed(transform.offset),
                        format_trimmed(transform.scale)
                    ),
                );
            }
        }
    }

    fn waveform_start(&mut self) {
        const FIELD: &str = "start of waveform data packet record";
        let header = self.header;
        if !header.version.is_at_least(3) {
            return;
        }
        let start = header.start_of_waveform_data_packet_record;
        let internal = header.global_encoding.has_internal_waveforms();
        if !internal && start != 0 {
            self.fail(
                FIELD,
                format!("should be 0 and not {start} because global encoding bit 1 is not set"),
            );
        } else if internal && start == 0 {
            self.fail(FIELD, "should not be 0 because global encoding bit 1 is set");
        }
    }

    fn fluff(&mut self) {
        for tier in Fluff::ALL {
            let fluff = self.inventory.fluff(tier);
            if !(fluff.x || fluff.y || fluff.z) {
                break;
            }
            let prefix = match tier {
                Fluff::X10 => "",
                Fluff::X100 => "serious ",
                Fluff::X1000 => "very serious ",
            };
            let axes: String = [(fluff.x, 'X'), (fluff.y, 'Y'), (fluff.z, 'Z')]
                .iter()
                .filter(|(has, _)| *has)
                .map(|(_, axis)| axis)
                .collect();
            self.warn(
                "coordinate values",
                format!(
                    "{prefix}resolution fluff (x{}) in {axes}",
                    tier.divisor()
                ),
            );
        }
    }

    fn bounding_box(&mut self) {
        let outside = self.inventory.points_outside_bounding_box;
        if outside > 0 {
            self.fail(
                "bounding box",
                format!(
                    "there are {outside} points outside of the bounding box specified in the LAS file header"
                ),
            );
        }

        let Some(observed) = self.inventory.bounds() else {
            return;
        };
        let header = self.header;
        let axes = header
            .bounds
            .labelled()
            .into_iter()
            .zip(observed.labelled())
            .zip(header.transforms.labelled());
        for ((declared, observed), (_, transform)) in axes {
            let (axis, min, max) = declared;
            let (_, observed_min, observed_max) = observed;
            let scale = transform.scale;
            if min - 0.5 * scale > observed_min {
                self.fail(
                    format!("min {axis}"),
                    format!(
                        "should be {} and not {}",
                        format_with_scale(observed_min, scale),
                        format_with_scale(min, scale)
                    ),
                );
            }
            if max + 0.5 * scale < observed_max {
                self.fail(
                    format!("max {axis}"),
                    format!(
                        "should be {} and not {}",
                        format_with_scale(observed_max, scale),
                        format_with_scale(max, scale)
                    ),
                );
            }
        }
    }

    fn return_numbers(&mut self) {
        const FIELD: &str = "return number";
        if !self.inventory.is_active() {
            return;
        }
        let histogram = self.inventory.number_of_points_by_return;
        let mut slots = vec![0];
        if !self.header.version.is_at_least(4) {
            slots.extend([6, 7]);
        }
        for slot in slots {
            let count = histogram[slot];
            if count != 0 {
                self.warn(
                    FIELD,
                    format!("there are {count} points with a return number of {slot}"),
                );
            }
        }
    }

    fn number_of_returns(&mut self) {
        const FIELD: &str = "number of returns of given pulse";
        if !self.inventory.is_active() {
            return;
        }
        let histogram = self.inventory.number_of_returns;
        let mut slots = vec![0];
        if !self.header.version.is_at_least(4) {
            slots.extend([6, 7]);
        }
        for slot in slots {
            let count = histogram[slot];
            if count != 0 {
                self.warn(
                    FIELD,
                    format!(
                        "there are {count} points with a number of returns of given pulse of {slot}"
                    ),
                );
            }
        }
    }

    fn return_number_tally(&mut self) {
        let tally = self.inventory.return_count_for_return_number;
        for (number_of_returns, row) in tally.iter().enumerate() {
            for (return_number, &count) in row.iter().enumerate().skip(number_of_returns + 1) {
                if count != 0 {
                    self.fail(
                        "return number",
                        format!(
                            "there are {count} points with a larger return number ({return_number}) than their number of returns of given pulse ({number_of_returns})"
                        ),
                    );
                }
            }
        }
    }

    fn uniform_attributes(&mut self) {
        let inventory = self.inventory;
        let n = inventory.number_of_point_records;
        if n < 2 {
            return;
        }
        let format = self.header.format();

        if let Some(intensity) = inventory.intensity.filter(|e| e.is_uniform()) {
            self.warn(
                "intensity",
                format!("intensity of all {n} points is {}", intensity.min),
            );
        }

        if format.is_extended() {
            if let Some(scan_angle) = inventory.scan_angle.filter(|e| e.is_uniform()) {
                self.warn(
                    "scan angle",
                    format!(
                        "scan angle of all {n} points is {:.3}",
                        SCAN_ANGLE_INCREMENT * f64::from(scan_angle.min)
                    ),
                );
            }
        } else if let Some(rank) = inventory.scan_angle_rank.filter(|e| e.is_uniform()) {
            self.warn(
                "scan angle rank",
                format!("scan angle rank of all {n} points is {}", rank.min),
            );
        }

        if format.has_gps_time() {
            if let Some(gps_time) = inventory.gps_time.filter(|e| e.is_uniform()) {
                self.warn(
                    "GPS time",
                    format!(
                        "time stamps of all {n} points are {}",
                        format_general(gps_time.min)
                    ),
                );
            }
        }

        if format.has_color() {
            if let Some(color) = inventory.color.filter(|c| c.is_uniform()) {
                self.warn("RGB", format!("color of all {n} points is {}", color.max));
            }
        }
    }

    fn point_source_ids(&mut self) {
        const FIELD: &str = "point source ID";
        let n = self.inventory.number_of_point_records;
        let Some(ids) = self.inventory.point_source_id else {
            return;
        };
        if n < 2 {
            return;
        }
        let file_source_id = self.header.file_source_id;
        if file_source_id == 0 {
            if ids.min == 0 && ids.max == 0 {
                self.warn(
                    FIELD,
                    format!(
                        "file source ID in header and point source ID of all {n} points is {}",
                        ids.min
                    ),
                );
            }
        } else if (file_source_id != ids.min || file_source_id != ids.max)
            && (ids.min != 0 || ids.max != 0)
        {
            self.warn(
                FIELD,
                format!(
                    "file source ID in header is {file_source_id} but point source IDs of all {n} points range from {} to {}",
                    ids.min, ids.max
                ),
            );
        }
    }

    fn crs_presence(&mut self) {
        let header = self.header;
        if header.format().is_extended() {
            if header.ogc_wkt.is_none() {
                self.crs_problem(format!(
                    "file with point data format {} does not specify Coordinate Reference System with OGC WKT string",
                    header.point_data_format
                ));
            }
        } else if header.geokeys.is_none() {
            self.crs_problem(
                "file does not specify a Coordinate Reference System with GEOTIFF tags",
            );
        }
    }

    fn wave_packets(&mut self) {
        let header = self.header;
        if !header.format().has_waveform() {
            return;
        }
        for index in 1..=u8::MAX {
            if !self.inventory.has_wave_packet_index(index) {
                continue;
            }
            let message = format!(
                "points reference wave packet descriptor with index {index} that does not exist"
            );
            if header.wave_packet_descriptors.is_empty() {
                self.fail("wave packet descriptor", message);
            } else if !header.wave_packet_descriptors.contains_key(&index) {
                self.fail("wave packet", message);
            }
        }
    }

    fn crs(&mut self) {
        let header = self.header;
        if header.geokeys.is_none() && header.ogc_wkt.is_none() {
            return;
        }
        let crs = Crs::resolve(header.geokeys.as_ref(), header.ogc_wkt.as_deref());
        if header.geokeys.is_some() {
            match crs.status {
                Status::Determined => {
                    let intentionally_none = crs
                        .from_geokeys
                        .as_ref()
                        .and_then(|slot| slot.projection.as_ref())
                        .is_some_and(Projection::is_none);
                    if intentionally_none {
                        self.warn(CRS, "CRS intentionally unspecified");
                    }
                }
                Status::Recognized(code) => self.warn(
                    CRS,
                    format!(
                        "EPSG code {code} is recognized but its projection is not modeled"
                    ),
                ),
                Status::Unknown(code) => self.crs_problem(format!(
                    "EPSG code {code} is not known to this validator, please report it"
                )),
                Status::Invalid(code) => {
                    self.fail(CRS, format!("{code} is not a valid EPSG code"))
                }
                Status::Undetermined => self.crs_problem(
                    "GEOTIFF tags do not determine a Coordinate Reference System",
                ),
            }
            if let Some(description) = crs.description {
                self.findings.crs_description = description;
            }
        }
        if header.ogc_wkt.is_some() {
            self.warn(
                CRS,
                "OGC WKT string is present but its correctness is not checked",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geokey::{GT_MODEL_TYPE, GeoKeys, PROJECTED_CS_TYPE};
    use crate::{
        Bounds, Color, GlobalEncoding, Point, Severity, Transform, Vector, Verdict, Version,
        WavePacketDescriptor,
    };

    fn validator() -> Validator {
        Validator::new().today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn geokeys(code: u16) -> GeoKeys {
        let mut geokeys = GeoKeys::default();
        let _ = geokeys
            .push_short(GT_MODEL_TYPE, 1)
            .push_short(PROJECTED_CS_TYPE, code);
        geokeys
    }

    fn header() -> Header {
        Header {
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
            legacy_number_of_point_records: 2,
            legacy_number_of_points_by_return: [1, 1, 0, 0, 0],
            geokeys: Some(geokeys(32617)),
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
                ..Default::default()
            },
        ]
    }

    fn check(header: &Header, points: &[Point]) -> Findings {
        check_with(validator(), header, points)
    }

    fn check_with(validator: Validator, header: &Header, points: &[Point]) -> Findings {
        let mut inventory = Inventory::new(header);
        for point in points {
            inventory.add(point);
        }
        validator.check(header, &inventory)
    }

    fn messages<'a>(findings: &'a Findings, field: &'a str) -> Vec<&'a str> {
        findings
            .for_field(field)
            .map(|f| f.message.as_str())
            .collect()
    }

    fn header_1_4() -> Header {
        Header {
            version: Version::new(1, 4),
            global_encoding: GlobalEncoding(16),
            point_data_format: 6,
            point_data_record_length: 30,
            header_size: 375,
            offset_to_point_data: 375,
            legacy_number_of_point_records: 0,
            legacy_number_of_points_by_return: [0; 5],
            number_of_point_records: 2,
            number_of_points_by_return: [1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            geokeys: None,
            ogc_wkt: Some("PROJCS[\"WGS 84 / UTM zone 17N\"]".to_string()),
            ..header()
        }
    }

    #[test]
    fn clean_file_passes() {
        let findings = check(&header(), &points());
        assert!(findings.is_empty(), "{:?}", findings);
        assert_eq!(Verdict::Pass, findings.verdict());
        assert_eq!("UTM 17 northern hemisphere", findings.crs_description);
    }

    #[test]
    fn file_signature() {
        let header = Header {
            file_signature: *b"LASX",
            ..header()
        };
        let findings = check(&header, &points());
        assert_eq!(
            vec!["should be 'LASF' and not 'LASX'"],
            messages(&findings, "file signature")
        );
        assert_eq!(Verdict::Fail, findings.verdict());
    }

    #[test]
    fn undefined_global_encoding_bits() {
        let header = Header {
            global_encoding: GlobalEncoding(2),
            ..header()
        };
        let findings = check(&header, &points());
        assert_eq!(
            vec![
                "should not be greater than 1 for LAS version 1.2 but is 2",
                "set bit 1 not defined for LAS version 1.2",
                "set bit 1 not defined for point data format 0",
            ],
            messages(&findings, "global encoding")
        );
    }

    #[test]
    fn global_encoding_for_las_1_0() {
        let header = Header {
            version: Version::new(1, 0),
            global_encoding: GlobalEncoding(1),
            ..header()
        };
        let findings = check(&header, &points());
        assert_eq!(
            vec![
                "should be 0 for LAS version 1.0 but is 1",
                "set bit 0 not defined for LAS version 1.0",
                "set bit 0 not defined for point data format 0",
            ],
            messages(&findings, "global encoding")
        );
    }

    #[test]
    fn waveform_bits() {
        let header = Header {
            version: Version::new(1, 3),
            header_size: 235,
            offset_to_point_data: 235,
            point_data_format: 4,
            point_data_record_length: 57,
            global_encoding: GlobalEncoding(1 | 2 | 4),
            start_of_waveform_data_packet_record: 1000,
            ..header()
        };
        let findings = check(&header, &[]);
        assert_eq!(
            vec!["although bit 1 and bit 2 are mutually exclusive they are both set"],
            messages(&findings, "global encoding")
        );

        let header = Header {
            global_encoding: GlobalEncoding(1),
            start_of_waveform_data_packet_record: 0,
            ..header
        };
        let findings = check(&header, &[]);
        assert_eq!(
            vec!["neither bit 1 nor bit 2 are set for point data format 4"],
            messages(&findings, "global encoding")
        );
    }

    #[test]
    fn wkt_bit_is_required_for_extended_formats() {
        let header = Header {
            global_encoding: GlobalEncoding(0),
            ..header_1_4()
        };
        let findings = check(&header, &points());
        assert_eq!(
            vec!["bit 4 must be set (OGC WKT must be used) for point data format 6"],
            messages(&findings, "global encoding")
        );
    }

    #[test]
    fn gps_week_time() {
        let header = Header {
            point_data_format: 1,
            point_data_record_length: 28,
            ..header()
        };
        let mut points = points();
        points[0].gps_time = Some(12.5);
        points[1].gps_time = Some(1_000_000_000.25);
        let findings = check(&header, &points);
        assert_eq!(
            vec![
                "unset bit 0 suggests GPS week time but GPS time ranges from 12.500000 to 1000000000.250000"
            ],
            messages(&findings, "global encoding")
        );

        let header = Header {
            global_encoding: GlobalEncoding(1),
            ..header
        };
        assert!(check(&header, &points).is_empty());
    }

    #[test]
    fn version() {
        let header = Header {
            version: Version::new(2, 7),
            ..header()
        };
        let findings = check(&header, &points());
        assert_eq!(vec!["should be 1 and not 2"], messages(&findings, "version major"));
        assert_eq!(
            vec!["should be between 0 and 4 and not 7"],
            messages(&findings, "version minor")
        );
    }

    #[test]
    fn identifiers() {
        let mut header = header();
        header.system_identifier = [b'a'; 32];
        header.generating_software = [0; 32];
        header.generating_software[3] = b'x';
        let findings = check(&header, &points());
        assert_eq!(
            vec!["string should be terminated by a '\\0' character"],
            messages(&findings, "system identifier")
        );
        assert_eq!(
            vec![
                "empty string. first character is '\\0'",
                "remaining characters should all be '\\0'"
            ],
            messages(&findings, "generating software")
        );
    }

    #[test]
    fn empty_identifier_is_a_warning() {
        let header = Header {
            system_identifier: [0; 32],
            ..header()
        };
        let findings = check(&header, &points());
        assert_eq!(1, findings.len());
        assert_eq!(Verdict::Warning, findings.verdict());
    }

    #[test]
    fn creation_date() {
        let date = |year, day| {
            let header = Header {
                file_creation_year: year,
                file_creation_day_of_year: day,
                ..header()
            };
            let findings = check(&header, &points());
            let mut messages: Vec<String> = findings
                .iter()
                .map(|f| format!("{}: {}", f.field, f.message))
                .collect();
            messages.sort();
            messages
        };
        assert!(date(2020, 366).is_empty());
        assert!(date(2026, 292).is_empty());
        assert_eq!(
            vec!["file creation day: should be between 1 and 292 and not 293"],
            date(2026, 293)
        );
        assert_eq!(
            vec!["file creation day: should be between 1 and 365 and not 366"],
            date(2021, 366)
        );
        assert_eq!(
            vec!["file creation year: should be between 1990 and 2026 and not 1989"],
            date(1989, 1)
        );
        assert_eq!(
            vec!["file creation year: should be between 1990 and 2026 and not 2027"],
            date(2027, 1)
        );
        assert_eq!(
            vec!["file creation day: not set", "file creation year: not set"],
            date(0, 0)
        );
        assert_eq!(
            vec![
                "file creation day: should be between 1 and 365 and not 400",
                "file creation year: not set"
            ],
            date(0, 400)
        );
        assert_eq!(vec!["file creation day: not set"], date(2020, 0));
    }

    #[test]
    fn header_size_and_offset() {
        let mut header = header();
        header.header_size = 200;
        header.offset_to_point_data = 100;
        let findings = check(&header, &points());
        assert_eq!(
            vec!["should be at least 227 and not 200"],
            messages(&findings, "header size")
        );
        assert_eq!(
            vec!["should be at least 200 and not 100"],
            messages(&findings, "offset to point data")
        );
    }

    #[test]
    fn point_data_format_and_record_length() {
        let header = Header {
            point_data_format: 6,
            point_data_record_length: 29,
            ..header()
        };
        let findings = check(&header, &points());
        assert_eq!(
            vec!["should be between 0 and 3 and not 6"],
            messages(&findings, "point data format")
        );
        assert_eq!(
            vec!["should be at least 30 and not 29"],
            messages(&findings, "point data record length")
        );
    }

    #[test]
    fn zero_points() {
        let header = Header {
            legacy_number_of_point_records: 0,
            legacy_number_of_points_by_return: [0; 5],
            ..header()
        };
        let findings = check(&header, &[]);
        assert_eq!(
            vec!["files must contain at least one point record to be considered valid"],
            messages(&findings, "zero points in file")
        );

        let header = Header {
            legacy_number_of_point_records: 0,
            ..header_1_4()
        };
        let findings = check(&header, &points());
        assert!(messages(&findings, "zero points in file").is_empty());
    }

    #[test]
    fn legacy_count_off_by_one() {
        let header = Header {
            legacy_number_of_point_records: 100,
            legacy_number_of_points_by_return: [99, 0, 0, 0, 0],
            ..header()
        };
        let points: Vec<Point> = (0..99)
            .map(|i| Point {
                x: i * 7 + 1,
                y: i * 11 + 3,
                z: i * 13 + 7,
                intensity: u16::try_from(i).unwrap(),
                return_number: 1,
                number_of_returns: 1,
                point_source_id: 1,
                ..Default::default()
            })
            .collect();
        let findings = check(&header, &points);
        let fails: Vec<_> = findings.fails().collect();
        assert_eq!(1, fails.len(), "{:?}", fails);
        assert_eq!("number of point records", fails[0].field);
        assert_eq!("there are only 99 point records and not 100", fails[0].message);
    }

    #[test]
    fn by_return_counts() {
        let header = Header {
            legacy_number_of_points_by_return: [2, 0, 0, 0, 0],
            ..header()
        };
        let findings = check(&header, &points());
        assert_eq!(
            vec!["the number of 1st returns is 1 and not 2"],
            messages(&findings, "number of points by return[0]")
        );
        assert_eq!(
            vec!["the number of 2nd returns is 1 and not 0"],
            messages(&findings, "number of points by return[1]")
        );
    }

    #[test]
    fn legacy_and_modern_counts() {
        let header = Header {
            legacy_number_of_point_records: 3,
            legacy_number_of_points_by_return: [1, 4, 1, 0, 0],
            ..header_1_4()
        };
        let findings = check(&header, &points());
        assert_eq!(
            vec!["should be consistent with number of point records and either be 0 or 2 and not 3"],
            messages(&findings, "legacy number of point records")
        );
        assert_eq!(
            vec!["should be consistent with number of points by return and either be 0 or 1 and not 4"],
            messages(&findings, "legacy number of points by return[1]")
        );
        assert_eq!(
            vec![
                "is zero but should be identical to the (non-zero) legacy number of points by return of 1"
            ],
            messages(&findings, "number of points by return[2]")
        );
        assert!(messages(&findings, "number of point records").is_empty());
    }

    #[test]
    fn modern_count_against_inventory() {
        let header = Header {
            number_of_point_records: 5,
            ..header_1_4()
        };
        let findings = check(&header, &points());
        assert_eq!(
            vec!["there are only 2 point records and not 5"],
            messages(&findings, "number of point records")
        );
    }

    #[test]
    fn scale_factor_tolerance() {
        let mut header = header();
        header.transforms.x.scale = 0.00999999;
        let findings = check(&header, &points());
        assert!(messages(&findings, "x scale factor").is_empty());

        header.transforms.x.scale = 0.017;
        let findings = check(&header, &points());
        assert_eq!(
            vec!["should be factor ten of 0.1 or 0.5 or 0.25 and not 0.017"],
            messages(&findings, "x scale factor")
        );
        assert!(findings.for_field("x scale factor").all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn non_positive_scale_factor() {
        let mut header = header();
        header.transforms.z.scale = 0.;
        let findings = check(&header, &[]);
        assert_eq!(
            vec!["0 is equal to or smaller than zero"],
            messages(&findings, "z scale factor")
        );
    }

    #[test]
    fn offset_fluff() {
        let mut header = header();
        header.transforms.y = Transform {
            scale: 0.01,
            offset: 1000.005,
        };
        let findings = check(&header, &[]);
        assert_eq!(
            vec!["translation fluff: decimal digits of 1000.005 do not match scale factor 0.01"],
            messages(&findings, "y offset")
        );
    }

    #[test]
    fn waveform_start() {
        let header = Header {
            version: Version::new(1, 3),
            header_size: 235,
            offset_to_point_data: 235,
            start_of_waveform_data_packet_record: 4096,
            ..header()
        };
        let findings = check(&header, &points());
        assert_eq!(
            vec!["should be 0 and not 4096 because global encoding bit 1 is not set"],
            messages(&findings, "start of waveform data packet record")
        );
    }

    #[test]
    fn resolution_fluff_is_nested() {
        let header = Header {
            bounds: Bounds {
                min: Vector {
                    x: 0.,
                    y: 0.,
                    z: 0.,
                },
                max: Vector {
                    x: 100.,
                    y: 100.,
                    z: 100.,
                },
            },
            ..header()
        };
        let mut points = points();
        points[0].x = 1000;
        points[0].y = 100;
        points[0].z = 10;
        points[1].x = 50_000;
        points[1].y = 200;
        points[1].z = 20;
        let findings = check(&header, &points);
        assert_eq!(
            vec![
                "resolution fluff (x10) in XYZ",
                "serious resolution fluff (x100) in XY",
                "very serious resolution fluff (x1000) in X",
            ],
            messages(&findings, "coordinate values")
        );
    }

    #[test]
    fn min_x_tolerance() {
        let mut header = header();
        header.bounds.min.x = -1.;
        assert!(messages(&check(&header, &points()), "min x").is_empty());
        header.bounds.min.x = 0.0014;
        assert!(messages(&check(&header, &points()), "min x").is_empty());
        header.bounds.min.x = 0.002;
        assert_eq!(
            vec!["should be 0.001 and not 0.002"],
            messages(&check(&header, &points()), "min x")
        );
    }

    #[test]
    fn points_outside_of_the_bounding_box() {
        let mut header = header();
        header.bounds.max.z = 5.;
        let findings = check(&header, &points());
        assert_eq!(
            vec!["there are 1 points outside of the bounding box specified in the LAS file header"],
            messages(&findings, "bounding box")
        );
        assert_eq!(
            vec!["should be 7.007 and not 5.000"],
            messages(&findings, "max z")
        );
    }

    #[test]
    fn return_numbers() {
        let mut points = points();
        points[0].return_number = 0;
        points[1].return_number = 6;
        points[1].number_of_returns = 7;
        let findings = check(&header(), &points);
        assert_eq!(
            vec![
                "there are 1 points with a return number of 0",
                "there are 1 points with a return number of 6",
            ],
            findings
                .warnings()
                .filter(|f| f.field == "return number")
                .map(|f| f.message.as_str())
                .collect::<Vec<_>>()
        );
        assert_eq!(
            vec!["there are 1 points with a number of returns of given pulse of 7"],
            messages(&findings, "number of returns of given pulse")
        );
    }

    #[test]
    fn reserved_slots_are_fine_in_las_1_4() {
        let mut points = points();
        points[1].return_number = 6;
        points[1].number_of_returns = 7;
        let header = Header {
            number_of_points_by_return: [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            ..header_1_4()
        };
        let findings = check(&header, &points);
        assert!(messages(&findings, "return number").is_empty());
        assert!(messages(&findings, "number of returns of given pulse").is_empty());
    }

    #[test]
    fn larger_return_number() {
        let mut points = points();
        points[1].return_number = 3;
        let findings = check(&header(), &points);
        assert_eq!(
            vec!["there are 1 points with a larger return number (3) than their number of returns of given pulse (2)"],
            messages(&findings, "return number")
        );
        assert_eq!(Verdict::Fail, findings.verdict());
    }

    #[test]
    fn consistent_returns_never_fail_the_tally() {
        let mut header = header();
        let mut points = Vec::new();
        for number_of_returns in 1..=5u8 {
            for return_number in 1..=number_of_returns {
                points.push(Point {
                    x: i32::from(return_number) + 1,
                    y: i32::from(number_of_returns) + 2,
                    z: 3,
                    intensity: u16::from(return_number),
                    return_number,
                    number_of_returns,
                    scan_angle_rank: -1,
                    point_source_id: 1,
                    ..Default::default()
                });
            }
        }
        header.legacy_number_of_point_records = 15;
        header.legacy_number_of_points_by_return = [5, 4, 3, 2, 1];
        let findings = check(&header, &points);
        assert_eq!(0, findings.fails().count(), "{:?}", findings);
    }

    #[test]
    fn uniform_attributes() {
        let header = Header {
            point_data_format: 3,
            point_data_record_length: 34,
            global_encoding: GlobalEncoding(1),
            ..header()
        };
        let mut points = points();
        for point in &mut points {
            point.intensity = 42;
            point.scan_angle_rank = 0;
            point.gps_time = Some(1234567.0);
            point.color = Some(Color::new(1, 2, 3));
        }
        let findings = check(&header, &points);
        assert_eq!(
            vec!["intensity of all 2 points is 42"],
            messages(&findings, "intensity")
        );
        assert_eq!(
            vec!["scan angle rank of all 2 points is 0"],
            messages(&findings, "scan angle rank")
        );
        assert_eq!(
            vec!["time stamps of all 2 points are 1.23457e+06"],
            messages(&findings, "GPS time")
        );
        assert_eq!(
            vec!["color of all 2 points is (1/2/3)"],
            messages(&findings, "RGB")
        );
        assert_eq!(Verdict::Warning, findings.verdict());
    }

    #[test]
    fn uniform_scan_angle() {
        let mut points = points();
        for point in &mut points {
            point.scan_angle = 500;
            point.gps_time = Some(1.0);
        }
        points[1].gps_time = Some(2.0);
        let findings = check(&header_1_4(), &points);
        assert_eq!(
            vec!["scan angle of all 2 points is 3.000"],
            messages(&findings, "scan angle")
        );
        assert!(messages(&findings, "scan angle rank").is_empty());
    }

    #[test]
    fn single_point_is_never_uniform() {
        let header = Header {
            legacy_number_of_point_records: 1,
            legacy_number_of_points_by_return: [1, 0, 0, 0, 0],
            ..header()
        };
        let mut point = points()[0];
        point.number_of_returns = 1;
        point.point_source_id = 0;
        assert!(check(&header, &[point]).is_empty());
    }

    #[test]
    fn point_source_ids() {
        let mut points = points();
        points[0].point_source_id = 0;
        points[1].point_source_id = 0;
        let findings = check(&header(), &points);
        assert_eq!(
            vec!["file source ID in header and point source ID of all 2 points is 0"],
            messages(&findings, "point source ID")
        );

        let header = Header {
            file_source_id: 7,
            ..header()
        };
        let findings = check(&header, &self::points());
        assert_eq!(
            vec!["file source ID in header is 7 but point source IDs of all 2 points range from 1 to 2"],
            messages(&findings, "point source ID")
        );
        assert!(check(&header, &points).is_empty());
    }

    #[test]
    fn missing_geotiff_keys() {
        let header = Header {
            geokeys: None,
            ..header()
        };
        let findings = check(&header, &points());
        assert_eq!(
            vec!["file does not specify a Coordinate Reference System with GEOTIFF tags"],
            messages(&findings, CRS)
        );
        assert_eq!(Verdict::Fail, findings.verdict());
        assert_eq!("not valid or not specified", findings.crs_description);

        let findings = check_with(validator().no_crs_fail(true), &header, &points());
        assert_eq!(Verdict::Warning, findings.verdict());
    }

    #[test]
    fn missing_wkt() {
        let header = Header {
            ogc_wkt: None,
            ..header_1_4()
        };
        let findings = check(&header, &points());
        assert_eq!(
            vec!["file with point data format 6 does not specify Coordinate Reference System with OGC WKT string"],
            messages(&findings, CRS)
        );
    }

    #[test]
    fn wkt_is_not_checked() {
        let findings = check(&header_1_4(), &points());
        assert_eq!(
            vec!["OGC WKT string is present but its correctness is not checked"],
            messages(&findings, CRS)
        );
        assert_eq!(Verdict::Warning, findings.verdict());
    }

    #[test]
    fn crs_resolution() {
        let crs = |geokeys: GeoKeys, no_crs_fail: bool| {
            let header = Header {
                geokeys: Some(geokeys),
                ..header()
            };
            check_with(validator().no_crs_fail(no_crs_fail), &header, &points())
        };

        let findings = crs(geokeys(26917), false);
        assert!(findings.is_empty());
        assert_eq!("UTM 17 northern hemisphere", findings.crs_description);

        let findings = crs(geokeys(3857), false);
        assert_eq!(
            vec!["EPSG code 3857 is recognized but its projection is not modeled"],
            messages(&findings, CRS)
        );
        assert_eq!("WGS 84 / Pseudo-Mercator", findings.crs_description);
        assert_eq!(Verdict::Warning, findings.verdict());

        let findings = crs(geokeys(4999), false);
        assert_eq!(
            vec!["EPSG code 4999 is not known to this validator, please report it"],
            messages(&findings, CRS)
        );
        assert_eq!(Verdict::Fail, findings.verdict());
        assert_eq!(Verdict::Warning, crs(geokeys(4999), true).verdict());

        let findings = crs(geokeys(40000), true);
        assert_eq!(
            vec!["40000 is not a valid EPSG code"],
            messages(&findings, CRS)
        );
        assert_eq!(Verdict::Fail, findings.verdict());

        let mut none = GeoKeys::default();
        let _ = none.push_short(GT_MODEL_TYPE, 0);
        let findings = crs(none, false);
        assert_eq!(vec!["CRS intentionally unspecified"], messages(&findings, CRS));
        assert_eq!(Verdict::Warning, findings.verdict());

        let findings = crs(GeoKeys::default(), false);
        assert_eq!(
            vec!["GEOTIFF tags do not determine a Coordinate Reference System"],
            messages(&findings, CRS)
        );
    }

    #[test]
    fn wave_packets() {
        let mut header = Header {
            version: Version::new(1, 3),
            header_size: 235,
            offset_to_point_data: 235,
            point_data_format: 4,
            point_data_record_length: 57,
            global_encoding: GlobalEncoding(1 | 2),
            start_of_waveform_data_packet_record: 1000,
            ..header()
        };
        let mut points = points();
        points[0].wave_packet_descriptor_index = 1;
        points[1].wave_packet_descriptor_index = 2;
        let findings = check(&header, &points);
        assert_eq!(
            vec![
                "points reference wave packet descriptor with index 1 that does not exist",
                "points reference wave packet descriptor with index 2 that does not exist",
            ],
            messages(&findings, "wave packet descriptor")
        );

        let _ = header
            .wave_packet_descriptors
            .insert(1, WavePacketDescriptor::default());
        let findings = check(&header, &points);
        assert!(messages(&findings, "wave packet descriptor").is_empty());
        assert_eq!(
            vec!["points reference wave packet descriptor with index 2 that does not exist"],
            messages(&findings, "wave packet")
        );
    }
}
