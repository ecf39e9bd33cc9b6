//! Field extraction for a (name, line 1, line 2) triple

use crate::columns::{self, line1, line2};
use crate::error::{DecodeError, NumericError, Result, TleLine};
use crate::numeric::{
    checksum_digit, decode_exponential, decode_implied_decimal, decode_leading_point,
    epoch_from_parts, expand_two_digit_year, parse_integer, parse_real,
};
use crate::record::{ElementSetInfo, InternationalDesignator, KeplerianElements, OrbitalElementRecord};

/// Optional structural checks. Both are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Column 1 must read `1` on line 1 and `2` on line 2
    pub verify_line_numbers: bool,
    /// Column 69 must hold the modulo-10 checksum of columns 1-68
    pub verify_checksum: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every check enabled
    pub fn strict() -> Self {
        Self {
            verify_line_numbers: true,
            verify_checksum: true,
        }
    }

    pub fn verify_line_numbers(mut self, enabled: bool) -> Self {
        self.verify_line_numbers = enabled;
        self
    }

    pub fn verify_checksum(mut self, enabled: bool) -> Self {
        self.verify_checksum = enabled;
        self
    }
}

/// Decode one element set with default options
pub fn decode(name: &str, line1: &str, line2: &str) -> Result<OrbitalElementRecord> {
    decode_with(name, line1, line2, &DecodeOptions::default())
}

/// Decode one element set. Any field failure rejects the whole record.
pub fn decode_with(
    name: &str,
    line1: &str,
    line2: &str,
    options: &DecodeOptions,
) -> Result<OrbitalElementRecord> {
    let line1 = checked_line(line1, TleLine::One, options)?;
    let line2 = checked_line(line2, TleLine::Two, options)?;

    Ok(OrbitalElementRecord {
        name: name.to_string(),
        info: decode_info(line1)?,
        elements: decode_elements(line2)?,
    })
}

fn checked_line<'a>(raw: &'a str, line: TleLine, options: &DecodeOptions) -> Result<&'a str> {
    let trimmed = raw.trim();

    // Byte offsets below are only valid on ASCII text
    if !trimmed.is_ascii() {
        return Err(DecodeError::MalformedLine {
            line,
            len: trimmed.chars().count(),
            reason: "contains non-ASCII characters",
        });
    }
    if trimmed.len() < columns::MIN_LINE_WIDTH {
        return Err(DecodeError::MalformedLine {
            line,
            len: trimmed.len(),
            reason: "too short for fixed-column extraction",
        });
    }

    if options.verify_line_numbers {
        let found = trimmed.as_bytes().get(columns::LINE_NUMBER).map(|&b| b as char);
        let expected = line.expected_number();
        if found != Some(expected) {
            return Err(DecodeError::LineNumber {
                line,
                expected,
                found,
            });
        }
    }

    if options.verify_checksum {
        let expected = checksum_digit(trimmed);
        let found = trimmed.as_bytes().get(columns::CHECKSUM).map(|&b| b as char);
        if found.and_then(|c| c.to_digit(10)) != Some(expected) {
            return Err(DecodeError::Checksum {
                line,
                expected,
                found,
            });
        }
    }

    Ok(trimmed)
}

fn field<T>(
    name: &'static str,
    raw: &str,
    decode: impl FnOnce(&str) -> std::result::Result<T, NumericError>,
) -> Result<T> {
    decode(raw).map_err(|source| DecodeError::NumericFormat {
        field: name,
        source,
    })
}

fn column(line: &str, index: usize) -> char {
    line.as_bytes()[index] as char
}

fn two_digit_year(raw: &str) -> std::result::Result<i32, NumericError> {
    parse_integer::<u32>(raw).and_then(expand_two_digit_year)
}

fn decode_info(line: &str) -> Result<ElementSetInfo> {
    let designator = InternationalDesignator {
        year: field("designator.year", &line[line1::DESIGNATOR_YEAR], two_digit_year)?,
        launch_number: field(
            "designator.launch_number",
            &line[line1::DESIGNATOR_LAUNCH],
            parse_integer,
        )?,
        piece: line[line1::DESIGNATOR_PIECE].trim().to_string(),
    };

    let epoch_year = field("epoch_year", &line[line1::EPOCH_YEAR], two_digit_year)?;
    let epoch = field("epoch_day", &line[line1::EPOCH_DAY], |raw| {
        parse_real(raw).and_then(|day| epoch_from_parts(epoch_year, day))
    })?;

    Ok(ElementSetInfo {
        catalog_number: line[line1::CATALOG_NUMBER].to_string(),
        classification: column(line, line1::CLASSIFICATION),
        designator,
        epoch,
        half_mean_motion_dot: field(
            "half_mean_motion_dot",
            &line[line1::MEAN_MOTION_DOT],
            decode_leading_point,
        )?,
        sixth_mean_motion_ddot: field(
            "sixth_mean_motion_ddot",
            &line[line1::MEAN_MOTION_DDOT],
            decode_exponential,
        )?,
        bstar_drag_term: field("bstar_drag_term", &line[line1::BSTAR], decode_exponential)?,
        ephemeris_type: column(line, line1::EPHEMERIS_TYPE),
        element_set_number: line[line1::ELEMENT_SET_NUMBER].to_string(),
    })
}

fn decode_elements(line: &str) -> Result<KeplerianElements> {
    Ok(KeplerianElements {
        inclination_deg: field("inclination_deg", &line[line2::INCLINATION], parse_real)?,
        raan_deg: field("raan_deg", &line[line2::RAAN], parse_real)?,
        eccentricity: field(
            "eccentricity",
            &line[line2::ECCENTRICITY],
            decode_implied_decimal,
        )?,
        arg_perigee_deg: field("arg_perigee_deg", &line[line2::ARG_PERIGEE], parse_real)?,
        mean_anomaly_deg: field("mean_anomaly_deg", &line[line2::MEAN_ANOMALY], parse_real)?,
        mean_motion_rev_per_day: field(
            "mean_motion_rev_per_day",
            &line[line2::MEAN_MOTION],
            parse_real,
        )?,
        rev_number_at_epoch: field("rev_number_at_epoch", &line[line2::REV_NUMBER], parse_integer)?,
    })
}
