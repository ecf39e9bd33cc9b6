//! TLE generators for property-based testing
//!
//! Numeric fields are generated as integers in the field's smallest unit and
//! formatted into fixed columns, so the expected decoded value is known
//! exactly without going through float formatting.

use proptest::prelude::*;

// ============================================================================
// Line 1 Fields
// ============================================================================

/// Display name; never starts or ends with whitespace
pub fn satellite_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9 ()-]{0,18}[A-Z0-9)]"
}

/// Catalog number: five digits, or a letter then four digits
pub fn catalog_number() -> impl Strategy<Value = String> {
    "[0-9A-Z][0-9]{4}"
}

pub fn classification() -> impl Strategy<Value = char> {
    prop_oneof![Just('U'), Just('C'), Just('S')]
}

pub fn two_digit_year() -> impl Strategy<Value = u32> {
    0u32..100
}

pub fn launch_number() -> impl Strategy<Value = u16> {
    1u16..=999
}

pub fn piece() -> impl Strategy<Value = String> {
    "[A-Z]{1,3}"
}

/// Epoch: two-digit year, whole day, eight fractional digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochField {
    pub year: u32,
    pub day: u32,
    pub fraction: u32,
}

impl EpochField {
    /// Columns 19-32
    pub fn text(&self) -> String {
        format!("{:02}{:03}.{:08}", self.year, self.day, self.fraction)
    }

    /// Offset from January 1 in nanoseconds, exact
    pub fn offset_nanos(&self) -> i64 {
        // 1e-8 day is 864 us
        self.day as i64 * 86_400_000_000_000 + self.fraction as i64 * 864_000
    }
}

pub fn epoch_field() -> impl Strategy<Value = EpochField> {
    (two_digit_year(), 1u32..=365, 0u32..100_000_000)
        .prop_map(|(year, day, fraction)| EpochField {
            year,
            day,
            fraction,
        })
}

/// Signed decimal with the leading zero dropped, e.g. `-.00002182`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadingPointField {
    pub negative: bool,
    /// Units of 1e-8
    pub digits: u32,
}

impl LeadingPointField {
    /// 10 columns
    pub fn text(&self) -> String {
        let sign = if self.negative { '-' } else { ' ' };
        format!("{}.{:08}", sign, self.digits)
    }

    pub fn value(&self) -> f64 {
        let magnitude = self.digits as f64 / 1e8;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

pub fn leading_point_field() -> impl Strategy<Value = LeadingPointField> {
    (any::<bool>(), 0u32..100_000_000)
        .prop_map(|(negative, digits)| LeadingPointField { negative, digits })
}

/// Exponent-suffix field, e.g. `-11606-4`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentField {
    pub negative: bool,
    /// Five mantissa digits after an assumed `0.`
    pub mantissa: u32,
    /// -9 to 9
    pub exponent: i32,
}

impl ExponentField {
    /// 8 columns
    pub fn text(&self) -> String {
        let sign = if self.negative { '-' } else { ' ' };
        let exponent_sign = if self.exponent <= 0 { '-' } else { '+' };
        format!(
            "{}{:05}{}{}",
            sign,
            self.mantissa,
            exponent_sign,
            self.exponent.abs()
        )
    }

    /// Approximate value; compare with a relative tolerance
    pub fn value(&self) -> f64 {
        let magnitude = self.mantissa as f64 * 10f64.powi(self.exponent - 5);
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

pub fn exponent_field() -> impl Strategy<Value = ExponentField> {
    (any::<bool>(), 0u32..100_000, -9i32..=9).prop_map(|(negative, mantissa, exponent)| {
        ExponentField {
            negative,
            mantissa,
            exponent,
        }
    })
}

pub fn element_set_number() -> impl Strategy<Value = u16> {
    0u16..10_000
}

// ============================================================================
// Line 2 Fields
// ============================================================================

/// Angle in units of 1e-4 degree, below `max_deg`
pub fn angle(max_deg: u32) -> impl Strategy<Value = u32> {
    0u32..max_deg * 10_000
}

/// Eccentricity in units of 1e-7
pub fn eccentricity() -> impl Strategy<Value = u32> {
    0u32..10_000_000
}

/// Mean motion in units of 1e-8 rev/day, up to 17 rev/day
pub fn mean_motion() -> impl Strategy<Value = u32> {
    0u32..=1_700_000_000
}

pub fn rev_number() -> impl Strategy<Value = u32> {
    0u32..100_000
}

// ============================================================================
// Complete Element Sets
// ============================================================================

/// A well-formed element set with known field values
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticTle {
    pub name: String,
    pub catalog_number: String,
    pub classification: char,
    pub designator_year: u32,
    pub launch_number: u16,
    pub piece: String,
    pub epoch: EpochField,
    pub mean_motion_dot: LeadingPointField,
    pub mean_motion_ddot: ExponentField,
    pub bstar: ExponentField,
    pub element_set_number: u16,
    /// 1e-4 degree
    pub inclination: u32,
    /// 1e-4 degree
    pub raan: u32,
    /// 1e-7
    pub eccentricity: u32,
    /// 1e-4 degree
    pub arg_perigee: u32,
    /// 1e-4 degree
    pub mean_anomaly: u32,
    /// 1e-8 rev/day
    pub mean_motion: u32,
    pub rev_number: u32,
}

/// `DDD.DDDD` from units of 1e-4 degree
fn degrees_text(value: u32) -> String {
    format!("{:3}.{:04}", value / 10_000, value % 10_000)
}

impl SyntheticTle {
    /// Columns 1-68 of line 1
    pub fn line1_body(&self) -> String {
        format!(
            "1 {}{} {:02}{:03}{:<3} {} {} {} {} 0 {:>4}",
            self.catalog_number,
            self.classification,
            self.designator_year,
            self.launch_number,
            self.piece,
            self.epoch.text(),
            self.mean_motion_dot.text(),
            self.mean_motion_ddot.text(),
            self.bstar.text(),
            self.element_set_number,
        )
    }

    /// Columns 1-68 of line 2
    pub fn line2_body(&self) -> String {
        format!(
            "2 {} {} {} {:07} {} {} {:2}.{:08}{:5}",
            self.catalog_number,
            degrees_text(self.inclination),
            degrees_text(self.raan),
            self.eccentricity,
            degrees_text(self.arg_perigee),
            degrees_text(self.mean_anomaly),
            self.mean_motion / 100_000_000,
            self.mean_motion % 100_000_000,
            self.rev_number,
        )
    }

    /// Line 1 with checksum (69 columns)
    pub fn line1(&self) -> String {
        let body = self.line1_body();
        format!("{}{}", body, checksum_digit(&body))
    }

    /// Line 2 with checksum (69 columns)
    pub fn line2(&self) -> String {
        let body = self.line2_body();
        format!("{}{}", body, checksum_digit(&body))
    }

    /// Name line, line 1, line 2
    pub fn lines(&self) -> [String; 3] {
        [self.name.clone(), self.line1(), self.line2()]
    }

    /// Expected decoded inclination: the decoder reads columns 10-17, so the
    /// hundreds digit is lost
    pub fn inclination_deg(&self) -> f64 {
        (self.inclination % 1_000_000) as f64 / 1e4
    }

    pub fn raan_deg(&self) -> f64 {
        self.raan as f64 / 1e4
    }

    pub fn eccentricity_value(&self) -> f64 {
        self.eccentricity as f64 / 1e7
    }

    pub fn arg_perigee_deg(&self) -> f64 {
        self.arg_perigee as f64 / 1e4
    }

    pub fn mean_anomaly_deg(&self) -> f64 {
        self.mean_anomaly as f64 / 1e4
    }

    pub fn mean_motion_rev_per_day(&self) -> f64 {
        self.mean_motion as f64 / 1e8
    }
}

pub fn synthetic_tle() -> impl Strategy<Value = SyntheticTle> {
    let identity = (
        satellite_name(),
        catalog_number(),
        classification(),
        two_digit_year(),
        launch_number(),
        piece(),
    );
    let line1 = (
        epoch_field(),
        leading_point_field(),
        exponent_field(),
        exponent_field(),
        element_set_number(),
    );
    let line2 = (
        angle(180),
        angle(360),
        eccentricity(),
        angle(360),
        angle(360),
        mean_motion(),
        rev_number(),
    );

    (identity, line1, line2).prop_map(
        |(
            (name, catalog_number, classification, designator_year, launch_number, piece),
            (epoch, mean_motion_dot, mean_motion_ddot, bstar, element_set_number),
            (inclination, raan, eccentricity, arg_perigee, mean_anomaly, mean_motion, rev_number),
        )| SyntheticTle {
            name,
            catalog_number,
            classification,
            designator_year,
            launch_number,
            piece,
            epoch,
            mean_motion_dot,
            mean_motion_ddot,
            bstar,
            element_set_number,
            inclination,
            raan,
            eccentricity,
            arg_perigee,
            mean_anomaly,
            mean_motion,
            rev_number,
        },
    )
}

/// Printable ASCII of arbitrary width, for garbage-in tests
pub fn printable_line() -> impl Strategy<Value = String> {
    "[ -~]{0,80}"
}

/// TLE checksum digit over columns 1-68
///
/// Written independently of the decoder's checksum so generated lines check it.
pub fn checksum_digit(line: &str) -> u32 {
    let sum: u32 = line
        .chars()
        .take(68)
        .map(|c| match c {
            '0'..='9' => c.to_digit(10).unwrap_or(0),
            '-' => 1,
            _ => 0,
        })
        .sum();
    sum % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn lines_are_full_width(tle in synthetic_tle()) {
            prop_assert_eq!(tle.line1_body().len(), 68);
            prop_assert_eq!(tle.line2_body().len(), 68);
            prop_assert_eq!(tle.line1().len(), 69);
            prop_assert_eq!(tle.line2().len(), 69);
        }

        #[test]
        fn exponent_text_is_eight_columns(field in exponent_field()) {
            prop_assert_eq!(field.text().len(), 8);
        }
    }

    #[test]
    fn test_epoch_offset_units() {
        let epoch = EpochField {
            year: 0,
            day: 1,
            fraction: 1,
        };
        assert_eq!(epoch.text(), "00001.00000001");
        assert_eq!(epoch.offset_nanos(), 86_400_000_000_000 + 864_000);

        let half = EpochField {
            year: 0,
            day: 0,
            fraction: 50_000_000,
        };
        assert_eq!(half.offset_nanos(), 43_200_000_000_000);
    }

    #[test]
    fn test_expected_inclination_drops_hundreds_digit() {
        let tle = SyntheticTle {
            inclination: 1_516_416,
            ..sample_tle()
        };
        assert_eq!(&tle.line2()[8..16], "151.6416");
        assert_eq!(tle.inclination_deg(), 51.6416);
    }

    fn sample_tle() -> SyntheticTle {
        SyntheticTle {
            name: "ISS (ZARYA)".to_string(),
            catalog_number: "25544".to_string(),
            classification: 'U',
            designator_year: 98,
            launch_number: 67,
            piece: "A".to_string(),
            epoch: EpochField {
                year: 8,
                day: 264,
                fraction: 51_782_528,
            },
            mean_motion_dot: LeadingPointField {
                negative: true,
                digits: 2182,
            },
            mean_motion_ddot: ExponentField {
                negative: false,
                mantissa: 0,
                exponent: 0,
            },
            bstar: ExponentField {
                negative: true,
                mantissa: 11606,
                exponent: -4,
            },
            element_set_number: 292,
            inclination: 516_416,
            raan: 2_474_627,
            eccentricity: 6703,
            arg_perigee: 1_305_360,
            mean_anomaly: 3_250_288,
            mean_motion: 1_572_125_391,
            rev_number: 56353,
        }
    }

    #[test]
    fn test_sample_matches_iss_lines() {
        let tle = sample_tle();
        assert_eq!(
            tle.line1(),
            "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927"
        );
        assert_eq!(
            tle.line2(),
            "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537"
        );
    }

    #[test]
    fn test_iss_checksum() {
        let line = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
        assert_eq!(checksum_digit(line), 7);
    }
}
