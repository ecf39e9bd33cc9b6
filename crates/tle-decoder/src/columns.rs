//! Fixed column layout of the NORAD two-line element format
//!
//! Offsets are 0-indexed byte ranges, half-open, into a line that has been
//! trimmed of surrounding whitespace. Column numbers in the comments are the
//! 1-based columns of the published format.

use std::ops::Range;

/// Minimum trimmed width needed to extract every field (columns 1-68)
pub const MIN_LINE_WIDTH: usize = 68;

/// Column 1: line number
pub const LINE_NUMBER: usize = 0;

/// Column 69: modulo-10 checksum
pub const CHECKSUM: usize = 68;

/// Line 1: identity, epoch, drag terms
pub mod line1 {
    use super::Range;

    /// Columns 3-7
    pub const CATALOG_NUMBER: Range<usize> = 2..7;
    /// Column 8
    pub const CLASSIFICATION: usize = 7;
    /// Columns 10-11
    pub const DESIGNATOR_YEAR: Range<usize> = 9..11;
    /// Columns 12-14
    pub const DESIGNATOR_LAUNCH: Range<usize> = 11..14;
    /// Columns 15-17
    pub const DESIGNATOR_PIECE: Range<usize> = 14..17;
    /// Columns 19-20
    pub const EPOCH_YEAR: Range<usize> = 18..20;
    /// Columns 21-32
    pub const EPOCH_DAY: Range<usize> = 20..32;
    /// Columns 34-43
    pub const MEAN_MOTION_DOT: Range<usize> = 33..43;
    /// Columns 45-52
    pub const MEAN_MOTION_DDOT: Range<usize> = 44..52;
    /// Columns 54-61
    pub const BSTAR: Range<usize> = 53..61;
    /// Column 63
    pub const EPHEMERIS_TYPE: usize = 62;
    /// Columns 65-68
    pub const ELEMENT_SET_NUMBER: Range<usize> = 64..68;
}

/// Line 2: Keplerian elements
pub mod line2 {
    use super::Range;

    /// Columns 10-17
    ///
    /// One column right of NORAD's 9-16. The hundreds digit of an inclination
    /// of 100 degrees or more falls outside the slice, so `151.6416` decodes
    /// as `51.6416`. Possible bug; kept so existing consumers see the same
    /// values.
    pub const INCLINATION: Range<usize> = 9..17;
    /// Columns 18-25
    pub const RAAN: Range<usize> = 17..25;
    /// Columns 27-33
    pub const ECCENTRICITY: Range<usize> = 26..33;
    /// Columns 35-42
    pub const ARG_PERIGEE: Range<usize> = 34..42;
    /// Columns 44-51
    pub const MEAN_ANOMALY: Range<usize> = 43..51;
    /// Columns 53-63
    pub const MEAN_MOTION: Range<usize> = 52..63;
    /// Columns 64-68
    pub const REV_NUMBER: Range<usize> = 63..68;
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISS_LINE1: &str =
        "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS_LINE2: &str =
        "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn test_line1_slices() {
        assert_eq!(&ISS_LINE1[line1::CATALOG_NUMBER], "25544");
        assert_eq!(&ISS_LINE1[line1::CLASSIFICATION..=line1::CLASSIFICATION], "U");
        assert_eq!(&ISS_LINE1[line1::DESIGNATOR_YEAR], "98");
        assert_eq!(&ISS_LINE1[line1::DESIGNATOR_LAUNCH], "067");
        assert_eq!(&ISS_LINE1[line1::DESIGNATOR_PIECE], "A  ");
        assert_eq!(&ISS_LINE1[line1::EPOCH_YEAR], "08");
        assert_eq!(&ISS_LINE1[line1::EPOCH_DAY], "264.51782528");
        assert_eq!(&ISS_LINE1[line1::MEAN_MOTION_DOT], "-.00002182");
        assert_eq!(&ISS_LINE1[line1::MEAN_MOTION_DDOT], " 00000-0");
        assert_eq!(&ISS_LINE1[line1::BSTAR], "-11606-4");
        assert_eq!(&ISS_LINE1[line1::EPHEMERIS_TYPE..=line1::EPHEMERIS_TYPE], "0");
        assert_eq!(&ISS_LINE1[line1::ELEMENT_SET_NUMBER], " 292");
    }

    #[test]
    fn test_line2_slices() {
        assert_eq!(&ISS_LINE2[line2::INCLINATION], "51.6416 ");
        assert_eq!(&ISS_LINE2[line2::RAAN], "247.4627");
        assert_eq!(&ISS_LINE2[line2::ECCENTRICITY], "0006703");
        assert_eq!(&ISS_LINE2[line2::ARG_PERIGEE], "130.5360");
        assert_eq!(&ISS_LINE2[line2::MEAN_ANOMALY], "325.0288");
        assert_eq!(&ISS_LINE2[line2::MEAN_MOTION], "15.72125391");
        assert_eq!(&ISS_LINE2[line2::REV_NUMBER], "56353");
    }

    #[test]
    fn test_fields_fit_minimum_width() {
        let ends = [
            line1::ELEMENT_SET_NUMBER.end,
            line1::EPHEMERIS_TYPE + 1,
            line2::REV_NUMBER.end,
            line2::MEAN_MOTION.end,
        ];
        assert!(ends.iter().all(|&end| end <= MIN_LINE_WIDTH));
        assert_eq!(CHECKSUM, MIN_LINE_WIDTH);
    }
}
