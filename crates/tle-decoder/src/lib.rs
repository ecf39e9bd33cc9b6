//! TLE Decoder
//!
//! Decodes NORAD two-line element sets into typed records. Handles the
//! format's fixed-column layout and its non-standard numeric encodings:
//!
//! - exponent-suffix notation (`-11606-4` is `-0.11606e-4`)
//! - implied leading decimal point (`0006703` is `0.0006703`)
//! - omitted leading zero (`-.00002182`)
//! - two-digit years, pivoted at [`numeric::YEAR_PIVOT`]
//! - fractional day-of-year epochs
//!
//! ```
//! let record = tle_decoder::decode(
//!     "ISS (ZARYA)",
//!     "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927",
//!     "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537",
//! )?;
//! assert_eq!(record.elements.eccentricity, 0.0006703);
//! # Ok::<(), tle_decoder::DecodeError>(())
//! ```

pub mod columns;
pub mod decode;
pub mod error;
pub mod numeric;
pub mod propagation;
pub mod record;

pub use decode::{decode, decode_with, DecodeOptions};
pub use error::{DecodeError, NumericError, Result, TleLine};
pub use numeric::{decode_exponential, decode_implied_decimal, expand_two_digit_year};
pub use record::{ElementSetInfo, InternationalDesignator, KeplerianElements, OrbitalElementRecord};
