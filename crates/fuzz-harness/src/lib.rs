//! TLE Fuzz Harness
//!
//! Property-based testing infrastructure for the decoder and catalog.
//! Generators synthesize well-formed element sets whose field values are
//! known up front, so decoded records can be checked field by field.
//!
//! # Usage
//!
//! ```rust
//! use fuzz_harness::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn lines_are_full_width(tle in synthetic_tle()) {
//!         prop_assert_eq!(tle.line1().len(), 69);
//!     }
//! }
//! ```

pub mod generators;
pub mod runner;

pub mod prelude {
    pub use crate::generators::*;
    pub use crate::runner::FuzzConfig;
    pub use proptest::prelude::*;
}

// Re-export proptest for convenience
pub use proptest;
