//! Satellite Catalog
//!
//! Builds an in-memory, name-keyed catalog of decoded element sets from a
//! flat TLE listing (name line, line 1, line 2, repeated).
//!
//! The default build is all-or-nothing: the first triple that fails to
//! decode aborts it. [`BuildPolicy::SkipMalformed`] trades that for a
//! partial catalog with a `warn` per rejected triple.

pub mod catalog;
pub mod config;
pub mod error;
pub mod source;

pub use catalog::{triplets, SatelliteCatalog, TleTriplet};
pub use config::{BuildPolicy, CatalogConfig};
pub use error::{CatalogError, Result};
pub use source::{FileSource, LineSource, MemorySource};
pub use tle_decoder::{DecodeOptions, OrbitalElementRecord};
