use std::collections::HashMap;

use tle_decoder::{decode_with, OrbitalElementRecord};
use tracing::{debug, info, warn};

use crate::config::{BuildPolicy, CatalogConfig};
use crate::source::LineSource;
use crate::{CatalogError, Result};

/// One (name, line 1, line 2) group, trimmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TleTriplet<'a> {
    pub name: &'a str,
    pub line1: &'a str,
    pub line2: &'a str,
}

/// Split a flat listing into consecutive, non-overlapping triples
pub fn triplets<S: AsRef<str>>(
    lines: &[S],
) -> Result<impl Iterator<Item = TleTriplet<'_>> + '_> {
    if lines.len() % 3 != 0 {
        return Err(CatalogError::MalformedInput {
            line_count: lines.len(),
        });
    }

    Ok(lines.chunks_exact(3).map(|chunk| TleTriplet {
        name: chunk[0].as_ref().trim(),
        line1: chunk[1].as_ref().trim(),
        line2: chunk[2].as_ref().trim(),
    }))
}

/// Decoded element sets keyed by satellite name
#[derive(Debug, Clone, Default)]
pub struct SatelliteCatalog {
    satellites: HashMap<String, OrbitalElementRecord>,
}

impl SatelliteCatalog {
    /// Build with the default configuration: fail fast, no strict checks
    pub fn build<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        Self::build_with(lines, &CatalogConfig::default())
    }

    /// Build from a flat listing whose length is a multiple of 3.
    ///
    /// A repeated name keeps the last record decoded for it.
    pub fn build_with<S: AsRef<str>>(lines: &[S], config: &CatalogConfig) -> Result<Self> {
        let mut satellites = HashMap::with_capacity(lines.len() / 3);
        let mut skipped = 0;

        for (index, triplet) in triplets(lines)?.enumerate() {
            let line = index * 3 + 1;
            match decode_with(triplet.name, triplet.line1, triplet.line2, &config.decode) {
                Ok(record) => {
                    debug!(name = triplet.name, line, "Decoded element set");
                    if satellites.insert(triplet.name.to_string(), record).is_some() {
                        debug!(name = triplet.name, "Replaced earlier element set");
                    }
                }
                Err(source) => match config.policy {
                    BuildPolicy::FailFast => {
                        return Err(CatalogError::Decode {
                            name: triplet.name.to_string(),
                            line,
                            source,
                        });
                    }
                    BuildPolicy::SkipMalformed => {
                        warn!(name = triplet.name, line, "Skipping element set: {}", source);
                        skipped += 1;
                    }
                },
            }
        }

        info!(
            "Loaded {} satellites ({} skipped)",
            satellites.len(),
            skipped
        );

        Ok(Self { satellites })
    }

    /// Read every line from `source` and build
    pub fn from_source(source: &impl LineSource, config: &CatalogConfig) -> Result<Self> {
        let lines = source.read_lines()?;
        Self::build_with(&lines, config)
    }

    /// Exact-match lookup
    pub fn get(&self, name: &str) -> Result<&OrbitalElementRecord> {
        self.satellites
            .get(name)
            .ok_or_else(|| CatalogError::SatelliteNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.satellites.contains_key(name)
    }

    /// Stored names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.satellites.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitalElementRecord> {
        self.satellites.values()
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }
}
