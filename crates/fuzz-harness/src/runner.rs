//! Fuzz run configuration
//!
//! Case counts can be raised for long soak runs without touching the tests:
//! `TLE_FUZZ_CASES=100000 cargo test -p fuzz-harness`.

use proptest::test_runner::Config;

/// Environment variable overriding the number of cases per property
pub const CASES_ENV: &str = "TLE_FUZZ_CASES";

/// Fuzz test configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzConfig {
    /// Number of test cases to run
    pub cases: u32,
    /// Maximum shrink iterations on failure
    pub max_shrink_iters: u32,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl FuzzConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with `cases` taken from [`CASES_ENV`] when it parses
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(CASES_ENV).ok().and_then(|v| v.parse().ok()) {
            Some(cases) => config.cases(cases),
            None => config,
        }
    }

    pub fn cases(mut self, n: u32) -> Self {
        self.cases = n;
        self
    }

    pub fn max_shrink_iters(mut self, n: u32) -> Self {
        self.max_shrink_iters = n;
        self
    }

    /// Generate proptest config from this
    pub fn to_proptest_config(&self) -> Config {
        let mut config = Config::default();
        config.cases = self.cases;
        config.max_shrink_iters = self.max_shrink_iters;
        config
    }
}
