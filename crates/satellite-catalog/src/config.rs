use tle_decoder::DecodeOptions;

/// What a build does with a triple that fails to decode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildPolicy {
    /// Abort on the first bad triple; nothing is stored
    #[default]
    FailFast,
    /// Log the bad triple at `warn` and keep going
    SkipMalformed,
}

/// Catalog build configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub policy: BuildPolicy,
    /// Passed through to the decoder for every triple
    pub decode: DecodeOptions,
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: BuildPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn decode_options(mut self, options: DecodeOptions) -> Self {
        self.decode = options;
        self
    }
}
