use thiserror::Error;
use tle_decoder::DecodeError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("line count {line_count} is not a multiple of 3")]
    MalformedInput { line_count: usize },
    #[error("failed to decode {name:?} at line {line}: {source}")]
    Decode {
        name: String,
        /// 1-based line number of the name line
        line: usize,
        #[source]
        source: DecodeError,
    },
    #[error("Satellite not found: {0}")]
    SatelliteNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
