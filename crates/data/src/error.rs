//! Result and Error types for the decay data module

/// Type alias for `Result<T, data::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `bateman-data`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to deserialise a decay library
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Element symbol with no known proton number
    #[error("unknown element symbol \"{symbol:?}\"")]
    UnknownElement { symbol: String },

    /// Generic error type for nom parser results
    #[error("parser failed")]
    ParseError(String),
}
