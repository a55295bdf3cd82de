//! Result and Error types for the codegen module

/// Type alias for `Result<T, codegen::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `bateman-codegen`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Anything from loading or querying decay data
    #[error(transparent)]
    Data(#[from] bateman_data::Error),

    /// Failure to initialise the terminal logger
    #[error("failed logger initialisation")]
    Logger(#[from] log::SetLoggerError),
}
