use std::fmt;
use thiserror::Error;

#[derive(Error)]
pub enum SeedveilError {
    /// Represents a carrier format no codec handles, for example a movie file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// JPEG container io is delegated to the host, see the `JpegContainer` trait
    #[error("No JPEG container codec was supplied for a JPEG carrier")]
    JpegContainerMissing,

    /// Represents a failure when encoding the output image
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read the carrier file
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("An embedding hook is already registered")]
    HookAlreadyRegistered,

    #[error("Hook handle does not match the active registration")]
    StaleHookHandle,
}

impl fmt::Debug for SeedveilError {
    // Use Display for Debug so unwrap() and main() show user-friendly messages
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
