use alloc::string::String;
use enough::StopReason;

/// Errors from PPM decoding, encoding, and transform selection.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PpmError {
    #[error("unsupported format")]
    UnrecognizedFormat,

    #[error("{0}")]
    InvalidHeader(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    /// End of input while skipping noise or reading a header token.
    #[error("unexpected end of input in header")]
    HeaderEof,

    #[error("truncated pixel data: need {needed} bytes, got {actual}")]
    TruncatedData { needed: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse error category, for drivers that only care where a failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file could not be opened, read short, or write failed.
    Io,
    /// Wrong magic, bad header field, or pixel data that violates the header.
    Format,
    /// Unrecognized transform selection or missing transform parameter.
    Operation,
    /// A [`enough::Stop`] token asked the codec to stop.
    Cancelled,
}

impl PpmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TruncatedData { .. } => ErrorKind::Io,
            #[cfg(feature = "std")]
            Self::Io(_) => ErrorKind::Io,
            Self::UnrecognizedFormat
            | Self::InvalidHeader(_)
            | Self::InvalidData(_)
            | Self::HeaderEof
            | Self::DimensionsTooLarge { .. }
            | Self::LimitExceeded(_) => ErrorKind::Format,
            Self::UnknownOperation(_) | Self::MissingParameter(_) => ErrorKind::Operation,
            Self::Cancelled(_) => ErrorKind::Cancelled,
        }
    }

    /// Process exit status for a driver: every failure exits 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<StopReason> for PpmError {
    fn from(r: StopReason) -> Self {
        PpmError::Cancelled(r)
    }
}
