//! Error types for grid layout and report generation.
//!
//! Every failure is returned to the caller as a recoverable result; nothing
//! in this crate panics or exits on bad input. Lookup failures in particular
//! are ordinary errors the caller decides policy for.

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring a report or placing content.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Grid parameters are missing or degenerate (column count or gutter
    /// width of zero), so column widths cannot be derived.
    #[error("incomplete grid: column count and gutter width are required")]
    IncompleteGrid,

    /// No block registered under the given name.
    #[error("block not found in report: {0}")]
    UnknownBlock(String),

    /// No style registered under the given name.
    #[error("style not found in report: {0}")]
    UnknownStyle(String),

    /// Source font file absent from the font source directory.
    #[error("source font file not found: {0}")]
    FontSourceMissing(String),

    /// A compiled font file was named directly but is absent from the cache.
    #[error("compiled font file not found in cache: {0}")]
    FontCacheMissing(String),

    /// The requested encoding is not in the supported set.
    #[error("encoding not supported: {0}")]
    UnsupportedEncoding(String),

    /// The engine's font compiler reported a failure.
    #[error("font compilation failed: {0}")]
    FontCompile(String),

    /// An embedded encoding map failed to decode.
    #[error("encoding map decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// A layout configuration document failed to parse.
    #[error("layout config parse error: {0}")]
    LayoutConfig(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_block_error() {
        let err = Error::UnknownBlock("header".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("block not found"));
        assert!(msg.contains("header"));
    }

    #[test]
    fn test_unsupported_encoding_error() {
        let err = Error::UnsupportedEncoding("cp866".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("not supported"));
        assert!(msg.contains("cp866"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
