//! Report error types.

use std::path::PathBuf;

/// Errors raised by the report generators.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A screenshot could not be decoded as an image.
    #[error("Cannot decode image {}: {reason}", .path.display())]
    ImageDecode { path: PathBuf, reason: String },

    /// A rename would produce a name that is not a plain file name.
    #[error("Invalid rename target {target:?} for {file}")]
    InvalidTarget { file: String, target: String },

    /// A role name did not match any known role.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// The configuration holds a value the generators cannot use.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A screenshot could not be read from disk.
    #[error("Cannot read image {}: {source}", .path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_decode_message_names_file() {
        let err = ReportError::ImageDecode {
            path: PathBuf::from("images/giangvien/broken.png"),
            reason: "bad header".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("images/giangvien/broken.png"));
        assert!(msg.contains("bad header"));
    }

    #[test]
    fn test_invalid_target_message() {
        let err = ReportError::InvalidTarget {
            file: "a.png".into(),
            target: "x/y.png".into(),
        };
        assert_eq!(err.to_string(), "Invalid rename target \"x/y.png\" for a.png");
    }

    #[test]
    fn test_read_image_message_names_file() {
        let err = ReportError::ReadImage {
            path: PathBuf::from("images/quantrivien/gone.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("images/quantrivien/gone.png"));
        assert!(msg.contains("gone"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
