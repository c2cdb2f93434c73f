use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// Only startup can fail; battery and AC reads degrade to display values
/// instead of producing errors.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("config error: {0}")]
    Config(String),

    #[error("cannot open X display: {0}")]
    Display(String),

    #[error("font load failed: {0}")]
    Font(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = NotifyError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_error_message() {
        let err = NotifyError::Display(":0".into());
        assert_eq!(err.to_string(), "cannot open X display: :0");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: NotifyError = io.into();
        assert!(matches!(err, NotifyError::Io { .. }));
    }
}
