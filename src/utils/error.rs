use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for host-level operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Rustyll operations
#[derive(Debug)]
pub enum RustyllError {
    /// IO error wrapper
    Io(io::Error),
    /// IO error while reading a specific source file
    File { path: PathBuf, source: io::Error },
    /// Configuration error
    Config(String),
    /// Front matter parsing error
    FrontMatter(String),
    /// Markdown processing error
    Markdown(String),
    /// No markdown converter is registered with the site
    ConverterMissing,
    /// A generator failed
    Generator(String),
    /// Generic error message
    Generic(String),
}

impl RustyllError {
    /// Wrap an IO error with the path that was being read
    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RustyllError::File { path: path.into(), source }
    }
}

impl fmt::Display for RustyllError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RustyllError::Io(err) => write!(f, "IO error: {}", err),
            RustyllError::File { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            RustyllError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RustyllError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            RustyllError::Markdown(msg) => write!(f, "Markdown error: {}", msg),
            RustyllError::ConverterMissing => {
                write!(f, "No markdown converter is registered with the site")
            }
            RustyllError::Generator(msg) => write!(f, "Generator error: {}", msg),
            RustyllError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for RustyllError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RustyllError::Io(err) => Some(err),
            RustyllError::File { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for RustyllError {
    fn from(err: io::Error) -> Self {
        RustyllError::Io(err)
    }
}

impl From<String> for RustyllError {
    fn from(msg: String) -> Self {
        RustyllError::Generic(msg)
    }
}

impl From<&str> for RustyllError {
    fn from(msg: &str) -> Self {
        RustyllError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_keeps_source() {
        let err = RustyllError::file(
            "/site/missing.md",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );

        assert_eq!(err.to_string(), "Failed to read /site/missing.md: gone");
        let source = err.source().expect("io source");
        assert_eq!(source.to_string(), "gone");
    }

    #[test]
    fn test_converter_missing_message() {
        let err = RustyllError::ConverterMissing;
        assert!(err.to_string().contains("markdown converter"));
        assert!(err.source().is_none());
    }
}
