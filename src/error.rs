use std::{fmt, io, path::PathBuf};

/// Errors raised while configuring or running a word count.
///
/// Every error is fatal to the current run.
#[derive(Debug)]
pub enum Error {
    /// The requested report limit is not a non-negative integer.
    InvalidLimit(String),

    /// The input file could not be opened for reading.
    Open { path: PathBuf, source: io::Error },

    /// The size of the input file could not be determined.
    Metadata { path: PathBuf, source: io::Error },

    /// The input contains no bytes.
    EmptyInput,

    /// The input file could not be mapped into memory.
    Map { path: PathBuf, source: io::Error },

    /// Writing or flushing the report failed.
    ///
    /// This happens after the results have been computed and possibly partly
    /// emitted.
    Output(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLimit(v) => write!(f, "invalid limit '{v}' received"),
            Error::Open { path, .. } => {
                write!(f, "cannot open file '{}' for input", path.display())
            }
            Error::Metadata { path, .. } => {
                write!(f, "cannot get the size of file '{}'", path.display())
            }
            Error::EmptyInput => write!(f, "file is empty, nothing to do"),
            Error::Map { path, .. } => write!(f, "cannot map file '{}'", path.display()),
            Error::Output(_) => write!(f, "cannot write report"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { source, .. }
            | Error::Metadata { source, .. }
            | Error::Map { source, .. }
            | Error::Output(source) => Some(source),
            Error::InvalidLimit(_) | Error::EmptyInput => None,
        }
    }
}

/// Output is the only stage that deals in bare I/O errors; input errors carry
/// the path they relate to.
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Output(err)
    }
}
