use std::fmt;

/// Result type for audex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which explicit marker was involved in a duplicate-session conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMarker {
    Connect,
    Disconnect,
}

impl fmt::Display for SessionMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionMarker::Connect => write!(f, "CONNECT"),
            SessionMarker::Disconnect => write!(f, "DISCONNECT"),
        }
    }
}

/// Error types that can occur while reading or reconstructing an audit log
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// A line did not yield a usable record (wrong field count, non-integer
    /// timestamp, ...)
    Malformed { line: u64, reason: String },

    /// A second CONNECT or DISCONNECT was observed for a session identifier
    /// that already has that bound recorded
    DuplicateSession {
        session_id: String,
        marker: SessionMarker,
        existing: String,
        conflicting: String,
    },
}

impl Error {
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Error::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Malformed { line, reason } => {
                write!(f, "malformed record at line {}: {}", line, reason)
            }
            Error::DuplicateSession {
                session_id,
                marker,
                existing,
                conflicting,
            } => write!(
                f,
                "duplicate {} for session id {}: already recorded {}, got {}",
                marker, session_id, existing, conflicting
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Malformed { .. } | Error::DuplicateSession { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
