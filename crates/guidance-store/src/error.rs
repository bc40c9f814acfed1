//! Error types for persistence
//!
//! None of these are fatal to a session. Local failures mean the snapshot
//! could not be read or written; remote failures mean the mirror is out of
//! sync.

use std::path::PathBuf;

/// Persistence error
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Snapshot file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Stored document is not valid JSON for its type
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Remote request could not be sent or its body read
    #[error("remote transport failed: {0}")]
    RemoteTransport(#[source] reqwest::Error),

    /// Remote request exceeded its timeout
    #[error("remote request timed out: {0}")]
    RemoteTimeout(#[source] reqwest::Error),

    /// Remote answered with a non-success status
    #[error("remote returned {status} for {url}")]
    RemoteStatus {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Mirror write failed after the local write succeeded
    #[error("remote sync failed: {0}")]
    RemoteSync(#[source] Box<PersistenceError>),
}

impl PersistenceError {
    /// Create an I/O error for `path`
    #[inline]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Failure of the remote side only; local state is intact
    #[inline]
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::RemoteTransport(_)
                | Self::RemoteTimeout(_)
                | Self::RemoteStatus { .. }
                | Self::RemoteSync(_)
        )
    }

    /// Reclassify as a remote failure
    #[must_use]
    pub fn into_remote(self) -> Self {
        if self.is_remote() {
            self
        } else {
            Self::RemoteSync(Box::new(self))
        }
    }
}

impl From<reqwest::Error> for PersistenceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::RemoteTimeout(e)
        } else {
            Self::RemoteTransport(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_local() {
        let err = PersistenceError::io("snap.json", std::io::Error::other("disk full"));
        assert!(!err.is_remote());
        assert!(err.to_string().contains("snap.json"));
    }

    #[test]
    fn status_errors_are_remote() {
        let err = PersistenceError::RemoteStatus {
            status: 503,
            url: "http://host/bucket/registry".into(),
        };
        assert!(err.is_remote());
        assert_eq!(err.to_string(), "remote returned 503 for http://host/bucket/registry");
    }

    #[test]
    fn into_remote_wraps_local_errors_once() {
        let err = PersistenceError::io("x", std::io::Error::other("boom")).into_remote();
        assert!(err.is_remote());
        assert!(matches!(err, PersistenceError::RemoteSync(_)));

        let err = err.into_remote();
        let PersistenceError::RemoteSync(inner) = err else {
            panic!("expected RemoteSync");
        };
        assert!(matches!(*inner, PersistenceError::Io { .. }));
    }
}
