//! Seeding error types.

use std::path::PathBuf;

/// Errors that can occur while loading a network file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The file could not be read
    #[error("failed to read network file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid network document
    #[error("invalid network file: {0}")]
    Json(#[from] serde_json::Error),

    /// A route carries an unusable weight
    #[error("route {index} ({from} - {to}): {reason}")]
    InvalidRoute {
        index: usize,
        from: String,
        to: String,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SeedError::InvalidRoute {
            index: 3,
            from: "A".into(),
            to: "B".into(),
            reason: "distance must be a non-negative number",
        };
        assert_eq!(
            err.to_string(),
            "route 3 (A - B): distance must be a non-negative number"
        );

        let err = SeedError::Io {
            path: PathBuf::from("/missing/network.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read network file /missing/network.json: not found"
        );
    }
}
