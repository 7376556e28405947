use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for bridge and setting operations.
pub type AproxResult<T> = Result<T, AproxError>;

/// The error type for everything that can abort a setting command.
#[derive(Debug, Error)]
pub enum AproxError {
    #[error(
        "adb executable not found (searched: {}). Install Android Platform Tools or pass --adb <PATH>.",
        display_paths(.searched)
    )]
    BridgeNotFound { searched: Vec<PathBuf> },

    #[error("Failed to determine home directory for locating adb")]
    HomeDirectoryNotFound,

    #[error("Failed to run '{program}': {source}")]
    Io {
        program: String,
        source: std::io::Error,
    },

    #[error("Device command '{command}' failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("{message}")]
    NetworkResolution { message: String },
}

impl AproxError {
    /// First line of the message, trimmed. This is what the operator sees when
    /// `dns` cannot resolve the network identifier.
    pub fn summary(&self) -> String {
        self.to_string()
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_keeps_first_line_only() {
        let err = AproxError::NetworkResolution {
            message: "  su: not found \nsecond line".to_string(),
        };
        assert_eq!(err.summary(), "su: not found");
    }

    #[test]
    fn bridge_not_found_lists_searched_paths() {
        let err = AproxError::BridgeNotFound {
            searched: vec![PathBuf::from("/a/adb"), PathBuf::from("/b/adb")],
        };
        let msg = err.to_string();
        assert!(msg.contains("/a/adb, /b/adb"), "got: {msg}");
    }
}
