use super::error::{AproxError, AproxResult};
use log::debug;
use std::path::{Path, PathBuf};

#[cfg(target_os = "macos")]
const SDK_CANDIDATES: &[&str] = &["Library/Android/sdk/platform-tools/adb"];

#[cfg(target_os = "windows")]
const SDK_CANDIDATES: &[&str] = &["AppData/Local/Android/Sdk/platform-tools/adb.exe"];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const SDK_CANDIDATES: &[&str] = &["Android/Sdk/platform-tools/adb"];

/// Resolves the adb executable. An explicit path wins; otherwise the
/// platform's default SDK location under the home directory is probed.
#[derive(Debug, Clone, Default)]
pub struct BridgeLocator {
    explicit: Option<PathBuf>,
    home: Option<PathBuf>,
}

impl BridgeLocator {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            home: None,
        }
    }

    /// Probe under `home` instead of the current user's home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn locate(&self) -> AproxResult<PathBuf> {
        if let Some(path) = &self.explicit {
            debug!("Using explicit adb path {}", path.display());
            return first_existing(std::slice::from_ref(path));
        }
        let home = match &self.home {
            Some(home) => home.clone(),
            None => homedir::my_home()
                .ok()
                .flatten()
                .ok_or(AproxError::HomeDirectoryNotFound)?,
        };
        first_existing(&sdk_candidates(&home))
    }
}

pub fn sdk_candidates(home: &Path) -> Vec<PathBuf> {
    SDK_CANDIDATES.iter().map(|rel| home.join(rel)).collect()
}

/// Returns the first candidate that is an existing file.
pub fn first_existing(candidates: &[PathBuf]) -> AproxResult<PathBuf> {
    for candidate in candidates {
        debug!("Probing for adb at {}", candidate.display());
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }
    Err(AproxError::BridgeNotFound {
        searched: candidates.to_vec(),
    })
}
