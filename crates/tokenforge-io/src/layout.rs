//! Output directories per platform.

use std::path::{Path, PathBuf};

use tokenforge_core::Platform;

/// Where each platform's artifacts go, relative to the store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub web: PathBuf,
    pub android: PathBuf,
    pub ios: PathBuf,
    pub flutter: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            web: PathBuf::from("src/styles"),
            android: PathBuf::from("generated/android"),
            ios: PathBuf::from("generated/ios"),
            flutter: PathBuf::from("generated/flutter"),
        }
    }
}

impl OutputLayout {
    /// Directory for a platform.
    pub fn dir(&self, platform: Platform) -> &Path {
        match platform {
            Platform::Web => &self.web,
            Platform::Android => &self.android,
            Platform::Ios => &self.ios,
            Platform::Flutter => &self.flutter,
        }
    }

    /// Path of a platform artifact.
    pub fn artifact(&self, platform: Platform, file_name: &str) -> PathBuf {
        self.dir(platform).join(file_name)
    }
}
