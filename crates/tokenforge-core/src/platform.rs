//! Target platforms.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// A platform that generated artifacts can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Web,
    Android,
    Ios,
    Flutter,
}

impl Platform {
    /// Every platform, in the order a run emits them.
    pub const ALL: [Platform; 4] = [
        Platform::Web,
        Platform::Android,
        Platform::Ios,
        Platform::Flutter,
    ];

    /// Lowercase name used on the command line and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Flutter => "flutter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPlatform(s.to_string()))
    }
}

/// The platform argument of a run: one platform or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSelection {
    One(Platform),
    All,
}

impl Default for PlatformSelection {
    fn default() -> Self {
        PlatformSelection::One(Platform::Web)
    }
}

impl PlatformSelection {
    /// Selected platforms in emission order.
    pub fn platforms(&self) -> Vec<Platform> {
        match self {
            PlatformSelection::One(platform) => vec![*platform],
            PlatformSelection::All => Platform::ALL.to_vec(),
        }
    }
}

impl FromStr for PlatformSelection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(PlatformSelection::All);
        }
        s.parse().map(PlatformSelection::One)
    }
}
