use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::bridge::MockBridge;
use crate::core::types::{Permission, PermissionStatus};

pub type ProfileResult<T> = std::result::Result<T, ProfileError>;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("profile assigns a status to a permission outside its availability list: {0}")]
    UndeclaredPermission(Permission),
}

/// Declarative description of a simulated device: which permissions exist
/// and what status each one reports. Feeds a [`MockBridge`] so application
/// flows can run without a real platform behind them.
///
/// Permission tokens are case-sensitive, so profiles are parsed straight
/// from TOML rather than through a key-normalizing configuration layer.
///
/// ```toml
/// available = ["ios.permission.CAMERA", "ios.permission.MICROPHONE"]
///
/// [statuses]
/// "ios.permission.CAMERA" = "granted"
/// "ios.permission.MICROPHONE" = "denied"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationProfile {
    #[serde(default)]
    pub available: Vec<Permission>,
    #[serde(default)]
    pub statuses: HashMap<Permission, PermissionStatus>,
}

impl SimulationProfile {
    pub fn load(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> ProfileResult<Self> {
        let profile: Self = toml::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> ProfileResult<()> {
        for permission in self.statuses.keys() {
            if !self.available.contains(permission) {
                return Err(ProfileError::UndeclaredPermission(permission.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn into_bridge(self) -> MockBridge {
        let bridge = MockBridge::new().with_available(self.available);
        self.statuses
            .into_iter()
            .fold(bridge, |bridge, (permission, status)| {
                bridge.with_status(permission, status)
            })
    }
}
