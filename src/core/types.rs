use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    #[must_use]
    pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub const fn from_static(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Permission {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Permission {
    fn from(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }
}

impl From<String> for Permission {
    fn from(token: String) -> Self {
        Self(Cow::Owned(token))
    }
}

/// `Denied` means the permission is still requestable; a terminal refusal is
/// `Blocked`. Platforms that cannot distinguish the two report `Denied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Unavailable,
    Denied,
    Limited,
    Granted,
    Blocked,
}

impl PermissionStatus {
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted | Self::Limited)
    }

    #[must_use]
    pub const fn is_requestable(self) -> bool {
        matches!(self, Self::Denied)
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "unavailable"),
            Self::Denied => write!(f, "denied"),
            Self::Limited => write!(f, "limited"),
            Self::Granted => write!(f, "granted"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

/// Permissions the current platform actually supports. Populated once by the
/// bridge and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilitySet(HashSet<Permission>);

impl AvailabilitySet {
    #[must_use]
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    #[must_use]
    pub fn contains(&self, permission: &Permission) -> bool {
        self.0.contains(permission)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.0.iter()
    }
}

impl FromIterator<Permission> for AvailabilitySet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Permission; N]> for AvailabilitySet {
    fn from(permissions: [Permission; N]) -> Self {
        permissions.into_iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationOption {
    Alert,
    Badge,
    Sound,
    CarPlay,
    CriticalAlert,
    Provisional,
    ProvidesAppSettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_screen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_center: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_play: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisional: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsResponse {
    pub status: PermissionStatus,
    #[serde(default)]
    pub settings: NotificationSettings,
}

impl NotificationsResponse {
    #[must_use]
    pub const fn new(status: PermissionStatus) -> Self {
        Self {
            status,
            settings: NotificationSettings {
                alert: None,
                badge: None,
                sound: None,
                lock_screen: None,
                notification_center: None,
                car_play: None,
                critical_alert: None,
                provisional: None,
            },
        }
    }

    #[must_use]
    pub const fn with_settings(mut self, settings: NotificationSettings) -> Self {
        self.settings = settings;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationAccuracy {
    Full,
    Reduced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationAccuracyOptions {
    pub purpose_key: String,
}

impl LocationAccuracyOptions {
    #[must_use]
    pub fn new(purpose_key: impl Into<String>) -> Self {
        Self {
            purpose_key: purpose_key.into(),
        }
    }
}
