use async_trait::async_trait;

use super::error::{BridgeError, Result};
use super::NativeBridge;
use crate::core::types::{
    AvailabilitySet, LocationAccuracy, NotificationOption, NotificationsResponse, Permission,
    PermissionStatus,
};

/// Bridge for targets with no native permission layer. Every permission is
/// unavailable and every operation with a mandatory platform counterpart
/// fails as unsupported.
#[derive(Debug, Default)]
pub struct UnsupportedBridge {
    available: AvailabilitySet,
}

impl UnsupportedBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NativeBridge for UnsupportedBridge {
    fn available(&self) -> &AvailabilitySet {
        &self.available
    }

    async fn check(&self, _permission: &Permission) -> Result<PermissionStatus> {
        Ok(PermissionStatus::Unavailable)
    }

    async fn request(&self, _permission: &Permission) -> Result<PermissionStatus> {
        Ok(PermissionStatus::Unavailable)
    }

    async fn check_notifications(&self) -> Result<NotificationsResponse> {
        Ok(NotificationsResponse::new(PermissionStatus::Unavailable))
    }

    async fn request_notifications(
        &self,
        _options: &[NotificationOption],
    ) -> Result<NotificationsResponse> {
        Ok(NotificationsResponse::new(PermissionStatus::Unavailable))
    }

    async fn check_location_accuracy(&self) -> Result<LocationAccuracy> {
        Err(BridgeError::Unsupported("location accuracy"))
    }

    async fn request_location_accuracy(&self, _purpose_key: &str) -> Result<LocationAccuracy> {
        Err(BridgeError::Unsupported("location accuracy"))
    }

    async fn open_settings(&self) -> Result<()> {
        Err(BridgeError::Unsupported("settings navigation"))
    }

    async fn open_limited_photo_library_picker(&self) -> Result<()> {
        Err(BridgeError::Unsupported("the limited photo library picker"))
    }
}
