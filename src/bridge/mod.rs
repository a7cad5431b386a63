pub mod error;
pub mod mock;
pub mod unsupported;

pub use error::{BridgeError, Result};
pub use mock::{BridgeCall, MockBridge};
pub use unsupported::UnsupportedBridge;

use async_trait::async_trait;

use crate::core::types::{
    AvailabilitySet, LocationAccuracy, NotificationOption, NotificationsResponse, Permission,
    PermissionStatus,
};

/// Contract every platform bridge implements: one capability per native
/// operation. Host applications hand the dispatcher an
/// `Arc<dyn NativeBridge>` for the platform they run on.
#[async_trait]
pub trait NativeBridge: Send + Sync {
    /// Permissions this platform supports, fixed for the process lifetime.
    fn available(&self) -> &AvailabilitySet;

    async fn check(&self, permission: &Permission) -> Result<PermissionStatus>;

    /// May trigger a user-facing prompt. Most platforms show it at most once
    /// per permission per install; the bridge owns that constraint.
    async fn request(&self, permission: &Permission) -> Result<PermissionStatus>;

    async fn check_notifications(&self) -> Result<NotificationsResponse>;

    async fn request_notifications(
        &self,
        options: &[NotificationOption],
    ) -> Result<NotificationsResponse>;

    async fn check_location_accuracy(&self) -> Result<LocationAccuracy>;

    async fn request_location_accuracy(&self, purpose_key: &str) -> Result<LocationAccuracy>;

    async fn open_settings(&self) -> Result<()>;

    async fn open_limited_photo_library_picker(&self) -> Result<()>;
}
