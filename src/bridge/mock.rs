use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::error::{BridgeError, Result};
use super::NativeBridge;
use crate::core::types::{
    AvailabilitySet, LocationAccuracy, NotificationOption, NotificationsResponse, Permission,
    PermissionStatus,
};

/// Every native call the mock has received, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCall {
    Check(Permission),
    Request(Permission),
    CheckNotifications,
    RequestNotifications(Vec<NotificationOption>),
    CheckLocationAccuracy,
    RequestLocationAccuracy(String),
    OpenSettings,
    OpenLimitedPhotoLibraryPicker,
}

#[derive(Debug, Clone)]
enum Outcome {
    Status(PermissionStatus),
    Failure(String),
}

/// Scriptable stand-in for a platform bridge. Configure statuses with the
/// builder methods, then inspect the recorded call history to assert what
/// the dispatcher actually sent down.
#[derive(Clone)]
pub struct MockBridge {
    available: AvailabilitySet,
    outcomes: HashMap<Permission, Outcome>,
    notifications: NotificationsResponse,
    location_accuracy: LocationAccuracy,
    settings_failure: Option<String>,
    calls: Arc<Mutex<Vec<BridgeCall>>>,
}

impl MockBridge {
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: AvailabilitySet::new(),
            outcomes: HashMap::new(),
            notifications: NotificationsResponse::new(PermissionStatus::Denied),
            location_accuracy: LocationAccuracy::Full,
            settings_failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_available(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.available = permissions.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_status(mut self, permission: Permission, status: PermissionStatus) -> Self {
        self.outcomes.insert(permission, Outcome::Status(status));
        self
    }

    #[must_use]
    pub fn with_failure(mut self, permission: Permission, message: impl Into<String>) -> Self {
        self.outcomes
            .insert(permission, Outcome::Failure(message.into()));
        self
    }

    #[must_use]
    pub fn with_notifications(mut self, response: NotificationsResponse) -> Self {
        self.notifications = response;
        self
    }

    #[must_use]
    pub fn with_location_accuracy(mut self, accuracy: LocationAccuracy) -> Self {
        self.location_accuracy = accuracy;
        self
    }

    #[must_use]
    pub fn with_settings_failure(mut self, message: impl Into<String>) -> Self {
        self.settings_failure = Some(message.into());
        self
    }

    #[must_use]
    pub fn calls(&self) -> Vec<BridgeCall> {
        self.calls.lock().clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: BridgeCall) {
        self.calls.lock().push(call);
    }

    fn outcome(&self, permission: &Permission) -> Result<PermissionStatus> {
        match self.outcomes.get(permission) {
            Some(Outcome::Status(status)) => Ok(*status),
            Some(Outcome::Failure(message)) => Err(BridgeError::platform("E_MOCK", message.as_str())),
            None => Err(BridgeError::platform(
                "E_MOCK",
                format!("no status configured for {permission}"),
            )),
        }
    }
}

impl Default for MockBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NativeBridge for MockBridge {
    fn available(&self) -> &AvailabilitySet {
        &self.available
    }

    async fn check(&self, permission: &Permission) -> Result<PermissionStatus> {
        self.record(BridgeCall::Check(permission.clone()));
        self.outcome(permission)
    }

    async fn request(&self, permission: &Permission) -> Result<PermissionStatus> {
        self.record(BridgeCall::Request(permission.clone()));
        self.outcome(permission)
    }

    async fn check_notifications(&self) -> Result<NotificationsResponse> {
        self.record(BridgeCall::CheckNotifications);
        Ok(self.notifications)
    }

    async fn request_notifications(
        &self,
        options: &[NotificationOption],
    ) -> Result<NotificationsResponse> {
        self.record(BridgeCall::RequestNotifications(options.to_vec()));
        Ok(self.notifications)
    }

    async fn check_location_accuracy(&self) -> Result<LocationAccuracy> {
        self.record(BridgeCall::CheckLocationAccuracy);
        Ok(self.location_accuracy)
    }

    async fn request_location_accuracy(&self, purpose_key: &str) -> Result<LocationAccuracy> {
        self.record(BridgeCall::RequestLocationAccuracy(purpose_key.to_string()));
        Ok(self.location_accuracy)
    }

    async fn open_settings(&self) -> Result<()> {
        self.record(BridgeCall::OpenSettings);
        match &self.settings_failure {
            Some(message) => Err(BridgeError::platform("E_SETTINGS", message.as_str())),
            None => Ok(()),
        }
    }

    async fn open_limited_photo_library_picker(&self) -> Result<()> {
        self.record(BridgeCall::OpenLimitedPhotoLibraryPicker);
        Ok(())
    }
}
