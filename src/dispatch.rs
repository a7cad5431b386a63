use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::bridge::{NativeBridge, Result};
use crate::core::types::{
    AvailabilitySet, LocationAccuracy, LocationAccuracyOptions, NotificationOption,
    NotificationsResponse, Permission, PermissionStatus,
};

/// Facade over a platform bridge. Adds the availability fast path and the
/// aggregate operations; everything else passes through untouched.
#[derive(Clone)]
pub struct Dispatcher {
    bridge: Arc<dyn NativeBridge>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(bridge: Arc<dyn NativeBridge>) -> Self {
        Self { bridge }
    }

    #[must_use]
    pub fn available(&self) -> &AvailabilitySet {
        self.bridge.available()
    }

    /// Resolves `Unavailable` without touching the bridge when the platform
    /// does not support the permission.
    pub async fn check(&self, permission: &Permission) -> Result<PermissionStatus> {
        if !self.bridge.available().contains(permission) {
            debug!(permission = %permission, "not in availability set, skipping bridge");
            return Ok(PermissionStatus::Unavailable);
        }
        self.bridge.check(permission).await
    }

    /// Same fast path as [`check`](Self::check); otherwise delegates to the
    /// bridge, which may show a user-facing prompt.
    pub async fn request(&self, permission: &Permission) -> Result<PermissionStatus> {
        if !self.bridge.available().contains(permission) {
            debug!(permission = %permission, "not in availability set, skipping bridge");
            return Ok(PermissionStatus::Unavailable);
        }
        self.bridge.request(permission).await
    }

    /// Checks every unique permission concurrently and collects the statuses
    /// into a map keyed by permission. Duplicates collapse to one entry; an
    /// empty input yields an empty map. The first failed check fails the
    /// whole call.
    pub async fn check_multiple(
        &self,
        permissions: &[Permission],
    ) -> Result<HashMap<Permission, PermissionStatus>> {
        let unique = dedup_first_occurrence(permissions);
        debug!(requested = permissions.len(), unique = unique.len(), "check fan-out");

        let checks = unique.into_iter().map(|permission| async move {
            let status = self.check(permission).await?;
            Ok((permission.clone(), status))
        });

        join_all(checks).await.into_iter().collect()
    }

    /// Requests every unique permission strictly one after another, in
    /// first-occurrence order. Only one modal prompt may be on screen at a
    /// time, so unlike [`check_multiple`](Self::check_multiple) this never
    /// overlaps bridge calls.
    pub async fn request_multiple(
        &self,
        permissions: &[Permission],
    ) -> Result<HashMap<Permission, PermissionStatus>> {
        let unique = dedup_first_occurrence(permissions);
        debug!(requested = permissions.len(), unique = unique.len(), "request fan-out");

        let mut statuses = HashMap::with_capacity(unique.len());
        for permission in unique {
            let status = self.request(permission).await?;
            statuses.insert(permission.clone(), status);
        }
        Ok(statuses)
    }

    pub async fn check_notifications(&self) -> Result<NotificationsResponse> {
        self.bridge.check_notifications().await
    }

    /// Forwards the options sequence to the bridge unmodified.
    pub async fn request_notifications(
        &self,
        options: &[NotificationOption],
    ) -> Result<NotificationsResponse> {
        self.bridge.request_notifications(options).await
    }

    pub async fn check_location_accuracy(&self) -> Result<LocationAccuracy> {
        self.bridge.check_location_accuracy().await
    }

    pub async fn request_location_accuracy(
        &self,
        options: &LocationAccuracyOptions,
    ) -> Result<LocationAccuracy> {
        self.bridge
            .request_location_accuracy(&options.purpose_key)
            .await
    }

    pub async fn open_settings(&self) -> Result<()> {
        self.bridge.open_settings().await
    }

    pub async fn open_limited_photo_library_picker(&self) -> Result<()> {
        self.bridge.open_limited_photo_library_picker().await
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("available", &self.bridge.available().len())
            .finish()
    }
}

fn dedup_first_occurrence(permissions: &[Permission]) -> Vec<&Permission> {
    let mut seen = HashSet::with_capacity(permissions.len());
    permissions.iter().filter(|p| seen.insert(*p)).collect()
}
