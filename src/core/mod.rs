pub mod permissions;
pub mod types;

pub use types::{
    AvailabilitySet, LocationAccuracy, LocationAccuracyOptions, NotificationOption,
    NotificationSettings, NotificationsResponse, Permission, PermissionStatus,
};
