pub mod bridge;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod logging;

pub use bridge::{BridgeCall, BridgeError, MockBridge, NativeBridge, UnsupportedBridge};
pub use config::{ProfileError, SimulationProfile};
pub use core::permissions;
pub use core::types::{
    AvailabilitySet, LocationAccuracy, LocationAccuracyOptions, NotificationOption,
    NotificationSettings, NotificationsResponse, Permission, PermissionStatus,
};
pub use dispatch::Dispatcher;
