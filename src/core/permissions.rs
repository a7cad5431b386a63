//! Well-known permission tokens, grouped by platform namespace.
//!
//! Bridges are free to expose tokens outside this catalog; these constants
//! only spare callers from typing the string forms.

use super::types::Permission;

pub mod ios {
    use super::Permission;

    pub const APP_TRACKING_TRANSPARENCY: Permission =
        Permission::from_static("ios.permission.APP_TRACKING_TRANSPARENCY");
    pub const BLUETOOTH: Permission = Permission::from_static("ios.permission.BLUETOOTH");
    pub const CALENDARS: Permission = Permission::from_static("ios.permission.CALENDARS");
    pub const CALENDARS_WRITE_ONLY: Permission =
        Permission::from_static("ios.permission.CALENDARS_WRITE_ONLY");
    pub const CAMERA: Permission = Permission::from_static("ios.permission.CAMERA");
    pub const CONTACTS: Permission = Permission::from_static("ios.permission.CONTACTS");
    pub const FACE_ID: Permission = Permission::from_static("ios.permission.FACE_ID");
    pub const LOCATION_ALWAYS: Permission =
        Permission::from_static("ios.permission.LOCATION_ALWAYS");
    pub const LOCATION_WHEN_IN_USE: Permission =
        Permission::from_static("ios.permission.LOCATION_WHEN_IN_USE");
    pub const MEDIA_LIBRARY: Permission = Permission::from_static("ios.permission.MEDIA_LIBRARY");
    pub const MICROPHONE: Permission = Permission::from_static("ios.permission.MICROPHONE");
    pub const MOTION: Permission = Permission::from_static("ios.permission.MOTION");
    pub const PHOTO_LIBRARY: Permission = Permission::from_static("ios.permission.PHOTO_LIBRARY");
    pub const PHOTO_LIBRARY_ADD_ONLY: Permission =
        Permission::from_static("ios.permission.PHOTO_LIBRARY_ADD_ONLY");
    pub const REMINDERS: Permission = Permission::from_static("ios.permission.REMINDERS");
    pub const SIRI: Permission = Permission::from_static("ios.permission.SIRI");
    pub const SPEECH_RECOGNITION: Permission =
        Permission::from_static("ios.permission.SPEECH_RECOGNITION");
    pub const STOREKIT: Permission = Permission::from_static("ios.permission.STOREKIT");
}

pub mod android {
    use super::Permission;

    pub const ACCESS_BACKGROUND_LOCATION: Permission =
        Permission::from_static("android.permission.ACCESS_BACKGROUND_LOCATION");
    pub const ACCESS_COARSE_LOCATION: Permission =
        Permission::from_static("android.permission.ACCESS_COARSE_LOCATION");
    pub const ACCESS_FINE_LOCATION: Permission =
        Permission::from_static("android.permission.ACCESS_FINE_LOCATION");
    pub const ACTIVITY_RECOGNITION: Permission =
        Permission::from_static("android.permission.ACTIVITY_RECOGNITION");
    pub const BLUETOOTH_ADVERTISE: Permission =
        Permission::from_static("android.permission.BLUETOOTH_ADVERTISE");
    pub const BLUETOOTH_CONNECT: Permission =
        Permission::from_static("android.permission.BLUETOOTH_CONNECT");
    pub const BLUETOOTH_SCAN: Permission =
        Permission::from_static("android.permission.BLUETOOTH_SCAN");
    pub const BODY_SENSORS: Permission =
        Permission::from_static("android.permission.BODY_SENSORS");
    pub const CALL_PHONE: Permission = Permission::from_static("android.permission.CALL_PHONE");
    pub const CAMERA: Permission = Permission::from_static("android.permission.CAMERA");
    pub const NEARBY_WIFI_DEVICES: Permission =
        Permission::from_static("android.permission.NEARBY_WIFI_DEVICES");
    pub const POST_NOTIFICATIONS: Permission =
        Permission::from_static("android.permission.POST_NOTIFICATIONS");
    pub const READ_CALENDAR: Permission =
        Permission::from_static("android.permission.READ_CALENDAR");
    pub const READ_CONTACTS: Permission =
        Permission::from_static("android.permission.READ_CONTACTS");
    pub const READ_EXTERNAL_STORAGE: Permission =
        Permission::from_static("android.permission.READ_EXTERNAL_STORAGE");
    pub const READ_MEDIA_AUDIO: Permission =
        Permission::from_static("android.permission.READ_MEDIA_AUDIO");
    pub const READ_MEDIA_IMAGES: Permission =
        Permission::from_static("android.permission.READ_MEDIA_IMAGES");
    pub const READ_MEDIA_VIDEO: Permission =
        Permission::from_static("android.permission.READ_MEDIA_VIDEO");
    pub const READ_PHONE_STATE: Permission =
        Permission::from_static("android.permission.READ_PHONE_STATE");
    pub const RECORD_AUDIO: Permission =
        Permission::from_static("android.permission.RECORD_AUDIO");
    pub const SEND_SMS: Permission = Permission::from_static("android.permission.SEND_SMS");
    pub const WRITE_CALENDAR: Permission =
        Permission::from_static("android.permission.WRITE_CALENDAR");
    pub const WRITE_CONTACTS: Permission =
        Permission::from_static("android.permission.WRITE_CONTACTS");
    pub const WRITE_EXTERNAL_STORAGE: Permission =
        Permission::from_static("android.permission.WRITE_EXTERNAL_STORAGE");
}
