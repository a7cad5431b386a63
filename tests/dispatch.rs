use std::sync::Arc;

use permkit::permissions::{android, ios};
use permkit::{
    BridgeCall, BridgeError, Dispatcher, LocationAccuracy, LocationAccuracyOptions, MockBridge,
    NotificationOption, NotificationSettings, NotificationsResponse, PermissionStatus,
    UnsupportedBridge,
};

fn dispatcher_with(bridge: MockBridge) -> (Dispatcher, Arc<MockBridge>) {
    let bridge = Arc::new(bridge);
    (Dispatcher::new(bridge.clone()), bridge)
}

#[tokio::test]
async fn test_check_unavailable_never_contacts_bridge() {
    let (dispatcher, bridge) = dispatcher_with(MockBridge::new().with_available([ios::CAMERA]));

    let status = dispatcher.check(&ios::SIRI).await.unwrap();

    assert_eq!(status, PermissionStatus::Unavailable);
    assert_eq!(bridge.call_count(), 0);
}

#[tokio::test]
async fn test_request_unavailable_never_contacts_bridge() {
    let (dispatcher, bridge) = dispatcher_with(MockBridge::new().with_available([ios::CAMERA]));

    let status = dispatcher.request(&android::CAMERA).await.unwrap();

    assert_eq!(status, PermissionStatus::Unavailable);
    assert_eq!(bridge.call_count(), 0);
}

#[tokio::test]
async fn test_check_passes_bridge_status_through() {
    let (dispatcher, bridge) = dispatcher_with(
        MockBridge::new()
            .with_available([ios::CAMERA, ios::MICROPHONE])
            .with_status(ios::CAMERA, PermissionStatus::Blocked)
            .with_status(ios::MICROPHONE, PermissionStatus::Granted),
    );

    assert_eq!(
        dispatcher.check(&ios::CAMERA).await.unwrap(),
        PermissionStatus::Blocked
    );
    assert_eq!(
        dispatcher.check(&ios::MICROPHONE).await.unwrap(),
        PermissionStatus::Granted
    );
    assert_eq!(
        bridge.calls(),
        vec![
            BridgeCall::Check(ios::CAMERA),
            BridgeCall::Check(ios::MICROPHONE),
        ]
    );
}

#[tokio::test]
async fn test_bridge_reported_unavailable_passes_through_too() {
    // The fast path is not the only source of Unavailable; a bridge may
    // report it for a permission it nominally supports.
    let (dispatcher, bridge) = dispatcher_with(
        MockBridge::new()
            .with_available([ios::FACE_ID])
            .with_status(ios::FACE_ID, PermissionStatus::Unavailable),
    );

    assert_eq!(
        dispatcher.check(&ios::FACE_ID).await.unwrap(),
        PermissionStatus::Unavailable
    );
    assert_eq!(bridge.call_count(), 1);
}

#[tokio::test]
async fn test_request_passes_bridge_status_through() {
    let (dispatcher, _bridge) = dispatcher_with(
        MockBridge::new()
            .with_available([ios::CONTACTS])
            .with_status(ios::CONTACTS, PermissionStatus::Limited),
    );

    assert_eq!(
        dispatcher.request(&ios::CONTACTS).await.unwrap(),
        PermissionStatus::Limited
    );
}

#[tokio::test]
async fn test_check_multiple_collapses_duplicates() {
    let (dispatcher, bridge) = dispatcher_with(
        MockBridge::new()
            .with_available([ios::CAMERA, ios::MICROPHONE])
            .with_status(ios::CAMERA, PermissionStatus::Granted)
            .with_status(ios::MICROPHONE, PermissionStatus::Denied),
    );

    let statuses = dispatcher
        .check_multiple(&[ios::CAMERA, ios::CAMERA, ios::MICROPHONE])
        .await
        .unwrap();

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[&ios::CAMERA], PermissionStatus::Granted);
    assert_eq!(statuses[&ios::MICROPHONE], PermissionStatus::Denied);
    assert_eq!(bridge.call_count(), 2);
}

#[tokio::test]
async fn test_check_multiple_empty_input() {
    let (dispatcher, bridge) = dispatcher_with(MockBridge::new());

    let statuses = dispatcher.check_multiple(&[]).await.unwrap();

    assert!(statuses.is_empty());
    assert_eq!(bridge.call_count(), 0);
}

#[tokio::test]
async fn test_check_multiple_mixes_available_and_unavailable() {
    let (dispatcher, bridge) = dispatcher_with(
        MockBridge::new()
            .with_available([ios::CAMERA])
            .with_status(ios::CAMERA, PermissionStatus::Granted),
    );

    let statuses = dispatcher
        .check_multiple(&[ios::CAMERA, ios::SIRI])
        .await
        .unwrap();

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[&ios::CAMERA], PermissionStatus::Granted);
    assert_eq!(statuses[&ios::SIRI], PermissionStatus::Unavailable);
    // Only the supported permission reached the bridge.
    assert_eq!(bridge.calls(), vec![BridgeCall::Check(ios::CAMERA)]);
}

#[tokio::test]
async fn test_request_multiple_serializes_in_input_order() {
    let (dispatcher, bridge) = dispatcher_with(
        MockBridge::new()
            .with_available([ios::CAMERA, ios::MICROPHONE])
            .with_status(ios::CAMERA, PermissionStatus::Granted)
            .with_status(ios::MICROPHONE, PermissionStatus::Blocked),
    );

    let statuses = dispatcher
        .request_multiple(&[ios::CAMERA, ios::MICROPHONE])
        .await
        .unwrap();

    assert_eq!(statuses.len(), 2);
    assert_eq!(
        bridge.calls(),
        vec![
            BridgeCall::Request(ios::CAMERA),
            BridgeCall::Request(ios::MICROPHONE),
        ]
    );
}

#[tokio::test]
async fn test_request_multiple_dedup_keeps_first_occurrence_order() {
    let (dispatcher, bridge) = dispatcher_with(
        MockBridge::new()
            .with_available([ios::CAMERA, ios::MICROPHONE])
            .with_status(ios::CAMERA, PermissionStatus::Granted)
            .with_status(ios::MICROPHONE, PermissionStatus::Granted),
    );

    dispatcher
        .request_multiple(&[ios::MICROPHONE, ios::CAMERA, ios::MICROPHONE])
        .await
        .unwrap();

    assert_eq!(
        bridge.calls(),
        vec![
            BridgeCall::Request(ios::MICROPHONE),
            BridgeCall::Request(ios::CAMERA),
        ]
    );
}

#[tokio::test]
async fn test_check_multiple_propagates_first_failure() {
    let (dispatcher, _bridge) = dispatcher_with(
        MockBridge::new()
            .with_available([ios::CAMERA, ios::MICROPHONE])
            .with_status(ios::CAMERA, PermissionStatus::Granted)
            .with_failure(ios::MICROPHONE, "audio session unavailable"),
    );

    let err = dispatcher
        .check_multiple(&[ios::CAMERA, ios::MICROPHONE])
        .await
        .unwrap_err();

    assert!(matches!(err, BridgeError::Platform { .. }));
}

#[tokio::test]
async fn test_request_multiple_stops_at_failure() {
    let (dispatcher, bridge) = dispatcher_with(
        MockBridge::new()
            .with_available([ios::CAMERA, ios::MICROPHONE, ios::CONTACTS])
            .with_status(ios::CAMERA, PermissionStatus::Granted)
            .with_failure(ios::MICROPHONE, "audio session unavailable")
            .with_status(ios::CONTACTS, PermissionStatus::Granted),
    );

    let result = dispatcher
        .request_multiple(&[ios::CAMERA, ios::MICROPHONE, ios::CONTACTS])
        .await;

    assert!(result.is_err());
    // The failing request ends the sequence; nothing after it runs.
    assert_eq!(
        bridge.calls(),
        vec![
            BridgeCall::Request(ios::CAMERA),
            BridgeCall::Request(ios::MICROPHONE),
        ]
    );
}

#[tokio::test]
async fn test_single_check_propagates_bridge_error_verbatim() {
    let (dispatcher, _bridge) = dispatcher_with(
        MockBridge::new()
            .with_available([ios::CAMERA])
            .with_failure(ios::CAMERA, "capture module crashed"),
    );

    let err = dispatcher.check(&ios::CAMERA).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "platform error (E_MOCK): capture module crashed"
    );
}

#[tokio::test]
async fn test_request_notifications_forwards_options_unmodified() {
    let response = NotificationsResponse::new(PermissionStatus::Granted).with_settings(
        NotificationSettings {
            alert: Some(true),
            sound: Some(true),
            ..NotificationSettings::default()
        },
    );
    let (dispatcher, bridge) = dispatcher_with(MockBridge::new().with_notifications(response));

    let options = [
        NotificationOption::Alert,
        NotificationOption::Sound,
        NotificationOption::Badge,
    ];
    let returned = dispatcher.request_notifications(&options).await.unwrap();

    assert_eq!(returned, response);
    assert_eq!(
        bridge.calls(),
        vec![BridgeCall::RequestNotifications(options.to_vec())]
    );
}

#[tokio::test]
async fn test_check_notifications_passes_through_without_availability_filter() {
    let (dispatcher, bridge) = dispatcher_with(
        MockBridge::new().with_notifications(NotificationsResponse::new(PermissionStatus::Denied)),
    );

    let response = dispatcher.check_notifications().await.unwrap();

    assert_eq!(response.status, PermissionStatus::Denied);
    assert_eq!(bridge.calls(), vec![BridgeCall::CheckNotifications]);
}

#[tokio::test]
async fn test_location_accuracy_forwards_purpose_key() {
    let (dispatcher, bridge) =
        dispatcher_with(MockBridge::new().with_location_accuracy(LocationAccuracy::Reduced));

    let accuracy = dispatcher.check_location_accuracy().await.unwrap();
    assert_eq!(accuracy, LocationAccuracy::Reduced);

    let options = LocationAccuracyOptions::new("turn-by-turn-navigation");
    let accuracy = dispatcher.request_location_accuracy(&options).await.unwrap();
    assert_eq!(accuracy, LocationAccuracy::Reduced);

    assert_eq!(
        bridge.calls(),
        vec![
            BridgeCall::CheckLocationAccuracy,
            BridgeCall::RequestLocationAccuracy("turn-by-turn-navigation".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_open_settings_resolves_and_failure_propagates() {
    let (dispatcher, bridge) = dispatcher_with(MockBridge::new());
    dispatcher.open_settings().await.unwrap();
    assert_eq!(bridge.calls(), vec![BridgeCall::OpenSettings]);

    let (dispatcher, _bridge) =
        dispatcher_with(MockBridge::new().with_settings_failure("activity not found"));
    let err = dispatcher.open_settings().await.unwrap_err();
    assert!(matches!(err, BridgeError::Platform { .. }));
}

#[tokio::test]
async fn test_open_limited_photo_library_picker_delegates() {
    let (dispatcher, bridge) = dispatcher_with(MockBridge::new());

    dispatcher.open_limited_photo_library_picker().await.unwrap();

    assert_eq!(bridge.calls(), vec![BridgeCall::OpenLimitedPhotoLibraryPicker]);
}

#[tokio::test]
async fn test_unsupported_bridge_end_to_end() {
    let dispatcher = Dispatcher::new(Arc::new(UnsupportedBridge::new()));

    assert!(dispatcher.available().is_empty());
    assert_eq!(
        dispatcher.check(&ios::CAMERA).await.unwrap(),
        PermissionStatus::Unavailable
    );

    let statuses = dispatcher
        .check_multiple(&[ios::CAMERA, android::CAMERA])
        .await
        .unwrap();
    assert_eq!(statuses.len(), 2);
    assert!(
        statuses
            .values()
            .all(|status| *status == PermissionStatus::Unavailable)
    );

    assert!(matches!(
        dispatcher.open_settings().await,
        Err(BridgeError::Unsupported(_))
    ));
}
