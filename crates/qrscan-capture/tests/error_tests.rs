use qrscan_capture::CaptureError;
use std::io;

#[test]
fn test_eacces_maps_to_permission_denied() {
    let err: CaptureError = io::Error::from_raw_os_error(13).into();
    assert!(matches!(err, CaptureError::PermissionDenied(_)));
    assert!(err.is_retryable());
}

#[test]
fn test_eperm_maps_to_policy_blocked() {
    let err: CaptureError = io::Error::from_raw_os_error(1).into();
    assert!(matches!(err, CaptureError::PolicyBlocked(_)));
    assert!(!err.is_retryable());
}

#[test]
fn test_missing_device_errnos_map_to_device_not_found() {
    for errno in [2, 6, 19] {
        let err: CaptureError = io::Error::from_raw_os_error(errno).into();
        assert!(
            matches!(err, CaptureError::DeviceNotFound(_)),
            "errno {errno} should classify as DeviceNotFound"
        );
        assert!(!err.is_retryable());
    }
}

#[test]
fn test_ebusy_maps_to_device_busy() {
    let err: CaptureError = io::Error::from_raw_os_error(16).into();
    assert!(matches!(err, CaptureError::DeviceBusy(_)));
    assert!(err.is_retryable());
}

#[test]
fn test_unclassified_errno_maps_to_stream() {
    // EIO: a fault, not a user-correctable condition.
    let err: CaptureError = io::Error::from_raw_os_error(5).into();
    assert!(matches!(err, CaptureError::Stream(_)));
}

#[test]
fn test_synthetic_error_falls_back_to_kind() {
    let err: CaptureError =
        io::Error::new(io::ErrorKind::PermissionDenied, "synthetic").into();
    assert!(matches!(err, CaptureError::PermissionDenied(_)));

    let err: CaptureError = io::Error::new(io::ErrorKind::NotFound, "synthetic").into();
    assert!(matches!(err, CaptureError::DeviceNotFound(_)));
}

#[test]
fn test_display_includes_remediation() {
    let err = CaptureError::PermissionDenied("/dev/video0".to_string());
    assert!(err.to_string().contains("retry"));

    let err = CaptureError::DeviceBusy("/dev/video0".to_string());
    assert!(err.to_string().contains("retry"));

    let err = CaptureError::Unsupported;
    assert!(err.to_string().contains("backend"));
}
