use qrscan_scan::FrameBuffer;

#[test]
fn test_new_buffer_is_empty() {
    let buf = FrameBuffer::new();
    assert_eq!(buf.width(), 0);
    assert_eq!(buf.height(), 0);
    assert!(buf.as_slice().is_empty());
}

#[test]
fn test_ensure_size_allocates() {
    let mut buf = FrameBuffer::new();
    assert!(buf.ensure_size(640, 480));
    assert_eq!(buf.width(), 640);
    assert_eq!(buf.height(), 480);
    assert_eq!(buf.as_slice().len(), 640 * 480);
}

#[test]
fn test_ensure_size_is_lazy() {
    let mut buf = FrameBuffer::new();
    buf.ensure_size(640, 480);
    buf.as_mut_slice().fill(0xAA);

    // Same dimensions: no reallocation, contents untouched.
    assert!(!buf.ensure_size(640, 480));
    assert!(buf.as_slice().iter().all(|&p| p == 0xAA));
}

#[test]
fn test_ensure_size_tracks_resolution_change() {
    let mut buf = FrameBuffer::new();
    buf.ensure_size(640, 480);
    assert!(buf.ensure_size(1280, 720));
    assert_eq!((buf.width(), buf.height()), (1280, 720));
    assert_eq!(buf.as_slice().len(), 1280 * 720);
}
