use qrcode::{Color, QrCode};
use qrscan_scan::{QrDecode, RqrrDecoder};

const SCALE: usize = 8;
// Modules of quiet zone on each side.
const QUIET: usize = 4;

// Render a QR into an 8-bit luma frame the way a sampled camera frame
// carries it: dark modules near black on a light background.
fn render_luma(text: &str) -> (Vec<u8>, u32) {
    let code = QrCode::new(text.as_bytes()).unwrap();
    let modules = code.width();
    let colors = code.to_colors();
    let dim = (modules + 2 * QUIET) * SCALE;

    let mut luma = vec![0xFF; dim * dim];
    for my in 0..modules {
        for mx in 0..modules {
            if colors[my * modules + mx] == Color::Dark {
                for py in 0..SCALE {
                    for px in 0..SCALE {
                        let x = (QUIET + mx) * SCALE + px;
                        let y = (QUIET + my) * SCALE + py;
                        luma[y * dim + x] = 0x00;
                    }
                }
            }
        }
    }
    (luma, dim as u32)
}

#[test]
fn test_synthetic_qr_roundtrip() {
    let decoder = RqrrDecoder::new();
    let (luma, dim) = render_luma("ALPHA123");
    assert_eq!(
        decoder.decode(&luma, dim, dim, false),
        Some("ALPHA123".to_string())
    );
}

#[test]
fn test_inverted_qr_needs_inversion_enabled() {
    let decoder = RqrrDecoder::new();
    let (luma, dim) = render_luma("BETA456");
    let inverted: Vec<u8> = luma.iter().map(|&p| 255 - p).collect();

    assert_eq!(decoder.decode(&inverted, dim, dim, false), None);
    assert_eq!(
        decoder.decode(&inverted, dim, dim, true),
        Some("BETA456".to_string())
    );
}

#[test]
fn test_blank_frame_decodes_to_nothing() {
    let decoder = RqrrDecoder::new();
    let luma = vec![0xFF; 64 * 64];
    assert_eq!(decoder.decode(&luma, 64, 64, false), None);
}

#[test]
fn test_short_buffer_is_rejected() {
    let decoder = RqrrDecoder::new();
    // Fewer bytes than width * height must not panic.
    let luma = vec![0u8; 16];
    assert_eq!(decoder.decode(&luma, 64, 64, false), None);
}

#[test]
fn test_inversion_pass_also_misses_on_blank() {
    let decoder = RqrrDecoder::new();
    let luma = vec![0u8; 64 * 64];
    assert_eq!(decoder.decode(&luma, 64, 64, true), None);
}

#[test]
fn test_gradient_frame_decodes_to_nothing() {
    let decoder = RqrrDecoder::new();
    let luma: Vec<u8> = (0..64 * 64).map(|i| (i % 256) as u8).collect();
    assert_eq!(decoder.decode(&luma, 64, 64, false), None);
}
