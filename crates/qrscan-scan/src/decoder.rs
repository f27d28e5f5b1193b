use crate::traits::QrDecode;

/// QR decoder backed by `rqrr`.
#[derive(Debug, Default)]
pub struct RqrrDecoder;

impl RqrrDecoder {
    pub fn new() -> Self {
        Self
    }

    fn detect(luma: &[u8], width: u32, height: u32) -> Option<String> {
        let (w, h) = (width as usize, height as usize);
        if luma.len() < w * h {
            return None;
        }
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(w, h, |x, y| luma[y * w + x]);
        for grid in prepared.detect_grids() {
            match grid.decode() {
                Ok((_, content)) => return Some(content),
                Err(err) => log::debug!("grid decode failed: {err:?}"),
            }
        }
        None
    }
}

impl QrDecode for RqrrDecoder {
    fn decode(&self, luma: &[u8], width: u32, height: u32, try_invert: bool) -> Option<String> {
        if let Some(text) = Self::detect(luma, width, height) {
            return Some(text);
        }
        if try_invert {
            let inverted: Vec<u8> = luma.iter().map(|&p| 255 - p).collect();
            return Self::detect(&inverted, width, height);
        }
        None
    }
}
