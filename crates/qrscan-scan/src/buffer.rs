/// Reusable greyscale pixel buffer for frame sampling.
///
/// Sized to the video's native resolution and reallocated only when that
/// resolution changes, so steady-state scanning does not allocate.
#[derive(Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create an empty buffer; the first `ensure_size` call allocates it.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Resize the buffer to `width * height` luma bytes if the dimensions
    /// differ from the current ones.
    ///
    /// Returns `true` if a reallocation happened.
    pub fn ensure_size(&mut self, width: u32, height: u32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.data = vec![0; width as usize * height as usize];
        true
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
