use serde::{Deserialize, Serialize};

/// Source image size in pixels, serialized as `[width, height]`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl From<(u32, u32)> for ImageDimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<[u32; 2]> for ImageDimensions {
    fn from(wh: [u32; 2]) -> Self {
        Self { width: wh[0], height: wh[1] }
    }
}

impl From<ImageDimensions> for [u32; 2] {
    fn from(dims: ImageDimensions) -> Self {
        [dims.width, dims.height]
    }
}
