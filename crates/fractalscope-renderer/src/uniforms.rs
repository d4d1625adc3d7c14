use serde::{Deserialize, Serialize};

/// Size in bytes of the packed uniform block produced by [`UniformSnapshot::to_bytes`].
pub const UNIFORM_BLOCK_SIZE: usize = 32;

/// Everything the fractal shader needs for one render, captured at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformSnapshot {
    pub width: u32,
    pub height: u32,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub iteration_limit: u32,
    pub color_frequency: f64,
}

impl UniformSnapshot {
    /// Pack into the shader's `Common` block, little-endian:
    ///
    /// | offset | field             | type  |
    /// |--------|-------------------|-------|
    /// | 0      | width, height     | vec2  |
    /// | 8      | zoom              | float |
    /// | 12     | (padding)         |       |
    /// | 16     | pan_x, pan_y      | vec2  |
    /// | 24     | iteration_limit   | int   |
    /// | 28     | color_frequency   | float |
    pub fn to_bytes(&self) -> [u8; UNIFORM_BLOCK_SIZE] {
        let mut out = [0u8; UNIFORM_BLOCK_SIZE];
        let iterations = i32::try_from(self.iteration_limit).unwrap_or(i32::MAX);
        let words: [(usize, [u8; 4]); 7] = [
            (0, (self.width as f32).to_le_bytes()),
            (4, (self.height as f32).to_le_bytes()),
            (8, (self.zoom as f32).to_le_bytes()),
            (16, (self.pan_x as f32).to_le_bytes()),
            (20, (self.pan_y as f32).to_le_bytes()),
            (24, iterations.to_le_bytes()),
            (28, (self.color_frequency as f32).to_le_bytes()),
        ];
        for (offset, bytes) in words {
            out[offset..offset + 4].copy_from_slice(&bytes);
        }
        out
    }
}
