//! # Fractalscope Renderer
//!
//! The state side of the fractal canvas: pixel ↔ parameter-plane mapping, zoom-anchored
//! panning, and the dirty-flag handshake that tells the render loop when the expensive
//! shader pass has to run again.
//!
//! GPU work itself lives outside this crate. The render loop polls
//! [`ViewportMapper::is_dirty`], uploads a [`UniformSnapshot`], renders, and then calls
//! [`ViewportMapper::mark_clean`].

pub mod settings;
pub mod uniforms;
pub mod viewport;

pub use settings::{ParameterRanges, SettingsError, ViewerSettings};
pub use uniforms::{UniformSnapshot, UNIFORM_BLOCK_SIZE};
pub use viewport::{ScrollDirection, ViewportMapper};
