//! # Fractalscope Core
//!
//! N-dimensional coordinate frames: a position vector paired with an orthonormal
//! basis. Frames compose, invert, and carry points between a local space and the
//! embedding space, and they generalize cleanly past three dimensions because
//! rotations are built one plane at a time.
//!
//! This crate has no knowledge of screens or viewports; see `fractalscope-renderer`
//! for the pixel ↔ plane mapping.

pub mod basis;
pub mod error;
pub mod frame;

pub use basis::Basis;
pub use error::FrameError;
pub use frame::CoordinateFrame;
