//! Glint engine crate.
//!
//! A minimal real-time rendering harness over OpenGL 3.3 core: the
//! `device` module owns the GPU resource lifecycle and validation layer;
//! `window` supplies the context and drives the frame loop; `shapes`
//! builds the built-in demo drawables.

pub mod core;
pub mod device;
pub mod logging;
pub mod shapes;
pub mod window;
