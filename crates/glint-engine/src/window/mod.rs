//! Window + GL context runtime.
//!
//! This module is responsible for:
//! - creating the winit event loop and window
//! - establishing a current OpenGL 3.3 core context via glutin and loading
//!   device function pointers into a [`GlowDevice`](crate::device::GlowDevice)
//! - driving the frame loop: clear, app callback, swap
//! - routing resize and close/Escape handling

mod error;
mod runtime;

pub use error::RuntimeError;
pub use runtime::{Runtime, RuntimeConfig};
