//! GPU device + resource lifecycle management.
//!
//! This module is responsible for:
//! - the [`GraphicsDevice`] trait: the OpenGL 3.3 core subset the engine
//!   calls, threaded explicitly through every constructor
//! - the production [`GlowDevice`] (the only place raw GL calls appear)
//! - owned GPU resources and their validation protocol: [`DeviceBuffer`],
//!   [`Geometry`], [`ShaderUnit`], [`ShaderPipeline`], [`Drawable`]
//! - scoped binding guards that restore binding 0 on every exit path

mod api;
mod bind;
mod buffer;
mod drawable;
mod error;
mod geometry;
mod glow_device;
mod pipeline;
mod shader;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{BufferKind, GraphicsDevice, ShaderStage};
pub use bind::{BufferBinding, VertexArrayBinding};
pub use buffer::DeviceBuffer;
pub use drawable::Drawable;
pub use error::DeviceError;
pub use geometry::Geometry;
pub use glow_device::GlowDevice;
pub use pipeline::ShaderPipeline;
pub use shader::{ShaderUnit, INFO_LOG_LIMIT};
