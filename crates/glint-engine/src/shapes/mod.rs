//! Built-in demo shapes.
//!
//! Responsibilities:
//! - embed the flat-color shader pair (GLSL 330 core) the shapes share
//! - build fully validated [`Drawable`]s from literal vertex data
//!
//! Shader source is embedded literal text; this module is the seam where
//! loading shaders from external resources would attach.

mod rectangle;
mod triangle;

pub use rectangle::rectangle;
pub use triangle::triangle;

use crate::device::{
    Drawable, DeviceError, Geometry, GraphicsDevice, ShaderPipeline, ShaderStage, ShaderUnit,
};

const FLAT_COLOR_VERTEX: &str = "\
#version 330 core
layout (location = 0) in vec3 position;
void main()
{
    gl_Position = vec4(position, 1.0);
}
";

const FLAT_COLOR_FRAGMENT: &str = "\
#version 330 core
out vec4 color;
void main()
{
    color = vec4(1.0, 0.5, 0.2, 1.0);
}
";

/// Links the shared pass-through-position, constant-color pipeline.
fn flat_color_pipeline<D: GraphicsDevice>(device: &D) -> Result<ShaderPipeline<D>, DeviceError> {
    let vertex = ShaderUnit::new(
        device,
        "flat_color_vertex",
        ShaderStage::Vertex,
        FLAT_COLOR_VERTEX,
    )?;
    let fragment = ShaderUnit::new(
        device,
        "flat_color_fragment",
        ShaderStage::Fragment,
        FLAT_COLOR_FRAGMENT,
    )?;
    ShaderPipeline::new(device, vec![vertex, fragment])
}

/// Validates a freshly composed drawable and reclaims its standalone
/// shader objects once the verdict is in.
fn finish<D: GraphicsDevice>(
    device: &D,
    geometry: Geometry<D>,
    pipeline: ShaderPipeline<D>,
) -> Result<Drawable<D>, DeviceError> {
    let mut drawable = Drawable::new(geometry, pipeline);
    drawable.validate(device)?;
    drawable.reclaim_units(device);
    Ok(drawable)
}
