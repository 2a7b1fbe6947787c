use std::fmt;

use super::error::DeviceError;

/// Buffer binding target.
///
/// A buffer is bound to exactly one target kind for its whole lifetime.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferKind {
    /// Per-vertex attribute data (`f32` components).
    Vertex,
    /// Triangle-list indices (`u32`).
    Index,
}

/// Shader compilation target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// The OpenGL 3.3 core subset the engine calls, behind an explicit handle.
///
/// Threading the device through every constructor (instead of reaching for
/// the process-wide current context) keeps resource code testable and leaves
/// the door open for multi-context setups. Production code uses
/// [`GlowDevice`](super::GlowDevice); tests use an in-memory recording fake.
///
/// Conventions baked into the trait rather than exposed as parameters:
/// - buffer uploads are static one-shot (`STATIC_DRAW`)
/// - attributes are tightly packed `f32` components, never normalized
/// - draws are triangle lists; indexed draws read `u32` indices from the
///   element buffer captured by the bound vertex array
///
/// Allocation can fail (driver out of handles); everything else is
/// fire-and-forget command submission whose outcome is queried separately
/// (compile and link status, see [`ShaderUnit`](super::ShaderUnit) and
/// [`ShaderPipeline`](super::ShaderPipeline)).
pub trait GraphicsDevice {
    type Buffer: Copy + Eq + fmt::Debug;
    type VertexArray: Copy + Eq + fmt::Debug;
    type Shader: Copy + Eq + fmt::Debug;
    type Program: Copy + Eq + fmt::Debug;

    // Buffers.
    fn create_buffer(&self) -> Result<Self::Buffer, DeviceError>;
    fn bind_buffer(&self, kind: BufferKind, buffer: Option<Self::Buffer>);
    fn buffer_data(&self, kind: BufferKind, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    // Vertex arrays.
    fn create_vertex_array(&self) -> Result<Self::VertexArray, DeviceError>;
    fn bind_vertex_array(&self, array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, array: Self::VertexArray);

    /// Declares one `f32` attribute on the currently bound vertex array,
    /// sourced from the currently bound vertex buffer.
    fn vertex_attrib_pointer(&self, location: u32, components: i32, stride: i32, offset: i32);
    fn enable_vertex_attrib_array(&self, location: u32);

    // Shader stages.
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, DeviceError>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn compile_succeeded(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // Linked programs.
    fn create_program(&self) -> Result<Self::Program, DeviceError>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn link_succeeded(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    // Draw calls + per-frame state.
    fn draw_triangles(&self, vertex_count: i32);
    fn draw_indexed_triangles(&self, index_count: i32);
    fn viewport(&self, width: i32, height: i32);
    fn set_clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear_color_buffer(&self);
}
