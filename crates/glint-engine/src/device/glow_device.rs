use glow::HasContext;

use super::api::{BufferKind, GraphicsDevice, ShaderStage};
use super::error::DeviceError;

/// Production device backed by a loaded OpenGL 3.3 core context.
///
/// All raw GL calls in the crate live here. Every method requires the
/// wrapped context to be current on the calling thread; the runtime makes
/// it current before the device is constructed and never migrates it.
pub struct GlowDevice {
    gl: glow::Context,
}

impl GlowDevice {
    /// Wraps a loaded context.
    ///
    /// The context is expected to be current and to stay current for the
    /// lifetime of the device.
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }
}

fn target(kind: BufferKind) -> u32 {
    match kind {
        BufferKind::Vertex => glow::ARRAY_BUFFER,
        BufferKind::Index => glow::ELEMENT_ARRAY_BUFFER,
    }
}

fn stage_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

impl GraphicsDevice for GlowDevice {
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;
    type Shader = glow::Shader;
    type Program = glow::Program;

    fn create_buffer(&self) -> Result<Self::Buffer, DeviceError> {
        unsafe { self.gl.create_buffer() }.map_err(|message| DeviceError::Allocation {
            what: "buffer",
            message,
        })
    }

    fn bind_buffer(&self, kind: BufferKind, buffer: Option<Self::Buffer>) {
        unsafe { self.gl.bind_buffer(target(kind), buffer) }
    }

    fn buffer_data(&self, kind: BufferKind, data: &[u8]) {
        unsafe { self.gl.buffer_data_u8_slice(target(kind), data, glow::STATIC_DRAW) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, DeviceError> {
        unsafe { self.gl.create_vertex_array() }.map_err(|message| DeviceError::Allocation {
            what: "vertex array",
            message,
        })
    }

    fn bind_vertex_array(&self, array: Option<Self::VertexArray>) {
        unsafe { self.gl.bind_vertex_array(array) }
    }

    fn delete_vertex_array(&self, array: Self::VertexArray) {
        unsafe { self.gl.delete_vertex_array(array) }
    }

    fn vertex_attrib_pointer(&self, location: u32, components: i32, stride: i32, offset: i32) {
        unsafe {
            self.gl
                .vertex_attrib_pointer_f32(location, components, glow::FLOAT, false, stride, offset)
        }
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(location) }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, DeviceError> {
        unsafe { self.gl.create_shader(stage_type(stage)) }.map_err(|message| {
            DeviceError::Allocation {
                what: "shader",
                message,
            }
        })
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn compile_succeeded(&self, shader: Self::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<Self::Program, DeviceError> {
        unsafe { self.gl.create_program() }.map_err(|message| DeviceError::Allocation {
            what: "program",
            message,
        })
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { self.gl.link_program(program) }
    }

    fn link_succeeded(&self, program: Self::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.gl.use_program(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn draw_triangles(&self, vertex_count: i32) {
        unsafe { self.gl.draw_arrays(glow::TRIANGLES, 0, vertex_count) }
    }

    fn draw_indexed_triangles(&self, index_count: i32) {
        unsafe {
            self.gl
                .draw_elements(glow::TRIANGLES, index_count, glow::UNSIGNED_INT, 0)
        }
    }

    fn viewport(&self, width: i32, height: i32) {
        unsafe { self.gl.viewport(0, 0, width, height) }
    }

    fn set_clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { self.gl.clear_color(r, g, b, a) }
    }

    fn clear_color_buffer(&self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT) }
    }
}
