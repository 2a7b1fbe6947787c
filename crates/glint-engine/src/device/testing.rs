//! In-memory device fake for resource-lifecycle tests.
//!
//! Records every call in order (so binding discipline and check ordering
//! are assertable), hands out sequential `u32` handles shared across all
//! object types, and can be configured to fail compilation for sources
//! containing a marker, to fail linking, or to refuse the next buffer
//! allocation.

use std::cell::RefCell;
use std::collections::HashMap;

use super::api::{BufferKind, GraphicsDevice, ShaderStage};
use super::error::DeviceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    CreateBuffer(u32),
    BindBuffer(BufferKind, Option<u32>),
    BufferData(BufferKind, usize),
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    VertexAttribPointer {
        location: u32,
        components: i32,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    QueryCompileStatus(u32),
    QueryShaderInfoLog(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    QueryLinkStatus(u32),
    QueryProgramInfoLog(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    DrawTriangles(i32),
    DrawIndexedTriangles(i32),
    Viewport(i32, i32),
    SetClearColor,
    ClearColorBuffer,
}

#[derive(Debug, Default)]
struct State {
    next_handle: u32,
    calls: Vec<Call>,
    shader_sources: HashMap<u32, String>,
    compile_fail_marker: Option<String>,
    link_fail_log: Option<String>,
    fail_next_buffer: bool,
}

/// Single-threaded recording fake; interior mutability mirrors the real
/// device's `&self` command submission.
#[derive(Debug, Default)]
pub(crate) struct RecordingDevice {
    state: RefCell<State>,
}

impl RecordingDevice {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Marks shader sources containing `marker` as failing to compile.
    pub(crate) fn fail_compiles_containing(&self, marker: &str) {
        self.state.borrow_mut().compile_fail_marker = Some(marker.to_string());
    }

    /// Makes every link-status query report failure with `log`.
    pub(crate) fn fail_link(&self, log: &str) {
        self.state.borrow_mut().link_fail_log = Some(log.to_string());
    }

    /// Refuses the next buffer allocation.
    pub(crate) fn fail_next_buffer_allocation(&self) {
        self.state.borrow_mut().fail_next_buffer = true;
    }

    /// Snapshot of every call recorded so far, in submission order.
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// Drops the recorded history; handle numbering continues.
    pub(crate) fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_handle(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        state.next_handle += 1;
        state.next_handle
    }

    fn compile_ok(&self, shader: u32) -> bool {
        let state = self.state.borrow();
        let Some(marker) = &state.compile_fail_marker else {
            return true;
        };
        state
            .shader_sources
            .get(&shader)
            .is_none_or(|source| !source.contains(marker))
    }
}

impl GraphicsDevice for RecordingDevice {
    type Buffer = u32;
    type VertexArray = u32;
    type Shader = u32;
    type Program = u32;

    fn create_buffer(&self) -> Result<u32, DeviceError> {
        {
            let mut state = self.state.borrow_mut();
            if state.fail_next_buffer {
                state.fail_next_buffer = false;
                return Err(DeviceError::Allocation {
                    what: "buffer",
                    message: "out of handles".into(),
                });
            }
        }
        let handle = self.next_handle();
        self.record(Call::CreateBuffer(handle));
        Ok(handle)
    }

    fn bind_buffer(&self, kind: BufferKind, buffer: Option<u32>) {
        self.record(Call::BindBuffer(kind, buffer));
    }

    fn buffer_data(&self, kind: BufferKind, data: &[u8]) {
        self.record(Call::BufferData(kind, data.len()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> Result<u32, DeviceError> {
        let handle = self.next_handle();
        self.record(Call::CreateVertexArray(handle));
        Ok(handle)
    }

    fn bind_vertex_array(&self, array: Option<u32>) {
        self.record(Call::BindVertexArray(array));
    }

    fn delete_vertex_array(&self, array: u32) {
        self.record(Call::DeleteVertexArray(array));
    }

    fn vertex_attrib_pointer(&self, location: u32, components: i32, stride: i32, offset: i32) {
        self.record(Call::VertexAttribPointer {
            location,
            components,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(Call::EnableVertexAttribArray(location));
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, DeviceError> {
        let handle = self.next_handle();
        self.record(Call::CreateShader(stage, handle));
        Ok(handle)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.state
            .borrow_mut()
            .shader_sources
            .insert(shader, source.to_string());
        self.record(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn compile_succeeded(&self, shader: u32) -> bool {
        self.record(Call::QueryCompileStatus(shader));
        self.compile_ok(shader)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.record(Call::QueryShaderInfoLog(shader));
        if self.compile_ok(shader) {
            String::new()
        } else {
            format!("0:1(1): error: syntax error in shader object {shader}")
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, DeviceError> {
        let handle = self.next_handle();
        self.record(Call::CreateProgram(handle));
        Ok(handle)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn link_succeeded(&self, program: u32) -> bool {
        self.record(Call::QueryLinkStatus(program));
        self.state.borrow().link_fail_log.is_none()
    }

    fn program_info_log(&self, program: u32) -> String {
        self.record(Call::QueryProgramInfoLog(program));
        self.state
            .borrow()
            .link_fail_log
            .clone()
            .unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn draw_triangles(&self, vertex_count: i32) {
        self.record(Call::DrawTriangles(vertex_count));
    }

    fn draw_indexed_triangles(&self, index_count: i32) {
        self.record(Call::DrawIndexedTriangles(index_count));
    }

    fn viewport(&self, width: i32, height: i32) {
        self.record(Call::Viewport(width, height));
    }

    fn set_clear_color(&self, _r: f32, _g: f32, _b: f32, _a: f32) {
        self.record(Call::SetClearColor);
    }

    fn clear_color_buffer(&self) {
        self.record(Call::ClearColorBuffer);
    }
}
