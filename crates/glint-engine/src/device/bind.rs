//! Scoped binding guards.
//!
//! The device's "current binding" registers (active buffer, active vertex
//! array) are process-wide mutable state. Every bind that is not part of the
//! frame's draw call goes through one of these guards so the zero binding is
//! restored on every exit path, early returns and error paths included.

use super::api::{BufferKind, GraphicsDevice};

/// Token for an active buffer binding.
///
/// Dropping the token restores binding 0 for the [`BufferKind::Vertex`]
/// target. The [`BufferKind::Index`] binding is deliberately left in place:
/// the element-array binding is part of vertex-array state, and restoring 0
/// while a vertex array is bound would strip the association the array just
/// captured.
#[must_use = "dropping the token ends the binding"]
pub struct BufferBinding<'a, D: GraphicsDevice> {
    device: &'a D,
    kind: BufferKind,
}

impl<'a, D: GraphicsDevice> BufferBinding<'a, D> {
    pub(crate) fn new(device: &'a D, kind: BufferKind, buffer: D::Buffer) -> Self {
        device.bind_buffer(kind, Some(buffer));
        Self { device, kind }
    }
}

impl<D: GraphicsDevice> Drop for BufferBinding<'_, D> {
    fn drop(&mut self) {
        if self.kind == BufferKind::Vertex {
            self.device.bind_buffer(self.kind, None);
        }
    }
}

/// Token for an active vertex-array binding.
///
/// Dropping the token restores vertex-array binding 0.
#[must_use = "dropping the token ends the binding"]
pub struct VertexArrayBinding<'a, D: GraphicsDevice> {
    device: &'a D,
}

impl<'a, D: GraphicsDevice> VertexArrayBinding<'a, D> {
    pub(crate) fn new(device: &'a D, array: D::VertexArray) -> Self {
        device.bind_vertex_array(Some(array));
        Self { device }
    }
}

impl<D: GraphicsDevice> Drop for VertexArrayBinding<'_, D> {
    fn drop(&mut self) {
        self.device.bind_vertex_array(None);
    }
}
