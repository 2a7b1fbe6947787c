use super::api::{BufferKind, GraphicsDevice};
use super::bind::BufferBinding;
use super::error::DeviceError;

/// A GPU buffer handle plus the data it was uploaded from.
///
/// The backing bytes are kept for the buffer's lifetime so re-upload and
/// introspection stay possible and the value is independently movable.
/// Upload happens once at creation (static usage); `bind` only activates
/// the buffer for its target kind.
#[derive(Debug)]
pub struct DeviceBuffer<D: GraphicsDevice> {
    handle: D::Buffer,
    kind: BufferKind,
    element_count: usize,
    data: Vec<u8>,
}

impl<D: GraphicsDevice> DeviceBuffer<D> {
    /// Allocates and uploads a vertex buffer from `f32` attribute data.
    pub fn vertex(device: &D, data: Vec<f32>) -> Result<Self, DeviceError> {
        let count = data.len();
        Self::upload(device, BufferKind::Vertex, count, bytemuck::cast_slice(&data).to_vec())
    }

    /// Allocates and uploads an index buffer from `u32` triangle indices.
    ///
    /// The element-array binding this performs is vertex-array state, so
    /// callers must have a vertex array bound; [`Geometry`](super::Geometry)
    /// guarantees this during construction.
    pub fn index(device: &D, data: Vec<u32>) -> Result<Self, DeviceError> {
        let count = data.len();
        Self::upload(device, BufferKind::Index, count, bytemuck::cast_slice(&data).to_vec())
    }

    fn upload(
        device: &D,
        kind: BufferKind,
        element_count: usize,
        data: Vec<u8>,
    ) -> Result<Self, DeviceError> {
        let handle = device.create_buffer()?;
        let buffer = Self {
            handle,
            kind,
            element_count,
            data,
        };
        {
            let _bound = buffer.bind(device);
            device.buffer_data(kind, &buffer.data);
        }
        Ok(buffer)
    }

    /// Activates the buffer as the current target of its kind.
    ///
    /// The returned token deactivates the target when dropped (vertex
    /// buffers only; see [`BufferBinding`]).
    pub fn bind<'a>(&self, device: &'a D) -> BufferBinding<'a, D> {
        BufferBinding::new(device, self.kind, self.handle)
    }

    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    /// Number of typed elements uploaded (`f32`s for vertex buffers, `u32`
    /// indices for index buffers). Fixed at creation.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Releases the GPU handle. Must be called exactly once, at shutdown.
    pub fn destroy(self, device: &D) {
        device.delete_buffer(self.handle);
    }
}
