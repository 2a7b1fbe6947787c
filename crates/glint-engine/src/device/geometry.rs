use super::api::GraphicsDevice;
use super::bind::VertexArrayBinding;
use super::buffer::DeviceBuffer;
use super::error::DeviceError;

/// Attribute location for positions. The only attribute this engine
/// declares: 3 tightly packed `f32` components per vertex, offset 0.
const POSITION_LOCATION: u32 = 0;
const POSITION_COMPONENTS: i32 = 3;
const VERTEX_STRIDE: i32 = POSITION_COMPONENTS * size_of::<f32>() as i32;

/// A vertex-array handle owning its buffers and a fixed attribute layout.
///
/// The layout is configured exactly once at creation and never mutated.
/// Buffers are owned exclusively; destroying the geometry releases them
/// together with the array handle.
#[derive(Debug)]
pub struct Geometry<D: GraphicsDevice> {
    handle: D::VertexArray,
    element_count: usize,
    vertex_buffer: DeviceBuffer<D>,
    index_buffer: Option<DeviceBuffer<D>>,
}

impl<D: GraphicsDevice> Geometry<D> {
    /// Builds non-indexed triangle-list geometry from packed positions.
    ///
    /// `vertices` holds 3 `f32` components per vertex; the element count is
    /// the vertex count (`vertices.len() / 3`).
    pub fn new(device: &D, vertices: Vec<f32>) -> Result<Self, DeviceError> {
        Self::build(device, vertices, None)
    }

    /// Builds indexed triangle-list geometry; the element count is the
    /// index count.
    pub fn with_indices(
        device: &D,
        vertices: Vec<f32>,
        indices: Vec<u32>,
    ) -> Result<Self, DeviceError> {
        Self::build(device, vertices, Some(indices))
    }

    fn build(
        device: &D,
        vertices: Vec<f32>,
        indices: Option<Vec<u32>>,
    ) -> Result<Self, DeviceError> {
        if vertices.len() % POSITION_COMPONENTS as usize != 0 {
            return Err(DeviceError::VertexLayout {
                len: vertices.len(),
            });
        }

        let handle = device.create_vertex_array()?;

        // Guards unwind in reverse acquisition order (index -> vertex ->
        // array), so the array keeps its attribute and element-buffer
        // associations while the buffer targets are released.
        let _array = VertexArrayBinding::new(device, handle);

        let vertex_buffer = DeviceBuffer::vertex(device, vertices)?;
        let index_buffer = match indices {
            // Uploaded under the bound array: the element-array binding it
            // establishes is captured as vertex-array state.
            Some(indices) => Some(DeviceBuffer::index(device, indices)?),
            None => None,
        };

        let element_count = match &index_buffer {
            Some(buffer) => buffer.element_count(),
            None => vertex_buffer.element_count() / POSITION_COMPONENTS as usize,
        };

        {
            let _vertex = vertex_buffer.bind(device);
            let _index = index_buffer.as_ref().map(|buffer| buffer.bind(device));
            device.vertex_attrib_pointer(POSITION_LOCATION, POSITION_COMPONENTS, VERTEX_STRIDE, 0);
            device.enable_vertex_attrib_array(POSITION_LOCATION);
        }

        Ok(Self {
            handle,
            element_count,
            vertex_buffer,
            index_buffer,
        })
    }

    /// Number of elements a draw call covers: vertices for non-indexed
    /// geometry, indices for indexed geometry.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn is_indexed(&self) -> bool {
        self.index_buffer.is_some()
    }

    /// Activates the vertex array, issues one triangle-list draw sized to
    /// the stored element count, and deactivates.
    pub fn draw(&self, device: &D) {
        let _array = VertexArrayBinding::new(device, self.handle);
        match &self.index_buffer {
            Some(_) => device.draw_indexed_triangles(self.element_count as i32),
            None => device.draw_triangles(self.element_count as i32),
        }
    }

    /// Releases the array handle and both owned buffers. Must be called
    /// exactly once, at shutdown.
    pub fn destroy(self, device: &D) {
        self.vertex_buffer.destroy(device);
        if let Some(buffer) = self.index_buffer {
            buffer.destroy(device);
        }
        device.delete_vertex_array(self.handle);
    }
}
