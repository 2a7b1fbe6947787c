use super::api::GraphicsDevice;
use super::error::DeviceError;
use super::geometry::Geometry;
use super::pipeline::ShaderPipeline;

/// One geometry binding paired with one shader pipeline: the unit the
/// frame loop renders.
///
/// Lifecycle is unchecked -> checked-valid -> rendering. Both members must
/// pass validation before the first draw; once valid, a drawable is drawn
/// repeatedly without re-validation. `draw` only issues GPU commands and
/// never mutates the drawable's own state.
#[derive(Debug)]
pub struct Drawable<D: GraphicsDevice> {
    geometry: Geometry<D>,
    pipeline: ShaderPipeline<D>,
}

impl<D: GraphicsDevice> Drawable<D> {
    pub fn new(geometry: Geometry<D>, pipeline: ShaderPipeline<D>) -> Self {
        Self { geometry, pipeline }
    }

    /// Delegates to the pipeline's validation.
    ///
    /// Geometry has no validation step of its own: once its allocations
    /// succeeded, the upload is assumed good.
    pub fn validate(&self, device: &D) -> Result<(), DeviceError> {
        self.pipeline.validate(device)
    }

    /// Forwards the one-time reclamation of standalone shader objects.
    pub fn reclaim_units(&mut self, device: &D) {
        self.pipeline.reclaim_units(device);
    }

    /// Activates the pipeline, then draws the geometry.
    pub fn draw(&self, device: &D) {
        self.pipeline.activate(device);
        self.geometry.draw(device);
    }

    pub fn geometry(&self) -> &Geometry<D> {
        &self.geometry
    }

    /// Releases both members. Must be called exactly once, at shutdown.
    pub fn destroy(self, device: &D) {
        self.geometry.destroy(device);
        self.pipeline.destroy(device);
    }
}
