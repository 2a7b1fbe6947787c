use super::api::GraphicsDevice;
use super::error::DeviceError;
use super::shader::{clip_info_log, ShaderUnit};

/// A linked program built from a set of shader units.
///
/// Creation attaches every unit and links exactly once; link status is
/// queried separately so the "resource allocated" and "resource valid"
/// outcomes stay distinct. Validation and reclamation of the standalone
/// shader objects are deliberately separate operations:
///
/// - [`validate`](Self::validate) is pure and repeatable while the units
///   are held;
/// - [`reclaim_units`](Self::reclaim_units) is the one-time, irreversible
///   release of the per-stage handles once linking made them redundant.
///
/// Validating after reclamation is disallowed (the per-unit compile state
/// is gone) and reports [`DeviceError::AlreadyReclaimed`].
#[derive(Debug)]
pub struct ShaderPipeline<D: GraphicsDevice> {
    handle: D::Program,
    units: Vec<ShaderUnit<D>>,
    units_reclaimed: bool,
}

impl<D: GraphicsDevice> ShaderPipeline<D> {
    /// Allocates a program, attaches every unit, and links.
    ///
    /// An empty unit set is rejected up front; everything else succeeds
    /// structurally, deferring compile/link verdicts to `validate`.
    pub fn new(device: &D, units: Vec<ShaderUnit<D>>) -> Result<Self, DeviceError> {
        if units.is_empty() {
            return Err(DeviceError::NoStages);
        }

        let handle = device.create_program()?;
        for unit in &units {
            device.attach_shader(handle, unit.handle());
        }
        device.link_program(handle);

        Ok(Self {
            handle,
            units,
            units_reclaimed: false,
        })
    }

    /// Checks every unit, then link status.
    ///
    /// Unit compile errors propagate immediately, strictly before any link
    /// diagnostic is read: a failed stage makes the link verdict
    /// meaningless. On link failure the program diagnostic is returned,
    /// clipped like unit logs.
    pub fn validate(&self, device: &D) -> Result<(), DeviceError> {
        if self.units_reclaimed {
            return Err(DeviceError::AlreadyReclaimed);
        }

        for unit in &self.units {
            unit.check(device)?;
        }

        if device.link_succeeded(self.handle) {
            return Ok(());
        }
        Err(DeviceError::Link {
            log: clip_info_log(device.program_info_log(self.handle)),
        })
    }

    /// Releases the standalone shader objects.
    ///
    /// The compiled stages remain attached to the linked program and are
    /// not needed on their own once validation passed. Calling this twice
    /// is a no-op; the first call flips the pipeline into its reclaimed
    /// state permanently.
    pub fn reclaim_units(&mut self, device: &D) {
        if self.units_reclaimed {
            return;
        }
        for unit in self.units.drain(..) {
            unit.destroy(device);
        }
        self.units_reclaimed = true;
    }

    pub fn units_reclaimed(&self) -> bool {
        self.units_reclaimed
    }

    /// Makes the program current for subsequent draw calls.
    ///
    /// Performs no validation; only call after a successful
    /// [`validate`](Self::validate).
    pub fn activate(&self, device: &D) {
        device.use_program(Some(self.handle));
    }

    /// Releases the program handle (and any units not yet reclaimed).
    /// Must be called exactly once, at shutdown.
    pub fn destroy(mut self, device: &D) {
        for unit in self.units.drain(..) {
            unit.destroy(device);
        }
        device.delete_program(self.handle);
    }
}
