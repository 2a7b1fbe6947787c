use super::api::{GraphicsDevice, ShaderStage};
use super::error::DeviceError;

/// Upper bound on captured compile/link diagnostics, in bytes.
///
/// Driver info logs are unbounded; anything past this is noise for a
/// startup diagnostic.
pub const INFO_LOG_LIMIT: usize = 512;

/// One compiled shader stage.
///
/// Creation submits the source and triggers compilation but never fails
/// structurally once the handle allocates; whether compilation *succeeded*
/// is queried lazily through [`check`](Self::check) so an owning pipeline
/// can batch all unit checks together.
#[derive(Debug)]
pub struct ShaderUnit<D: GraphicsDevice> {
    handle: D::Shader,
    stage: ShaderStage,
    name: String,
}

impl<D: GraphicsDevice> ShaderUnit<D> {
    /// Allocates a stage handle, submits `source`, and starts compilation.
    ///
    /// `name` tags diagnostics so a failing shader can be located.
    pub fn new(
        device: &D,
        name: impl Into<String>,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self, DeviceError> {
        let handle = device.create_shader(stage)?;
        device.shader_source(handle, source);
        device.compile_shader(handle);
        Ok(Self {
            handle,
            stage,
            name: name.into(),
        })
    }

    /// Queries compile status.
    ///
    /// On failure the driver diagnostic is retrieved, clipped to
    /// [`INFO_LOG_LIMIT`], and returned tagged with the unit's name and
    /// stage. Success has no side effect. Compile status is immutable, so
    /// repeated checks return the same verdict.
    pub fn check(&self, device: &D) -> Result<(), DeviceError> {
        if device.compile_succeeded(self.handle) {
            return Ok(());
        }
        Err(DeviceError::Compile {
            name: self.name.clone(),
            stage: self.stage,
            log: clip_info_log(device.shader_info_log(self.handle)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub(crate) fn handle(&self) -> D::Shader {
        self.handle
    }

    /// Releases the stage handle, regardless of compile outcome.
    pub fn destroy(self, device: &D) {
        device.delete_shader(self.handle);
    }
}

/// Clips a driver info log to [`INFO_LOG_LIMIT`] bytes on a char boundary.
pub(crate) fn clip_info_log(mut log: String) -> String {
    if log.len() > INFO_LOG_LIMIT {
        let mut end = INFO_LOG_LIMIT;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    log
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::testing::{Call, RecordingDevice};

    #[test]
    fn creation_submits_source_and_compiles() {
        let device = RecordingDevice::new();
        let unit =
            ShaderUnit::new(&device, "demo_vertex", ShaderStage::Vertex, "void main() {}").unwrap();

        assert_eq!(unit.name(), "demo_vertex");
        assert_eq!(unit.stage(), ShaderStage::Vertex);
        assert_eq!(
            device.calls(),
            vec![
                Call::CreateShader(ShaderStage::Vertex, 1),
                Call::ShaderSource(1),
                Call::CompileShader(1),
            ]
        );
    }

    #[test]
    fn valid_source_checks_clean() {
        let device = RecordingDevice::new();
        let unit =
            ShaderUnit::new(&device, "demo_vertex", ShaderStage::Vertex, "void main() {}").unwrap();

        assert!(unit.check(&device).is_ok());
    }

    #[test]
    fn broken_source_reports_name_and_stage() {
        let device = RecordingDevice::new();
        device.fail_compiles_containing("!syntax-error");
        let unit = ShaderUnit::new(
            &device,
            "demo_fragment",
            ShaderStage::Fragment,
            "void main() { !syntax-error }",
        )
        .unwrap();

        let err = unit.check(&device).unwrap_err();
        match err {
            DeviceError::Compile { name, stage, log } => {
                assert_eq!(name, "demo_fragment");
                assert_eq!(stage, ShaderStage::Fragment);
                assert!(!log.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn check_verdict_is_stable() {
        let device = RecordingDevice::new();
        device.fail_compiles_containing("!syntax-error");
        let unit = ShaderUnit::new(
            &device,
            "demo_fragment",
            ShaderStage::Fragment,
            "!syntax-error",
        )
        .unwrap();

        assert!(unit.check(&device).is_err());
        assert!(unit.check(&device).is_err());
    }

    #[test]
    fn destroy_releases_the_handle_even_for_failed_compiles() {
        let device = RecordingDevice::new();
        device.fail_compiles_containing("!syntax-error");
        let unit = ShaderUnit::new(&device, "bad", ShaderStage::Fragment, "!syntax-error").unwrap();

        unit.destroy(&device);
        assert_eq!(device.calls().last(), Some(&Call::DeleteShader(1)));
    }

    #[test]
    fn info_logs_are_clipped_to_the_limit() {
        let long = "e".repeat(INFO_LOG_LIMIT * 2);
        assert_eq!(clip_info_log(long).len(), INFO_LOG_LIMIT);

        let short = String::from("0:1(1): error: syntax error");
        assert_eq!(clip_info_log(short.clone()), short);
    }
}
