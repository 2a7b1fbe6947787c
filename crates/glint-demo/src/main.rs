//! Hello-shapes demo: a flat-color triangle and rectangle rendered until
//! the window closes or Escape is pressed.

use glint_engine::core::{App, AppControl, FrameCtx};
use glint_engine::device::{DeviceError, Drawable, GlowDevice};
use glint_engine::logging::init_logging;
use glint_engine::shapes;
use glint_engine::window::{Runtime, RuntimeConfig, RuntimeError};

#[derive(Default)]
struct HelloShapes {
    drawables: Vec<Drawable<GlowDevice>>,
}

impl App for HelloShapes {
    fn init(&mut self, device: &GlowDevice) -> Result<(), DeviceError> {
        self.drawables.push(shapes::triangle(device)?);
        self.drawables.push(shapes::rectangle(device)?);
        log::info!("scene ready: {} drawables", self.drawables.len());
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        for drawable in &self.drawables {
            drawable.draw(ctx.device);
        }
        AppControl::Continue
    }

    fn on_exit(&mut self, device: &GlowDevice) {
        for drawable in self.drawables.drain(..) {
            drawable.destroy(device);
        }
    }
}

/// One exit status per fatal startup stage, so a caller can tell which
/// stage failed.
fn exit_status(err: &RuntimeError) -> i32 {
    match err {
        RuntimeError::Init(_) => -1,
        RuntimeError::Window(_) => -2,
        RuntimeError::Context(_) => -3,
        RuntimeError::App(_) => -4,
    }
}

fn main() {
    init_logging();

    let config = RuntimeConfig::default();
    if let Err(err) = Runtime::run(config, HelloShapes::default()) {
        log::error!("{err}");
        std::process::exit(exit_status(&err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_map_to_the_shader_exit_status() {
        let err = RuntimeError::App(DeviceError::NoStages);
        assert_eq!(exit_status(&err), -4);
    }

    #[test]
    fn each_startup_stage_has_a_distinct_exit_status() {
        let window = RuntimeError::Window(anyhow::anyhow!("no config"));
        let context = RuntimeError::Context(anyhow::anyhow!("no context"));
        let app = RuntimeError::App(DeviceError::NoStages);

        let codes = [exit_status(&window), exit_status(&context), exit_status(&app)];
        assert_eq!(codes, [-2, -3, -4]);
    }
}
