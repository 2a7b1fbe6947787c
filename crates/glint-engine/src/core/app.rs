use winit::event::WindowEvent;

use crate::device::{DeviceError, GlowDevice};

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// The runtime owns the window, the GL context, and the frame loop; the
/// app owns its drawables. Callback order over a run:
/// `init` once (context is current), then `on_window_event` / `on_frame`
/// until exit, then `on_exit` once (context still current).
pub trait App {
    /// Called once after the GL context is established and current.
    ///
    /// This is where GPU resources are created and validated; an error
    /// here is a fatal startup condition and aborts the run.
    fn init(&mut self, device: &GlowDevice) -> Result<(), DeviceError>;

    /// Called for window events the runtime does not consume itself.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame, after the framebuffer is cleared and before
    /// the buffers are swapped.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called once on shutdown, while the context is still current.
    ///
    /// GPU handles are external to normal memory; release them here.
    fn on_exit(&mut self, device: &GlowDevice) {
        let _ = device;
    }
}
