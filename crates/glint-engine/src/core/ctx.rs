use winit::window::Window;

use crate::device::GlowDevice;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// The framebuffer is already cleared when the callback runs; the app
/// issues its draws against `device` and returns. Swapping is the
/// runtime's job.
pub struct FrameCtx<'a> {
    pub window: &'a Window,
    pub device: &'a GlowDevice,
}

impl FrameCtx<'_> {
    /// Current drawable size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }
}
