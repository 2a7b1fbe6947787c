use thiserror::Error;

use crate::device::DeviceError;

/// Fatal startup/runtime conditions, one variant per stage so callers can
/// tell *which* stage failed (and map each to a distinct exit status).
///
/// None of these are retried; the run aborts on the first one.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The windowing library itself failed to start or tore down with an
    /// error.
    #[error("failed to run the windowing event loop: {0}")]
    Init(#[from] winit::error::EventLoopError),

    /// No window with a GL-capable configuration could be created.
    #[error("failed to create a window with a GL-capable configuration: {0:#}")]
    Window(anyhow::Error),

    /// The window exists but no OpenGL 3.3 core context could be
    /// established and made current on it.
    #[error("failed to establish a current OpenGL context: {0:#}")]
    Context(anyhow::Error),

    /// The application's GPU resources failed to build or validate.
    #[error(transparent)]
    App(#[from] DeviceError),
}
