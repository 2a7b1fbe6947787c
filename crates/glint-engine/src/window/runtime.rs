use anyhow::{anyhow, Context as _};
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{GlowDevice, GraphicsDevice};

use super::error::RuntimeError;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// Framebuffer clear color applied before every frame callback.
    pub clear_color: [f32; 4],

    /// Ask for a swap interval of 1. Best effort; some platforms refuse.
    pub vsync: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            clear_color: [0.2, 0.3, 0.3, 1.0],
            vsync: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` inside a window with a current OpenGL 3.3 core context
    /// until the user closes the window, presses Escape, or a callback
    /// requests exit.
    ///
    /// Blocks for the lifetime of the event loop. Fatal startup stages are
    /// reported through the matching [`RuntimeError`] variant.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<(), RuntimeError>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new()?;
        let mut state = RuntimeState::new(config, app);

        event_loop.run_app(&mut state)?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Everything whose lifetime is tied to the open window.
///
/// Declaration order doubles as teardown order: the surface and context
/// are released before the window closes.
struct GlState {
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    device: GlowDevice,
    window: Window,
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    app: A,
    gl: Option<GlState>,
    fatal: Option<RuntimeError>,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            gl: None,
            fatal: None,
        }
    }

    fn abort(&mut self, event_loop: &ActiveEventLoop, err: RuntimeError) {
        self.fatal = Some(err);
        event_loop.exit();
    }

    /// Creates the window, establishes a current context, and loads the
    /// device. Split per stage so each failure keeps its identity.
    fn establish_gl(&self, event_loop: &ActiveEventLoop) -> Result<GlState, RuntimeError> {
        let (window, gl_config) =
            create_window(event_loop, &self.config).map_err(RuntimeError::Window)?;
        create_context(window, &gl_config, &self.config).map_err(RuntimeError::Context)
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gl) = self.gl.as_ref() else { return };

        gl.device.clear_color_buffer();

        let mut ctx = FrameCtx {
            window: &gl.window,
            device: &gl.device,
        };
        let control = self.app.on_frame(&mut ctx);

        gl.window.pre_present_notify();
        if let Err(err) = gl.surface.swap_buffers(&gl.context) {
            log::error!("buffer swap failed: {err}");
            event_loop.exit();
            return;
        }

        if control == AppControl::Exit {
            event_loop.exit();
        }
    }

    fn resize(&self, width: u32, height: u32) {
        let Some(gl) = self.gl.as_ref() else { return };
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            // Zero-sized surfaces cannot be configured; keep the old one
            // until a real size arrives.
            return;
        };
        gl.surface.resize(&gl.context, w, h);
        gl.device.viewport(width as i32, height as i32);
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl.is_some() {
            return;
        }

        let gl = match self.establish_gl(event_loop) {
            Ok(gl) => gl,
            Err(err) => {
                self.abort(event_loop, err);
                return;
            }
        };

        let [r, g, b, a] = self.config.clear_color;
        gl.device.set_clear_color(r, g, b, a);

        if let Err(err) = self.app.init(&gl.device) {
            self.abort(event_loop, RuntimeError::App(err));
            return;
        }

        gl.window.request_redraw();
        self.gl = Some(gl);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.app.on_window_event(&event) == AppControl::Exit {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::Resized(size) => self.resize(size.width, size.height),

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; presentation is paced by the swap interval.
        if let Some(gl) = self.gl.as_ref() {
            gl.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gl) = self.gl.as_ref() {
            self.app.on_exit(&gl.device);
        }
        // Dropping GlState tears down surface, context, and window.
        self.gl = None;
    }
}

/// Builds the window together with a GL-capable framebuffer configuration.
fn create_window(
    event_loop: &ActiveEventLoop,
    config: &RuntimeConfig,
) -> anyhow::Result<(Window, Config)> {
    let attrs = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(config.initial_size);

    let (window, gl_config) = DisplayBuilder::new()
        .with_window_attributes(Some(attrs))
        .build(event_loop, ConfigTemplateBuilder::new(), |configs| {
            // Prefer the config with the most samples; any GL-capable one
            // will do for a single flat-color pass.
            configs
                .reduce(|best, candidate| {
                    if candidate.num_samples() > best.num_samples() {
                        candidate
                    } else {
                        best
                    }
                })
                .expect("glutin offers at least one framebuffer config")
        })
        .map_err(|err| anyhow!("no GL-capable display configuration: {err}"))?;

    let window = window.context("display builder produced no window")?;
    Ok((window, gl_config))
}

/// Establishes a current OpenGL 3.3 core context on `window` and loads the
/// device function pointers through it.
fn create_context(
    window: Window,
    gl_config: &Config,
    config: &RuntimeConfig,
) -> anyhow::Result<GlState> {
    let raw_handle = window
        .window_handle()
        .context("window exposes no native handle")?
        .as_raw();
    let gl_display = gl_config.display();

    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .with_profile(GlProfile::Core)
        .build(Some(raw_handle));

    let not_current = unsafe { gl_display.create_context(gl_config, &context_attributes) }
        .context("context creation failed")?;

    let surface_attributes = window
        .build_surface_attributes(SurfaceAttributesBuilder::new())
        .context("window has no valid surface dimensions")?;
    let surface = unsafe { gl_display.create_window_surface(gl_config, &surface_attributes) }
        .context("surface creation failed")?;

    let context = not_current
        .make_current(&surface)
        .context("make-current failed")?;

    if config.vsync {
        if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
            log::warn!("vsync unavailable: {err}");
        }
    }

    // Resolve GL entry points through the display's loader.
    let gl = unsafe {
        glow::Context::from_loader_function_cstr(|symbol| gl_display.get_proc_address(symbol))
    };
    let device = GlowDevice::new(gl);

    let size = window.inner_size();
    device.viewport(size.width as i32, size.height as i32);

    log::info!(
        "OpenGL 3.3 core context established ({}x{})",
        size.width,
        size.height
    );

    Ok(GlState {
        surface,
        context,
        device,
        window,
    })
}
