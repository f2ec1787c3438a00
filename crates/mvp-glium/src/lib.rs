//! Window and OpenGL context creation for the compute demo.
//!
//! [`GlWindow`] opens a winit window, creates a core-profile context on it
//! through glutin, loads the raw [`gl`] function pointers, and hands the
//! context to glium, which validates it and presents frames.
//!
//! ### Warning
//!
//! Raw GL calls bypass glium's state cache. Only use the glium side for
//! capability queries and buffer swaps.

use std::fmt::{Debug, Formatter};

use anyhow::{anyhow, bail, Context as _, Result};
use glium::backend::Facade;
use glium::CapabilitiesSource;
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext};
use glutin::display::GlDisplay;
use glutin::surface::WindowSurface;
use glutin_winit::GlWindow as _;
use raw_window_handle::HasWindowHandle;
use tracing::debug;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

mod gl_backend;
pub mod glsl;
mod platform;
pub mod validate_gl;

/// Fixed properties of the window and the context requested for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL version, `(major, minor)`. Always core profile.
    pub gl_version: (u8, u8),
}

/// A window with a current OpenGL context and loaded function pointers.
pub struct GlWindow {
    // Dropped before `window`: the surface must not outlive it.
    display: glium::Display<WindowSurface>,
    window: Window,
}

impl Debug for GlWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlWindow")
            .field("window", &self.window.id())
            .finish()
    }
}

impl GlWindow {
    /// Create the window and context and make the context current.
    ///
    /// Any failure here is fatal to the demo: window creation, context or
    /// surface creation, function loading, or a context too old for compute
    /// shaders.
    pub fn new(event_loop: &ActiveEventLoop, settings: &WindowSettings) -> Result<Self> {
        let window_attributes = Window::default_attributes()
            .with_title(settings.title.as_str())
            .with_inner_size(PhysicalSize::new(settings.width, settings.height))
            .with_resizable(false);

        // WGL only reports modern pixel formats once a window exists. Elsewhere
        // the window is created after the config so it gets a matching visual.
        #[cfg(windows)]
        let early_window = Some(
            event_loop
                .create_window(window_attributes.clone())
                .map_err(|e| anyhow!("failed to create window: {e}"))?,
        );
        #[cfg(not(windows))]
        let early_window: Option<Window> = None;

        let early_handle = early_window
            .as_ref()
            .map(|window| window.window_handle().map(|handle| handle.as_raw()))
            .transpose()
            .context("window has no native handle")?;

        let gl_display = platform::create_display(event_loop, early_handle)?;
        let gl_config = platform::choose_config(&gl_display, early_handle)?;

        let window = match early_window {
            Some(window) => window,
            None => glutin_winit::finalize_window(event_loop, window_attributes, &gl_config)
                .map_err(|e| anyhow!("failed to create window: {e}"))?,
        };
        let raw_window_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let (major, minor) = settings.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(glutin::context::Version::new(
                major, minor,
            ))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .with_context(|| format!("failed to create OpenGL {major}.{minor} core context"))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .context("failed to describe window surface")?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make OpenGL context current")?;

        gl_backend::load_gl_functions(&gl_display)?;

        let display = glium::Display::from_context_surface(context, surface)
            .map_err(|e| anyhow!("glium rejected the OpenGL context: {e:?}"))?;

        let ctx = display.get_context();
        debug!("OPENGL_VERSION {}", ctx.get_opengl_version_string());
        debug!(
            "VALID VERSIONS: {:?}",
            ctx.get_capabilities().supported_glsl_versions
        );

        let version = ctx.get_opengl_version();
        if !glsl::supports_compute(version) {
            bail!(
                "OpenGL {version:?} does not support compute shaders (need {}.{})",
                glsl::MIN_COMPUTE_VERSION.0,
                glsl::MIN_COMPUTE_VERSION.1
            );
        }

        let size = window.inner_size();
        validate_gl::set_viewport(size.width, size.height);
        debug!(viewport = ?validate_gl::current_viewport(), "viewport set");

        Ok(Self { display, window })
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    /// Drawable size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Swap the back buffer to the screen.
    pub fn present(&self) -> Result<()> {
        self.display
            .get_context()
            .swap_buffers()
            .map_err(|e| anyhow!("swap_buffers failed: {e:?}"))
    }
}
