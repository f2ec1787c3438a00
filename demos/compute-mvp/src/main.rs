//! Compute shader demo: a compute program writes an animated pattern into an
//! RGBA32F texture every frame, and a second program draws that texture on a
//! full-screen quad.
//!
//! Shader sources are read from `Shaders/` relative to the working directory.
//! Set `RUST_LOG` to change log verbosity.

use anyhow::{anyhow, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

mod app;
mod config;
mod frame;

use app::ComputeApp;
use config::DemoConfig;

/// Process exit status when the window, context or GL loader fails.
const INIT_FAILURE_EXIT_CODE: i32 = -1;

fn main() {
    initialise_tracing();

    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(INIT_FAILURE_EXIT_CODE);
    }
}

fn run() -> Result<()> {
    let event_loop = EventLoop::new().map_err(|e| anyhow!("failed to create event loop: {e}"))?;

    // Render continuously; nothing waits on input.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ComputeApp::new(DemoConfig::default());
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("event loop failed: {e}"))?;

    app.finish()
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
