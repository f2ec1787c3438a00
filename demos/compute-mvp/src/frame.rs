//! The per-frame compute → barrier → draw loop.

use std::time::Instant;

use anyhow::Result;
use gl::types::GLuint;
use mvp_compute::dispatch::{dispatch, image_access_barrier};
use mvp_compute::{FullscreenQuad, Program, ShaderSources, StorageTexture, WorkgroupGrid};
use mvp_glium::{validate_gl, GlWindow};
use tracing::{info, trace, warn};

use crate::config::DemoConfig;

/// Image unit the compute shader writes through.
pub const IMAGE_UNIT: GLuint = 0;
/// Texture unit the fragment shader samples from.
pub const SAMPLER_UNIT: GLuint = 0;
/// Float uniform on the compute program holding seconds since start.
pub const TIME_UNIFORM: &str = "time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Terminated,
}

impl DriverState {
    pub fn is_running(self) -> bool {
        self == DriverState::Running
    }

    /// Move to `Terminated`. Returns whether this call changed the state.
    pub fn terminate(&mut self) -> bool {
        let was_running = self.is_running();
        *self = DriverState::Terminated;
        was_running
    }
}

/// Owns every GL object the demo draws with.
pub struct FrameDriver {
    compute: Program,
    quad_program: Program,
    texture: StorageTexture,
    quad: FullscreenQuad,
    grid: WorkgroupGrid,
    started: Instant,
    frames: u64,
    state: DriverState,
}

impl FrameDriver {
    /// Load and build both programs and allocate the texture and quad for a
    /// `width` x `height` window.
    ///
    /// Shader problems are logged, not returned; the driver still runs.
    pub fn new(config: &DemoConfig, (width, height): (u32, u32)) -> Self {
        let sources = ShaderSources::load(&config.shaders);

        let compute = Program::compute(&sources.compute);
        let quad_program = Program::graphics(&sources.vertex, &sources.fragment);
        for (kind, program) in [("compute", &compute), ("quad", &quad_program)] {
            if !program.is_linked() {
                warn!(kind, "continuing with an unlinked program");
            }
        }

        let texture = StorageTexture::new(width, height);
        texture.bind_image_write(IMAGE_UNIT);

        let grid = WorkgroupGrid::covering(width, height, config.tile_size);
        info!(texture = ?texture.dimensions(), ?grid, "frame driver ready");

        Self {
            compute,
            quad_program,
            texture,
            quad: FullscreenQuad::new(),
            grid,
            started: Instant::now(),
            frames: 0,
            state: DriverState::Running,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Run one iteration: compute into the texture, wait for the stores,
    /// draw the texture on the quad, and present.
    ///
    /// Does nothing once terminated. A failed present terminates the driver.
    pub fn render(&mut self, window: &GlWindow) -> Result<()> {
        if !self.state.is_running() {
            return Ok(());
        }

        self.compute.activate();
        self.compute
            .set_uniform_f32(TIME_UNIFORM, self.started.elapsed().as_secs_f32());
        self.texture.bind_image_write(IMAGE_UNIT);
        dispatch(self.grid);

        image_access_barrier();

        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        self.quad_program.activate();
        self.texture.bind_sampler(SAMPLER_UNIT);
        self.quad.draw();

        if let Err(err) = window.present() {
            self.state.terminate();
            return Err(err);
        }

        self.frames += 1;
        trace!(frame = self.frames, "presented");
        Ok(())
    }

    /// Stop drawing. Idempotent.
    pub fn terminate(&mut self) {
        if self.state.terminate() {
            info!(frames = self.frames, "frame driver terminated");
        }
    }

    /// Terminate and release every GL object. The context must still be
    /// current.
    pub fn release(mut self) {
        self.terminate();
        validate_gl::reset_bindings();
        // Fields drop here, deleting the quad, programs and texture.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_and_terminates_once() {
        let mut state = DriverState::Running;
        assert!(state.is_running());
        assert!(state.terminate());
        assert_eq!(state, DriverState::Terminated);
        assert!(!state.terminate());
        assert!(!state.is_running());
    }

    #[test]
    fn write_and_sample_share_unit_zero() {
        assert_eq!(IMAGE_UNIT, 0);
        assert_eq!(SAMPLER_UNIT, 0);
    }

    #[test]
    fn time_uniform_is_declared_by_compute_shader() {
        let source = include_str!("../../../Shaders/compute.glsl");
        assert!(source.contains(&format!("uniform float {TIME_UNIFORM};")));
    }
}
