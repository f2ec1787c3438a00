//! winit application handler driving the window and the frame loop.

use anyhow::Result;
use mvp_glium::GlWindow;
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::config::DemoConfig;
use crate::frame::FrameDriver;

pub struct ComputeApp {
    config: DemoConfig,
    // Released before `window` so GL objects die while the context lives.
    driver: Option<FrameDriver>,
    window: Option<GlWindow>,
    init_error: Option<anyhow::Error>,
}

impl ComputeApp {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            driver: None,
            window: None,
            init_error: None,
        }
    }

    /// The initialization error, if the window or context never came up.
    pub fn finish(mut self) -> Result<()> {
        self.shutdown();
        match self.init_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn shutdown(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.release();
        }
        if self.window.take().is_some() {
            info!("window closed");
        }
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(driver), Some(window)) = (self.driver.as_mut(), self.window.as_ref()) else {
            return;
        };
        if !driver.state().is_running() {
            return;
        }
        if let Err(err) = driver.render(window) {
            error!("{err:#}");
            self.shutdown();
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for ComputeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }

        match GlWindow::new(event_loop, &self.config.window) {
            Ok(window) => {
                self.driver = Some(FrameDriver::new(&self.config, window.size()));
                window.request_redraw();
                self.window = Some(window);
            }
            Err(err) => {
                self.init_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(GlWindow::id) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                if let Some(driver) = self.driver.as_mut() {
                    driver.terminate();
                }
                self.shutdown();
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => self.draw_frame(event_loop),
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
