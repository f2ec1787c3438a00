//! Platform GL display creation and framebuffer config selection.

use anyhow::{anyhow, Context as _, Result};
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::display::{Display, DisplayApiPreference, GlDisplay};
use raw_window_handle::{HasDisplayHandle, RawWindowHandle};
use winit::event_loop::ActiveEventLoop;

/// Open the platform GL display for `event_loop`.
///
/// `window` is only consulted by WGL, which needs an existing window to
/// expose modern pixel formats.
pub(crate) fn create_display(
    event_loop: &ActiveEventLoop,
    window: Option<RawWindowHandle>,
) -> Result<Display> {
    let raw_display = event_loop
        .display_handle()
        .context("event loop has no display handle")?
        .as_raw();
    unsafe { Display::new(raw_display, api_preference(window)) }
        .context("failed to open GL display")
}

/// Pick the framebuffer config the window is created with.
///
/// Some backends filter their matches after the fact and can come back with
/// nothing; that is an initialization error, not a panic.
pub(crate) fn choose_config(display: &Display, window: Option<RawWindowHandle>) -> Result<Config> {
    let mut template = ConfigTemplateBuilder::new();
    if let Some(handle) = window {
        template = template.compatible_with_native_window(handle);
    }

    let configs = unsafe { display.find_configs(template.build()) }
        .context("no GL framebuffer config matches the window")?;

    // Multisampling buys nothing for a single textured quad.
    fewest_samples(configs, |config| config.num_samples())
        .ok_or_else(|| anyhow!("GL display offered no framebuffer configs"))
}

/// The first config with the lowest sample count, or `None` if there are no
/// configs at all.
pub(crate) fn fewest_samples<T>(
    configs: impl IntoIterator<Item = T>,
    samples: impl Fn(&T) -> u8,
) -> Option<T> {
    configs.into_iter().min_by_key(|config| samples(config))
}

#[cfg(windows)]
fn api_preference(window: Option<RawWindowHandle>) -> DisplayApiPreference {
    DisplayApiPreference::WglThenEgl(window)
}

#[cfg(target_os = "macos")]
fn api_preference(_window: Option<RawWindowHandle>) -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

#[cfg(target_os = "android")]
fn api_preference(_window: Option<RawWindowHandle>) -> DisplayApiPreference {
    DisplayApiPreference::Egl
}

#[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
fn api_preference(_window: Option<RawWindowHandle>) -> DisplayApiPreference {
    DisplayApiPreference::GlxThenEgl(Box::new(winit::platform::x11::register_xlib_error_hook))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_configs_is_none() {
        let configs: Vec<(char, u8)> = Vec::new();
        assert_eq!(fewest_samples(configs, |c| c.1), None);
    }

    #[test]
    fn lowest_sample_count_wins() {
        let configs = vec![('a', 4), ('b', 0), ('c', 8)];
        assert_eq!(fewest_samples(configs, |c| c.1), Some(('b', 0)));
    }

    #[test]
    fn ties_keep_driver_order() {
        let configs = vec![('a', 4), ('b', 0), ('c', 0)];
        assert_eq!(fewest_samples(configs, |c| c.1), Some(('b', 0)));
    }
}
