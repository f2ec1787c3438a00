//! Fixed demo settings. Nothing here is read from disk or the environment.

use mvp_compute::ShaderPaths;
use mvp_glium::WindowSettings;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "Compute Shader MVP";

/// Edge length of a compute workgroup tile. Must match `local_size_x` and
/// `local_size_y` in `Shaders/compute.glsl`.
pub const TILE_SIZE: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub window: WindowSettings,
    pub shaders: ShaderPaths,
    pub tile_size: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings {
                title: WINDOW_TITLE.to_string(),
                width: WINDOW_WIDTH,
                height: WINDOW_HEIGHT,
                gl_version: (4, 3),
            },
            shaders: ShaderPaths {
                compute: "Shaders/compute.glsl".into(),
                vertex: "Shaders/vertex.glsl".into(),
                fragment: "Shaders/fragment.glsl".into(),
            },
            tile_size: TILE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_window() {
        let config = DemoConfig::default();
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.window.title, "Compute Shader MVP");
        assert_eq!(config.window.gl_version, (4, 3));
    }

    #[test]
    fn default_shader_paths_are_relative() {
        let config = DemoConfig::default();
        assert_eq!(config.shaders.compute, Path::new("Shaders/compute.glsl"));
        assert_eq!(config.shaders.vertex, Path::new("Shaders/vertex.glsl"));
        assert_eq!(config.shaders.fragment, Path::new("Shaders/fragment.glsl"));
        assert!(config.shaders.compute.is_relative());
    }

    #[test]
    fn tile_matches_compute_shader_local_size() {
        let source = include_str!("../../../Shaders/compute.glsl");
        let expected = format!("local_size_x = {TILE_SIZE}, local_size_y = {TILE_SIZE}");
        assert!(source.contains(&expected), "compute.glsl must declare {expected}");
    }
}
