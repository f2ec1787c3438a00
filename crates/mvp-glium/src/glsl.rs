//! OpenGL version checks.

use glium::{Api, Version};

/// Lowest desktop GL version with compute shaders and image load/store in
/// core.
pub const MIN_COMPUTE_VERSION: (u8, u8) = (4, 3);

/// Whether `version` is desktop GL at least `major.minor`.
pub fn is_at_least(version: &Version, major: u8, minor: u8) -> bool {
    match version {
        Version(Api::Gl, got_major, got_minor) => (*got_major, *got_minor) >= (major, minor),
        Version(Api::GlEs, ..) => false,
    }
}

/// Whether a context reporting `version` can run the compute demo.
pub fn supports_compute(version: &Version) -> bool {
    is_at_least(version, MIN_COMPUTE_VERSION.0, MIN_COMPUTE_VERSION.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_versions() {
        assert!(supports_compute(&Version(Api::Gl, 4, 3)));
        assert!(supports_compute(&Version(Api::Gl, 4, 6)));
        assert!(!supports_compute(&Version(Api::Gl, 4, 1)));
        assert!(!supports_compute(&Version(Api::Gl, 3, 3)));
    }

    #[test]
    fn gles_is_rejected() {
        assert!(!supports_compute(&Version(Api::GlEs, 3, 2)));
    }

    #[test]
    fn later_major_with_lower_minor() {
        assert!(is_at_least(&Version(Api::Gl, 5, 0), 4, 3));
    }
}
