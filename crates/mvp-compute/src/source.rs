//! Shader source loading.
//!
//! Loading never fails: an unreadable file yields an empty source and an
//! error diagnostic, and the caller carries on with whatever it got back.
//! The program builder reports the resulting compile failure.
//!
//! Sources are raw bytes. The GL driver decides what encodings it accepts,
//! so a comment in Latin-1 reaches the compiler untouched.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::error;

/// Read the exact contents of a shader source file.
///
/// Returns an empty source if the file cannot be opened or read.
pub fn load_shader_source(path: impl AsRef<Path>) -> Vec<u8> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(source) => source,
        Err(err) => {
            error!(path = %path.display(), "failed to open shader source: {err}");
            Vec::new()
        }
    }
}

/// Locations of the three shader stages the demo uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPaths {
    pub compute: PathBuf,
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

/// Source bytes for each stage, as returned by [`load_shader_source`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSources {
    pub compute: Vec<u8>,
    pub vertex: Vec<u8>,
    pub fragment: Vec<u8>,
}

impl ShaderSources {
    /// Load every stage listed in `paths`. Missing files become empty sources.
    pub fn load(paths: &ShaderPaths) -> Self {
        Self {
            compute: load_shader_source(&paths.compute),
            vertex: load_shader_source(&paths.vertex),
            fragment: load_shader_source(&paths.fragment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn existing_file_is_returned_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = "#version 430 core\r\nlayout(local_size_x = 16) in;\n\tvoid main() {}\n";
        file.write_all(body.as_bytes()).unwrap();

        assert_eq!(load_shader_source(file.path()), body.as_bytes());
    }

    #[test]
    fn non_utf8_file_is_returned_byte_for_byte() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = b"#version 430 core\n// compilaci\xF3n\nvoid main() {}\n";
        file.write_all(body).unwrap();

        let source = load_shader_source(file.path());
        assert_eq!(source.len(), 48);
        assert_eq!(source, body);
    }

    #[test]
    fn empty_file_yields_empty_source() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(load_shader_source(file.path()).is_empty());
    }

    #[test]
    fn missing_file_yields_empty_source() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Shaders").join("nope.glsl");
        assert!(load_shader_source(&missing).is_empty());
    }

    #[test]
    fn directory_path_yields_empty_source() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_shader_source(dir.path()).is_empty());
    }

    #[test]
    fn load_all_stages_mixes_present_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let compute = dir.path().join("compute.glsl");
        let vertex = dir.path().join("vertex.glsl");
        fs::write(&compute, "compute body").unwrap();
        fs::write(&vertex, "vertex body").unwrap();

        let paths = ShaderPaths {
            compute,
            vertex,
            fragment: dir.path().join("fragment.glsl"),
        };
        let sources = ShaderSources::load(&paths);

        assert_eq!(sources.compute, b"compute body");
        assert_eq!(sources.vertex, b"vertex body");
        assert!(sources.fragment.is_empty());
    }
}
