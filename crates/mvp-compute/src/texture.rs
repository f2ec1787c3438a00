//! The texture shared by the compute and quad programs.

use gl::types::{GLenum, GLint, GLuint};
use tracing::debug;

/// Internal format of the storage texture. Must match the `layout` qualifier
/// of the image uniform in the compute shader.
pub const STORAGE_FORMAT: GLenum = gl::RGBA32F;

/// A 2D RGBA32F texture that compute shaders write through an image unit and
/// fragment shaders sample through a texture unit.
///
/// Deleted on drop.
#[derive(Debug)]
pub struct StorageTexture {
    name: GLuint,
    width: u32,
    height: u32,
}

impl StorageTexture {
    /// Allocate an uninitialised `width` x `height` texture on texture unit 0
    /// with linear filtering and clamp-to-edge wrapping.
    pub fn new(width: u32, height: u32) -> Self {
        let mut name: GLuint = 0;
        unsafe {
            gl::GenTextures(1, &mut name);
            gl::ActiveTexture(gl::TEXTURE0);
            gl::BindTexture(gl::TEXTURE_2D, name);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                STORAGE_FORMAT as GLint,
                width as GLint,
                height as GLint,
                0,
                gl::RGBA,
                gl::FLOAT,
                std::ptr::null(),
            );
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as GLint);
        }

        debug!(texture = name, width, height, "allocated storage texture");

        Self {
            name,
            width,
            height,
        }
    }

    /// Bind level 0 to image `unit` for write-only access from compute.
    pub fn bind_image_write(&self, unit: GLuint) {
        unsafe {
            gl::BindImageTexture(unit, self.name, 0, gl::FALSE, 0, gl::WRITE_ONLY, STORAGE_FORMAT);
        }
    }

    /// Bind to texture `unit` for sampling.
    pub fn bind_sampler(&self, unit: GLuint) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, self.name);
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for StorageTexture {
    fn drop(&mut self) {
        if self.name != 0 {
            unsafe {
                gl::DeleteTextures(1, &self.name);
            }
            self.name = 0;
        }
    }
}
