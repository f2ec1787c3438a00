//! Set and reset the state of the OpenGL context.
//!
//! Like the `mvp-compute` wrappers, these are safe functions that assume the
//! context created by [`crate::GlWindow`] is current on the calling thread
//! with function pointers loaded. Calling them earlier is a GL error, not
//! memory unsafety.

use gl::types::{GLint, GLsizei};

/// Set the viewport to cover a `width` x `height` drawable.
pub fn set_viewport(width: u32, height: u32) {
    unsafe {
        gl::Viewport(0, 0, width as GLsizei, height as GLsizei);
    }
}

/// Read back the current viewport as `[x, y, width, height]`.
pub fn current_viewport() -> [GLint; 4] {
    let mut dims: [GLint; 4] = [0; 4];
    unsafe {
        gl::GetIntegerv(gl::VIEWPORT, dims.as_mut_ptr());
    }
    dims
}

/// Unbind programs, textures, image unit 0, buffers and vertex arrays.
///
/// Run before deleting GL objects at shutdown so nothing is still bound.
pub fn reset_bindings() {
    unsafe {
        gl::UseProgram(0);

        gl::BindImageTexture(0, 0, 0, gl::FALSE, 0, gl::READ_ONLY, gl::RGBA32F);
        gl::ActiveTexture(gl::TEXTURE0);
        gl::BindTexture(gl::TEXTURE_2D, 0);

        gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        gl::BindVertexArray(0);
    }
}
