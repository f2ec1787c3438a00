//! Full-screen quad geometry.

use std::mem::{offset_of, size_of};

use gl::types::{GLint, GLsizei, GLsizeiptr, GLuint};

use crate::bytes::AsBytes;

/// One quad vertex: clip-space position followed by texture coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
}

// SAFETY: `#[repr(C)]`, four f32 fields, no padding.
unsafe impl AsBytes for QuadVertex {}

/// Vertices drawn per frame.
pub const QUAD_VERTEX_COUNT: usize = 6;

/// Two counter-clockwise triangles covering clip space. Texture coordinates
/// put v = 0 at the bottom edge, matching GL's texture origin.
pub const FULLSCREEN_QUAD: [QuadVertex; QUAD_VERTEX_COUNT] = [
    QuadVertex { position: [-1.0, 1.0], tex_coord: [0.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0], tex_coord: [0.0, 0.0] },
    QuadVertex { position: [1.0, -1.0], tex_coord: [1.0, 0.0] },
    QuadVertex { position: [-1.0, 1.0], tex_coord: [0.0, 1.0] },
    QuadVertex { position: [1.0, -1.0], tex_coord: [1.0, 0.0] },
    QuadVertex { position: [1.0, 1.0], tex_coord: [1.0, 1.0] },
];

/// Attribute location of [`QuadVertex::position`].
pub const POSITION_ATTRIBUTE: GLuint = 0;
/// Attribute location of [`QuadVertex::tex_coord`].
pub const TEX_COORD_ATTRIBUTE: GLuint = 1;

/// Vertex array and buffer holding [`FULLSCREEN_QUAD`]. Immutable once built;
/// both objects are deleted on drop.
#[derive(Debug)]
pub struct FullscreenQuad {
    vao: GLuint,
    vbo: GLuint,
}

impl FullscreenQuad {
    pub fn new() -> Self {
        let mut vao: GLuint = 0;
        let mut vbo: GLuint = 0;
        let bytes = FULLSCREEN_QUAD.as_bytes();
        let stride = size_of::<QuadVertex>() as GLsizei;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            gl::EnableVertexAttribArray(POSITION_ATTRIBUTE);
            gl::VertexAttribPointer(
                POSITION_ATTRIBUTE,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(QuadVertex, position) as *const _,
            );
            gl::EnableVertexAttribArray(TEX_COORD_ATTRIBUTE);
            gl::VertexAttribPointer(
                TEX_COORD_ATTRIBUTE,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(QuadVertex, tex_coord) as *const _,
            );
        }

        Self { vao, vbo }
    }

    /// Bind the vertex array and draw both triangles.
    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, QUAD_VERTEX_COUNT as GLint);
        }
    }
}

impl Default for FullscreenQuad {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FullscreenQuad {
    fn drop(&mut self) {
        unsafe {
            if self.vao != 0 {
                gl::DeleteVertexArrays(1, &self.vao);
                self.vao = 0;
            }
            if self.vbo != 0 {
                gl::DeleteBuffers(1, &self.vbo);
                self.vbo = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_is_four_packed_floats() {
        assert_eq!(size_of::<QuadVertex>(), 16);
        assert_eq!(offset_of!(QuadVertex, position), 0);
        assert_eq!(offset_of!(QuadVertex, tex_coord), 8);
        assert_eq!(FULLSCREEN_QUAD.as_bytes().len(), 96);
    }

    #[test]
    fn quad_touches_all_four_clip_corners() {
        for corner in [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]] {
            assert!(
                FULLSCREEN_QUAD.iter().any(|v| v.position == corner),
                "corner {corner:?} not covered"
            );
        }
    }

    #[test]
    fn tex_coords_map_clip_space_to_unit_square() {
        for v in FULLSCREEN_QUAD {
            assert_eq!(v.tex_coord[0], (v.position[0] + 1.0) / 2.0);
            assert_eq!(v.tex_coord[1], (v.position[1] + 1.0) / 2.0);
        }
    }

    #[test]
    fn triangles_share_the_diagonal() {
        // Both triangles contain the top-left and bottom-right corners.
        let (first, second) = FULLSCREEN_QUAD.split_at(3);
        for corner in [[-1.0, 1.0], [1.0, -1.0]] {
            assert!(first.iter().any(|v| v.position == corner));
            assert!(second.iter().any(|v| v.position == corner));
        }
    }
}
