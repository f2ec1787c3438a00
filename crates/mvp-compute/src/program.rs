//! Shader compilation and program linking.
//!
//! Failures here are not fatal. Compile and link errors are logged with the
//! driver's info log and a [`Program`] is returned anyway; drawing with an
//! unlinked program is a GL error, not a crash.

use std::ffi::CString;

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};
use tracing::{debug, error};

/// Upper bound on the info log bytes fetched from the driver.
pub const INFO_LOG_CAPACITY: usize = 512;

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    pub fn gl_enum(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
            ShaderStage::Compute => gl::COMPUTE_SHADER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Compute => "compute",
        }
    }
}

/// A linked GL program object. Deleted on drop.
#[derive(Debug)]
pub struct Program {
    name: GLuint,
    linked: bool,
}

impl Program {
    /// Build a program from a vertex and a fragment stage.
    pub fn graphics(vertex_source: &[u8], fragment_source: &[u8]) -> Self {
        let vertex = compile_shader(ShaderStage::Vertex, vertex_source);
        let fragment = compile_shader(ShaderStage::Fragment, fragment_source);
        link_program(&[vertex, fragment], "graphics")
    }

    /// Build a single-stage compute program.
    pub fn compute(compute_source: &[u8]) -> Self {
        let compute = compile_shader(ShaderStage::Compute, compute_source);
        link_program(&[compute], "compute")
    }

    /// Whether the driver reported a successful link.
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Make this the current program.
    pub fn activate(&self) {
        unsafe {
            gl::UseProgram(self.name);
        }
    }

    /// Look up a uniform by name. Returns -1 if it does not exist or was
    /// optimised out.
    pub fn uniform_location(&self, uniform: &str) -> GLint {
        let Ok(c_name) = CString::new(uniform) else {
            return -1;
        };
        unsafe { gl::GetUniformLocation(self.name, c_name.as_ptr()) }
    }

    /// Set a float uniform on this program. The program must be active.
    ///
    /// A missing uniform is a no-op, as with location -1 in GL itself.
    pub fn set_uniform_f32(&self, uniform: &str, value: f32) {
        let location = self.uniform_location(uniform);
        unsafe {
            gl::Uniform1f(location, value);
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        if self.name != 0 {
            unsafe {
                gl::DeleteProgram(self.name);
            }
            self.name = 0;
        }
    }
}

/// Compile one shader unit.
///
/// The shader object is returned whether or not compilation succeeded. A
/// source with an interior NUL cannot be handed to the driver and is
/// reported as a compile failure.
pub fn compile_shader(stage: ShaderStage, source: &[u8]) -> GLuint {
    let shader = unsafe { gl::CreateShader(stage.gl_enum()) };

    let c_source = match CString::new(source) {
        Ok(s) => s,
        Err(err) => {
            error!(
                stage = stage.label(),
                "shader source contains a NUL byte at offset {}",
                err.nul_position()
            );
            return shader;
        }
    };

    let mut success: GLint = 0;
    unsafe {
        gl::ShaderSource(shader, 1, &c_source.as_ptr(), std::ptr::null());
        gl::CompileShader(shader);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    }

    if success == 0 {
        let log = read_info_log(|capacity, written, buf| unsafe {
            gl::GetShaderInfoLog(shader, capacity, written, buf)
        });
        error!(stage = stage.label(), "shader compilation failed: {log}");
    } else {
        debug!(stage = stage.label(), shader, "compiled shader");
    }

    shader
}

/// Attach `shaders`, link, and delete the shader objects.
fn link_program(shaders: &[GLuint], kind: &'static str) -> Program {
    let name = unsafe { gl::CreateProgram() };
    let mut success: GLint = 0;

    unsafe {
        for &shader in shaders {
            gl::AttachShader(name, shader);
        }
        gl::LinkProgram(name);
        gl::GetProgramiv(name, gl::LINK_STATUS, &mut success);
    }

    if success == 0 {
        let log = read_info_log(|capacity, written, buf| unsafe {
            gl::GetProgramInfoLog(name, capacity, written, buf)
        });
        error!(kind, "program link failed: {log}");
    } else {
        debug!(kind, program = name, "linked program");
    }

    // The program keeps the compiled code; units can go right away.
    unsafe {
        for &shader in shaders {
            gl::DetachShader(name, shader);
            gl::DeleteShader(shader);
        }
    }

    Program {
        name,
        linked: success != 0,
    }
}

fn read_info_log(fetch: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar)) -> String {
    let mut buf = vec![0u8; INFO_LOG_CAPACITY];
    let mut written: GLsizei = 0;
    fetch(
        INFO_LOG_CAPACITY as GLsizei,
        &mut written,
        buf.as_mut_ptr() as *mut GLchar,
    );
    buf.truncate((written.max(0) as usize).min(INFO_LOG_CAPACITY));
    trim_info_log(&buf)
}

/// Turn a raw driver info log into printable text.
///
/// Stops at the first NUL, caps the length at [`INFO_LOG_CAPACITY`], and
/// strips trailing whitespace.
pub fn trim_info_log(raw: &[u8]) -> String {
    let bounded = &raw[..raw.len().min(INFO_LOG_CAPACITY)];
    let end = bounded.iter().position(|&b| b == 0).unwrap_or(bounded.len());
    String::from_utf8_lossy(&bounded[..end]).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_enums_match_gl() {
        assert_eq!(ShaderStage::Vertex.gl_enum(), gl::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_enum(), gl::FRAGMENT_SHADER);
        assert_eq!(ShaderStage::Compute.gl_enum(), gl::COMPUTE_SHADER);
        assert_eq!(ShaderStage::Compute.label(), "compute");
    }

    #[test]
    fn info_log_stops_at_nul_and_trims() {
        let raw = b"0:12(3): error: syntax error\n\0garbage";
        assert_eq!(trim_info_log(raw), "0:12(3): error: syntax error");
    }

    #[test]
    fn info_log_is_bounded() {
        let raw = vec![b'x'; INFO_LOG_CAPACITY * 2];
        assert_eq!(trim_info_log(&raw).len(), INFO_LOG_CAPACITY);
    }

    #[test]
    fn empty_info_log() {
        assert_eq!(trim_info_log(b""), "");
        assert_eq!(trim_info_log(b"\0\0\0"), "");
    }
}
