//! Raw OpenGL function loading for the `gl` bindings.

use std::ffi::CString;
use std::sync::Once;

use anyhow::{bail, Result};
use glutin::display::{Display, GlDisplay};

pub(crate) static GL_INIT_ONCE: Once = Once::new();

/// Entry points the compute demo cannot run without.
const REQUIRED_ENTRY_POINTS: &[(&str, fn() -> bool)] = &[
    ("glCreateShader", gl::CreateShader::is_loaded),
    ("glLinkProgram", gl::LinkProgram::is_loaded),
    ("glTexImage2D", gl::TexImage2D::is_loaded),
    ("glBindImageTexture", gl::BindImageTexture::is_loaded),
    ("glDispatchCompute", gl::DispatchCompute::is_loaded),
    ("glMemoryBarrier", gl::MemoryBarrier::is_loaded),
    ("glGenVertexArrays", gl::GenVertexArrays::is_loaded),
    ("glDrawArrays", gl::DrawArrays::is_loaded),
];

/// Resolve GL function pointers against `display`.
///
/// Pointers are loaded exactly once per process. Fails if any entry point in
/// [`REQUIRED_ENTRY_POINTS`] could not be resolved.
pub(crate) fn load_gl_functions(display: &Display) -> Result<()> {
    GL_INIT_ONCE.call_once(|| {
        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => display.get_proc_address(&symbol),
            Err(_) => std::ptr::null(),
        });
    });

    let missing: Vec<&str> = REQUIRED_ENTRY_POINTS
        .iter()
        .filter(|(_, is_loaded)| !is_loaded())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        bail!("failed to resolve GL entry points: {}", missing.join(", "));
    }

    tracing::debug!("loaded GL function pointers");
    Ok(())
}
