//! Raw OpenGL compute building blocks.
//!
//! Everything here issues GL calls through the [`gl`] bindings and assumes
//! the function pointers are loaded and a context is current on the calling
//! thread. GL objects are owned by Rust values and deleted on drop, so they
//! must be dropped before the context goes away.
//!
//! The wrappers are safe functions. A missing context is a GL error, and
//! every pointer handed to the driver is built and checked on the Rust side.
//!
//! # Overview
//!
//! - [`load_shader_source`] / [`ShaderSources`] read GLSL from disk.
//! - [`Program`] compiles and links graphics or compute programs.
//! - [`StorageTexture`] is the RGBA32F image written by compute and sampled
//!   by the quad.
//! - [`FullscreenQuad`] holds the two-triangle geometry.
//! - [`dispatch`](dispatch::dispatch) / [`image_access_barrier`] submit
//!   compute work over a [`WorkgroupGrid`].

pub mod bytes;
pub mod dispatch;
pub mod program;
pub mod quad;
pub mod source;
pub mod texture;

pub use bytes::AsBytes;
pub use dispatch::{image_access_barrier, workgroup_count, WorkgroupGrid};
pub use program::{Program, ShaderStage};
pub use quad::{FullscreenQuad, QuadVertex, FULLSCREEN_QUAD};
pub use source::{load_shader_source, ShaderPaths, ShaderSources};
pub use texture::StorageTexture;
