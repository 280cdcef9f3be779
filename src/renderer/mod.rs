//! Rendering module
//!
//! Renderers only read `GameState`; they never mutate the simulation.

pub mod text;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use text::render_text;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
