//! Terminal UI rendering

pub mod renderer;

pub use renderer::Renderer;
