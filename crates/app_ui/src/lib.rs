//! PhotoDesk UI Layer
//!
//! Provides:
//! - egui components for the menu bar, toolbar, side panels, content area and status bar
//! - wgpu rendering of egui frames
//! - Key binding resolution
//! - Theme tokens and fonts

pub mod renderer;
pub mod components;
pub mod input;
pub mod theme;

pub use renderer::Renderer;
pub use input::InputHandler;
pub use theme::{install_fonts, layout, Theme};
