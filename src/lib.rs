//! Super Voice Bros menu shell
//!
//! A small screen-stack UI framework for a voice-controlled platformer:
//! a main menu, an instructions screen and timed message overlays, drawn on
//! a fixed logical canvas mapped onto the terminal.

// Core modules
pub mod app;
pub mod cli;
pub mod config;
pub mod geometry;
pub mod navigator;
pub mod platform;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use app::App;
pub use config::Config;
pub use navigator::{Flow, Navigator};
pub use screens::{NavigationCommand, Screen, ScreenKind};
