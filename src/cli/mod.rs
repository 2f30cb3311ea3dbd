//! CLI-specific utilities for butterfly-path
//!
//! This module contains code specific to the command-line interface,
//! separate from the core library functionality.

pub mod menu;
pub mod render;

pub use menu::{render_menu, resolve_location, run_interactive, MenuConfig};
pub use render::render_outcome;
