//! CLI module for shroomcheck
//!
//! - Argument parsing (`args`)
//! - Turning arguments plus config into render settings (`config_builder`)
//! - Runtime setup: logging and the color override (`setup`)

pub mod args;
pub mod config_builder;
pub mod setup;

pub use args::{Cli, Commands, RenderArgs};
pub use config_builder::RenderSettings;
pub use setup::{apply_color_override, init_logging};
