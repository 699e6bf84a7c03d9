//! Configuration for the command-line front end.
//!
//! Settings come from `.shroomcheck.toml`, found by walking up from the
//! current directory, or from the user's config directory. Command-line
//! flags override whatever the file says. The classifier takes no
//! configuration at all.

mod core;
mod loader;

pub use self::core::{OutputConfig, ShroomConfig, DEFAULT_CONFIG_TOML};
pub use self::loader::{
    directory_ancestors, load_config, load_config_file, load_config_from, parse_and_validate_config,
    user_config_path, CONFIG_FILE_NAME,
};
