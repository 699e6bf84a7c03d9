use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ShroomConfig;
use crate::errors::ShroomError;

pub const CONFIG_FILE_NAME: &str = ".shroomcheck.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a config from TOML text.
pub fn parse_and_validate_config(contents: &str) -> Result<ShroomConfig, ShroomError> {
    toml::from_str::<ShroomConfig>(contents)
        .map_err(|e| ShroomError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Read and parse one config file, keeping its path on parse errors.
pub fn load_config_file(config_path: &Path) -> Result<ShroomConfig, ShroomError> {
    let contents = read_config_file(config_path)?;
    parse_and_validate_config(&contents).map_err(|e| match e {
        ShroomError::Config { message, .. } => ShroomError::config_with_path(message, config_path),
        other => other,
    })
}

/// Outcome of looking for a config file at one candidate path.
#[derive(Debug)]
pub(crate) enum ConfigLookup {
    Found(ShroomConfig),
    Missing,
    /// Present but unreadable or malformed; the search stops here.
    Invalid,
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> ConfigLookup {
    match load_config_file(config_path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            ConfigLookup::Found(config)
        }
        Err(ShroomError::Io(e)) => handle_read_error(config_path, &e),
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            ConfigLookup::Invalid
        }
    }
}

// "Not found" is the normal case while walking up directories.
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) -> ConfigLookup {
    if error.kind() == std::io::ErrorKind::NotFound {
        return ConfigLookup::Missing;
    }
    log::warn!(
        "Failed to read config file {}: {}. Using defaults.",
        config_path.display(),
        error
    );
    ConfigLookup::Invalid
}

/// `start` followed by its parents, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// `<config dir>/shroomcheck/config.toml`, if the platform has one.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shroomcheck").join("config.toml"))
}

/// Search `start` and its ancestors, then `fallback`.
///
/// The first config file that exists decides: if it is invalid the
/// defaults are used, without looking any further.
pub fn load_config_from(start: PathBuf, fallback: Option<PathBuf>) -> ShroomConfig {
    let candidates = directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(fallback);

    for path in candidates {
        match try_load_config_from_path(&path) {
            ConfigLookup::Found(config) => return config,
            ConfigLookup::Invalid => return ShroomConfig::default(),
            ConfigLookup::Missing => {}
        }
    }

    log::debug!(
        "No config found after checking {} directories. Using default config.",
        MAX_TRAVERSAL_DEPTH
    );
    ShroomConfig::default()
}

pub fn load_config() -> ShroomConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir, user_config_path()),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ShroomConfig::default()
        }
    }
}
