use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML};
use crate::io;
use anyhow::Result;
use std::path::Path;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TOML)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_parseable_config() {
        let dir = TempDir::new().unwrap();
        init_config(dir.path(), false).unwrap();
        let contents = fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(parse_and_validate_config(&contents).is_ok());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "# mine").unwrap();

        assert!(init_config(dir.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        init_config(dir.path(), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);
    }
}
