use serde::{Deserialize, Serialize};

use crate::formatting::ColorMode;
use crate::io::OutputFormat;
use crate::labels::Locale;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ShroomConfig {
    /// Report rendering settings
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Language for labels and headings (default: en)
    #[serde(default)]
    pub locale: Option<Locale>,

    #[serde(default)]
    pub color: Option<ColorMode>,

    /// Print the "demonstration only" disclaimer under every report
    #[serde(default = "default_show_disclaimer")]
    pub show_disclaimer: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: None,
            locale: None,
            color: None,
            show_disclaimer: default_show_disclaimer(),
        }
    }
}

fn default_show_disclaimer() -> bool {
    true
}

impl ShroomConfig {
    fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }

    pub fn format(&self) -> OutputFormat {
        self.output().default_format.unwrap_or_default()
    }

    pub fn locale(&self) -> Locale {
        self.output().locale.unwrap_or_default()
    }

    pub fn color(&self) -> Option<ColorMode> {
        self.output().color
    }

    pub fn show_disclaimer(&self) -> bool {
        self.output().show_disclaimer
    }
}

pub const DEFAULT_CONFIG_TOML: &str = r#"# shroomcheck configuration

[output]
# terminal, json or markdown
default_format = "terminal"
# en or id
locale = "en"
# auto, always or never
color = "auto"
show_disclaimer = true
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_output_section_missing() {
        let config = ShroomConfig::default();
        assert_eq!(config.format(), OutputFormat::Terminal);
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.color(), None);
        assert!(config.show_disclaimer());
    }

    #[test]
    fn default_template_parses() {
        let config: ShroomConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config.format(), OutputFormat::Terminal);
        assert_eq!(config.color(), Some(ColorMode::Auto));
    }
}
