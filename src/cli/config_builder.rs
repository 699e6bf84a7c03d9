//! Merge command-line flags with the config file into render settings.
//!
//! Precedence, highest first: explicit flags, environment variables
//! (`SHROOMCHECK_LOCALE` via clap, `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`),
//! the config file, built-in defaults. A report written to a file gets no
//! colors unless they are forced.

use std::path::PathBuf;

use crate::cli::args::RenderArgs;
use crate::config::ShroomConfig;
use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use crate::io::{OutputFormat, ReportOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub options: ReportOptions,
    pub formatting: FormattingConfig,
}

impl RenderArgs {
    pub fn resolve(&self, config: &ShroomConfig) -> RenderSettings {
        RenderSettings {
            format: self.format.unwrap_or_else(|| config.format()),
            output: self.output.clone(),
            options: ReportOptions {
                locale: self.locale.unwrap_or_else(|| config.locale()),
                show_disclaimer: !self.no_disclaimer && config.show_disclaimer(),
                explain: self.explain,
            },
            formatting: resolve_formatting(
                self,
                config,
                FormattingConfig::from_env(),
                self.output.is_some(),
            ),
        }
    }
}

fn resolve_formatting(
    args: &RenderArgs,
    config: &ShroomConfig,
    from_env: FormattingConfig,
    to_file: bool,
) -> FormattingConfig {
    if args.plain {
        return FormattingConfig::plain();
    }

    let mut formatting = from_env;
    if formatting.color == ColorMode::Auto {
        if let Some(color) = config.color() {
            formatting.color = color;
        }
    }
    if let Some(color) = args.color {
        formatting.color = color;
    }
    // Auto detection looks at stdout, not at the report file.
    if to_file && formatting.color == ColorMode::Auto {
        formatting.color = ColorMode::Never;
    }
    if formatting.color == ColorMode::Never {
        formatting.emoji = EmojiMode::Never;
    }
    formatting
}
