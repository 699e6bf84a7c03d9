use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::formatting::ColorMode;
use crate::io::OutputFormat;
use crate::labels::Locale;
use crate::traits::{parse_trait, GillColor, GillSize, Odor, StalkRoot};

#[derive(Parser, Debug)]
#[command(name = "shroomcheck")]
#[command(
    about = "Rule-based mushroom edibility expert system (demonstration only)",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one mushroom from its four traits
    Diagnose {
        /// Odor: data set code or name (a, l, c, y, f, m, n, p, s)
        #[arg(long, value_parser = parse_trait::<Odor>)]
        odor: Odor,

        /// Gill size: code or name (b, n)
        #[arg(long = "gill-size", value_parser = parse_trait::<GillSize>)]
        gill_size: GillSize,

        /// Gill color: code or name (k, n, b, h, g, r, o, p, u, e, w, y)
        #[arg(long = "gill-color", value_parser = parse_trait::<GillColor>)]
        gill_color: GillColor,

        /// Stalk root: code or name (b, c, u, e, z, r, ?)
        #[arg(long = "stalk-root", value_parser = parse_trait::<StalkRoot>)]
        stalk_root: StalkRoot,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Prompt for each trait on stdin, then classify
    Interactive {
        #[command(flatten)]
        render: RenderArgs,
    },

    /// List the accepted values for every trait
    Traits {
        /// Label language
        #[arg(long, value_enum, env = "SHROOMCHECK_LOCALE")]
        locale: Option<Locale>,
    },

    /// Print the knowledge base in evaluation order
    Rules,

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Rendering flags shared by `diagnose` and `interactive`.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Output format (defaults to the config file, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Label language
    #[arg(long, value_enum, env = "SHROOMCHECK_LOCALE")]
    pub locale: Option<Locale>,

    /// Show which rule decided the verdict
    #[arg(long)]
    pub explain: bool,

    /// When to use colors
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Plain output: no colors, no emoji
    #[arg(long)]
    pub plain: bool,

    /// Do not print the disclaimer
    #[arg(long = "no-disclaimer")]
    pub no_disclaimer: bool,
}
