//! Runtime setup for the binary.

use crate::formatting::{ColorMode, FormattingConfig};

/// Initialize `env_logger`.
///
/// `RUST_LOG` wins when set; otherwise `-v` flags raise the level from
/// `warn` to `info`, `debug` and `trace`. Logs go to stderr so they never
/// mix with a JSON report on stdout.
pub fn init_logging(verbosity: u8) {
    let env = env_logger::Env::default().default_filter_or(level_for(verbosity));
    // A second init (e.g. from tests) is harmless; keep the first logger.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Let `--color always` beat `NO_COLOR`/`CLICOLOR` inside `colored`, which
/// reads those variables on its own.
pub fn apply_color_override(formatting: FormattingConfig) {
    if let Some(force) = color_override(formatting) {
        colored::control::set_override(force);
    }
}

fn color_override(formatting: FormattingConfig) -> Option<bool> {
    (formatting.color == ColorMode::Always).then_some(true)
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn only_forced_color_overrides_colored() {
        use crate::formatting::EmojiMode;
        let forced = FormattingConfig::new(ColorMode::Always, EmojiMode::Auto);
        assert_eq!(color_override(forced), Some(true));
        assert_eq!(color_override(FormattingConfig::default()), None);
        assert_eq!(color_override(FormattingConfig::plain()), None);
    }
}
