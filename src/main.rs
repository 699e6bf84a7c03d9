use anyhow::Result;
use clap::Parser;
use shroomcheck::cli::{apply_color_override, init_logging, Cli, Commands};
use shroomcheck::commands;
use shroomcheck::config::load_config;
use shroomcheck::handler::DiagnosisRequest;
use shroomcheck::Specimen;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Diagnose {
            odor,
            gill_size,
            gill_color,
            stalk_root,
            render,
        } => {
            let settings = render.resolve(&load_config());
            apply_color_override(settings.formatting);
            let request =
                DiagnosisRequest::new(Specimen::new(odor, gill_size, gill_color, stalk_root));
            commands::handle_diagnose(&request, &settings)?;
        }
        Commands::Interactive { render } => {
            let settings = render.resolve(&load_config());
            apply_color_override(settings.formatting);
            commands::handle_interactive(&settings)?;
        }
        Commands::Traits { locale } => {
            let locale = locale.unwrap_or_else(|| load_config().locale());
            commands::list_traits(&mut std::io::stdout().lock(), locale)?;
        }
        Commands::Rules => commands::list_rules(&mut std::io::stdout().lock())?,
        Commands::Init { force } => commands::init_config(&std::env::current_dir()?, force)?,
    }

    Ok(())
}
