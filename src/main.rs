use anyhow::Result;
use clap::Parser;

use clearmail::cli::commands::{compose, configure, providers};
use clearmail::cli::{Args, Command};
use clearmail::config::ConfigManager;
use clearmail::draft::{DraftError, print_tones};
use clearmail::language::print_languages;
use clearmail::output::{self, OutputConfig};
use clearmail::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });
    output::init_tracing();

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Tones) => {
            let config_file = ConfigManager::new()?.load_or_default()?;
            print_tones(config_file.clearmail.tone.unwrap_or_default());
        }
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Configure) => {
            configure::run_configure()?;
        }
        None => {
            let options = compose::ComposeOptions {
                native: args.native,
                native_file: args.native_file,
                thread_file: args.thread_file,
                notes: args.notes,
                details: args.details,
                tone: args.tone,
                provider: args.provider,
                model: args.model,
                output: args.output,
                no_prompt: args.no_prompt,
            };
            compose::run_compose(options).await?;
        }
    }

    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DraftError>()
        .map_or(1, DraftError::exit_code)
}
