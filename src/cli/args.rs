use clap::{Parser, Subcommand};

use crate::draft::Tone;

#[derive(Parser, Debug)]
#[command(name = "clearmail")]
#[command(about = "Compose professional English emails for recipients in Ireland")]
#[command(version)]
pub struct Args {
    /// Text in your native language (auto-detected and translated)
    #[arg(long, conflicts_with = "native_file")]
    pub native: Option<String>,

    /// Read the native-language text from a file ('-' for stdin)
    #[arg(long, value_name = "PATH")]
    pub native_file: Option<String>,

    /// Previous email or thread to reply to ('-' for stdin)
    #[arg(long, value_name = "PATH")]
    pub thread_file: Option<String>,

    /// Extra notes or keywords in English
    #[arg(long)]
    pub notes: Option<String>,

    /// Details to reference (address, reference number, dates)
    #[arg(long)]
    pub details: Option<String>,

    /// Tone of the email
    #[arg(short = 'T', long, value_enum)]
    pub tone: Option<Tone>,

    /// Provider name (overrides config)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name (overrides config)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Where to save the plain-text email
    #[arg(short = 'o', long, default_value = crate::presenter::DOWNLOAD_FILE_NAME)]
    pub output: String,

    /// Never prompt; fields not given are left empty
    #[arg(long)]
    pub no_prompt: bool,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available tones
    Tones,
    /// List recognised language codes
    Languages,
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
    /// Set default provider, model, tone and translation backend
    Configure,
}
