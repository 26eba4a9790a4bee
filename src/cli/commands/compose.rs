use anyhow::Result;
use std::io::{self, IsTerminal};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::draft::{DraftError, DraftPipeline, Tone};
use crate::input::{CollectOptions, collect_submission};
use crate::language::WhatlangDetector;
use crate::presenter::Presenter;
use crate::provider::{ChatClient, CompletionProvider};
use crate::status;
use crate::translate::build_translator;
use crate::ui::{Spinner, Style};

pub struct ComposeOptions {
    pub native: Option<String>,
    pub native_file: Option<String>,
    pub thread_file: Option<String>,
    pub notes: Option<String>,
    pub details: Option<String>,
    pub tone: Option<Tone>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub output: String,
    pub no_prompt: bool,
}

/// Collects one submission, drafts the email, and presents it.
pub async fn run_compose(options: ComposeOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;
    let config = resolve_config(
        &ResolveOptions {
            provider: options.provider.clone(),
            model: options.model.clone(),
            tone: options.tone,
        },
        &config_file,
    )?;

    let chat = ChatClient::new(config.provider.clone());

    // Fail before asking the user to type anything
    chat.check_credential().map_err(DraftError::from)?;

    // Prompts need a terminal; stdin may also be carrying the thread
    let reads_stdin = [&options.native_file, &options.thread_file]
        .iter()
        .any(|path| path.as_deref() == Some("-"));
    let interactive = !options.no_prompt && !reads_stdin && io::stdin().is_terminal();

    let collect = CollectOptions {
        native: options.native,
        native_file: options.native_file,
        thread_file: options.thread_file,
        notes: options.notes,
        details: options.details,
        tone: options.tone,
        default_tone: config.tone,
        interactive,
    };
    let Some(form) = collect_submission(&collect)? else {
        return Ok(());
    };

    let translator = build_translator(&config.translation, &chat);
    let detector = WhatlangDetector;
    let pipeline = DraftPipeline::new(&detector, translator.as_ref(), &chat);

    status!(
        "{} {} with {} ({})",
        Style::secondary("Drafting"),
        Style::value(form.tone),
        Style::value(&config.provider.model),
        Style::secondary(&config.provider.name)
    );

    let spinner = Spinner::new("Writing your email...");
    let result = pipeline.run(&form).await;
    spinner.stop();
    let result = result?;

    let presenter = Presenter::new(&options.output);
    presenter.present(&result, &mut io::stdout().lock())?;

    Ok(())
}
