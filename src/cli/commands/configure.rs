//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, DEFAULT_PROVIDER, TranslationBackend};
use crate::draft::Tone;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command to edit default settings.
///
/// Lets the user pick the default provider, model, tone and translation backend.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner).map(|_| ())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);

    let providers = config.all_providers();
    let provider_names: Vec<String> = providers.keys().cloned().collect();
    let default_provider = config
        .clearmail
        .provider
        .clone()
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());
    let provider = select_from("Default provider:", &provider_names, Some(&default_provider))?;

    let available_models = providers
        .get(&provider)
        .map(|p| p.models.clone())
        .unwrap_or_default();
    let model = select_model(&available_models, config.clearmail.model.as_deref())?;

    let tone = select_tone(config.clearmail.tone.unwrap_or_default())?;
    let backend = select_backend(config.translation.backend.unwrap_or_default())?;

    config.clearmail.provider = Some(provider);
    config.clearmail.model = Some(model);
    config.clearmail.tone = Some(tone);
    config.translation.backend = Some(backend);

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}     {}",
        Style::label("provider"),
        config
            .clearmail
            .provider
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        config
            .clearmail
            .model
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}         {}",
        Style::label("tone"),
        config
            .clearmail
            .tone
            .map_or_else(not_set, |t| Style::value(t.label()))
    );
    println!(
        "  {}  {}",
        Style::label("translation"),
        config
            .translation
            .backend
            .map_or_else(not_set, |b| Style::value(backend_label(b)))
    );
    println!();
}

const fn backend_label(backend: TranslationBackend) -> &'static str {
    match backend {
        TranslationBackend::Google => "google - Google Translate web endpoint",
        TranslationBackend::Llm => "llm - the drafting model translates too",
    }
}

fn select_from(message: &str, options: &[String], default: Option<&str>) -> Result<String> {
    let default_index = default
        .and_then(|d| options.iter().position(|o| o == d))
        .unwrap_or(0);

    let selection = Select::new(message, options.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_model(available_models: &[String], default: Option<&str>) -> Result<String> {
    if !available_models.is_empty() {
        return select_from("Default model:", available_models, default);
    }

    // No models configured, fall back to text input
    let mut prompt = Text::new("Default model:").with_help_message("Enter the model name");
    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    let model = prompt.prompt()?;
    if model.trim().is_empty() {
        bail!("Model name cannot be empty");
    }

    Ok(model.trim().to_string())
}

fn select_tone(default: Tone) -> Result<Tone> {
    let tones = Tone::all().to_vec();
    let default_index = tones.iter().position(|t| *t == default).unwrap_or(0);

    Ok(Select::new("Default tone:", tones)
        .with_starting_cursor(default_index)
        .prompt()?)
}

fn select_backend(default: TranslationBackend) -> Result<TranslationBackend> {
    let backends = [TranslationBackend::Google, TranslationBackend::Llm];
    let labels: Vec<&str> = backends.iter().map(|b| backend_label(*b)).collect();
    let default_index = backends.iter().position(|b| *b == default).unwrap_or(0);

    let selection = Select::new("Translation backend:", labels)
        .with_starting_cursor(default_index)
        .raw_prompt()?;

    Ok(backends[selection.index])
}
