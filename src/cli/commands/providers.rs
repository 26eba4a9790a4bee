//! Provider listing command handler.

use anyhow::{Result, bail};

use crate::config::{ConfigManager, DEFAULT_PROVIDER, ProviderConfig};
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// With `specific_provider`, shows details for that provider only. The API
/// key itself is never printed, only whether one is available.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;
    let providers = config.all_providers();

    let default_provider = config
        .clearmail
        .provider
        .as_deref()
        .unwrap_or(DEFAULT_PROVIDER);

    let marker = |name: &str| {
        if name == default_provider {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    };

    if let Some(name) = specific_provider {
        let Some(provider) = providers.get(name) else {
            bail!("Provider '{name}' not found");
        };
        println!("Provider: {}{}", Style::value(name), marker(name));
        print_details(provider);
        return Ok(());
    }

    println!("{}\n", Style::header("Configured providers"));
    for (name, provider) in &providers {
        println!("  {}{}", Style::value(name), marker(name));
        println!("    endpoint: {}", Style::secondary(&provider.endpoint));
        if !provider.models.is_empty() {
            println!("    models: {}", provider.models.join(", "));
        }
    }

    Ok(())
}

fn print_details(provider: &ProviderConfig) {
    println!("  endpoint = {}", provider.endpoint);
    if let Some(env_var) = &provider.api_key_env {
        println!("  api_key_env = {env_var}");
    }
    println!(
        "  api_key  = {}",
        if provider.get_api_key().is_some() {
            "(set)"
        } else {
            "(not set)"
        }
    );
    if provider.models.is_empty() {
        println!("  models   = (none configured)");
    } else {
        println!("  models:");
        for model in &provider.models {
            println!("    - {model}");
        }
    }
}
