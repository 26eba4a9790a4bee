use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::draft::Tone;
use crate::paths;
use crate::ui::Style;

pub const DEFAULT_PROVIDER: &str = "groq";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com";

/// Default settings in the `[clearmail]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// Default tone when none is chosen.
    pub tone: Option<Tone>,
    /// Sampling temperature for drafting.
    pub temperature: Option<f32>,
}

/// Configuration for a chat-completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Models offered by this provider; the first is the default.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// The provider used when config.toml does not define one with the same name.
pub fn builtin_provider() -> ProviderConfig {
    ProviderConfig {
        endpoint: "https://api.groq.com/openai".to_string(),
        api_key: None,
        api_key_env: Some("GROQ_API_KEY".to_string()),
        models: vec![
            "llama-3.1-70b-versatile".to_string(),
            "llama-3.1-8b-instant".to_string(),
        ],
    }
}

/// Which service translates the native input and the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationBackend {
    /// The public Google Translate web endpoint.
    #[default]
    Google,
    /// The configured chat-completion provider.
    Llm,
}

/// The `[translation]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationConfig {
    pub backend: Option<TranslationBackend>,
    /// Base URL for the Google backend.
    pub endpoint: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/clearmail/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub clearmail: AppConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderConfig>,
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl ConfigFile {
    /// Looks up a provider, falling back to the built-in default provider.
    pub fn provider(&self, name: &str) -> Option<ProviderConfig> {
        self.providers
            .get(name)
            .cloned()
            .or_else(|| (name == DEFAULT_PROVIDER).then(builtin_provider))
    }

    /// Configured providers plus the built-in one, sorted by name.
    pub fn all_providers(&self) -> BTreeMap<String, ProviderConfig> {
        let mut providers = self.providers.clone();
        providers
            .entry(DEFAULT_PROVIDER.to_string())
            .or_insert_with(builtin_provider);
        providers
    }
}

/// Everything the chat client needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// The selected provider name.
    pub name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to draft with.
    pub model: String,
    /// The API key; absence is reported when a submission starts.
    pub api_key: Option<String>,
    /// Where the API key was expected to come from.
    pub api_key_env: Option<String>,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSettings {
    pub backend: TranslationBackend,
    pub endpoint: String,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub provider: ProviderSettings,
    /// Tone used when the user does not pick one.
    pub tone: Tone,
    pub translation: TranslationSettings,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Provider name override.
    pub provider: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// Tone override.
    pub tone: Option<Tone>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Precedence: CLI option, then config file, then built-in default. A missing
/// API key is not an error here; the drafting pipeline checks it first thing
/// so the user gets the dedicated credential message.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.clearmail.provider.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let provider_config = config_file.provider(&provider_name).ok_or_else(|| {
        let available: Vec<String> = config_file.all_providers().into_keys().collect();
        anyhow::anyhow!(
            "Provider '{provider_name}' not found\n\n\
             Available providers:\n  \
             - {}\n\n\
             Add providers to ~/.config/clearmail/config.toml",
            available.join("\n  - ")
        )
    })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.clearmail.model.as_ref())
        .or(provider_config.models.first())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'model'\n\n\
                 Please provide it via:\n  \
                 - CLI option: clearmail --model <name>\n  \
                 - Config file: ~/.config/clearmail/config.toml"
            )
        })?;

    if !provider_config.models.is_empty() && !provider_config.models.contains(&model) {
        crate::warning!(
            "{} Model '{}' is not in the configured models list for '{}'\n\
             Configured models: {}\n\
             Proceeding anyway...\n",
            Style::warning("Warning:"),
            model,
            provider_name,
            provider_config.models.join(", ")
        );
    }

    let temperature = config_file
        .clearmail
        .temperature
        .unwrap_or(DEFAULT_TEMPERATURE);
    if !(0.0..=2.0).contains(&temperature) {
        bail!("Invalid temperature {temperature}: must be between 0.0 and 2.0");
    }

    let tone = options
        .tone
        .or(config_file.clearmail.tone)
        .unwrap_or_default();

    let translation = TranslationSettings {
        backend: config_file.translation.backend.unwrap_or_default(),
        endpoint: config_file
            .translation
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_GOOGLE_ENDPOINT.to_string()),
    };

    Ok(ResolvedConfig {
        provider: ProviderSettings {
            api_key: provider_config.get_api_key(),
            api_key_env: provider_config.api_key_env.clone(),
            endpoint: provider_config.endpoint,
            name: provider_name,
            model,
            temperature,
        },
        tone,
        translation,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/clearmail/config.toml`
    /// or `~/.config/clearmail/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, or the defaults when it does not exist.
    ///
    /// A file that exists but cannot be parsed is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
