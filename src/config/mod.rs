//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    AppConfig, ConfigFile, ConfigManager, DEFAULT_GOOGLE_ENDPOINT, DEFAULT_PROVIDER,
    DEFAULT_TEMPERATURE, ProviderConfig, ProviderSettings, ResolveOptions, ResolvedConfig,
    TranslationBackend, TranslationConfig, TranslationSettings, builtin_provider, resolve_config,
};
