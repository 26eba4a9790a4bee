use thiserror::Error;

use crate::provider::ProviderError;

/// A failure that halts a submission. Nothing is presented when one occurs.
#[derive(Debug, Error)]
pub enum DraftError {
    /// No provider credential; raised before any network call.
    #[error("Missing API key for provider '{provider}'.\n\n{hint}")]
    MissingCredential { provider: String, hint: String },

    /// The chat-completion call failed; no draft was produced.
    #[error("LLM provider error: {0}")]
    Provider(ProviderError),
}

impl DraftError {
    /// Process exit code for this failure.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingCredential { .. } => exitcode::CONFIG,
            Self::Provider(_) => exitcode::UNAVAILABLE,
        }
    }
}

impl From<ProviderError> for DraftError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::MissingCredential {
                provider,
                api_key_env,
            } => {
                let hint = api_key_env.map_or_else(
                    || {
                        format!(
                            "Set api_key under [providers.{provider}] in ~/.config/clearmail/config.toml"
                        )
                    },
                    |env_var| {
                        format!(
                            "Set the {env_var} environment variable:\n  \
                             export {env_var}=\"your-api-key\""
                        )
                    },
                );
                Self::MissingCredential { provider, hint }
            }
            other => Self::Provider(other),
        }
    }
}
