//! Chat-completion provider transport for OpenAI-compatible APIs.

mod client;

pub use client::{ChatClient, CompletionProvider, ProviderError};
