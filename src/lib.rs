//! # clearmail - professional English emails from your own language
//!
//! `clearmail` helps non-native English speakers write professional emails
//! for recipients in Ireland. Write what you want to say in your own
//! language, optionally paste the thread you are replying to, pick a tone,
//! and clearmail:
//!
//! 1. detects your language and translates it to English,
//! 2. asks an OpenAI-compatible model to draft the email,
//! 3. translates the draft back into your language so you can check it,
//! 4. prints both and saves the English email to `email.txt`.
//!
//! ## Quick Start
//!
//! ```bash
//! export GROQ_API_KEY="..."
//!
//! # Interactive: prompts for each field
//! clearmail
//!
//! # Non-interactive
//! clearmail --native "Bonjour, je voudrais annuler mon rendez-vous du 10 mars." \
//!     --tone apologetic --no-prompt
//!
//! # Reply to a thread read from stdin
//! cat thread.txt | clearmail --thread-file - --notes "accept the offer"
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/clearmail/config.toml`:
//!
//! ```toml
//! [clearmail]
//! provider = "groq"
//! model = "llama-3.1-70b-versatile"
//! tone = "warm"
//! temperature = 0.5
//!
//! [providers.groq]
//! endpoint = "https://api.groq.com/openai"
//! api_key_env = "GROQ_API_KEY"
//! models = ["llama-3.1-70b-versatile", "llama-3.1-8b-instant"]
//!
//! [translation]
//! backend = "google"   # or "llm"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// The drafting pipeline: normalize, compose, generate, preview.
pub mod draft;

/// File system utilities.
pub mod fs;

/// Input reading from files, stdin and interactive prompts.
pub mod input;

/// Language detection and recognised language codes.
pub mod language;

/// Global output configuration (quiet mode, colors, tracing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Rendering a finished draft and saving the download.
pub mod presenter;

/// Chat-completion client for OpenAI-compatible APIs.
pub mod provider;

/// Translation backends.
pub mod translate;

/// Terminal UI components (spinner, colors, prompt cancellation).
pub mod ui;
