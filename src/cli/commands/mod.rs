//! Subcommand implementations.

/// Email drafting (the default command).
pub mod compose;

/// Configure command handler.
pub mod configure;

/// Provider listing command handler.
pub mod providers;
