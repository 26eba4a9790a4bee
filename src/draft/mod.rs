//! The email drafting pipeline.
//!
//! One submission flows strictly in sequence: detect and translate the
//! native input, compose the prompts, draft with the language model, then
//! back-translate the draft for a comprehension check. Detection and
//! translation are best-effort; only a missing credential or a failed
//! provider call halts a submission.

mod error;
mod fallback;
mod model;
mod normalize;
mod pipeline;
mod preview;
mod prompt;
mod review;
mod tone;

#[cfg(test)]
mod testing;

pub use error::DraftError;
pub use fallback::BestEffort;
pub use model::{DraftResult, NormalizedInput, PromptPair, SubmissionForm};
pub use normalize::normalize_input;
pub use pipeline::DraftPipeline;
pub use preview::{PREVIEW_FALLBACK_NOTICE, preview};
pub use prompt::{SYSTEM_PROMPT_TEMPLATE, build_system_prompt, build_user_prompt, compose_prompts};
pub use review::unsupported_figures;
pub use tone::{Tone, ToneProfile, print_tones};
