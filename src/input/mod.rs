//! Gathering the submission: files, stdin, and interactive prompts.

mod collector;
mod reader;

pub use collector::{CollectOptions, collect_submission};
pub use reader::{InputReader, MAX_INPUT_SIZE};
