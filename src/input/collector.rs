use anyhow::{Result, bail};
use inquire::{Editor, Select, Text};

use super::reader::InputReader;
use crate::draft::{SubmissionForm, Tone};
use crate::ui::handle_prompt_cancellation;

/// Field values given on the command line, and whether to ask for the rest.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    pub native: Option<String>,
    pub native_file: Option<String>,
    /// Path to the previous thread, or `-` for stdin.
    pub thread_file: Option<String>,
    pub notes: Option<String>,
    pub details: Option<String>,
    pub tone: Option<Tone>,
    /// Tone preselected in the menu, or used when not prompting.
    pub default_tone: Tone,
    /// Prompt for fields that were not given.
    pub interactive: bool,
}

/// Fields known before prompting; `None` means "not given".
#[derive(Debug, Default)]
struct GivenFields {
    native: Option<String>,
    thread: Option<String>,
    notes: Option<String>,
    details: Option<String>,
    tone: Option<Tone>,
}

/// Gathers one submission from flags, files, and (optionally) prompts.
///
/// No field is required; an empty submission is still drafted. Returns
/// `Ok(None)` if the user cancels a prompt.
pub fn collect_submission(options: &CollectOptions) -> Result<Option<SubmissionForm>> {
    let given = read_given(options)?;

    if !options.interactive {
        return Ok(Some(SubmissionForm {
            native_text: given.native.unwrap_or_default(),
            thread_text: given.thread.unwrap_or_default(),
            notes: given.notes.unwrap_or_default(),
            tone: given.tone.unwrap_or(options.default_tone),
            details: given.details.unwrap_or_default(),
        }));
    }

    handle_prompt_cancellation(|| prompt_missing(given, options.default_tone))
}

fn read_given(options: &CollectOptions) -> Result<GivenFields> {
    if options.native.is_none()
        && options.native_file.as_deref() == Some("-")
        && options.thread_file.as_deref() == Some("-")
    {
        bail!(
            "Only one of --native-file and --thread-file can read from stdin ('-').\n\n\
             Save one of them to a file and pass its path instead."
        );
    }

    let native = match (&options.native, &options.native_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(InputReader::read(path)?),
        (None, None) => None,
    };
    let thread = options
        .thread_file
        .as_deref()
        .map(InputReader::read)
        .transpose()?;

    Ok(GivenFields {
        native,
        thread,
        notes: options.notes.clone(),
        details: options.details.clone(),
        tone: options.tone,
    })
}

fn prompt_missing(given: GivenFields, default_tone: Tone) -> Result<SubmissionForm> {
    let native_text = match given.native {
        Some(text) => text,
        None => Editor::new("Write in your native language (we will auto-detect & translate):")
            .with_file_extension(".txt")
            .with_help_message("Opens your editor; leave empty to skip")
            .prompt()?,
    };

    let thread_text = match given.thread {
        Some(text) => text,
        None => Editor::new("Paste the previous email or thread (optional):")
            .with_file_extension(".txt")
            .with_help_message("Opens your editor; leave empty to skip")
            .prompt()?,
    };

    let notes = match given.notes {
        Some(text) => text,
        None => Text::new("Extra notes/keywords in English (optional):")
            .with_help_message("Press Enter to skip")
            .prompt()?,
    };

    let tone = match given.tone {
        Some(tone) => tone,
        None => select_tone(default_tone)?,
    };

    let details = match given.details {
        Some(text) => text,
        None => Text::new("Details to reference (e.g., address, reference number, dates):")
            .with_help_message("Press Enter to skip")
            .prompt()?,
    };

    Ok(SubmissionForm {
        native_text,
        thread_text,
        notes,
        tone,
        details,
    })
}

fn select_tone(default: Tone) -> Result<Tone> {
    let tones = Tone::all().to_vec();
    let default_index = tones.iter().position(|t| *t == default).unwrap_or(0);

    let tone = Select::new("Choose tone:", tones)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(tone)
}
