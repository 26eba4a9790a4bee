//! Prompt templates for drafting the email.

use super::model::{NormalizedInput, PromptPair, SubmissionForm};
use super::tone::Tone;

pub const SYSTEM_PROMPT_TEMPLATE: &str = "You write professional emails for recipients in Ireland.
Tone: {tone}. {tone_guidance}
Rules:
- Clear, polite English at CEFR B1-B2 reading level. Short sentences.
- Include only facts from THREAD, USER NOTES, or TRANSLATED NATIVE INPUT. Never invent names, dates, amounts or promises.
- Use DETAILS only to state those facts precisely (addresses, reference numbers, dates).
- Do not add a deadline or a reply-by date unless the user asks for one.
- Structure: greeting; an opening that acknowledges the thread if there is one; body; courteous closing; signature.
- Keep it to 2-4 short paragraphs.
- Output only the email text.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(tone: Tone) -> String {
    // {tone} and {tone_guidance} are placeholders for string replacement, not format arguments
    SYSTEM_PROMPT_TEMPLATE
        .replace("{tone}", tone.label())
        .replace("{tone_guidance}", tone.guidance())
}

/// Lays out the four labelled input sections, each copied verbatim.
pub fn build_user_prompt(thread: &str, notes: &str, translated_native: &str, details: &str) -> String {
    format!(
        "THREAD:\n{thread}\n\n\
         USER NOTES (English):\n{notes}\n\n\
         TRANSLATED NATIVE INPUT (from user's language into English):\n{translated_native}\n\n\
         DETAILS:\n{details}\n"
    )
}

/// Builds the system and user instructions for one submission. Performs no I/O.
pub fn compose_prompts(form: &SubmissionForm, normalized: &NormalizedInput) -> PromptPair {
    PromptPair {
        system: build_system_prompt(form.tone),
        user: build_user_prompt(
            &form.thread_text,
            &form.notes,
            &normalized.english_text,
            &form.details,
        ),
    }
}
