//! Displays a finished draft and saves the plain-text download.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::draft::DraftResult;
use crate::fs::atomic_write;
use crate::language::language_name;
use crate::ui::Style;

pub const DOWNLOAD_FILE_NAME: &str = "email.txt";

pub const REVIEW_REMINDER: &str = "Review the preview carefully before sending or copying.";

/// Renders one successful draft. Content is shown exactly as produced.
pub struct Presenter {
    download_path: PathBuf,
}

impl Presenter {
    pub fn new(download_path: impl Into<PathBuf>) -> Self {
        Self {
            download_path: download_path.into(),
        }
    }

    pub fn download_path(&self) -> &Path {
        &self.download_path
    }

    /// Writes the email, the preview, any review warnings, the download, and
    /// the reminder, in that order.
    pub fn present(&self, result: &DraftResult, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "{}",
            Style::header("Professional email (English, this is what you'll send)")
        )?;
        writeln!(out, "```text")?;
        writeln!(out, "{}", result.english_email)?;
        writeln!(out, "```")?;
        writeln!(out)?;

        let heading = match result.detected.foreign() {
            Some(language) => format!(
                "Preview in your language ({}), read to confirm meaning",
                language_name(language.code)
            ),
            None => "Preview (read to confirm meaning)".to_string(),
        };
        writeln!(out, "{}", Style::header(heading))?;
        writeln!(out, "{}", result.preview_text)?;
        writeln!(out)?;

        if !result.unsupported_figures.is_empty() {
            writeln!(
                out,
                "{} These numbers are not in anything you entered: {}",
                Style::warning("Check:"),
                result.unsupported_figures.join(", ")
            )?;
            writeln!(out)?;
        }

        self.save_download(result)?;
        writeln!(
            out,
            "{} Saved email to {}",
            Style::success("✓"),
            Style::secondary(self.download_path.display())
        )?;
        writeln!(out, "{}", Style::success(REVIEW_REMINDER))?;
        out.flush()?;

        Ok(())
    }

    /// Writes exactly the English email to the download file.
    pub fn save_download(&self, result: &DraftResult) -> Result<()> {
        atomic_write(&self.download_path, &result.english_email).with_context(|| {
            format!("Failed to save email to {}", self.download_path.display())
        })
    }
}
