//! Post-generation check for figures the model may have made up.
//!
//! The drafting prompt forbids invented facts but nothing enforces it. This
//! pass flags numbers (dates, amounts, reference digits) in the email that
//! occur in none of the inputs. It only reports; the draft is never changed.

use std::collections::HashSet;

fn digit_runs(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}

fn normalize(run: &str) -> String {
    let trimmed = run.trim_start_matches('0');
    if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() }
}

/// Returns each number in `email` that appears in none of `sources`, in order
/// of first appearance and without duplicates. Leading zeros are ignored, so
/// "05" in an input covers "5" in the email.
pub fn unsupported_figures(email: &str, sources: &[&str]) -> Vec<String> {
    let known: HashSet<String> = sources
        .iter()
        .copied()
        .flat_map(digit_runs)
        .map(normalize)
        .collect();

    let mut seen = HashSet::new();
    digit_runs(email)
        .filter(|run| !known.contains(&normalize(*run)))
        .filter(|run| seen.insert(*run))
        .map(str::to_string)
        .collect()
}
