//! Tone profiles: the closed set of tones and their guidance text.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ui::Style;

/// The tone a drafted email should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Neutral,
    Warm,
    Firm,
    Formal,
    Concise,
    Apologetic,
    Gratitude,
}

/// Display name and model guidance for a [`Tone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneProfile {
    pub label: &'static str,
    pub guidance: &'static str,
}

impl Tone {
    /// Every tone, in menu order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Neutral,
            Self::Warm,
            Self::Firm,
            Self::Formal,
            Self::Concise,
            Self::Apologetic,
            Self::Gratitude,
        ]
    }

    pub const fn profile(self) -> ToneProfile {
        match self {
            Self::Neutral => ToneProfile {
                label: "Neutral professional",
                guidance: "Be courteous and matter-of-fact. Avoid strong emotion and slang.",
            },
            Self::Warm => ToneProfile {
                label: "Polite & warm",
                guidance: "Be friendly and personable while staying professional. \
                           A short line of goodwill is welcome.",
            },
            Self::Firm => ToneProfile {
                label: "Clear & firm",
                guidance: "State the request or position plainly and confidently. \
                           Stay polite but do not soften the main point.",
            },
            Self::Formal => ToneProfile {
                label: "Very formal",
                guidance: "Use formal salutations and closings and complete sentences. \
                           Avoid contractions.",
            },
            Self::Concise => ToneProfile {
                label: "Concise",
                guidance: "Keep it as short as possible. One idea per sentence and no pleasantries \
                           beyond the greeting and closing.",
            },
            Self::Apologetic => ToneProfile {
                label: "Apologetic & solution-oriented",
                guidance: "Acknowledge the problem and apologise once, sincerely. \
                           Then focus on what will be done or what is being asked to fix it.",
            },
            Self::Gratitude => ToneProfile {
                label: "Gratitude & follow-up",
                guidance: "Open by thanking the recipient for something specific. \
                           Then follow up on any open points.",
            },
        }
    }

    pub const fn label(self) -> &'static str {
        self.profile().label
    }

    pub const fn guidance(self) -> &'static str {
        self.profile().guidance
    }

    /// The name used on the command line and in config.toml.
    pub fn key(self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Prints all tones with their guidance to stdout.
pub fn print_tones(default: Tone) {
    println!("{}", Style::header("Tones"));
    for tone in Tone::all() {
        let marker = if *tone == default {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {:11} {}{}",
            Style::value(tone.key()),
            tone.label(),
            marker
        );
        println!("              {}", Style::secondary(tone.guidance()));
    }
}
