//! Rhetorical styles a post can be written in.

use serde::{Deserialize, Serialize};

/// Fixed set of post styles. Each maps to one template in [`crate::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// First-person casual endorsement.
    Friendly,
    /// Factual price and period summary.
    Informational,
    /// Past-tense usage report.
    Testimonial,
    /// Comedic internal monologue.
    Humorous,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Friendly,
        Tone::Informational,
        Tone::Testimonial,
        Tone::Humorous,
    ];

    /// Stable identifier, also used in tone profile files.
    pub fn id(self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Informational => "informational",
            Tone::Testimonial => "testimonial",
            Tone::Humorous => "humorous",
        }
    }

    /// Display name shown on each generated variant.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Friendly => "친근한 톤",
            Tone::Informational => "정보 전달형",
            Tone::Testimonial => "후기형",
            Tone::Humorous => "유머러스한 톤",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.id() == wanted)
            .ok_or_else(|| format!("unknown tone '{wanted}'"))
    }
}
