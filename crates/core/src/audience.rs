//! Target communities a campaign can be written for.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize, Serializer};

/// Community the generated posts are aimed at.
///
/// The three named communities form the closed, supported set. `Unlisted` only exists when
/// the service runs with [`AudiencePolicy::Fallback`]; it keeps the raw identifier so it can
/// still be shown to the reader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Audience {
    Ppomppu,
    Fmkorea,
    Womad,
    Unlisted(String),
}

impl Audience {
    /// Supported communities in catalogue order.
    pub fn known() -> [Audience; 3] {
        [Audience::Ppomppu, Audience::Fmkorea, Audience::Womad]
    }

    /// Looks up one of the supported communities by its identifier.
    pub fn from_id(id: &str) -> Option<Audience> {
        match id.trim() {
            "ppomppu" => Some(Audience::Ppomppu),
            "fmkorea" => Some(Audience::Fmkorea),
            "womad" => Some(Audience::Womad),
            _ => None,
        }
    }

    /// Resolves a caller-supplied identifier under the given policy.
    ///
    /// Blank identifiers are rejected under both policies.
    pub fn resolve(id: &str, policy: AudiencePolicy) -> Result<Audience, ValidationError> {
        if let Some(known) = Audience::from_id(id) {
            return Ok(known);
        }

        let trimmed = id.trim();
        match policy {
            AudiencePolicy::Fallback if !trimmed.is_empty() => {
                tracing::warn!(audience = trimmed, "accepting unlisted audience with fallback tones");
                Ok(Audience::Unlisted(trimmed.to_owned()))
            }
            _ => Err(ValidationError::UnknownAudience(trimmed.to_owned())),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Audience::Ppomppu => "ppomppu",
            Audience::Fmkorea => "fmkorea",
            Audience::Womad => "womad",
            Audience::Unlisted(raw) => raw,
        }
    }

    /// Human-readable community name. Unlisted audiences fall back to their raw identifier.
    pub fn label(&self) -> &str {
        match self {
            Audience::Ppomppu => "뽐뿌",
            Audience::Fmkorea => "에펨코리아",
            Audience::Womad => "여성시대",
            Audience::Unlisted(raw) => raw,
        }
    }

    pub fn is_unlisted(&self) -> bool {
        matches!(self, Audience::Unlisted(_))
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Audience {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.id())
    }
}

/// What to do with an audience identifier outside the supported set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudiencePolicy {
    /// Fail validation.
    #[default]
    Reject,
    /// Accept it and render the fallback tone list.
    Fallback,
}

impl std::str::FromStr for AudiencePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(AudiencePolicy::Reject),
            "fallback" => Ok(AudiencePolicy::Fallback),
            other => Err(format!(
                "unknown audience policy '{other}' (expected 'reject' or 'fallback')"
            )),
        }
    }
}
