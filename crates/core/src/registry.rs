//! Tone profile registry: which tones each community gets, and in what order.
//!
//! The built-in profiles render all four tones for every community, only reordered. A tone
//! profile file can narrow or reorder the list per community, and replace the fallback list
//! used for unlisted audiences. Generation renders exactly what the registry returns.
//!
//! Profile file format:
//! ```yaml
//! audiences:
//!   fmkorea: [informational, testimonial]
//! fallback: [friendly, humorous]
//! ```

use crate::audience::Audience;
use crate::error::{PromoError, PromoResult};
use crate::tone::Tone;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneRegistry {
    profiles: HashMap<Audience, Vec<Tone>>,
    fallback: Vec<Tone>,
}

impl ToneRegistry {
    /// Built-in community orderings.
    pub fn builtin() -> Self {
        use Tone::*;

        let profiles = HashMap::from([
            (
                Audience::Ppomppu,
                vec![Friendly, Informational, Testimonial, Humorous],
            ),
            (
                Audience::Fmkorea,
                vec![Informational, Testimonial, Friendly, Humorous],
            ),
            (
                Audience::Womad,
                vec![Testimonial, Friendly, Informational, Humorous],
            ),
        ]);

        Self {
            profiles,
            fallback: vec![Friendly, Informational, Testimonial, Humorous],
        }
    }

    /// Ordered tones to render for `audience`; unlisted audiences get the fallback list.
    pub fn tones_for(&self, audience: &Audience) -> &[Tone] {
        self.profiles
            .get(audience)
            .map(Vec::as_slice)
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &[Tone] {
        &self.fallback
    }

    /// Replaces one community's tone list.
    ///
    /// # Errors
    ///
    /// Returns `PromoError::InvalidConfig` for an unlisted audience, an empty list, or a list
    /// naming the same tone twice.
    pub fn with_profile(mut self, audience: Audience, tones: Vec<Tone>) -> PromoResult<Self> {
        if audience.is_unlisted() {
            return Err(PromoError::InvalidConfig(format!(
                "cannot configure tones for unlisted audience '{}'",
                audience.id()
            )));
        }
        check_tone_list(audience.id(), &tones)?;
        self.profiles.insert(audience, tones);
        Ok(self)
    }

    /// Replaces the list used for unlisted audiences.
    pub fn with_fallback(mut self, tones: Vec<Tone>) -> PromoResult<Self> {
        check_tone_list("fallback", &tones)?;
        self.fallback = tones;
        Ok(self)
    }

    /// Applies a YAML tone profile document on top of the built-in profiles.
    ///
    /// # Errors
    ///
    /// - `PromoError::ProfileSchema` if the YAML does not match the profile schema (the
    ///   failing path is included).
    /// - `PromoError::InvalidConfig` for unknown communities or invalid tone lists.
    pub fn from_yaml_str(yaml_text: &str) -> PromoResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        let file: ToneProfileFile = serde_path_to_error::deserialize(deserializer).map_err(|err| {
            let path = err.path().to_string();
            let path = if path.is_empty() { "<root>".to_string() } else { path };
            PromoError::ProfileSchema(format!("at {path}: {}", err.into_inner()))
        })?;

        let mut registry = Self::builtin();
        for (id, tones) in file.audiences {
            let audience = Audience::from_id(&id).ok_or_else(|| {
                PromoError::InvalidConfig(format!("tone profile names unknown audience '{id}'"))
            })?;
            registry = registry.with_profile(audience, tones)?;
        }
        if let Some(fallback) = file.fallback {
            registry = registry.with_fallback(fallback)?;
        }

        tracing::debug!("loaded tone profiles");
        Ok(registry)
    }

    /// Reads and applies a tone profile file.
    pub fn from_yaml_file(path: &Path) -> PromoResult<Self> {
        let text = std::fs::read_to_string(path).map_err(PromoError::ConfigRead)?;
        Self::from_yaml_str(&text)
    }
}

impl Default for ToneRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ToneProfileFile {
    #[serde(default)]
    audiences: BTreeMap<String, Vec<Tone>>,
    #[serde(default)]
    fallback: Option<Vec<Tone>>,
}

fn check_tone_list(owner: &str, tones: &[Tone]) -> PromoResult<()> {
    if tones.is_empty() {
        return Err(PromoError::InvalidConfig(format!(
            "tone list for '{owner}' cannot be empty"
        )));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = tones.iter().find(|tone| !seen.insert(**tone)) {
        return Err(PromoError::InvalidConfig(format!(
            "tone '{dup}' listed twice for '{owner}'"
        )));
    }

    Ok(())
}
