//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into [`crate::PromoService`].
//! Binaries read the raw environment values with [`ConfigValues::from_env`]; everything after
//! that is pure parsing so tests never touch process-wide state.

use crate::audience::AudiencePolicy;
use crate::engagement::EngagementEstimator;
use crate::error::{PromoError, PromoResult};
use crate::registry::ToneRegistry;
use std::path::Path;

/// Environment variable selecting `reject` or `fallback` for unknown audiences.
pub const AUDIENCE_POLICY_VAR: &str = "PROMO_AUDIENCE_POLICY";
pub const ENGAGEMENT_BASE_VAR: &str = "PROMO_ENGAGEMENT_BASE";
pub const ENGAGEMENT_STEP_VAR: &str = "PROMO_ENGAGEMENT_STEP";
/// Path to an optional YAML tone profile file.
pub const TONE_PROFILES_VAR: &str = "PROMO_TONE_PROFILES";

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    audience_policy: AudiencePolicy,
    engagement: EngagementEstimator,
    registry: ToneRegistry,
}

impl CoreConfig {
    pub fn new(
        audience_policy: AudiencePolicy,
        engagement: EngagementEstimator,
        registry: ToneRegistry,
    ) -> Self {
        Self {
            audience_policy,
            engagement,
            registry,
        }
    }

    /// Builds the configuration from raw (possibly unset) values.
    pub fn from_values(values: ConfigValues) -> PromoResult<Self> {
        Ok(Self {
            audience_policy: audience_policy_from_env_value(values.audience_policy)?,
            engagement: engagement_from_env_values(values.engagement_base, values.engagement_step)?,
            registry: tone_registry_from_env_value(values.tone_profiles)?,
        })
    }

    pub fn audience_policy(&self) -> AudiencePolicy {
        self.audience_policy
    }

    pub fn engagement(&self) -> EngagementEstimator {
        self.engagement
    }

    pub fn registry(&self) -> &ToneRegistry {
        &self.registry
    }

    pub fn with_audience_policy(mut self, policy: AudiencePolicy) -> Self {
        self.audience_policy = policy;
        self
    }
}

/// Unparsed configuration values, one per environment variable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigValues {
    pub audience_policy: Option<String>,
    pub engagement_base: Option<String>,
    pub engagement_step: Option<String>,
    pub tone_profiles: Option<String>,
}

impl ConfigValues {
    /// Reads the `PROMO_*` variables. Call this once, at startup.
    pub fn from_env() -> Self {
        Self {
            audience_policy: std::env::var(AUDIENCE_POLICY_VAR).ok(),
            engagement_base: std::env::var(ENGAGEMENT_BASE_VAR).ok(),
            engagement_step: std::env::var(ENGAGEMENT_STEP_VAR).ok(),
            tone_profiles: std::env::var(TONE_PROFILES_VAR).ok(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the audience policy. Unset or blank means [`AudiencePolicy::Reject`].
pub fn audience_policy_from_env_value(value: Option<String>) -> PromoResult<AudiencePolicy> {
    non_blank(value)
        .map(|v| v.parse::<AudiencePolicy>().map_err(PromoError::InvalidConfig))
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Parse engagement base and step, defaulting each one independently.
pub fn engagement_from_env_values(
    base: Option<String>,
    step: Option<String>,
) -> PromoResult<EngagementEstimator> {
    fn parse(var: &str, value: Option<String>, default: u8) -> PromoResult<u8> {
        match non_blank(value) {
            None => Ok(default),
            Some(v) => match v.parse::<u8>() {
                Ok(n) if n <= 100 => Ok(n),
                _ => Err(PromoError::InvalidConfig(format!(
                    "{var} must be a whole number between 0 and 100, got '{v}'"
                ))),
            },
        }
    }

    let defaults = EngagementEstimator::default();
    Ok(EngagementEstimator::new(
        parse(ENGAGEMENT_BASE_VAR, base, defaults.base())?,
        parse(ENGAGEMENT_STEP_VAR, step, defaults.step())?,
    ))
}

/// Load the tone registry from an optional profile file path; unset means built-in profiles.
pub fn tone_registry_from_env_value(value: Option<String>) -> PromoResult<ToneRegistry> {
    match non_blank(value) {
        None => Ok(ToneRegistry::builtin()),
        Some(path) => ToneRegistry::from_yaml_file(Path::new(&path)),
    }
}
