//! # Promo Core
//!
//! Variant generation engine for community promotion posts.
//!
//! Given a campaign (product, price, period, target community, selling points) this crate
//! renders one post per tone the community's profile lists and attaches a placeholder
//! engagement score to each:
//!
//! ```text
//! CampaignFields ──validate──▶ CampaignDescriptor
//!                                   │
//!          ToneRegistry ◀── audience┘
//!               │ ordered tones
//!               ▼
//!          ToneTemplate::render ──▶ EngagementEstimator ──▶ Vec<GeneratedVariant>
//! ```
//!
//! Everything here is synchronous and stateless. Form handling, HTTP, and terminal output
//! belong in `api-rest` and `promo-cli`.

pub mod audience;
pub mod campaign;
pub mod config;
pub mod constants;
pub mod engagement;
pub mod error;
pub mod generator;
pub mod registry;
pub mod render;
pub mod session;
pub mod tone;

pub use audience::{Audience, AudiencePolicy};
pub use campaign::{CampaignDescriptor, CampaignFields, EmphasisEntry, EmphasisItem, EmphasisKind};
pub use config::{ConfigValues, CoreConfig};
pub use engagement::EngagementEstimator;
pub use error::{PromoError, PromoResult, ValidationError};
pub use generator::{GeneratedVariant, GenerationBatch, VariantGenerator};
pub use promo_types::{NonEmptyText, Percentage};
pub use registry::ToneRegistry;
pub use session::{SessionEvent, SessionState};
pub use tone::Tone;

use chrono::NaiveDate;

/// Configured entry point used by the CLI and the REST API.
#[derive(Debug, Clone, Default)]
pub struct PromoService {
    policy: AudiencePolicy,
    generator: VariantGenerator,
}

impl PromoService {
    pub fn new(cfg: CoreConfig) -> Self {
        Self {
            policy: cfg.audience_policy(),
            generator: VariantGenerator::new(cfg.registry().clone(), cfg.engagement()),
        }
    }

    pub fn audience_policy(&self) -> AudiencePolicy {
        self.policy
    }

    pub fn registry(&self) -> &ToneRegistry {
        self.generator.registry()
    }

    /// Validates `fields` and renders every variant for the campaign.
    ///
    /// # Errors
    ///
    /// Returns `PromoError::Validation` if the product name or price is blank, or the audience
    /// is not accepted under the configured policy. No variants are produced in that case.
    pub fn generate_variants(&self, fields: &CampaignFields) -> PromoResult<GenerationBatch> {
        let descriptor = CampaignDescriptor::new(fields, self.policy)?;
        Ok(self.generator.generate_batch(&descriptor))
    }

    /// Advances a caller-held session by one event.
    ///
    /// `Regenerate` while editing leaves the state unchanged.
    ///
    /// # Errors
    ///
    /// A `Submit` with invalid fields returns the validation error; the caller keeps its
    /// previous state.
    pub fn step(&self, state: SessionState, event: SessionEvent) -> PromoResult<SessionState> {
        match event {
            SessionEvent::Submit(fields) => {
                let batch = self.generate_variants(&fields)?;
                Ok(SessionState::Reviewing { fields, batch })
            }
            SessionEvent::BackToForm => Ok(SessionState::Editing),
            SessionEvent::Regenerate => match state {
                SessionState::Editing => Ok(SessionState::Editing),
                SessionState::Reviewing { fields, .. } => {
                    let batch = self.generate_variants(&fields)?;
                    Ok(SessionState::Reviewing { fields, batch })
                }
            },
        }
    }
}

/// Generates variants with the default configuration (strict audiences, built-in profiles).
///
/// # Errors
///
/// Returns [`ValidationError`] for a blank product name or price, or an unrecognised audience.
pub fn generate_variants<I, E>(
    product_name: &str,
    price: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    audience: &str,
    emphasis_items: I,
    reference_sample: Option<&str>,
) -> Result<Vec<GeneratedVariant>, ValidationError>
where
    I: IntoIterator<Item = E>,
    E: Into<EmphasisEntry>,
{
    let fields = CampaignFields {
        product_name: product_name.to_owned(),
        price: price.to_owned(),
        start_date,
        end_date,
        audience: audience.to_owned(),
        emphasis_items: emphasis_items.into_iter().map(Into::into).collect(),
        reference_sample: reference_sample.map(str::to_owned),
    };
    let descriptor = CampaignDescriptor::new(&fields, AudiencePolicy::Reject)?;
    Ok(VariantGenerator::default().generate(&descriptor))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe() -> CampaignFields {
        CampaignFields {
            product_name: "Running Shoe X".into(),
            price: "89,000".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 20),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 27),
            audience: "ppomppu".into(),
            emphasis_items: vec!["20% coupon".into()],
            reference_sample: None,
        }
    }

    #[test]
    fn free_function_matches_scenario() {
        let variants = generate_variants(
            "Running Shoe X",
            "89,000",
            NaiveDate::from_ymd_opt(2025, 1, 20),
            NaiveDate::from_ymd_opt(2025, 1, 27),
            "ppomppu",
            ["20% coupon"],
            None,
        )
        .unwrap();
        let scores: Vec<u8> = variants
            .iter()
            .map(|v| v.estimated_engagement.value())
            .collect();
        assert_eq!(scores, vec![75, 80, 85, 90]);
    }

    #[test]
    fn free_function_is_deterministic() {
        let run = || {
            generate_variants(
                "Running Shoe X",
                "89,000",
                None,
                None,
                "womad",
                vec!["A", "B"],
                Some("sample"),
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn free_function_validation_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(
            generate_variants("", "1", None, None, "ppomppu", empty, None),
            Err(ValidationError::EmptyProductName)
        );
        assert_eq!(
            generate_variants("P", "1", None, None, "unknown_forum", empty, None),
            Err(ValidationError::UnknownAudience("unknown_forum".into()))
        );
    }

    #[test]
    fn service_fallback_policy_accepts_unknown_audience() {
        let cfg = CoreConfig::default().with_audience_policy(AudiencePolicy::Fallback);
        let service = PromoService::new(cfg);
        let mut fields = shoe();
        fields.audience = "unknown_forum".into();

        let batch = service.generate_variants(&fields).unwrap();
        assert_eq!(batch.variants.len(), 4);
        assert_eq!(batch.headline, "Running Shoe X • unknown_forum");
    }

    #[test]
    fn service_validation_error_is_flagged() {
        let mut fields = shoe();
        fields.price = "".into();
        let err = PromoService::default().generate_variants(&fields).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "price is required");
    }

    #[test]
    fn session_submit_back_and_regenerate() {
        let service = PromoService::default();

        let reviewing = service
            .step(SessionState::Editing, SessionEvent::Submit(shoe()))
            .unwrap();
        assert!(reviewing.is_reviewing());
        let first = reviewing.batch().cloned().unwrap();

        let again = service
            .step(reviewing.clone(), SessionEvent::Regenerate)
            .unwrap();
        assert_eq!(again.batch(), Some(&first));

        let editing = service.step(again, SessionEvent::BackToForm).unwrap();
        assert_eq!(editing, SessionState::Editing);
    }

    #[test]
    fn session_regenerate_while_editing_is_noop() {
        let state = PromoService::default()
            .step(SessionState::Editing, SessionEvent::Regenerate)
            .unwrap();
        assert_eq!(state, SessionState::Editing);
    }

    #[test]
    fn session_invalid_submit_is_error() {
        let mut fields = shoe();
        fields.product_name = " ".into();
        let result = PromoService::default().step(SessionState::Editing, SessionEvent::Submit(fields));
        assert!(matches!(
            result,
            Err(PromoError::Validation(ValidationError::EmptyProductName))
        ));
    }

    #[test]
    fn service_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PromoService>();
        assert_send_sync::<CoreConfig>();
    }
}
