//! Variant generation: registry lookup, rendering, and scoring for one descriptor.

use crate::campaign::CampaignDescriptor;
use crate::constants::HEADLINE_SEPARATOR;
use crate::engagement::EngagementEstimator;
use crate::registry::ToneRegistry;
use crate::render::{template_for, RenderContext};
use crate::tone::Tone;
use crate::Audience;
use promo_types::Percentage;
use serde::Serialize;

/// One generated post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedVariant {
    /// Position in render order, starting at 1.
    pub variant_id: u32,
    pub tone: Tone,
    pub tone_label: String,
    pub rendered_text: String,
    /// Placeholder score, see [`EngagementEstimator`].
    pub estimated_engagement: Percentage,
}

/// Everything one generation call returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationBatch {
    /// Result caption, `"{product} • {community}"`.
    pub headline: String,
    pub audience: Audience,
    pub variants: Vec<GeneratedVariant>,
}

#[derive(Debug, Clone, Default)]
pub struct VariantGenerator {
    registry: ToneRegistry,
    estimator: EngagementEstimator,
}

impl VariantGenerator {
    pub fn new(registry: ToneRegistry, estimator: EngagementEstimator) -> Self {
        Self {
            registry,
            estimator,
        }
    }

    pub fn registry(&self) -> &ToneRegistry {
        &self.registry
    }

    pub fn estimator(&self) -> &EngagementEstimator {
        &self.estimator
    }

    /// Renders one variant per tone the registry lists for the descriptor's audience.
    pub fn generate(&self, descriptor: &CampaignDescriptor) -> Vec<GeneratedVariant> {
        let ctx = RenderContext::from_descriptor(descriptor);
        let tones = self.registry.tones_for(descriptor.audience());

        if !descriptor.date_range_is_ordered() {
            tracing::warn!(
                start = ?descriptor.start_date(),
                end = ?descriptor.end_date(),
                "campaign ends before it starts; rendering dates as given"
            );
        }

        if descriptor.reference_sample().is_some() {
            tracing::debug!("reference sample supplied; templates do not use it yet");
        }

        let variants: Vec<GeneratedVariant> = tones
            .iter()
            .zip(1u32..)
            .map(|(&tone, variant_id)| {
                let template = template_for(tone);
                GeneratedVariant {
                    variant_id,
                    tone,
                    tone_label: template.label().to_string(),
                    rendered_text: template.render(&ctx),
                    estimated_engagement: self.estimator.estimate(variant_id),
                }
            })
            .collect();

        tracing::debug!(
            audience = descriptor.audience().id(),
            variants = variants.len(),
            "generated variants"
        );

        variants
    }

    /// Like [`generate`](Self::generate), with the result caption attached.
    pub fn generate_batch(&self, descriptor: &CampaignDescriptor) -> GenerationBatch {
        GenerationBatch {
            headline: format!(
                "{}{}{}",
                descriptor.product_name(),
                HEADLINE_SEPARATOR,
                descriptor.audience().label()
            ),
            audience: descriptor.audience().clone(),
            variants: self.generate(descriptor),
        }
    }
}
