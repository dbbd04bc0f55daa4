//! Placeholder engagement score attached to each variant.
//!
//! This is not a prediction. The score is `base + variant_id * step`, saturated at 100, so it
//! depends on nothing but the variant's position. It exists so the result screen has a number
//! to show until a real model is available.

use crate::constants::{DEFAULT_ENGAGEMENT_BASE, DEFAULT_ENGAGEMENT_STEP};
use promo_types::Percentage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementEstimator {
    base: u8,
    step: u8,
}

impl EngagementEstimator {
    pub fn new(base: u8, step: u8) -> Self {
        Self { base, step }
    }

    pub fn base(&self) -> u8 {
        self.base
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    /// Synthetic score for the variant at `variant_id` (1-based).
    pub fn estimate(&self, variant_id: u32) -> Percentage {
        let raw = u32::from(self.base).saturating_add(variant_id.saturating_mul(u32::from(self.step)));
        Percentage::saturating(raw)
    }
}

impl Default for EngagementEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_ENGAGEMENT_BASE, DEFAULT_ENGAGEMENT_STEP)
    }
}
