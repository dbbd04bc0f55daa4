//! Caller-held result session.
//!
//! The form/result flow keeps its state outside the core. Callers own a [`SessionState`],
//! hand it to [`crate::PromoService::step`] together with a [`SessionEvent`], and get the next
//! state back. Nothing is retained between calls.

use crate::campaign::CampaignFields;
use crate::generator::GenerationBatch;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SessionState {
    /// Input form is showing.
    #[default]
    Editing,
    /// Results are showing for the fields they were generated from.
    Reviewing {
        fields: CampaignFields,
        batch: GenerationBatch,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Generate from the submitted form.
    Submit(CampaignFields),
    /// Leave the results and return to the form.
    BackToForm,
    /// Generate again from the fields currently under review.
    Regenerate,
}

impl SessionState {
    pub fn batch(&self) -> Option<&GenerationBatch> {
        match self {
            SessionState::Editing => None,
            SessionState::Reviewing { batch, .. } => Some(batch),
        }
    }

    pub fn is_reviewing(&self) -> bool {
        matches!(self, SessionState::Reviewing { .. })
    }
}
