//! JSON request and response bodies for the promo APIs.

use chrono::NaiveDate;
use promo_core::{
    Audience, CampaignFields, EmphasisEntry, EmphasisKind, GeneratedVariant, GenerationBatch,
    ToneRegistry,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Kind of selling point; guides the form only and is not rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisKindDto {
    Coupon,
    Event,
    Keyword,
    #[default]
    Other,
}

impl From<EmphasisKindDto> for EmphasisKind {
    fn from(kind: EmphasisKindDto) -> Self {
        match kind {
            EmphasisKindDto::Coupon => EmphasisKind::Coupon,
            EmphasisKindDto::Event => EmphasisKind::Event,
            EmphasisKindDto::Keyword => EmphasisKind::Keyword,
            EmphasisKindDto::Other => EmphasisKind::Other,
        }
    }
}

/// One selling point. Blank text is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmphasisItemReq {
    #[serde(default)]
    pub kind: EmphasisKindDto,
    #[schema(example = "신규회원 20% 할인 쿠폰")]
    pub text: String,
}

impl From<EmphasisItemReq> for EmphasisEntry {
    fn from(item: EmphasisItemReq) -> Self {
        EmphasisEntry::new(item.kind.into(), item.text)
    }
}

/// Campaign to generate posts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateReq {
    #[schema(example = "Running Shoe X")]
    pub product_name: String,
    #[schema(example = "89,000")]
    pub price: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// One of `ppomppu`, `fmkorea`, `womad`.
    #[schema(example = "ppomppu")]
    pub audience: String,
    /// Selling points, rendered as bullet lines in this order.
    #[serde(default)]
    pub emphasis_items: Vec<EmphasisItemReq>,
    /// Previously successful copy; accepted but not used by the current templates.
    #[serde(default)]
    pub reference_sample: Option<String>,
}

impl From<GenerateReq> for CampaignFields {
    fn from(req: GenerateReq) -> Self {
        CampaignFields {
            product_name: req.product_name,
            price: req.price,
            start_date: req.start_date,
            end_date: req.end_date,
            audience: req.audience,
            emphasis_items: req
                .emphasis_items
                .into_iter()
                .map(EmphasisEntry::from)
                .collect(),
            reference_sample: req.reference_sample,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VariantRes {
    pub variant_id: u32,
    #[schema(example = "friendly")]
    pub tone: String,
    pub tone_label: String,
    pub rendered_text: String,
    /// Placeholder percentage, not a prediction.
    pub estimated_engagement: u8,
}

impl From<GeneratedVariant> for VariantRes {
    fn from(variant: GeneratedVariant) -> Self {
        VariantRes {
            variant_id: variant.variant_id,
            tone: variant.tone.id().to_string(),
            tone_label: variant.tone_label,
            rendered_text: variant.rendered_text,
            estimated_engagement: variant.estimated_engagement.value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRes {
    #[schema(example = "Running Shoe X • 뽐뿌")]
    pub headline: String,
    pub audience: String,
    pub variants: Vec<VariantRes>,
}

impl From<GenerationBatch> for GenerateRes {
    fn from(batch: GenerationBatch) -> Self {
        GenerateRes {
            headline: batch.headline,
            audience: batch.audience.id().to_string(),
            variants: batch.variants.into_iter().map(VariantRes::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AudienceRes {
    pub id: String,
    pub label: String,
    /// Tone ids in render order.
    pub tones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListAudiencesRes {
    pub audiences: Vec<AudienceRes>,
    /// Tones used for unlisted audiences when the fallback policy is active.
    pub fallback: Vec<String>,
}

impl ListAudiencesRes {
    pub fn from_registry(registry: &ToneRegistry) -> Self {
        let audiences = Audience::known()
            .into_iter()
            .map(|audience| AudienceRes {
                id: audience.id().to_string(),
                label: audience.label().to_string(),
                tones: registry
                    .tones_for(&audience)
                    .iter()
                    .map(|tone| tone.id().to_string())
                    .collect(),
            })
            .collect();

        ListAudiencesRes {
            audiences,
            fallback: registry
                .fallback()
                .iter()
                .map(|tone| tone.id().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}
