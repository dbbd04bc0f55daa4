//! Campaign input: the raw fields a caller collects and the validated descriptor built from
//! them.

use crate::audience::{Audience, AudiencePolicy};
use crate::error::ValidationError;
use chrono::NaiveDate;
use promo_types::NonEmptyText;
use serde::{Deserialize, Serialize};

/// Kind of selling point an emphasis line carries.
///
/// The kind only guides the person filling in the form; rendered posts show the text alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisKind {
    Coupon,
    Event,
    Keyword,
    #[default]
    Other,
}

impl EmphasisKind {
    pub const ALL: [EmphasisKind; 4] = [
        EmphasisKind::Coupon,
        EmphasisKind::Event,
        EmphasisKind::Keyword,
        EmphasisKind::Other,
    ];

    pub fn id(self) -> &'static str {
        match self {
            EmphasisKind::Coupon => "coupon",
            EmphasisKind::Event => "event",
            EmphasisKind::Keyword => "keyword",
            EmphasisKind::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmphasisKind::Coupon => "쿠폰",
            EmphasisKind::Event => "이벤트",
            EmphasisKind::Keyword => "특정 키워드",
            EmphasisKind::Other => "기타",
        }
    }

    /// Example text shown next to the input for this kind.
    pub fn hint(self) -> &'static str {
        match self {
            EmphasisKind::Coupon => "예: 신규회원 20% 할인 쿠폰, 최대 5만원까지",
            EmphasisKind::Event => "예: 첫 구매 시 추가 5,000원 할인 + 무료배송",
            EmphasisKind::Keyword => "예: 한정수량, 조기품절, 인기상품",
            EmphasisKind::Other => "상세 내용을 입력하세요",
        }
    }

    fn from_id(id: &str) -> Option<EmphasisKind> {
        EmphasisKind::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// One emphasis line as supplied by the caller, possibly blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmphasisEntry {
    #[serde(default)]
    pub kind: EmphasisKind,
    pub text: String,
}

impl EmphasisEntry {
    pub fn new(kind: EmphasisKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl From<&str> for EmphasisEntry {
    fn from(text: &str) -> Self {
        Self::new(EmphasisKind::Other, text)
    }
}

impl From<String> for EmphasisEntry {
    fn from(text: String) -> Self {
        Self::new(EmphasisKind::Other, text)
    }
}

/// Parses `kind:text` (e.g. `coupon:20% off`); anything without a known kind prefix is
/// `other`.
impl std::str::FromStr for EmphasisEntry {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((prefix, rest)) = s.split_once(':') {
            if let Some(kind) = EmphasisKind::from_id(prefix.trim()) {
                return Ok(Self::new(kind, rest));
            }
        }
        Ok(Self::from(s))
    }
}

/// Validated emphasis line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmphasisItem {
    pub kind: EmphasisKind,
    pub text: NonEmptyText,
}

/// Raw campaign fields exactly as the presentation layer collected them.
///
/// This is what a caller holds on to between requests; [`CampaignDescriptor::new`] turns it
/// into something generation can trust.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignFields {
    pub product_name: String,
    pub price: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub audience: String,
    #[serde(default)]
    pub emphasis_items: Vec<EmphasisEntry>,
    #[serde(default)]
    pub reference_sample: Option<String>,
}

/// Validated, immutable description of the promotion to write posts for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDescriptor {
    product_name: String,
    price: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    audience: Audience,
    emphasis_items: Vec<EmphasisItem>,
    reference_sample: Option<NonEmptyText>,
}

impl CampaignDescriptor {
    /// Validates `fields` into a descriptor.
    ///
    /// Product name and price must be non-blank; the audience must resolve under `policy`.
    /// Product name and price are kept exactly as supplied, surrounding whitespace included,
    /// since templates substitute them verbatim.
    /// Blank emphasis lines are dropped and the rest keep their order. Dates are taken as-is,
    /// including an end date before the start date.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking product name, price, then
    /// audience.
    pub fn new(fields: &CampaignFields, policy: AudiencePolicy) -> Result<Self, ValidationError> {
        let product_name = require_text(&fields.product_name, ValidationError::EmptyProductName)?;
        let price = require_text(&fields.price, ValidationError::EmptyPrice)?;
        let audience = Audience::resolve(&fields.audience, policy)?;

        let emphasis_items = fields
            .emphasis_items
            .iter()
            .filter_map(|entry| {
                NonEmptyText::new(&entry.text)
                    .ok()
                    .map(|text| EmphasisItem {
                        kind: entry.kind,
                        text,
                    })
            })
            .collect();

        let reference_sample = fields
            .reference_sample
            .as_deref()
            .and_then(|sample| NonEmptyText::new(sample).ok());

        Ok(Self {
            product_name,
            price,
            start_date: fields.start_date,
            end_date: fields.end_date,
            audience,
            emphasis_items,
            reference_sample,
        })
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn audience(&self) -> &Audience {
        &self.audience
    }

    pub fn emphasis_items(&self) -> &[EmphasisItem] {
        &self.emphasis_items
    }

    /// Previously successful copy supplied as a style reference.
    ///
    /// Carried for future tone tuning; current templates do not read it.
    pub fn reference_sample(&self) -> Option<&NonEmptyText> {
        self.reference_sample.as_ref()
    }

    /// False only when both dates are present and the end precedes the start.
    pub fn date_range_is_ordered(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}

fn require_text(value: &str, missing: ValidationError) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(missing);
    }
    Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> CampaignFields {
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
    fn builds_descriptor_from_valid_fields() {
        let descriptor = CampaignDescriptor::new(&fields(), AudiencePolicy::Reject).unwrap();
        assert_eq!(descriptor.product_name(), "Running Shoe X");
        assert_eq!(descriptor.price(), "89,000");
        assert_eq!(descriptor.audience(), &Audience::Ppomppu);
        assert_eq!(descriptor.emphasis_items().len(), 1);
        assert!(descriptor.date_range_is_ordered());
    }

    #[test]
    fn empty_product_name_rejected() {
        let mut f = fields();
        f.product_name = "".into();
        assert_eq!(
            CampaignDescriptor::new(&f, AudiencePolicy::Reject),
            Err(ValidationError::EmptyProductName)
        );
    }

    #[test]
    fn blank_price_rejected() {
        let mut f = fields();
        f.price = "   ".into();
        assert_eq!(
            CampaignDescriptor::new(&f, AudiencePolicy::Reject),
            Err(ValidationError::EmptyPrice)
        );
    }

    #[test]
    fn unknown_audience_rejected_by_default_policy() {
        let mut f = fields();
        f.audience = "unknown_forum".into();
        assert_eq!(
            CampaignDescriptor::new(&f, AudiencePolicy::default()),
            Err(ValidationError::UnknownAudience("unknown_forum".into()))
        );
    }

    #[test]
    fn product_name_checked_before_audience() {
        let mut f = fields();
        f.product_name = " ".into();
        f.audience = "unknown_forum".into();
        assert_eq!(
            CampaignDescriptor::new(&f, AudiencePolicy::Reject),
            Err(ValidationError::EmptyProductName)
        );
    }

    #[test]
    fn blank_emphasis_lines_dropped_and_order_kept() {
        let mut f = fields();
        f.emphasis_items = vec!["B".into(), "  ".into(), "A".into()];
        let descriptor = CampaignDescriptor::new(&f, AudiencePolicy::Reject).unwrap();
        let texts: Vec<_> = descriptor
            .emphasis_items()
            .iter()
            .map(|item| item.text.as_str())
            .collect();
        assert_eq!(texts, vec!["B", "A"]);
    }

    #[test]
    fn padded_product_and_price_kept_as_supplied() {
        let mut f = fields();
        f.product_name = " Running Shoe X".into();
        f.price = " 89,000 ".into();
        let descriptor = CampaignDescriptor::new(&f, AudiencePolicy::Reject).unwrap();
        assert_eq!(descriptor.product_name(), " Running Shoe X");
        assert_eq!(descriptor.price(), " 89,000 ");
    }

    #[test]
    fn reversed_dates_are_accepted() {
        let mut f = fields();
        f.start_date = NaiveDate::from_ymd_opt(2025, 2, 1);
        let descriptor = CampaignDescriptor::new(&f, AudiencePolicy::Reject).unwrap();
        assert!(!descriptor.date_range_is_ordered());
    }

    #[test]
    fn reference_sample_is_carried() {
        let mut f = fields();
        f.reference_sample = Some("이거 진짜 대박...".into());
        let descriptor = CampaignDescriptor::new(&f, AudiencePolicy::Reject).unwrap();
        assert_eq!(
            descriptor.reference_sample().map(|s| s.as_str()),
            Some("이거 진짜 대박...")
        );
    }

    #[test]
    fn emphasis_entry_parses_kind_prefix() {
        let entry: EmphasisEntry = "coupon: 신규회원 20%".parse().unwrap();
        assert_eq!(entry.kind, EmphasisKind::Coupon);
        assert_eq!(entry.text, " 신규회원 20%");

        let plain: EmphasisEntry = "time: 10:00 open".parse().unwrap();
        assert_eq!(plain.kind, EmphasisKind::Other);
        assert_eq!(plain.text, "time: 10:00 open");
    }

    #[test]
    fn fields_deserialize_with_defaults() {
        let json = r#"{"product_name":"P","price":"1","audience":"womad"}"#;
        let f: CampaignFields = serde_json::from_str(json).unwrap();
        assert!(f.emphasis_items.is_empty());
        assert!(f.start_date.is_none());
    }
}
