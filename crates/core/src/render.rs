//! Tone templates and the text substitution that fills them.
//!
//! Every template produces a post in three parts: a lead, the emphasis block, and a closing.
//! Parts are separated by one blank line; an empty emphasis block is left out entirely so a
//! campaign without selling points never gets an empty bullet or a doubled blank line.
//!
//! Substitution is plain text. Product name and price go in verbatim, dates are formatted as
//! `MM월 DD일` (empty when absent), and the community label comes from the audience.

use crate::campaign::{CampaignDescriptor, EmphasisItem};
use crate::constants::{EMPHASIS_BULLET, MONTH_DAY_FORMAT, PARAGRAPH_BREAK};
use crate::tone::Tone;
use chrono::NaiveDate;

/// Values a template may substitute, precomputed once per descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext<'a> {
    pub product_name: &'a str,
    pub price: &'a str,
    pub start_date: String,
    pub end_date: String,
    pub emphasis_block: String,
    pub audience_label: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn from_descriptor(descriptor: &'a CampaignDescriptor) -> Self {
        Self {
            product_name: descriptor.product_name(),
            price: descriptor.price(),
            start_date: format_month_day(descriptor.start_date()),
            end_date: format_month_day(descriptor.end_date()),
            emphasis_block: emphasis_block(descriptor.emphasis_items()),
            audience_label: descriptor.audience().label(),
        }
    }
}

/// Formats a campaign date as `MM월 DD일`, or an empty string when there is no date.
pub fn format_month_day(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(MONTH_DAY_FORMAT).to_string())
        .unwrap_or_default()
}

/// Joins emphasis items into bullet lines, one bullet per item.
///
/// Item text goes in as entered; a line break inside an item stays in the post. Returns an
/// empty string for no items.
pub fn emphasis_block(items: &[EmphasisItem]) -> String {
    items
        .iter()
        .map(|item| format!("{EMPHASIS_BULLET}{}", item.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Static definition of one tone's post structure.
pub struct ToneTemplate {
    pub tone: Tone,
    lead: fn(&RenderContext<'_>) -> String,
    closing: fn(&RenderContext<'_>) -> String,
}

impl ToneTemplate {
    pub fn id(&self) -> &'static str {
        self.tone.id()
    }

    pub fn label(&self) -> &'static str {
        self.tone.label()
    }

    /// Renders the full post for `ctx`.
    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let lead = (self.lead)(ctx);
        let closing = (self.closing)(ctx);

        [lead.as_str(), ctx.emphasis_block.as_str(), closing.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(PARAGRAPH_BREAK)
    }
}

impl std::fmt::Debug for ToneTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToneTemplate").field("tone", &self.tone).finish()
    }
}

static TEMPLATES: [ToneTemplate; 4] = [
    ToneTemplate {
        tone: Tone::Friendly,
        lead: friendly_lead,
        closing: friendly_closing,
    },
    ToneTemplate {
        tone: Tone::Informational,
        lead: informational_lead,
        closing: informational_closing,
    },
    ToneTemplate {
        tone: Tone::Testimonial,
        lead: testimonial_lead,
        closing: testimonial_closing,
    },
    ToneTemplate {
        tone: Tone::Humorous,
        lead: humorous_lead,
        closing: humorous_closing,
    },
];

/// Template for `tone`.
pub fn template_for(tone: Tone) -> &'static ToneTemplate {
    match tone {
        Tone::Friendly => &TEMPLATES[0],
        Tone::Informational => &TEMPLATES[1],
        Tone::Testimonial => &TEMPLATES[2],
        Tone::Humorous => &TEMPLATES[3],
    }
}

/// Renders one tone for `ctx`.
pub fn render(tone: Tone, ctx: &RenderContext<'_>) -> String {
    template_for(tone).render(ctx)
}

fn friendly_lead(ctx: &RenderContext<'_>) -> String {
    format!(
        "{} 이거 진짜 대박이에요 ㄷㄷ\n\n작년에 {}에 샀는데 지금 보니까 또 세일하네요.\n이 가격에 이 퀄리티면 가성비 ㅇㅈ?",
        ctx.product_name, ctx.price
    )
}

fn friendly_closing(_ctx: &RenderContext<'_>) -> String {
    "놓치면 후회할 듯... 저는 재구매 각입니다 👍".to_string()
}

fn informational_lead(ctx: &RenderContext<'_>) -> String {
    format!(
        "{} 특가 정보 공유합니다.\n\n가격: {}\n기간: {} ~ {}",
        ctx.product_name, ctx.price, ctx.start_date, ctx.end_date
    )
}

fn informational_closing(ctx: &RenderContext<'_>) -> String {
    format!(
        "비교해보니 역대급 가격인 것 같아서 올립니다.\n{} 회원분들 중 필요하신 분들 참고하세요!",
        ctx.audience_label
    )
}

fn testimonial_lead(ctx: &RenderContext<'_>) -> String {
    format!(
        "{} 쓴지 3개월 됐는데 후기 남깁니다.\n\n솔직히 처음엔 {} 주고 사기 좀 망설였는데\n지금은 완전 만족 중이에요 ㅎㅎ",
        ctx.product_name, ctx.price
    )
}

fn testimonial_closing(_ctx: &RenderContext<'_>) -> String {
    "지금 또 세일한다길래 주변에 추천하려고 글 올려요.\n고민하시는 분들한테는 강추!".to_string()
}

fn humorous_lead(ctx: &RenderContext<'_>) -> String {
    format!(
        "{} {}이라니...\n\n(이거 사야되나 말아야되나 고민중)",
        ctx.product_name, ctx.price
    )
}

fn humorous_closing(_ctx: &RenderContext<'_>) -> String {
    "지갑: 안돼...😭\n나: 어차피 살 거 지금 사는 게 이득 아니야?\n지갑: ...💸\n\n결국 또 질렀습니다 여러분 ㅋㅋㅋ\n같이 망하실 분? 🙋‍♀️"
        .to_string()
}
