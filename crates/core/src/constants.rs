//! Constants used throughout the promo core crate.

/// Base score handed to every variant before the per-position step is added.
pub const DEFAULT_ENGAGEMENT_BASE: u8 = 70;

/// Score increment per variant position.
pub const DEFAULT_ENGAGEMENT_STEP: u8 = 5;

/// Bullet prefix for each emphasis line.
pub const EMPHASIS_BULLET: &str = "• ";

/// Separator placed between paragraphs of a rendered post.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// `chrono` format string for campaign dates ("01월 20일").
pub const MONTH_DAY_FORMAT: &str = "%m월 %d일";

/// Separator between product name and community label in a batch headline.
pub const HEADLINE_SEPARATOR: &str = " • ";
