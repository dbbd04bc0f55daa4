/// Rejections raised while building a campaign descriptor.
///
/// Generation is all-or-nothing: any of these aborts the call before a single variant is
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("product name is required")]
    EmptyProductName,
    #[error("price is required")]
    EmptyPrice,
    #[error("unrecognised audience: {0}")]
    UnknownAudience(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PromoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read tone profile file: {0}")]
    ConfigRead(std::io::Error),
    #[error("tone profile schema mismatch: {0}")]
    ProfileSchema(String),
}

impl PromoError {
    /// Whether the error came from caller-supplied campaign input.
    pub fn is_validation(&self) -> bool {
        matches!(self, PromoError::Validation(_))
    }
}

pub type PromoResult<T> = std::result::Result<T, PromoError>;
