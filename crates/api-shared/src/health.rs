use crate::dto::HealthRes;

/// Health check shared by every promo API surface.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance
    ///
    /// The generator holds no external resources, so being able to answer is being healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "promo generator is alive".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_ok() {
        let res = HealthService::check_health();
        assert!(res.ok);
        assert!(!res.message.is_empty());
    }
}
