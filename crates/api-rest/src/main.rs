//! Standalone REST API server binary.
//!
//! Runs the REST API server on its own, without loading a `.env` file. The workspace's main
//! `promo-run` binary serves the same router.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use promo_core::{ConfigValues, CoreConfig, PromoService};

/// Main entry point for the promo REST API server
///
/// # Environment Variables
/// - `PROMO_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `PROMO_AUDIENCE_POLICY`, `PROMO_ENGAGEMENT_BASE`, `PROMO_ENGAGEMENT_STEP`,
///   `PROMO_TONE_PROFILES`: see `promo_core::config`
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the core configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("PROMO_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = CoreConfig::from_values(ConfigValues::from_env())?;
    tracing::info!(
        "-- Starting promo REST API on {} (audience policy: {:?})",
        addr,
        cfg.audience_policy()
    );

    let app = router(AppState::new(PromoService::new(cfg)));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
