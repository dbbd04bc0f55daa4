use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use promo_core::{ConfigValues, CoreConfig, PromoService};

/// Main entry point for the promo application
///
/// Loads `.env`, resolves the core configuration once, and serves the REST API
/// (with Swagger UI under `/swagger-ui`).
///
/// # Environment Variables
/// - `PROMO_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `PROMO_AUDIENCE_POLICY`: `reject` (default) or `fallback` for unknown communities
/// - `PROMO_ENGAGEMENT_BASE` / `PROMO_ENGAGEMENT_STEP`: placeholder score parameters
/// - `PROMO_TONE_PROFILES`: optional YAML file overriding tone order per community
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup, or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("promo=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("PROMO_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = CoreConfig::from_values(ConfigValues::from_env())?;
    tracing::info!("++ Starting promo REST on {}", rest_addr);
    tracing::info!("++ Audience policy: {:?}", cfg.audience_policy());

    let app = router(AppState::new(PromoService::new(cfg)));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
