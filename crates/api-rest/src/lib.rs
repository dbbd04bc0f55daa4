//! # API REST
//!
//! REST API for the promo variant generator.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS)
//!
//! Uses `api-shared` for wire types and `promo-core` for generation.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AudienceRes, EmphasisItemReq, EmphasisKindDto, ErrorRes, GenerateReq, GenerateRes, HealthRes,
    HealthService, ListAudiencesRes, VariantRes,
};
use promo_core::{CampaignFields, PromoService};

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    service: Arc<PromoService>,
}

impl AppState {
    pub fn new(service: PromoService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, generate_variants, list_audiences),
    components(schemas(
        HealthRes,
        GenerateReq,
        EmphasisItemReq,
        EmphasisKindDto,
        GenerateRes,
        VariantRes,
        AudienceRes,
        ListAudiencesRes,
        ErrorRes
    ))
)]
pub struct ApiDoc;

/// Builds the REST router, Swagger UI included.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/variants", post(generate_variants))
        .route("/audiences", get(list_audiences))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/variants",
    request_body = GenerateReq,
    responses(
        (status = 200, description = "Generated variants in render order", body = GenerateRes),
        (status = 400, description = "Campaign failed validation", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Generate one post per tone for the campaign
///
/// Validation is all-or-nothing: a blank product name or price, or an audience the server's
/// policy does not accept, returns `400` with no variants.
///
/// # Errors
/// Returns `400 Bad Request` with the validation message, or `500` for anything else.
#[axum::debug_handler]
async fn generate_variants(
    State(state): State<AppState>,
    Json(req): Json<GenerateReq>,
) -> Result<Json<GenerateRes>, (StatusCode, Json<ErrorRes>)> {
    let fields = CampaignFields::from(req);
    match state.service.generate_variants(&fields) {
        Ok(batch) => Ok(Json(GenerateRes::from(batch))),
        Err(e) if e.is_validation() => {
            tracing::info!("rejected campaign: {}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorRes {
                    error: e.to_string(),
                }),
            ))
        }
        Err(e) => {
            tracing::error!("Generate variants error: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorRes {
                    error: "Internal error".into(),
                }),
            ))
        }
    }
}

#[utoipa::path(
    get,
    path = "/audiences",
    responses(
        (status = 200, description = "Supported communities with their tone order", body = ListAudiencesRes)
    )
)]
/// List supported communities and the tones each one gets
#[axum::debug_handler]
async fn list_audiences(State(state): State<AppState>) -> Json<ListAudiencesRes> {
    Json(ListAudiencesRes::from_registry(state.service.registry()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use promo_core::{AudiencePolicy, CoreConfig};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(PromoService::default()))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["ok"], true);
    }

    #[tokio::test]
    async fn generates_four_variants() {
        let body = serde_json::json!({
            "product_name": "Running Shoe X",
            "price": "89,000",
            "start_date": "2025-01-20",
            "end_date": "2025-01-27",
            "audience": "ppomppu",
            "emphasis_items": [{ "text": "20% coupon" }]
        });
        let response = app().oneshot(post_json("/variants", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        let variants = json["variants"].as_array().unwrap();
        assert_eq!(variants.len(), 4);
        let scores: Vec<u64> = variants
            .iter()
            .map(|v| v["estimated_engagement"].as_u64().unwrap())
            .collect();
        assert_eq!(scores, vec![75, 80, 85, 90]);
        assert!(variants
            .iter()
            .all(|v| v["rendered_text"].as_str().unwrap().contains("• 20% coupon")));
        assert_eq!(json["headline"], "Running Shoe X • 뽐뿌");
    }

    #[tokio::test]
    async fn emphasis_kind_accepted_and_text_rendered() {
        let body = serde_json::json!({
            "product_name": "Running Shoe X",
            "price": "89,000",
            "audience": "fmkorea",
            "emphasis_items": [
                { "kind": "coupon", "text": "신규회원 20% 할인 쿠폰" },
                { "kind": "keyword", "text": "  " }
            ]
        });
        let response = app().oneshot(post_json("/variants", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        let text = json["variants"][0]["rendered_text"].as_str().unwrap();
        assert!(text.contains("• 신규회원 20% 할인 쿠폰"), "{text}");
        assert_eq!(text.matches("• ").count(), 1, "{text}");
    }

    #[tokio::test]
    async fn unknown_audience_is_bad_request() {
        let body = serde_json::json!({
            "product_name": "Running Shoe X",
            "price": "89,000",
            "audience": "unknown_forum"
        });
        let response = app().oneshot(post_json("/variants", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = read_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("unknown_forum"));
    }

    #[tokio::test]
    async fn fallback_policy_accepts_unknown_audience() {
        let cfg = CoreConfig::default().with_audience_policy(AudiencePolicy::Fallback);
        let app = router(AppState::new(PromoService::new(cfg)));
        let body = serde_json::json!({
            "product_name": "P",
            "price": "1",
            "audience": "unknown_forum"
        });
        let response = app.oneshot(post_json("/variants", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["audience"], "unknown_forum");
    }

    #[tokio::test]
    async fn empty_product_is_bad_request() {
        let body = serde_json::json!({
            "product_name": "",
            "price": "89,000",
            "audience": "ppomppu"
        });
        let response = app().oneshot(post_json("/variants", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lists_audiences() {
        let response = app()
            .oneshot(Request::builder().uri("/audiences").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["audiences"].as_array().unwrap().len(), 3);
        assert_eq!(json["audiences"][2]["tones"][0], "testimonial");
    }
}
