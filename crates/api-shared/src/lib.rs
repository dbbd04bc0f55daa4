//! # API Shared
//!
//! Shared definitions for the promo APIs.
//!
//! Contains:
//! - Request/response wire types (`dto` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `promo-run` binary.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
