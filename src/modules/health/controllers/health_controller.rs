use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::establishments::EstablishmentRepository;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    /// `available` or `degraded`
    pub configuration_store: String,
}

/// GET /health - Liveness probe
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: env!("CARGO_PKG_NAME").to_string(),
    })
}

/// GET /ready - Readiness probe
///
/// Pricing falls back to platform defaults when the configuration store is
/// down, so an unreachable store degrades the service without making it unready.
pub async fn readiness_check(
    repository: web::Data<Arc<dyn EstablishmentRepository>>,
) -> impl Responder {
    let configuration_store = match repository.ping().await {
        Ok(()) => "available",
        Err(e) => {
            tracing::warn!(error = %e, "Establishment configuration store unreachable");
            "degraded"
        }
    };

    HttpResponse::Ok().json(ReadinessResponse {
        ready: true,
        configuration_store: configuration_store.to_string(),
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
