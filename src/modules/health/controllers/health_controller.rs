use actix_web::{web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::taxes::models::{find_jurisdiction, FALLBACK_PROVINCE};
use crate::state::AppState;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub application: String,
    pub jurisdictions: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub jurisdiction_table: bool,
    pub exchange_rate: bool,
}

/// GET /health - Liveness probe
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            application: "healthy".to_string(),
            jurisdictions: "not_checked".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Ready once the fallback jurisdiction resolves and the rate is usable
pub async fn readiness_check(state: web::Data<AppState>) -> impl Responder {
    let checks = ReadinessChecks {
        jurisdiction_table: find_jurisdiction(FALLBACK_PROVINCE).is_some(),
        exchange_rate: state.calculator.exchange_rate().rate() > Decimal::ZERO,
    };
    let ready = checks.jurisdiction_table && checks.exchange_rate;

    if !ready {
        tracing::error!(?checks, "Readiness check failed");
    }

    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
