//! Tax quote endpoints used by checkout and cart estimators.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::currency::{ensure_amount_in_range, parse_amount};
use crate::core::{AppError, Result};
use crate::modules::taxes::models::{find_jurisdiction, CANADIAN_PROVINCES, DOMESTIC_COUNTRY};
use crate::state::AppState;

/// Query parameters for GET /taxes/quote
#[derive(Debug, Deserialize)]
pub struct TaxQuoteQuery {
    /// Decimal string, may be negative for refunds
    pub subtotal: String,
    #[serde(default)]
    pub region: Option<String>,
    /// Defaults to CA
    #[serde(default)]
    pub country: Option<String>,
}

/// JSON body for POST /taxes/quote
#[derive(Debug, Deserialize)]
pub struct TaxQuoteRequest {
    pub subtotal: Decimal,
    #[serde(default)]
    pub region: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    DOMESTIC_COUNTRY.to_string()
}

/// GET /taxes/quote
pub async fn get_tax_quote(
    state: web::Data<AppState>,
    query: web::Query<TaxQuoteQuery>,
) -> Result<HttpResponse> {
    let subtotal = parse_amount(&query.subtotal)?;
    let region = query.region.as_deref().unwrap_or_default();
    let country = query.country.as_deref().unwrap_or(DOMESTIC_COUNTRY);

    let breakdown = state.calculator.calculate_taxes(subtotal, region, country);
    Ok(HttpResponse::Ok().json(breakdown))
}

/// POST /taxes/quote
pub async fn post_tax_quote(
    state: web::Data<AppState>,
    request: web::Json<TaxQuoteRequest>,
) -> Result<HttpResponse> {
    let subtotal = ensure_amount_in_range("Subtotal", request.subtotal)?;
    let breakdown = state
        .calculator
        .calculate_taxes(subtotal, &request.region, &request.country);
    Ok(HttpResponse::Ok().json(breakdown))
}

/// GET /taxes/jurisdictions
pub async fn list_jurisdictions() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "jurisdictions": &CANADIAN_PROVINCES[..],
    }))
}

/// GET /taxes/jurisdictions/{code}
pub async fn get_jurisdiction(code: web::Path<String>) -> Result<HttpResponse> {
    let jurisdiction = find_jurisdiction(&code).ok_or_else(|| {
        tracing::debug!(code = %code, "jurisdiction lookup miss");
        AppError::not_found(format!("Jurisdiction '{}'", code))
    })?;
    Ok(HttpResponse::Ok().json(jurisdiction))
}

/// Configure tax routes
pub fn configure_tax_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/taxes")
            .route("/quote", web::get().to(get_tax_quote))
            .route("/quote", web::post().to(post_tax_quote))
            .route("/jurisdictions", web::get().to(list_jurisdictions))
            .route("/jurisdictions/{code}", web::get().to(get_jurisdiction)),
    );
}
