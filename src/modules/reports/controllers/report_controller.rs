use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::{AppError, Currency, Result};
use crate::modules::reports::models::{ReportedOrder, TaxSummaryReport, TaxSummaryRow};
use crate::modules::reports::services::ReportService;
use crate::state::AppState;

/// Request body for the tax summary endpoint
#[derive(Debug, Deserialize)]
pub struct TaxSummaryRequest {
    /// Start date of reporting period (inclusive, format: YYYY-MM-DD)
    pub start_date: String,
    /// End date of reporting period (inclusive, format: YYYY-MM-DD)
    pub end_date: String,
    #[serde(default)]
    pub orders: Vec<ReportedOrder>,
}

/// Response structure for the tax summary
#[derive(Debug, Serialize)]
pub struct TaxSummaryResponse {
    pub start_date: String, // Format: YYYY-MM-DD
    pub end_date: String,   // Format: YYYY-MM-DD
    pub jurisdictions: Vec<TaxSummaryRowResponse>,
    pub totals: TaxSummaryRowResponse,
}

/// Per-jurisdiction totals, amounts rounded to the cent
#[derive(Debug, Serialize)]
pub struct TaxSummaryRowResponse {
    pub country: String,
    pub region: String,
    pub order_count: i64,
    pub subtotal: String, // Decimal as string for JSON precision
    pub gst: String,
    pub hst: String,
    pub pst: String,
    pub qst: String,
    pub rst: String,
    pub total_tax: String,
    pub grand_total: String,
}

impl From<TaxSummaryReport> for TaxSummaryResponse {
    fn from(report: TaxSummaryReport) -> Self {
        Self {
            start_date: report.start_date.format("%Y-%m-%d").to_string(),
            end_date: report.end_date.format("%Y-%m-%d").to_string(),
            jurisdictions: report
                .rows
                .into_iter()
                .map(TaxSummaryRowResponse::from)
                .collect(),
            totals: TaxSummaryRowResponse::from(report.totals),
        }
    }
}

impl From<TaxSummaryRow> for TaxSummaryRowResponse {
    fn from(row: TaxSummaryRow) -> Self {
        let cents = |amount: Decimal| format!("{:.2}", Currency::CAD.round(amount));
        Self {
            country: row.country,
            region: row.region,
            order_count: row.order_count,
            subtotal: cents(row.subtotal),
            gst: cents(row.gst),
            hst: cents(row.hst),
            pst: cents(row.pst),
            qst: cents(row.qst),
            rst: cents(row.rst),
            total_tax: cents(row.total_tax),
            grand_total: cents(row.grand_total),
        }
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!(
            "Invalid {} format: expected YYYY-MM-DD, got: {}",
            field, value
        ))
    })
}

/// POST /reports/tax-summary
///
/// Aggregates GST/HST/PST/QST/RST collected per jurisdiction over the
/// supplied orders. Exports are grouped under a single `EXPORT` row.
pub async fn post_tax_summary(
    state: web::Data<AppState>,
    request: web::Json<TaxSummaryRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let start_date = parse_date("start_date", &request.start_date)?;
    let end_date = parse_date("end_date", &request.end_date)?;

    let service = ReportService::new(state.calculator);
    let report = service
        .tax_summary(start_date, end_date, &request.orders)
        .map_err(|e| {
            error!("Failed to generate tax summary: {}", e);
            e
        })?;

    Ok(HttpResponse::Ok().json(TaxSummaryResponse::from(report)))
}

/// Configure report routes
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/reports").route("/tax-summary", web::post().to(post_tax_summary)));
}
