use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::invoices::models::InvoiceRequest;
use crate::modules::invoices::services::InvoiceService;
use crate::state::AppState;

/// Price an order without persisting it
/// POST /invoices/preview
pub async fn preview_invoice(
    state: web::Data<AppState>,
    request: web::Json<InvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let invoice = InvoiceService::from_state(&state).build_invoice(request.into_inner())?;

    Ok(HttpResponse::Ok().json(invoice))
}

pub fn configure_invoice_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/invoices").route("/preview", web::post().to(preview_invoice)));
}
