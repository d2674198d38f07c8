pub mod health;
pub mod invoices;
pub mod locale;
pub mod reports;
pub mod taxes;

use actix_web::web;

use crate::middleware::{json_error_handler, query_error_handler};

/// Mount every API route plus the health probes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .configure(health::configure_health_routes)
        .service(
            web::scope("/api/v1")
                .configure(taxes::controllers::configure_tax_routes)
                .configure(locale::controllers::configure_locale_routes)
                .configure(invoices::controllers::configure_invoice_routes)
                .configure(reports::controllers::configure_report_routes),
        );
}
