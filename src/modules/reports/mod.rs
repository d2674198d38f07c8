pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ReportedOrder, TaxSummaryReport, TaxSummaryRow};
pub use services::ReportService;
