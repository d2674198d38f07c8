// Invoices module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Invoice, InvoiceRequest, LineItem, TaxDetails, TaxLine};
pub use services::InvoiceService;
