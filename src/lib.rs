//! Storefront tax service library
//!
//! Canadian GST/HST/PST/QST/RST calculation, localized region and country
//! lists, invoice pricing and tax reporting behind an actix-web API.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod state;

// Re-export commonly used types
pub use modules::configure_routes;
pub use modules::invoices;
pub use modules::locale;
pub use modules::reports;
pub use modules::taxes;
pub use state::AppState;
