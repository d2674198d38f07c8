//! Canadian sales-tax engine: jurisdiction table, calculator and quote API.

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{JurisdictionRate, TaxBreakdown, TaxComponent, TaxLabel, CANADIAN_PROVINCES};
pub use services::{calculate_taxes, TaxCalculator};
