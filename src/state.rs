use rust_decimal::Decimal;

use crate::config::{Config, TaxConfig};
use crate::modules::taxes::TaxCalculator;

/// Shared, read-only state handed to every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub calculator: TaxCalculator,
    pub cers_threshold_cad: Decimal,
}

impl AppState {
    pub fn new(tax: &TaxConfig) -> Self {
        Self {
            calculator: TaxCalculator::new(tax.cad_to_usd),
            cers_threshold_cad: tax.cers_threshold_cad,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.tax)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&TaxConfig::default())
    }
}
