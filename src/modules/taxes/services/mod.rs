pub mod tax_calculator;

pub use tax_calculator::{calculate_taxes, ResolvedJurisdiction, TaxCalculator};
