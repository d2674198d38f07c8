pub mod jurisdiction;
pub mod tax_breakdown;
pub mod tax_component;

pub use jurisdiction::{
    fallback_jurisdiction, find_jurisdiction, JurisdictionRate, CANADIAN_PROVINCES,
    DOMESTIC_COUNTRY, FALLBACK_PROVINCE,
};
pub use tax_breakdown::{tax_labels, AppliedRates, TaxBreakdown, TaxLabel};
pub use tax_component::TaxComponent;
