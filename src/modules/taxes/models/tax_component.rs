use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::jurisdiction::JurisdictionRate;
use super::tax_breakdown::TaxBreakdown;
use crate::modules::locale::models::Locale;

/// One of the five Canadian sales-tax components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxComponent {
    Gst,
    Hst,
    Pst,
    Qst,
    Rst,
}

impl TaxComponent {
    /// Invoice line order: federal first, then provincial
    pub const ALL: [TaxComponent; 5] = [
        TaxComponent::Gst,
        TaxComponent::Hst,
        TaxComponent::Pst,
        TaxComponent::Qst,
        TaxComponent::Rst,
    ];

    /// Short code printed on customer documents
    pub fn short_name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (TaxComponent::Gst, Locale::En) => "GST",
            (TaxComponent::Gst, Locale::Fr) => "TPS",
            (TaxComponent::Hst, Locale::En) => "HST",
            (TaxComponent::Hst, Locale::Fr) => "TVH",
            (TaxComponent::Pst, Locale::En) => "PST",
            (TaxComponent::Pst, Locale::Fr) => "TVP",
            (TaxComponent::Qst, Locale::En) => "QST",
            (TaxComponent::Qst, Locale::Fr) => "TVQ",
            (TaxComponent::Rst, Locale::En) => "RST",
            (TaxComponent::Rst, Locale::Fr) => "TVD",
        }
    }

    pub fn rate_in(&self, rates: &JurisdictionRate) -> Decimal {
        match self {
            TaxComponent::Gst => rates.gst,
            TaxComponent::Hst => rates.hst,
            TaxComponent::Pst => rates.pst,
            TaxComponent::Qst => rates.qst,
            TaxComponent::Rst => rates.rst,
        }
    }

    pub fn amount_in(&self, breakdown: &TaxBreakdown) -> Decimal {
        match self {
            TaxComponent::Gst => breakdown.gst_amount,
            TaxComponent::Hst => breakdown.hst_amount,
            TaxComponent::Pst => breakdown.pst_amount,
            TaxComponent::Qst => breakdown.qst_amount,
            TaxComponent::Rst => breakdown.rst_amount,
        }
    }

    pub fn applied_rate(&self, breakdown: &TaxBreakdown) -> Decimal {
        let rates = &breakdown.rates;
        match self {
            TaxComponent::Gst => rates.gst,
            TaxComponent::Hst => rates.hst,
            TaxComponent::Pst => rates.pst,
            TaxComponent::Qst => rates.qst,
            TaxComponent::Rst => rates.rst,
        }
    }
}
