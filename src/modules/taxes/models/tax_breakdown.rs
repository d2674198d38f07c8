use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::jurisdiction::JurisdictionRate;

/// Display label for a tax line on a receipt or invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxLabel {
    #[serde(rename = "GST")]
    Gst,
    #[serde(rename = "HST")]
    Hst,
    /// Bilingual federal label used alongside QST
    #[serde(rename = "TPS/GST")]
    TpsGst,
    #[serde(rename = "PST")]
    Pst,
    #[serde(rename = "RST")]
    Rst,
    #[serde(rename = "TVQ/QST")]
    TvqQst,
}

impl TaxLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxLabel::Gst => "GST",
            TaxLabel::Hst => "HST",
            TaxLabel::TpsGst => "TPS/GST",
            TaxLabel::Pst => "PST",
            TaxLabel::Rst => "RST",
            TaxLabel::TvqQst => "TVQ/QST",
        }
    }
}

impl fmt::Display for TaxLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the federal and provincial labels for a set of rates.
///
/// HST wins over everything, then QST, PST and RST. A GST-only (or
/// zero-rated) jurisdiction has no provincial line.
pub fn tax_labels(rates: &JurisdictionRate) -> (TaxLabel, Option<TaxLabel>) {
    if !rates.hst.is_zero() {
        (TaxLabel::Hst, None)
    } else if !rates.qst.is_zero() {
        (TaxLabel::TpsGst, Some(TaxLabel::TvqQst))
    } else if !rates.pst.is_zero() {
        (TaxLabel::Gst, Some(TaxLabel::Pst))
    } else if !rates.rst.is_zero() {
        (TaxLabel::Gst, Some(TaxLabel::Rst))
    } else {
        (TaxLabel::Gst, None)
    }
}

/// Component rates that produced a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppliedRates {
    pub gst: Decimal,
    pub hst: Decimal,
    pub pst: Decimal,
    pub qst: Decimal,
    pub rst: Decimal,
}

impl From<&JurisdictionRate> for AppliedRates {
    fn from(rates: &JurisdictionRate) -> Self {
        Self {
            gst: rates.gst,
            hst: rates.hst,
            pst: rates.pst,
            qst: rates.qst,
            rst: rates.rst,
        }
    }
}

/// Result of a tax calculation for one order subtotal.
///
/// Amounts are unrounded; round with `Currency::round` for display only.
/// `total_tax` is the exact component sum and `grand_total` is
/// `subtotal + total_tax`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub subtotal: Decimal,
    pub gst_amount: Decimal,
    pub hst_amount: Decimal,
    pub pst_amount: Decimal,
    pub qst_amount: Decimal,
    pub rst_amount: Decimal,
    pub total_tax: Decimal,
    pub grand_total: Decimal,
    #[serde(rename = "subtotalUSD")]
    pub subtotal_usd: Decimal,
    #[serde(rename = "grandTotalUSD")]
    pub grand_total_usd: Decimal,
    pub is_export: bool,
    pub federal_tax_label: TaxLabel,
    pub provincial_tax_label: Option<TaxLabel>,
    /// Normalized country code of the destination
    pub country_code: String,
    /// Province actually taxed; the fallback province when the input was
    /// unknown, empty for exports
    pub region_code: String,
    pub rates: AppliedRates,
}

impl TaxBreakdown {
    /// Sum of the five component amounts
    pub fn component_sum(&self) -> Decimal {
        self.gst_amount + self.hst_amount + self.pst_amount + self.qst_amount + self.rst_amount
    }

    /// True when the amounts satisfy the component-sum and grand-total identities
    pub fn is_consistent(&self) -> bool {
        self.total_tax == self.component_sum() && self.grand_total == self.subtotal + self.total_tax
    }
}
