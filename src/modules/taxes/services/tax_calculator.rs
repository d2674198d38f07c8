use rust_decimal::Decimal;
use tracing::debug;

use crate::core::currency::amount_from_f64;
use crate::core::{ExchangeRate, Result};
use crate::modules::taxes::models::{
    fallback_jurisdiction, find_jurisdiction, tax_labels, AppliedRates, JurisdictionRate,
    TaxBreakdown, DOMESTIC_COUNTRY,
};

/// Computes Canadian sales tax for an order subtotal.
///
/// Holds only the configured CAD→USD rate; the jurisdiction table is static,
/// so a calculator can be copied freely across threads and requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxCalculator {
    cad_to_usd: ExchangeRate,
}

impl TaxCalculator {
    pub fn new(cad_to_usd: ExchangeRate) -> Self {
        Self { cad_to_usd }
    }

    pub fn exchange_rate(&self) -> ExchangeRate {
        self.cad_to_usd
    }

    /// See [`calculate_taxes`].
    pub fn calculate_taxes(
        &self,
        subtotal: Decimal,
        region_code: &str,
        country_code: &str,
    ) -> TaxBreakdown {
        calculate_taxes(subtotal, region_code, country_code, self.cad_to_usd)
    }

    /// Same as [`TaxCalculator::calculate_taxes`] for callers holding an `f64`.
    ///
    /// Fails on NaN and infinities instead of letting them reach the tax math.
    pub fn calculate_taxes_f64(
        &self,
        subtotal: f64,
        region_code: &str,
        country_code: &str,
    ) -> Result<TaxBreakdown> {
        let subtotal = amount_from_f64(subtotal)?;
        Ok(self.calculate_taxes(subtotal, region_code, country_code))
    }
}

/// Where a sale is taxed once codes are normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedJurisdiction {
    /// A known province or territory
    Province(&'static JurisdictionRate),
    /// Domestic sale with an unknown region, taxed at the fallback province
    Fallback(&'static JurisdictionRate),
    /// Destination outside Canada, zero-rated
    Export,
}

impl ResolvedJurisdiction {
    pub fn resolve(region_code: &str, country_code: &str) -> Self {
        if !country_code.trim().eq_ignore_ascii_case(DOMESTIC_COUNTRY) {
            return ResolvedJurisdiction::Export;
        }
        match find_jurisdiction(region_code) {
            Some(jurisdiction) => ResolvedJurisdiction::Province(jurisdiction),
            None => ResolvedJurisdiction::Fallback(fallback_jurisdiction()),
        }
    }

    pub fn rates(&self) -> JurisdictionRate {
        match self {
            ResolvedJurisdiction::Province(j) | ResolvedJurisdiction::Fallback(j) => **j,
            ResolvedJurisdiction::Export => JurisdictionRate::ZERO_RATED,
        }
    }

    pub fn region_code(&self) -> &'static str {
        match self {
            ResolvedJurisdiction::Province(j) | ResolvedJurisdiction::Fallback(j) => j.code,
            ResolvedJurisdiction::Export => "",
        }
    }

    pub fn is_export(&self) -> bool {
        matches!(self, ResolvedJurisdiction::Export)
    }
}

/// Computes the full tax breakdown for `subtotal` shipped to
/// `region_code`/`country_code`.
///
/// Codes are case-insensitive. Any country other than `CA` is a zero-rated
/// export. An unknown or empty Canadian region is taxed as Quebec. Component
/// amounts are `subtotal * rate` with no rounding, so a negative subtotal
/// (refund) yields negative amounts throughout.
///
/// `subtotal` is expected within `MAX_AMOUNT`; request handlers enforce that
/// bound before calling in.
pub fn calculate_taxes(
    subtotal: Decimal,
    region_code: &str,
    country_code: &str,
    cad_to_usd: ExchangeRate,
) -> TaxBreakdown {
    let country = country_code.trim().to_uppercase();
    let resolved = ResolvedJurisdiction::resolve(region_code, &country);

    match resolved {
        ResolvedJurisdiction::Export => {
            debug!(country = %country, "destination outside Canada, zero-rating export");
        }
        ResolvedJurisdiction::Fallback(j) => {
            debug!(
                region = %region_code.trim(),
                fallback = j.code,
                "unknown Canadian region, using fallback jurisdiction"
            );
        }
        ResolvedJurisdiction::Province(_) => {}
    }

    let rates = resolved.rates();
    let gst_amount = component_amount(subtotal, rates.gst);
    let hst_amount = component_amount(subtotal, rates.hst);
    let pst_amount = component_amount(subtotal, rates.pst);
    let qst_amount = component_amount(subtotal, rates.qst);
    let rst_amount = component_amount(subtotal, rates.rst);

    let total_tax = gst_amount + hst_amount + pst_amount + qst_amount + rst_amount;
    let grand_total = subtotal + total_tax;
    let (federal_tax_label, provincial_tax_label) = tax_labels(&rates);

    TaxBreakdown {
        subtotal,
        gst_amount,
        hst_amount,
        pst_amount,
        qst_amount,
        rst_amount,
        total_tax,
        grand_total,
        subtotal_usd: cad_to_usd.convert(subtotal),
        grand_total_usd: cad_to_usd.convert(grand_total),
        is_export: resolved.is_export(),
        federal_tax_label,
        provincial_tax_label,
        country_code: country,
        region_code: resolved.region_code().to_string(),
        rates: AppliedRates::from(&rates),
    }
}

// Unpopulated components stay an exact zero regardless of the subtotal's sign.
fn component_amount(subtotal: Decimal, rate: Decimal) -> Decimal {
    if rate.is_zero() {
        Decimal::ZERO
    } else {
        subtotal * rate
    }
}
