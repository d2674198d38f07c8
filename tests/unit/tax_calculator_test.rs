use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use storefront_tax::core::ExchangeRate;
use storefront_tax::taxes::models::TaxBreakdown;
use storefront_tax::taxes::{TaxCalculator, TaxLabel, CANADIAN_PROVINCES};

/// Tax calculator behaviour
///
/// Validates:
/// - Per-regime amounts for the reference scenarios
/// - totalTax and grandTotal identities for any subtotal
/// - Sign propagation for refunds and linear scaling
/// - Case-insensitive region and country codes
/// - Export zero-rating and the Quebec fallback

fn calc(subtotal: Decimal, region: &str, country: &str) -> TaxBreakdown {
    TaxCalculator::default().calculate_taxes(subtotal, region, country)
}

fn subtotal_strategy() -> impl Strategy<Value = Decimal> {
    // -$1,000,000.00 to $1,000,000.00
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn region_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(
        CANADIAN_PROVINCES
            .iter()
            .map(|p| p.code)
            .chain(["", "XX", "ZZ"])
            .collect::<Vec<_>>(),
    )
}

fn country_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["CA", "US", "JP", "FR", "DE", "MX", "XX"])
}

#[test]
fn test_ontario_hst_scenario() {
    let result = calc(dec!(100), "ON", "CA");
    assert_eq!(result.hst_amount, dec!(13));
    assert_eq!(result.gst_amount, Decimal::ZERO);
    assert_eq!(result.total_tax, dec!(13));
    assert_eq!(result.grand_total, dec!(113));
    assert!(!result.is_export);
    assert_eq!(result.federal_tax_label, TaxLabel::Hst);
    assert_eq!(result.provincial_tax_label, None);
}

#[test]
fn test_quebec_gst_qst_scenario() {
    let result = calc(dec!(100), "QC", "CA");
    assert_eq!(result.gst_amount, dec!(5));
    assert_eq!(result.qst_amount, dec!(9.975));
    assert_eq!(result.total_tax, dec!(14.975));
    assert_eq!(result.grand_total, dec!(114.975));
    assert_eq!(result.federal_tax_label, TaxLabel::TpsGst);
    assert_eq!(result.provincial_tax_label, Some(TaxLabel::TvqQst));
}

#[test]
fn test_alberta_gst_only_scenario() {
    let result = calc(dec!(100), "AB", "CA");
    assert_eq!(result.gst_amount, dec!(5));
    assert_eq!(result.total_tax, dec!(5));
    assert_eq!(result.grand_total, dec!(105));
    assert_eq!(result.federal_tax_label, TaxLabel::Gst);
    assert_eq!(result.provincial_tax_label, None);
}

#[test]
fn test_british_columbia_and_manitoba_labels() {
    let bc = calc(dec!(100), "BC", "CA");
    assert_eq!(bc.pst_amount, dec!(7));
    assert_eq!(bc.provincial_tax_label, Some(TaxLabel::Pst));

    let mb = calc(dec!(100), "MB", "CA");
    assert_eq!(mb.rst_amount, dec!(7));
    assert_eq!(mb.total_tax, dec!(12));
    assert_eq!(mb.provincial_tax_label, Some(TaxLabel::Rst));
}

#[test]
fn test_export_to_us_is_zero_rated() {
    let result = calc(dec!(100), "NY", "US");
    assert!(result.is_export);
    assert_eq!(result.total_tax, Decimal::ZERO);
    assert_eq!(result.grand_total, dec!(100));
    assert_eq!(result.component_sum(), Decimal::ZERO);
}

#[test]
fn test_unknown_province_falls_back_to_quebec() {
    let fallback = calc(dec!(100), "XX", "CA");
    let quebec = calc(dec!(100), "QC", "CA");
    assert!(!fallback.is_export);
    assert_eq!(fallback.total_tax, dec!(14.975));
    assert_eq!(fallback.total_tax, quebec.total_tax);
    assert_eq!(fallback.region_code, "QC");

    let empty = calc(dec!(100), "", "CA");
    assert_eq!(empty.total_tax, dec!(14.975));
}

#[test]
fn test_zero_subtotal() {
    let result = calc(Decimal::ZERO, "ON", "CA");
    assert_eq!(result.total_tax, Decimal::ZERO);
    assert_eq!(result.grand_total, Decimal::ZERO);
    assert!(!result.is_export, "zero-value domestic sale is not an export");
}

#[test]
fn test_large_subtotal_scales_linearly() {
    let result = calc(dec!(1000000), "ON", "CA");
    assert_eq!(result.total_tax, dec!(130000));
    assert_eq!(result.grand_total, dec!(1130000));
}

#[test]
fn test_refund_is_negative_throughout() {
    let result = calc(dec!(-100), "QC", "CA");
    assert_eq!(result.gst_amount, dec!(-5));
    assert_eq!(result.qst_amount, dec!(-9.975));
    assert_eq!(result.total_tax, dec!(-14.975));
    assert_eq!(result.grand_total, dec!(-114.975));
}

#[test]
fn test_fraction_of_a_cent_is_not_rounded() {
    let result = calc(dec!(0.001), "ON", "CA");
    assert_eq!(result.hst_amount, dec!(0.00013));
}

#[test]
fn test_usd_mirror_fields() {
    let result = calc(dec!(100), "ON", "CA");
    assert_eq!(result.subtotal_usd, dec!(73));
    assert_eq!(result.grand_total_usd, dec!(82.49));

    let calculator = TaxCalculator::new(ExchangeRate::new(dec!(0.70)).unwrap());
    let result = calculator.calculate_taxes(dec!(100), "ON", "CA");
    assert_eq!(result.grand_total_usd, dec!(79.1));
    assert_eq!(result.total_tax, dec!(13), "rate never changes CAD tax");
}

#[test]
fn test_non_finite_f64_is_rejected() {
    let calculator = TaxCalculator::default();
    assert!(calculator.calculate_taxes_f64(f64::NAN, "ON", "CA").is_err());
    assert!(calculator.calculate_taxes_f64(f64::INFINITY, "ON", "CA").is_err());
    assert!(calculator.calculate_taxes_f64(100.0, "ON", "CA").is_ok());
}

#[test]
fn test_breakdown_json_field_names() {
    let json = serde_json::to_value(calc(dec!(100), "QC", "CA")).unwrap();
    assert_eq!(json["federalTaxLabel"], "TPS/GST");
    assert_eq!(json["provincialTaxLabel"], "TVQ/QST");
    assert!(json.get("grandTotalUSD").is_some());
    assert!(json.get("subtotalUSD").is_some());
    assert_eq!(json["isExport"], false);
}

proptest! {
    #[test]
    fn test_total_is_component_sum(
        subtotal in subtotal_strategy(),
        region in region_strategy(),
        country in country_strategy(),
    ) {
        let result = calc(subtotal, region, country);
        prop_assert_eq!(result.total_tax, result.component_sum());
        prop_assert_eq!(result.grand_total, subtotal + result.total_tax);
        prop_assert!(result.is_consistent());
    }

    #[test]
    fn test_refund_mirrors_sale(
        subtotal in subtotal_strategy(),
        region in region_strategy(),
        country in country_strategy(),
    ) {
        let sale = calc(subtotal, region, country);
        let refund = calc(-subtotal, region, country);
        prop_assert_eq!(refund.total_tax, -sale.total_tax);
        prop_assert_eq!(refund.grand_total, -sale.grand_total);
        prop_assert_eq!(refund.gst_amount, -sale.gst_amount);
        prop_assert_eq!(refund.hst_amount, -sale.hst_amount);
    }

    #[test]
    fn test_tax_scales_linearly(
        subtotal in subtotal_strategy(),
        factor in 1i64..1_000i64,
        region in region_strategy(),
    ) {
        let factor = Decimal::from(factor);
        let base = calc(subtotal, region, "CA");
        let scaled = calc(subtotal * factor, region, "CA");
        prop_assert_eq!(scaled.total_tax, base.total_tax * factor);
    }

    #[test]
    fn test_codes_are_case_insensitive(
        subtotal in subtotal_strategy(),
        region in region_strategy(),
        country in country_strategy(),
    ) {
        let upper = calc(subtotal, region, country);
        let lower = calc(subtotal, &region.to_lowercase(), &country.to_lowercase());
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn test_calculation_is_deterministic(
        subtotal in subtotal_strategy(),
        region in region_strategy(),
        country in country_strategy(),
    ) {
        prop_assert_eq!(calc(subtotal, region, country), calc(subtotal, region, country));
    }

    #[test]
    fn test_every_foreign_country_is_export(
        subtotal in subtotal_strategy(),
        region in region_strategy(),
        country in prop::sample::select(vec!["US", "JP", "FR", "GB", "MX", "XX", ""]),
    ) {
        let result = calc(subtotal, region, country);
        prop_assert!(result.is_export);
        prop_assert_eq!(result.total_tax, Decimal::ZERO);
        prop_assert_eq!(result.grand_total, subtotal);
    }
}
