use std::collections::HashSet;

use storefront_tax::locale::{
    get_countries_list, get_provinces_list, CountryFilter, Locale, TradeAgreement,
};
use storefront_tax::taxes::CANADIAN_PROVINCES;

/// Localized province and country lists used by checkout forms

#[test]
fn test_canadian_filter_returns_thirteen_entries() {
    for locale in [Locale::En, Locale::Fr] {
        let provinces = get_provinces_list(locale, CountryFilter::Ca);
        assert_eq!(provinces.len(), 13);
        assert!(provinces.iter().all(|p| p.country == "CA"));
    }
}

#[test]
fn test_province_list_matches_tax_table() {
    let listed: HashSet<_> = get_provinces_list(Locale::En, CountryFilter::Ca)
        .into_iter()
        .map(|p| p.code)
        .collect();
    let taxed: HashSet<_> = CANADIAN_PROVINCES.iter().map(|p| p.code).collect();
    assert_eq!(listed, taxed);
}

#[test]
fn test_us_filter_excludes_canada() {
    let states = get_provinces_list(Locale::En, CountryFilter::Us);
    assert_eq!(states.len(), 51);
    assert!(states.iter().all(|s| s.country == "US"));
    assert!(states.iter().any(|s| s.code == "DC"));
}

#[test]
fn test_all_filter_lists_canada_first() {
    let all = get_provinces_list(Locale::En, CountryFilter::All);
    let first_us = all.iter().position(|p| p.country == "US").unwrap();
    assert_eq!(first_us, 13);
    assert!(all[first_us..].iter().all(|p| p.country == "US"));
}

#[test]
fn test_filter_codes_are_case_insensitive() {
    assert_eq!(CountryFilter::from_code("ca"), CountryFilter::Ca);
    assert_eq!(CountryFilter::from_code("Us"), CountryFilter::Us);
    assert_eq!(CountryFilter::from_code("ALL"), CountryFilter::All);
}

#[test]
fn test_french_names() {
    let provinces = get_provinces_list(Locale::Fr, CountryFilter::Ca);
    let quebec = provinces.iter().find(|p| p.code == "QC").unwrap();
    assert_eq!(quebec.name, "Québec");

    let newfoundland = provinces.iter().find(|p| p.code == "NL").unwrap();
    assert_eq!(newfoundland.name, "Terre-Neuve-et-Labrador");
}

#[test]
fn test_canada_always_first_in_countries() {
    for locale in [Locale::En, Locale::Fr] {
        let countries = get_countries_list(locale);
        assert_eq!(countries[0].code, "CA");
        assert!(!countries[0].has_fta);
    }
}

#[test]
fn test_country_codes_are_unique() {
    let countries = get_countries_list(Locale::En);
    let codes: HashSet<_> = countries.iter().map(|c| c.code).collect();
    assert_eq!(codes.len(), countries.len());
}

#[test]
fn test_trade_agreement_metadata() {
    let countries = get_countries_list(Locale::En);
    let fta = |code: &str| {
        countries
            .iter()
            .find(|c| c.code == code)
            .and_then(|c| c.fta_name)
    };

    assert_eq!(fta("US"), Some(TradeAgreement::Cusma));
    assert_eq!(fta("MX"), Some(TradeAgreement::Cusma));
    assert_eq!(fta("DE"), Some(TradeAgreement::Ceta));
    assert_eq!(fta("NL"), Some(TradeAgreement::Ceta));
    assert_eq!(fta("JP"), Some(TradeAgreement::Cptpp));
    assert_eq!(fta("GB"), Some(TradeAgreement::Cuktca));
    assert_eq!(fta("EG"), None);

    assert!(countries
        .iter()
        .all(|c| c.has_fta == c.fta_name.is_some()));
}

#[test]
fn test_countries_after_canada_are_ordered_by_localized_name() {
    let position = |locale: Locale, code: &str| {
        get_countries_list(locale)
            .iter()
            .position(|c| c.code == code)
            .unwrap()
    };

    let en = |code: &str| position(Locale::En, code);
    assert!(en("EG") < en("DE"));
    assert!(en("DE") < en("JP"));
    assert!(en("JP") < en("US"));

    // accents fold, so Égypte and États-Unis sort with the other E's
    let fr = |code: &str| position(Locale::Fr, code);
    assert!(fr("DE") < fr("EG"));
    assert!(fr("EG") < fr("US"));
    assert!(fr("US") < fr("JP"));
}

#[test]
fn test_country_json_shape() {
    let countries = get_countries_list(Locale::En);
    let us = countries.iter().find(|c| c.code == "US").unwrap();
    let json = serde_json::to_value(us).unwrap();

    assert_eq!(json["name"], "United States");
    assert_eq!(json["hasFTA"], true);
    assert_eq!(json["ftaName"], "CUSMA");
}
