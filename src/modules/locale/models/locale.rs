use serde::Serialize;

/// Language used for reference-data names and tax line labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Parses a language tag such as `fr`, `fr-CA` or `en_US`.
    ///
    /// Only the primary subtag matters; anything that is not French falls back
    /// to English, since names are only translated into the two official
    /// languages.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        if primary.eq_ignore_ascii_case("fr") {
            Locale::Fr
        } else {
            Locale::En
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

/// Which regions `get_provinces_list` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountryFilter {
    Ca,
    Us,
    #[default]
    All,
}

impl CountryFilter {
    /// Case-insensitive; unknown values select both countries
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "CA" => CountryFilter::Ca,
            "US" => CountryFilter::Us,
            _ => CountryFilter::All,
        }
    }

    pub fn includes(&self, country: &str) -> bool {
        match self {
            CountryFilter::Ca => country == "CA",
            CountryFilter::Us => country == "US",
            CountryFilter::All => true,
        }
    }
}
