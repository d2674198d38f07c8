use serde::Serialize;
use std::fmt;

use super::locale::Locale;

/// Free-trade agreements between Canada and a destination country.
///
/// Reference metadata only: exports are zero-rated whether or not an
/// agreement exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAgreement {
    /// Canada–United States–Mexico Agreement
    Cusma,
    /// Comprehensive Economic and Trade Agreement (EU)
    Ceta,
    /// Comprehensive and Progressive Agreement for Trans-Pacific Partnership
    Cptpp,
    /// Canada–UK Trade Continuity Agreement
    Cuktca,
    /// Canada–EFTA Free Trade Agreement
    Cefta,
    Ckfta,
    Cifta,
    Ccrfta,
    Cufta,
}

impl TradeAgreement {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAgreement::Cusma => "CUSMA",
            TradeAgreement::Ceta => "CETA",
            TradeAgreement::Cptpp => "CPTPP",
            TradeAgreement::Cuktca => "CUKTCA",
            TradeAgreement::Cefta => "CEFTA",
            TradeAgreement::Ckfta => "CKFTA",
            TradeAgreement::Cifta => "CIFTA",
            TradeAgreement::Ccrfta => "CCRFTA",
            TradeAgreement::Cufta => "CUFTA",
        }
    }
}

impl fmt::Display for TradeAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination country as shown in the checkout country picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    pub code: &'static str,
    pub name: &'static str,
    #[serde(rename = "hasFTA")]
    pub has_fta: bool,
    #[serde(rename = "ftaName")]
    pub fta_name: Option<TradeAgreement>,
}

/// Static bilingual country record
#[derive(Debug, Clone, Copy)]
pub struct CountryRecord {
    pub code: &'static str,
    pub en: &'static str,
    pub fr: &'static str,
    pub fta: Option<TradeAgreement>,
}

impl CountryRecord {
    const fn new(
        code: &'static str,
        en: &'static str,
        fr: &'static str,
        fta: Option<TradeAgreement>,
    ) -> Self {
        Self { code, en, fr, fta }
    }

    pub fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Fr => self.fr,
        }
    }

    pub fn localized(&self, locale: Locale) -> CountryEntry {
        CountryEntry {
            code: self.code,
            name: self.name(locale),
            has_fta: self.fta.is_some(),
            fta_name: self.fta,
        }
    }
}

use self::TradeAgreement::*;

pub static COUNTRIES: [CountryRecord; 64] = [
    CountryRecord::new("CA", "Canada", "Canada", None),
    // CUSMA
    CountryRecord::new("US", "United States", "États-Unis", Some(Cusma)),
    CountryRecord::new("MX", "Mexico", "Mexique", Some(Cusma)),
    // CETA
    CountryRecord::new("AT", "Austria", "Autriche", Some(Ceta)),
    CountryRecord::new("BE", "Belgium", "Belgique", Some(Ceta)),
    CountryRecord::new("BG", "Bulgaria", "Bulgarie", Some(Ceta)),
    CountryRecord::new("HR", "Croatia", "Croatie", Some(Ceta)),
    CountryRecord::new("CY", "Cyprus", "Chypre", Some(Ceta)),
    CountryRecord::new("CZ", "Czechia", "Tchéquie", Some(Ceta)),
    CountryRecord::new("DK", "Denmark", "Danemark", Some(Ceta)),
    CountryRecord::new("EE", "Estonia", "Estonie", Some(Ceta)),
    CountryRecord::new("FI", "Finland", "Finlande", Some(Ceta)),
    CountryRecord::new("FR", "France", "France", Some(Ceta)),
    CountryRecord::new("DE", "Germany", "Allemagne", Some(Ceta)),
    CountryRecord::new("GR", "Greece", "Grèce", Some(Ceta)),
    CountryRecord::new("HU", "Hungary", "Hongrie", Some(Ceta)),
    CountryRecord::new("IE", "Ireland", "Irlande", Some(Ceta)),
    CountryRecord::new("IT", "Italy", "Italie", Some(Ceta)),
    CountryRecord::new("LV", "Latvia", "Lettonie", Some(Ceta)),
    CountryRecord::new("LT", "Lithuania", "Lituanie", Some(Ceta)),
    CountryRecord::new("LU", "Luxembourg", "Luxembourg", Some(Ceta)),
    CountryRecord::new("MT", "Malta", "Malte", Some(Ceta)),
    CountryRecord::new("NL", "Netherlands", "Pays-Bas", Some(Ceta)),
    CountryRecord::new("PL", "Poland", "Pologne", Some(Ceta)),
    CountryRecord::new("PT", "Portugal", "Portugal", Some(Ceta)),
    CountryRecord::new("RO", "Romania", "Roumanie", Some(Ceta)),
    CountryRecord::new("SK", "Slovakia", "Slovaquie", Some(Ceta)),
    CountryRecord::new("SI", "Slovenia", "Slovénie", Some(Ceta)),
    CountryRecord::new("ES", "Spain", "Espagne", Some(Ceta)),
    CountryRecord::new("SE", "Sweden", "Suède", Some(Ceta)),
    // CPTPP
    CountryRecord::new("AU", "Australia", "Australie", Some(Cptpp)),
    CountryRecord::new("BN", "Brunei", "Brunéi", Some(Cptpp)),
    CountryRecord::new("CL", "Chile", "Chili", Some(Cptpp)),
    CountryRecord::new("JP", "Japan", "Japon", Some(Cptpp)),
    CountryRecord::new("MY", "Malaysia", "Malaisie", Some(Cptpp)),
    CountryRecord::new("NZ", "New Zealand", "Nouvelle-Zélande", Some(Cptpp)),
    CountryRecord::new("PE", "Peru", "Pérou", Some(Cptpp)),
    CountryRecord::new("SG", "Singapore", "Singapour", Some(Cptpp)),
    CountryRecord::new("VN", "Vietnam", "Viêt Nam", Some(Cptpp)),
    // Bilateral and EFTA
    CountryRecord::new("GB", "United Kingdom", "Royaume-Uni", Some(Cuktca)),
    CountryRecord::new("CH", "Switzerland", "Suisse", Some(Cefta)),
    CountryRecord::new("IS", "Iceland", "Islande", Some(Cefta)),
    CountryRecord::new("LI", "Liechtenstein", "Liechtenstein", Some(Cefta)),
    CountryRecord::new("NO", "Norway", "Norvège", Some(Cefta)),
    CountryRecord::new("KR", "South Korea", "Corée du Sud", Some(Ckfta)),
    CountryRecord::new("IL", "Israel", "Israël", Some(Cifta)),
    CountryRecord::new("CR", "Costa Rica", "Costa Rica", Some(Ccrfta)),
    CountryRecord::new("UA", "Ukraine", "Ukraine", Some(Cufta)),
    // No agreement
    CountryRecord::new("AE", "United Arab Emirates", "Émirats arabes unis", None),
    CountryRecord::new("AR", "Argentina", "Argentine", None),
    CountryRecord::new("BR", "Brazil", "Brésil", None),
    CountryRecord::new("CN", "China", "Chine", None),
    CountryRecord::new("EG", "Egypt", "Égypte", None),
    CountryRecord::new("HK", "Hong Kong", "Hong Kong", None),
    CountryRecord::new("ID", "Indonesia", "Indonésie", None),
    CountryRecord::new("IN", "India", "Inde", None),
    CountryRecord::new("MA", "Morocco", "Maroc", None),
    CountryRecord::new("PH", "Philippines", "Philippines", None),
    CountryRecord::new("SA", "Saudi Arabia", "Arabie saoudite", None),
    CountryRecord::new("TH", "Thailand", "Thaïlande", None),
    CountryRecord::new("TR", "Türkiye", "Turquie", None),
    CountryRecord::new("TW", "Taiwan", "Taïwan", None),
    CountryRecord::new("ZA", "South Africa", "Afrique du Sud", None),
    CountryRecord::new("NG", "Nigeria", "Nigéria", None),
];

pub fn find_country(code: &str) -> Option<&'static CountryRecord> {
    let code = code.trim();
    COUNTRIES
        .iter()
        .find(|country| country.code.eq_ignore_ascii_case(code))
}
