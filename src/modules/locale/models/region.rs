use serde::Serialize;

use super::locale::Locale;

/// Province, territory or state as shown in address forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvinceEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}

/// Static bilingual region record
#[derive(Debug, Clone, Copy)]
pub struct RegionName {
    pub code: &'static str,
    pub country: &'static str,
    pub en: &'static str,
    pub fr: &'static str,
}

impl RegionName {
    const fn ca(code: &'static str, en: &'static str, fr: &'static str) -> Self {
        Self {
            code,
            country: "CA",
            en,
            fr,
        }
    }

    const fn us(code: &'static str, en: &'static str, fr: &'static str) -> Self {
        Self {
            code,
            country: "US",
            en,
            fr,
        }
    }

    pub fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Fr => self.fr,
        }
    }

    pub fn localized(&self, locale: Locale) -> ProvinceEntry {
        ProvinceEntry {
            code: self.code,
            name: self.name(locale),
            country: self.country,
        }
    }
}

pub static CANADIAN_REGIONS: [RegionName; 13] = [
    RegionName::ca("AB", "Alberta", "Alberta"),
    RegionName::ca("BC", "British Columbia", "Colombie-Britannique"),
    RegionName::ca("MB", "Manitoba", "Manitoba"),
    RegionName::ca("NB", "New Brunswick", "Nouveau-Brunswick"),
    RegionName::ca("NL", "Newfoundland and Labrador", "Terre-Neuve-et-Labrador"),
    RegionName::ca("NS", "Nova Scotia", "Nouvelle-Écosse"),
    RegionName::ca("NT", "Northwest Territories", "Territoires du Nord-Ouest"),
    RegionName::ca("NU", "Nunavut", "Nunavut"),
    RegionName::ca("ON", "Ontario", "Ontario"),
    RegionName::ca("PE", "Prince Edward Island", "Île-du-Prince-Édouard"),
    RegionName::ca("QC", "Quebec", "Québec"),
    RegionName::ca("SK", "Saskatchewan", "Saskatchewan"),
    RegionName::ca("YT", "Yukon", "Yukon"),
];

pub static US_STATES: [RegionName; 51] = [
    RegionName::us("AL", "Alabama", "Alabama"),
    RegionName::us("AK", "Alaska", "Alaska"),
    RegionName::us("AZ", "Arizona", "Arizona"),
    RegionName::us("AR", "Arkansas", "Arkansas"),
    RegionName::us("CA", "California", "Californie"),
    RegionName::us("CO", "Colorado", "Colorado"),
    RegionName::us("CT", "Connecticut", "Connecticut"),
    RegionName::us("DE", "Delaware", "Delaware"),
    RegionName::us("DC", "District of Columbia", "District de Columbia"),
    RegionName::us("FL", "Florida", "Floride"),
    RegionName::us("GA", "Georgia", "Géorgie"),
    RegionName::us("HI", "Hawaii", "Hawaï"),
    RegionName::us("ID", "Idaho", "Idaho"),
    RegionName::us("IL", "Illinois", "Illinois"),
    RegionName::us("IN", "Indiana", "Indiana"),
    RegionName::us("IA", "Iowa", "Iowa"),
    RegionName::us("KS", "Kansas", "Kansas"),
    RegionName::us("KY", "Kentucky", "Kentucky"),
    RegionName::us("LA", "Louisiana", "Louisiane"),
    RegionName::us("ME", "Maine", "Maine"),
    RegionName::us("MD", "Maryland", "Maryland"),
    RegionName::us("MA", "Massachusetts", "Massachusetts"),
    RegionName::us("MI", "Michigan", "Michigan"),
    RegionName::us("MN", "Minnesota", "Minnesota"),
    RegionName::us("MS", "Mississippi", "Mississippi"),
    RegionName::us("MO", "Missouri", "Missouri"),
    RegionName::us("MT", "Montana", "Montana"),
    RegionName::us("NE", "Nebraska", "Nebraska"),
    RegionName::us("NV", "Nevada", "Nevada"),
    RegionName::us("NH", "New Hampshire", "New Hampshire"),
    RegionName::us("NJ", "New Jersey", "New Jersey"),
    RegionName::us("NM", "New Mexico", "Nouveau-Mexique"),
    RegionName::us("NY", "New York", "New York"),
    RegionName::us("NC", "North Carolina", "Caroline du Nord"),
    RegionName::us("ND", "North Dakota", "Dakota du Nord"),
    RegionName::us("OH", "Ohio", "Ohio"),
    RegionName::us("OK", "Oklahoma", "Oklahoma"),
    RegionName::us("OR", "Oregon", "Oregon"),
    RegionName::us("PA", "Pennsylvania", "Pennsylvanie"),
    RegionName::us("RI", "Rhode Island", "Rhode Island"),
    RegionName::us("SC", "South Carolina", "Caroline du Sud"),
    RegionName::us("SD", "South Dakota", "Dakota du Sud"),
    RegionName::us("TN", "Tennessee", "Tennessee"),
    RegionName::us("TX", "Texas", "Texas"),
    RegionName::us("UT", "Utah", "Utah"),
    RegionName::us("VT", "Vermont", "Vermont"),
    RegionName::us("VA", "Virginia", "Virginie"),
    RegionName::us("WA", "Washington", "Washington"),
    RegionName::us("WV", "West Virginia", "Virginie-Occidentale"),
    RegionName::us("WI", "Wisconsin", "Wisconsin"),
    RegionName::us("WY", "Wyoming", "Wyoming"),
];
