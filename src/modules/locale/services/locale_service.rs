use crate::modules::locale::models::{
    CountryEntry, CountryFilter, Locale, ProvinceEntry, CANADIAN_REGIONS, COUNTRIES, US_STATES,
};

/// Provinces, territories and states for the region selector.
///
/// Canadian entries always come first and keep table order (by code); US
/// states follow when the filter allows them.
pub fn get_provinces_list(locale: Locale, filter: CountryFilter) -> Vec<ProvinceEntry> {
    CANADIAN_REGIONS
        .iter()
        .chain(US_STATES.iter())
        .filter(|region| filter.includes(region.country))
        .map(|region| region.localized(locale))
        .collect()
}

/// Destination countries for the checkout picker.
///
/// Canada is always first; the rest are ordered by their localized name,
/// ignoring accents so that `Égypte` sorts with the other E's.
pub fn get_countries_list(locale: Locale) -> Vec<CountryEntry> {
    let mut entries: Vec<CountryEntry> = COUNTRIES
        .iter()
        .map(|country| country.localized(locale))
        .collect();

    entries.sort_by_cached_key(|entry| (entry.code != "CA", collation_key(entry.name)));
    entries
}

// Folds the Latin-1 letters used in French and English place names to ASCII.
fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            'À'..='Å' | 'à'..='å' => key.push('a'),
            'Æ' | 'æ' => key.push_str("ae"),
            'Ç' | 'ç' => key.push('c'),
            'È'..='Ë' | 'è'..='ë' => key.push('e'),
            'Ì'..='Ï' | 'ì'..='ï' => key.push('i'),
            'Ñ' | 'ñ' => key.push('n'),
            'Ò'..='Ö' | 'Ø' | 'ò'..='ö' | 'ø' => key.push('o'),
            'Œ' | 'œ' => key.push_str("oe"),
            'Ù'..='Ü' | 'ù'..='ü' => key.push('u'),
            'Ý' | 'ý' | 'ÿ' | 'Ÿ' => key.push('y'),
            'ß' => key.push_str("ss"),
            other => key.push(other.to_ascii_lowercase()),
        }
    }
    key
}
