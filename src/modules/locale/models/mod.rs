pub mod country;
pub mod locale;
pub mod region;

pub use country::{find_country, CountryEntry, CountryRecord, TradeAgreement, COUNTRIES};
pub use locale::{CountryFilter, Locale};
pub use region::{ProvinceEntry, RegionName, CANADIAN_REGIONS, US_STATES};
