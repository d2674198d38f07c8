//! Localized reference data for checkout address forms.

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CountryEntry, CountryFilter, Locale, ProvinceEntry, TradeAgreement};
pub use services::{get_countries_list, get_provinces_list};
