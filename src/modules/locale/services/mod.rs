pub mod locale_service;

pub use locale_service::{get_countries_list, get_provinces_list};
