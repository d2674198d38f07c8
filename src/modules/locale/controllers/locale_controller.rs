use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::modules::locale::models::{CountryFilter, Locale};
use crate::modules::locale::services::{get_countries_list, get_provinces_list};

#[derive(Debug, Deserialize)]
pub struct ProvincesQuery {
    #[serde(default)]
    pub locale: Option<String>,
    /// `CA`, `US` or `ALL`
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CountriesQuery {
    #[serde(default)]
    pub locale: Option<String>,
}

/// GET /provinces
pub async fn list_provinces(query: web::Query<ProvincesQuery>) -> HttpResponse {
    let locale = query
        .locale
        .as_deref()
        .map(Locale::from_tag)
        .unwrap_or_default();
    let filter = query
        .country
        .as_deref()
        .map(CountryFilter::from_code)
        .unwrap_or_default();

    let provinces = get_provinces_list(locale, filter);
    HttpResponse::Ok().json(serde_json::json!({
        "locale": locale,
        "provinces": provinces,
    }))
}

/// GET /countries
pub async fn list_countries(query: web::Query<CountriesQuery>) -> HttpResponse {
    let locale = query
        .locale
        .as_deref()
        .map(Locale::from_tag)
        .unwrap_or_default();

    HttpResponse::Ok().json(serde_json::json!({
        "locale": locale,
        "countries": get_countries_list(locale),
    }))
}

pub fn configure_locale_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/provinces", web::get().to(list_provinces))
        .route("/countries", web::get().to(list_countries));
}
