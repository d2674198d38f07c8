pub mod locale_controller;

pub use locale_controller::configure_locale_routes;
