use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use storefront_tax::config::{AppConfig, Config};
use storefront_tax::middleware::RequestId;
use storefront_tax::{configure_routes, AppState};

fn init_tracing(app: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("storefront_tax={},actix_web=info", app.log_level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if app.log_format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors(allowed_origins: &[String]) -> Cors {
    let request_id = header::HeaderName::from_static("x-request-id");
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT, request_id.clone()])
        .expose_headers(vec![request_id])
        .max_age(3600);

    if allowed_origins.is_empty() {
        cors.allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.app);
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting storefront tax service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        "CAD->USD rate: {}, CERS threshold: {} CAD",
        config.tax.cad_to_usd.rate(),
        config.tax.cers_threshold_cad
    );

    let state = web::Data::new(AppState::from_config(&config));
    let allowed_origins = config.server.allowed_origins.clone();
    let bind_address = config.server.bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
