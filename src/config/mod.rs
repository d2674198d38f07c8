use crate::core::{AppError, ExchangeRate, Result};
use crate::core::currency::parse_amount;
use rust_decimal::Decimal;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub tax: TaxConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `json` switches the log output to structured JSON lines
    pub log_format: String,
}

#[derive(Debug, Clone)]
pub struct TaxConfig {
    /// Rate used for the USD mirror amounts
    pub cad_to_usd: ExchangeRate,
    /// Exports above this CAD grand total need a CERS declaration
    pub cers_threshold_cad: Decimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            cad_to_usd: ExchangeRate::default(),
            cers_threshold_cad: Decimal::from(2000),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cad_to_usd = match lookup("CAD_TO_USD_RATE") {
            Some(raw) => {
                let rate = parse_amount(&raw).map_err(|_| {
                    AppError::configuration(format!("Invalid CAD_TO_USD_RATE: '{}'", raw))
                })?;
                ExchangeRate::new(rate)
                    .map_err(|e| AppError::configuration(format!("CAD_TO_USD_RATE: {}", e)))?
            }
            None => ExchangeRate::default(),
        };

        let cers_threshold_cad = match lookup("CERS_THRESHOLD_CAD") {
            Some(raw) => parse_amount(&raw).map_err(|_| {
                AppError::configuration(format!("Invalid CERS_THRESHOLD_CAD: '{}'", raw))
            })?,
            None => TaxConfig::default().cers_threshold_cad,
        };

        let config = Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_format: lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            },
            server: ServerConfig::from_lookup(&lookup)?,
            tax: TaxConfig {
                cad_to_usd,
                cers_threshold_cad,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("Server port must be greater than 0"));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration("Server workers must be greater than 0"));
        }

        if self.tax.cers_threshold_cad < Decimal::ZERO {
            return Err(AppError::configuration("CERS threshold cannot be negative"));
        }

        if self.tax.cad_to_usd.rate() >= Decimal::ONE {
            tracing::warn!(
                rate = %self.tax.cad_to_usd.rate(),
                "CAD_TO_USD_RATE is >= 1, USD amounts will exceed CAD amounts"
            );
        }

        Ok(())
    }
}
