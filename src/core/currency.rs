use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{AppError, Result};

/// Currencies an order can be displayed in.
///
/// Prices are stored and taxed in CAD; USD is a display mirror only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Canadian Dollar (2 decimal places)
    CAD,
    /// US Dollar (2 decimal places)
    USD,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::CAD | Currency::USD => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::CAD => write!(f, "CAD"),
            Currency::USD => write!(f, "USD"),
        }
    }
}

/// CAD→USD conversion rate used for the USD mirror fields of a breakdown.
///
/// Always strictly positive. The value is injected from configuration rather
/// than fetched, so a calculation is reproducible for a given rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    /// Fallback rate when none is configured
    pub const DEFAULT_CAD_TO_USD: Decimal = Decimal::from_parts(73, 0, 0, false, 2);

    /// Upper bound on a configured rate
    pub const MAX_RATE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

    pub fn new(rate: Decimal) -> Result<Self> {
        if rate <= Decimal::ZERO || rate > Self::MAX_RATE {
            return Err(AppError::validation(format!(
                "Exchange rate must be positive and at most {}, got {}",
                Self::MAX_RATE,
                rate
            )));
        }
        Ok(Self(rate))
    }

    pub fn rate(&self) -> Decimal {
        self.0
    }

    /// Converts a CAD amount to USD without rounding
    pub fn convert(&self, cad_amount: Decimal) -> Decimal {
        cad_amount * self.0
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self(Self::DEFAULT_CAD_TO_USD)
    }
}

/// Largest amount magnitude accepted anywhere an order is priced: 10^15 CAD.
///
/// Tax, currency conversion and report sums all stay far below
/// `Decimal::MAX` for amounts within this bound.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Fails when `amount` is larger in magnitude than [`MAX_AMOUNT`].
pub fn ensure_amount_in_range(field: &str, amount: Decimal) -> Result<Decimal> {
    if amount.abs() > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "{} must be between -{max} and {max}, got {}",
            field,
            amount,
            max = MAX_AMOUNT
        )));
    }
    Ok(amount)
}

/// Converts a floating-point amount into a `Decimal`.
///
/// NaN and infinities are rejected here; the tax engine only ever sees
/// finite `Decimal` values.
pub fn amount_from_f64(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "Amount must be a finite number, got {}",
            value
        )));
    }
    let amount = Decimal::from_f64(value)
        .ok_or_else(|| AppError::validation(format!("Amount out of range: {}", value)))?;
    ensure_amount_in_range("Amount", amount)
}

/// Parses a user-supplied amount string such as `"100"`, `"-12.50"` or `"1e3"`.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Amount cannot be empty"));
    }
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AppError::validation(format!("Invalid amount: '{}'", raw)))?;
    ensure_amount_in_range("Amount", amount)
}
