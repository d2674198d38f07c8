// A line item is one product on an order. Prices are CAD; the subtotal is
// quantity × unit_price rounded to the cent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::currency::ensure_amount_in_range;
use crate::core::{AppError, Currency, Result};

/// Line item as submitted by checkout
#[derive(Debug, Clone, Deserialize)]
pub struct LineItemRequest {
    pub description: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Represents a single line item in an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Description of the product
    pub description: String,

    /// Quantity of items
    pub quantity: i32,

    /// Price per unit in CAD
    pub unit_price: Decimal,

    /// quantity × unit_price, rounded to 2 decimals
    pub subtotal: Decimal,
}

impl LineItem {
    /// Create a new line item with validation
    ///
    /// # Arguments
    /// * `description` - Product description (max 255 chars)
    /// * `quantity` - Must be positive
    /// * `unit_price` - Must be non-negative; the line total may not exceed `MAX_AMOUNT`
    pub fn new(description: String, quantity: i32, unit_price: Decimal) -> Result<Self> {
        Self::validate_description(&description)?;
        Self::validate_quantity(quantity)?;
        Self::validate_unit_price(unit_price)?;

        let subtotal = Decimal::from(quantity)
            .checked_mul(unit_price)
            .ok_or_else(|| AppError::validation("Line total is too large"))?;
        let subtotal = Currency::CAD.round(ensure_amount_in_range("Line total", subtotal)?);

        Ok(Self {
            description,
            quantity,
            unit_price,
            subtotal,
        })
    }

    fn validate_description(description: &str) -> Result<()> {
        if description.trim().is_empty() {
            return Err(AppError::validation("Line item description cannot be empty"));
        }

        if description.chars().count() > 255 {
            return Err(AppError::validation(
                "Line item description cannot exceed 255 characters",
            ));
        }

        Ok(())
    }

    fn validate_quantity(quantity: i32) -> Result<()> {
        if quantity <= 0 {
            return Err(AppError::validation(format!(
                "Quantity must be positive, got: {}",
                quantity
            )));
        }

        Ok(())
    }

    fn validate_unit_price(unit_price: Decimal) -> Result<()> {
        if unit_price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Unit price must be non-negative, got: {}",
                unit_price
            )));
        }
        ensure_amount_in_range("Unit price", unit_price)?;

        Ok(())
    }
}

impl TryFrom<LineItemRequest> for LineItem {
    type Error = AppError;

    fn try_from(request: LineItemRequest) -> Result<Self> {
        LineItem::new(request.description, request.quantity, request.unit_price)
    }
}
