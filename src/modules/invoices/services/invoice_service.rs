use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::core::currency::ensure_amount_in_range;
use crate::core::{AppError, Currency, Result};
use crate::modules::invoices::models::{Invoice, InvoiceRequest, LineItem, TaxDetails};
use crate::modules::locale::models::Locale;
use crate::modules::taxes::TaxCalculator;
use crate::state::AppState;

/// Prices orders: line items, discount and shipping in, taxed invoice out
#[derive(Debug, Clone)]
pub struct InvoiceService {
    calculator: TaxCalculator,
    cers_threshold_cad: Decimal,
}

impl InvoiceService {
    pub fn new(calculator: TaxCalculator, cers_threshold_cad: Decimal) -> Self {
        Self {
            calculator,
            cers_threshold_cad,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.calculator, state.cers_threshold_cad)
    }

    /// Build an invoice for the request
    ///
    /// Taxable subtotal is items − discount + shipping (shipping is taxable in
    /// every Canadian jurisdiction). Tax lines are rounded individually and
    /// `total_tax` is their sum, so the printed document always adds up.
    ///
    /// # Errors
    /// Returns `AppError::Validation` for an empty order, an invalid line item,
    /// negative shipping or discount, a discount larger than the items, or an
    /// order subtotal beyond `MAX_AMOUNT`.
    pub fn build_invoice(&self, request: InvoiceRequest) -> Result<Invoice> {
        if request.line_items.is_empty() {
            return Err(AppError::validation(
                "Invoice must have at least one line item",
            ));
        }
        Self::validate_adjustment("Shipping", request.shipping)?;
        Self::validate_adjustment("Discount", request.discount)?;

        let line_items = request
            .line_items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                LineItem::try_from(item).map_err(|e| match e {
                    AppError::Validation(msg) => {
                        AppError::validation(format!("Line item {}: {}", idx, msg))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let items_subtotal = line_items
            .iter()
            .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.subtotal))
            .ok_or_else(|| AppError::validation("Items subtotal is too large"))?;
        let shipping = Currency::CAD.round(request.shipping);
        let discount = Currency::CAD.round(request.discount);

        if discount > items_subtotal {
            return Err(AppError::validation(format!(
                "Discount ({}) cannot exceed items subtotal ({})",
                discount, items_subtotal
            )));
        }

        let net = ensure_amount_in_range("Order subtotal", items_subtotal - discount + shipping)?;
        let subtotal = if request.is_refund { -net } else { net };

        let locale = request
            .locale
            .as_deref()
            .map(Locale::from_tag)
            .unwrap_or_default();

        let tax = self
            .calculator
            .calculate_taxes(subtotal, &request.region, &request.country);
        let tax_details = TaxDetails::from_breakdown(&tax);
        let tax_lines = Invoice::tax_lines_for(&tax, locale);

        let total_tax: Decimal = tax_lines.iter().map(|line| line.amount).sum();
        let grand_total = subtotal + total_tax;
        let grand_total_usd =
            Currency::USD.round(self.calculator.exchange_rate().convert(grand_total));
        let requires_cers_declaration = tax.is_export && grand_total > self.cers_threshold_cad;

        let invoice = Invoice {
            id: Uuid::new_v4().to_string(),
            currency: Currency::CAD,
            locale,
            line_items,
            items_subtotal,
            discount,
            shipping,
            subtotal,
            is_export: tax.is_export,
            is_refund: request.is_refund,
            tax,
            tax_details,
            tax_lines,
            total_tax,
            grand_total,
            grand_total_usd,
            requires_cers_declaration,
            created_at: Utc::now(),
        };

        info!(
            invoice_id = %invoice.id,
            region = %invoice.tax.region_code,
            country = %invoice.tax.country_code,
            subtotal = %invoice.subtotal,
            total_tax = %invoice.total_tax,
            is_export = invoice.is_export,
            "invoice priced"
        );

        Ok(invoice)
    }

    fn validate_adjustment(name: &str, amount: Decimal) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "{} cannot be negative, got: {}",
                name, amount
            )));
        }
        ensure_amount_in_range(name, amount)?;
        Ok(())
    }
}

// Behavioural coverage lives in tests/unit/invoice_totals_test.rs
