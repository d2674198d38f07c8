use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::core::currency::ensure_amount_in_range;
use crate::core::{AppError, Result};
use crate::modules::reports::models::{ReportedOrder, TaxSummaryReport, TaxSummaryRow};
use crate::modules::taxes::TaxCalculator;

/// Longest period a single report may cover
pub const MAX_REPORT_DAYS: i64 = 366;

/// Service for generating tax reports
pub struct ReportService {
    calculator: TaxCalculator,
}

impl ReportService {
    /// Create a new report service
    pub fn new(calculator: TaxCalculator) -> Self {
        Self { calculator }
    }

    /// Generate a tax summary for the orders placed within the date range
    ///
    /// Each order's breakdown is recomputed with the current jurisdiction table
    /// and added to the row of the jurisdiction it resolved to. Orders outside
    /// the range are ignored.
    ///
    /// # Errors
    /// Returns a validation error if the range is invalid, an order id is
    /// empty or repeated, or an order subtotal exceeds `MAX_AMOUNT`.
    pub fn tax_summary(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        orders: &[ReportedOrder],
    ) -> Result<TaxSummaryReport> {
        self.validate_date_range(start_date, end_date)?;
        Self::validate_orders(orders)?;

        info!(
            "Generating tax summary: start={}, end={}, orders={}",
            start_date,
            end_date,
            orders.len()
        );

        // (is_export, country, region) orders domestic rows first, by region
        let mut rows: BTreeMap<(bool, String, String), TaxSummaryRow> = BTreeMap::new();

        for order in orders
            .iter()
            .filter(|order| order.ordered_on >= start_date && order.ordered_on <= end_date)
        {
            let breakdown =
                self.calculator
                    .calculate_taxes(order.subtotal, &order.region, &order.country);
            let template = TaxSummaryRow::for_breakdown(&breakdown);
            let key = (
                breakdown.is_export,
                template.country.clone(),
                template.region.clone(),
            );
            rows.entry(key).or_insert(template).add(&breakdown);
        }

        let report = TaxSummaryReport::new(start_date, end_date, rows.into_values().collect());

        if report.is_empty() {
            warn!(
                "Empty tax summary generated for period {} to {}",
                start_date, end_date
            );
        } else {
            info!(
                "Tax summary generated: {} jurisdictions, {} orders",
                report.rows.len(),
                report.totals.order_count
            );
        }

        Ok(report)
    }

    /// Validate that a date range is reasonable
    pub fn validate_date_range(&self, start_date: NaiveDate, end_date: NaiveDate) -> Result<()> {
        if start_date > end_date {
            return Err(AppError::validation(format!(
                "start_date ({}) must be before or equal to end_date ({})",
                start_date, end_date
            )));
        }

        let days_diff = (end_date - start_date).num_days();
        if days_diff > MAX_REPORT_DAYS {
            return Err(AppError::validation(format!(
                "Date range too large: {} days (maximum {} days)",
                days_diff, MAX_REPORT_DAYS
            )));
        }

        Ok(())
    }

    fn validate_orders(orders: &[ReportedOrder]) -> Result<()> {
        let mut seen = HashSet::with_capacity(orders.len());
        for order in orders {
            let id = order.order_id.trim();
            if id.is_empty() {
                return Err(AppError::validation("Order id cannot be empty"));
            }
            if !seen.insert(id) {
                return Err(AppError::validation(format!(
                    "Duplicate order id: {}",
                    id
                )));
            }
            ensure_amount_in_range(&format!("Order {} subtotal", id), order.subtotal)?;
        }
        Ok(())
    }
}
