use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::taxes::models::TaxBreakdown;

/// Country label under which all zero-rated exports are grouped
pub const EXPORT_GROUP: &str = "EXPORT";

/// One order as supplied by the order store
#[derive(Debug, Clone, Deserialize)]
pub struct ReportedOrder {
    pub order_id: String,
    pub ordered_on: NaiveDate,
    pub subtotal: Decimal,
    #[serde(default)]
    pub region: String,
    pub country: String,
}

/// Tax totals for one jurisdiction (or for all exports)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaxSummaryRow {
    pub country: String,
    pub region: String,
    pub order_count: i64,
    pub subtotal: Decimal,
    pub gst: Decimal,
    pub hst: Decimal,
    pub pst: Decimal,
    pub qst: Decimal,
    pub rst: Decimal,
    pub total_tax: Decimal,
    pub grand_total: Decimal,
}

impl TaxSummaryRow {
    pub fn new(country: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
            ..Default::default()
        }
    }

    /// Grouping row for a breakdown
    pub fn for_breakdown(breakdown: &TaxBreakdown) -> Self {
        if breakdown.is_export {
            Self::new(EXPORT_GROUP, "")
        } else {
            Self::new(breakdown.country_code.clone(), breakdown.region_code.clone())
        }
    }

    pub fn add(&mut self, breakdown: &TaxBreakdown) {
        self.order_count += 1;
        self.subtotal += breakdown.subtotal;
        self.gst += breakdown.gst_amount;
        self.hst += breakdown.hst_amount;
        self.pst += breakdown.pst_amount;
        self.qst += breakdown.qst_amount;
        self.rst += breakdown.rst_amount;
        self.total_tax += breakdown.total_tax;
        self.grand_total += breakdown.grand_total;
    }

    pub fn merge(&mut self, other: &TaxSummaryRow) {
        self.order_count += other.order_count;
        self.subtotal += other.subtotal;
        self.gst += other.gst;
        self.hst += other.hst;
        self.pst += other.pst;
        self.qst += other.qst;
        self.rst += other.rst;
        self.total_tax += other.total_tax;
        self.grand_total += other.grand_total;
    }

    pub fn component_sum(&self) -> Decimal {
        self.gst + self.hst + self.pst + self.qst + self.rst
    }
}

/// Tax collected per jurisdiction over a reporting period
#[derive(Debug, Clone, Serialize)]
pub struct TaxSummaryReport {
    /// Start date of the reporting period (inclusive)
    pub start_date: NaiveDate,
    /// End date of the reporting period (inclusive)
    pub end_date: NaiveDate,
    /// Canadian jurisdictions by region code, exports last
    pub rows: Vec<TaxSummaryRow>,
    pub totals: TaxSummaryRow,
}

impl TaxSummaryReport {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, rows: Vec<TaxSummaryRow>) -> Self {
        let mut totals = TaxSummaryRow::new("ALL", "");
        for row in &rows {
            totals.merge(row);
        }

        Self {
            start_date,
            end_date,
            rows,
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, country: &str, region: &str) -> Option<&TaxSummaryRow> {
        self.rows
            .iter()
            .find(|row| row.country == country && row.region == region)
    }
}
