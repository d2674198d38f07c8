// An invoice is the priced, taxed view of an order. It carries the unrounded
// TaxBreakdown for reporting plus cent-rounded lines for customer documents.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::{LineItem, LineItemRequest};
use crate::core::Currency;
use crate::modules::locale::models::Locale;
use crate::modules::taxes::models::{TaxBreakdown, TaxComponent, DOMESTIC_COUNTRY};

/// Order submitted for pricing
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceRequest {
    pub line_items: Vec<LineItemRequest>,
    #[serde(default)]
    pub shipping: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub region: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub locale: Option<String>,
    /// Refunds flip the sign of the taxable subtotal and every derived amount
    #[serde(default)]
    pub is_refund: bool,
}

fn default_country() -> String {
    DOMESTIC_COUNTRY.to_string()
}

/// Per-component tax amounts persisted on an order.
///
/// A field is present only when the jurisdiction populates that component,
/// so invoice renderers can print exactly the lines that apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hst: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pst: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qst: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rst: Option<Decimal>,
}

impl TaxDetails {
    pub fn from_breakdown(breakdown: &TaxBreakdown) -> Self {
        let populated = |component: TaxComponent| {
            (!component.applied_rate(breakdown).is_zero())
                .then(|| component.amount_in(breakdown))
        };

        Self {
            gst: populated(TaxComponent::Gst),
            hst: populated(TaxComponent::Hst),
            pst: populated(TaxComponent::Pst),
            qst: populated(TaxComponent::Qst),
            rst: populated(TaxComponent::Rst),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.gst.is_none()
            && self.hst.is_none()
            && self.pst.is_none()
            && self.qst.is_none()
            && self.rst.is_none()
    }
}

/// Itemized tax line on a customer-facing document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxLine {
    pub component: TaxComponent,
    /// Localized short code, e.g. `TPS` or `GST`
    pub label: &'static str,
    pub rate: Decimal,
    /// Rounded to the cent
    pub amount: Decimal,
}

/// Priced and taxed order
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    pub id: String,
    pub currency: Currency,
    pub locale: Locale,
    pub line_items: Vec<LineItem>,
    /// Sum of line item subtotals
    pub items_subtotal: Decimal,
    pub discount: Decimal,
    pub shipping: Decimal,
    /// items − discount + shipping, negated for refunds
    pub subtotal: Decimal,
    /// Unrounded calculator output
    pub tax: TaxBreakdown,
    pub tax_details: TaxDetails,
    pub tax_lines: Vec<TaxLine>,
    /// Sum of the rounded tax lines
    pub total_tax: Decimal,
    pub grand_total: Decimal,
    pub grand_total_usd: Decimal,
    pub is_export: bool,
    pub is_refund: bool,
    /// Exports above the CERS threshold need a Canadian export declaration
    pub requires_cers_declaration: bool,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Builds the itemized lines for every populated component
    pub fn tax_lines_for(breakdown: &TaxBreakdown, locale: Locale) -> Vec<TaxLine> {
        TaxComponent::ALL
            .into_iter()
            .filter(|component| !component.applied_rate(breakdown).is_zero())
            .map(|component| TaxLine {
                component,
                label: component.short_name(locale),
                rate: component.applied_rate(breakdown),
                amount: Currency::CAD.round(component.amount_in(breakdown)),
            })
            .collect()
    }

    /// Printed totals add up: subtotal + Σ lines == grand_total
    pub fn is_balanced(&self) -> bool {
        let line_sum: Decimal = self.tax_lines.iter().map(|line| line.amount).sum();
        line_sum == self.total_tax && self.subtotal + self.total_tax == self.grand_total
    }
}
