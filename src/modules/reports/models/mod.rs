mod tax_summary;

pub use tax_summary::{ReportedOrder, TaxSummaryReport, TaxSummaryRow, EXPORT_GROUP};
