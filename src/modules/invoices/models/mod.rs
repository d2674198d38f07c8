mod invoice;
mod line_item;

pub use invoice::{Invoice, InvoiceRequest, TaxDetails, TaxLine};
pub use line_item::{LineItem, LineItemRequest};
