pub mod currency;
pub mod error;

pub use currency::{Currency, ExchangeRate};
pub use error::{AppError, Result};
