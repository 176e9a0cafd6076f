//! Display-formatting and query-string utilities
//!
//! Stateless, single-shot transforms shared by the page handlers. Each
//! degrading function (`format_*`, `form_url_query`, `remove_keys_from_query`)
//! is a thin logging wrapper over a fallible `try_*` core, so call sites can
//! choose between a safe placeholder and a propagated error.

pub mod datetime;
pub mod error;
pub mod html;
pub mod price;
pub mod query;

pub use datetime::{DateValue, INVALID_DATE, format_date_time, try_format_date_time};
pub use error::{ErrorValue, UNKNOWN_ERROR, handle_error, normalize_message};
pub use html::{escape_attr, escape_html};
pub use price::{INVALID_PRICE, PriceValue, format_price, try_format_price};
pub use query::{
    form_url_query, parse_query, remove_keys_from_query, try_form_url_query,
    try_remove_keys_from_query,
};
