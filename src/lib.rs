//! Marquee - a server-rendered front-end shell and formatting toolkit
//!
//! This crate provides the page layout composition, display-formatting
//! utilities, and transient object store behind a small event-site front end.

pub mod components;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::AppError;
pub use logger::Logger;
pub use types::{AppState, DateTimeViews, PageContext};
pub use services::{ObjectStore, ObjectUrl, StaticService, StoredObject};
pub use components::{FooterComponent, HeaderComponent, LayoutComponent};

// Re-export utility functions
pub use utils::{
    DateValue, ErrorValue, PriceValue, escape_attr, escape_html, form_url_query,
    format_date_time, format_price, handle_error, remove_keys_from_query,
};
