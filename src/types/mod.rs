use std::sync::Arc;

use crate::config::Config;
use crate::services::ObjectStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub objects: ObjectStore,
}

/// The three formatted views of a single instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeViews {
    pub date_time: String,
    pub date_only: String,
    pub time_only: String,
}

/// Layout rendering context: the three page regions plus the document title
#[derive(Debug, Clone)]
pub struct PageContext {
    pub title: String,
    pub header: String,
    pub content: String,
    pub footer: String,
}
