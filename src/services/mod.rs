pub mod object_service;
pub mod static_service;

pub use object_service::{DEFAULT_CONTENT_TYPE, ObjectStore, ObjectUrl, StoredObject};
pub use static_service::StaticService;
