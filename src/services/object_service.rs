use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, error, info, warn};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::errors::AppError;

/// Content type assumed when the caller declares none
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A registered transient object
#[derive(Debug)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub created_at: OffsetDateTime,
}

/// Service holding transient objects under revocable reference paths
///
/// Registration hands out a `/objects/<id>` path for local display (an image
/// preview `src`, say). Unlike the formatting utilities this service
/// propagates its failures: a missing reference has no safe placeholder.
/// Lifecycle is explicit: scoped via [`ObjectUrl`], or caller-owned via
/// [`ObjectStore::register`] paired with [`ObjectStore::revoke`].
#[derive(Debug, Clone)]
pub struct ObjectStore {
    inner: Arc<Mutex<HashMap<Uuid, Arc<StoredObject>>>>,
    max_object_bytes: usize,
}

impl ObjectStore {
    /// Create a new object store with the given per-object byte cap
    pub fn new(max_object_bytes: usize) -> Self {
        debug!("Creating ObjectStore with a {} byte cap", max_object_bytes);
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            max_object_bytes,
        }
    }

    /// Register an object, returning its id and reference path
    ///
    /// The caller owns the lifecycle and is expected to [`revoke`] the id
    /// when the reference is no longer displayed.
    ///
    /// [`revoke`]: ObjectStore::revoke
    pub fn register(
        &self,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(Uuid, String), AppError> {
        if bytes.is_empty() {
            error!("Refusing to register an empty object");
            return Err(AppError::EmptyObject);
        }
        if bytes.len() > self.max_object_bytes {
            error!(
                "Refusing to register a {} byte object (cap {})",
                bytes.len(),
                self.max_object_bytes
            );
            return Err(AppError::ObjectTooLarge {
                size: bytes.len(),
                cap: self.max_object_bytes,
            });
        }

        let id = Uuid::new_v4();
        let size = bytes.len();
        let object = Arc::new(StoredObject {
            bytes,
            content_type: content_type
                .filter(|declared| !declared.trim().is_empty())
                .unwrap_or(DEFAULT_CONTENT_TYPE)
                .to_string(),
            created_at: OffsetDateTime::now_utc(),
        });

        self.guard()?.insert(id, object);
        let path = Self::path_for(&id);
        info!("Registered object {} ({} bytes) at {}", id, size, path);
        Ok((id, path))
    }

    /// Register an object behind a scoped guard that revokes it on drop
    pub fn register_scoped(
        &self,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<ObjectUrl, AppError> {
        let (id, path) = self.register(bytes, content_type)?;
        Ok(ObjectUrl {
            id,
            path,
            store: self.clone(),
        })
    }

    /// Look up a registered object
    pub fn get(&self, id: &Uuid) -> Option<Arc<StoredObject>> {
        match self.inner.lock() {
            Ok(objects) => objects.get(id).cloned(),
            Err(_) => {
                warn!("Object store lock poisoned during lookup of {}", id);
                None
            }
        }
    }

    /// Revoke a registered object; returns whether it existed
    pub fn revoke(&self, id: &Uuid) -> bool {
        match self.inner.lock() {
            Ok(mut objects) => {
                let removed = objects.remove(id).is_some();
                if removed {
                    info!("Revoked object {}", id);
                } else {
                    debug!("Revoke requested for unknown object {}", id);
                }
                removed
            }
            Err(_) => {
                warn!("Object store lock poisoned during revoke of {}", id);
                false
            }
        }
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.inner.lock().map(|objects| objects.len()).unwrap_or(0)
    }

    /// Whether the store holds no live objects
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The reference path an id is served under
    pub fn path_for(id: &Uuid) -> String {
        format!("/objects/{}", id)
    }

    fn guard(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Arc<StoredObject>>>, AppError> {
        self.inner.lock().map_err(|_| {
            error!("Object store lock poisoned");
            AppError::Object("object store lock poisoned".to_string())
        })
    }
}

/// Scoped reference to a registered object
///
/// Dropping the guard revokes the object, pairing release to the display
/// lifetime that needed the reference.
#[derive(Debug)]
pub struct ObjectUrl {
    id: Uuid,
    path: String,
    store: ObjectStore,
}

impl ObjectUrl {
    /// Id of the underlying object
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Reference path, e.g. `/objects/<id>`
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if self.store.revoke(&self.id) {
            debug!("Scoped object {} released on drop", self.id);
        }
    }
}
