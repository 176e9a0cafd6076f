//! URL query-string mutation
//!
//! Parses a query string into a flat key/value mapping, applies a single
//! mutation (set one key, or remove several), and re-serializes the result
//! against an explicitly supplied navigation path. Keys come out in sorted
//! order and values are percent-encoded by the form-urlencoded codec.
//!
//! The degrading entry points return the bare path on any failure so that a
//! formatting bug can never break navigation.

use std::collections::BTreeMap;

use log::error;
use url::form_urlencoded;

use crate::errors::AppError;

/// Set `key` in the query string and re-serialize against `current_path`
///
/// An absent `value` removes the key, so it is omitted from the output. On
/// failure this logs once and degrades to the bare `current_path`.
pub fn form_url_query(current_path: &str, params: &str, key: &str, value: Option<&str>) -> String {
    match try_form_url_query(current_path, params, key, value) {
        Ok(url) => url,
        Err(err) => {
            error!("URL query formation failed: {}", err);
            current_path.to_string()
        }
    }
}

/// Fallible core of [`form_url_query`]
pub fn try_form_url_query(
    current_path: &str,
    params: &str,
    key: &str,
    value: Option<&str>,
) -> Result<String, AppError> {
    ensure_serializable_path(current_path)?;
    if key.is_empty() {
        return Err(AppError::Query("cannot set an empty key".to_string()));
    }

    let mut query = parse_query(params);
    match value {
        Some(value) => {
            query.insert(key.to_string(), value.to_string());
        }
        None => {
            query.remove(key);
        }
    }

    Ok(serialize_with_path(current_path, &query))
}

/// Remove `keys_to_remove` from the query string and re-serialize against
/// `current_path`
///
/// On failure this logs once and degrades to the bare `current_path`.
pub fn remove_keys_from_query(current_path: &str, params: &str, keys_to_remove: &[&str]) -> String {
    match try_remove_keys_from_query(current_path, params, keys_to_remove) {
        Ok(url) => url,
        Err(err) => {
            error!("URL query removal failed: {}", err);
            current_path.to_string()
        }
    }
}

/// Fallible core of [`remove_keys_from_query`]
pub fn try_remove_keys_from_query(
    current_path: &str,
    params: &str,
    keys_to_remove: &[&str],
) -> Result<String, AppError> {
    ensure_serializable_path(current_path)?;

    let mut query = parse_query(params);
    for key in keys_to_remove {
        query.remove(*key);
    }

    Ok(serialize_with_path(current_path, &query))
}

/// Parse a query string into a key/value mapping
///
/// A leading `?` is tolerated, percent-escapes are decoded, and a repeated
/// key keeps its last value. A bare flag (`a` with no `=`) normalizes to an
/// empty-string value.
pub fn parse_query(params: &str) -> BTreeMap<String, String> {
    let trimmed = params.trim_start_matches('?');
    form_urlencoded::parse(trimmed.as_bytes())
        .into_owned()
        .collect()
}

fn serialize_with_path(current_path: &str, query: &BTreeMap<String, String>) -> String {
    if query.is_empty() {
        return current_path.to_string();
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query {
        serializer.append_pair(key, value);
    }
    format!("{}?{}", current_path, serializer.finish())
}

fn ensure_serializable_path(current_path: &str) -> Result<(), AppError> {
    if current_path.contains('?') || current_path.contains('#') {
        return Err(AppError::Query(format!(
            "path {:?} already carries a query or fragment",
            current_path
        )));
    }
    Ok(())
}
