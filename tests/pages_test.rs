//! Integration tests for the page handlers and serving surface
//!
//! Handlers are driven directly with constructed extractors and their
//! responses read back through the axum body plumbing.

use std::sync::Arc;

use axum::body::{Bytes, to_bytes};
use axum::extract::{Path as AxumPath, RawQuery, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;

use marquee::config::Config;
use marquee::errors::AppError;
use marquee::handlers::{
    handle_home, handle_object_get, handle_object_revoke, handle_object_upload, handle_preview,
    handle_static,
};
use marquee::services::ObjectStore;
use marquee::types::AppState;
use marquee::utils::INVALID_DATE;

fn state() -> AppState {
    let config = Config::new();
    AppState {
        objects: ObjectStore::new(config.max_object_bytes),
        config: Arc::new(config),
    }
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn home_page_composes_header_main_footer() {
    let resp = handle_home(State(state())).await.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    let header_at = body.find("<header class=\"page-header\">").unwrap();
    let main_at = body.find("<main class=\"page-main\">").unwrap();
    let footer_at = body.find("<footer class=\"page-footer\">").unwrap();
    assert!(header_at < main_at && main_at < footer_at);

    assert!(body.contains("What's on tonight"));
    assert!(body.contains("Rendered "));
    assert!(!body.contains(INVALID_DATE));
}

#[tokio::test]
async fn preview_renders_a_pinned_instant() {
    let query = RawQuery(Some("at=2021-10-25 10:30:00".to_string()));
    let resp = handle_preview(State(state()), query)
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Mon, Oct 25, 10:30 AM"));
    assert!(body.contains("Mon, Oct 25, 2021"));
    assert!(body.contains("10:30 AM"));
    assert!(body.contains("$1,234.50"));
    assert!(body.contains("Invalid price"));
    assert!(body.contains("at=not-a-date"), "toggle links must be present");
}

#[tokio::test]
async fn preview_degrades_to_sentinels_on_a_bad_instant() {
    let query = RawQuery(Some("at=not-a-date".to_string()));
    let resp = handle_preview(State(state()), query)
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert_eq!(body.matches(INVALID_DATE).count(), 3);
}

#[tokio::test]
async fn objects_round_trip_through_the_handlers() {
    let st = state();

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, "image/png".parse().unwrap());
    let resp = handle_object_upload(
        State(st.clone()),
        headers,
        Bytes::from_static(b"poster bytes"),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let path = body_text(resp).await;
    let id = path.strip_prefix("/objects/").unwrap().to_string();

    let resp = handle_object_get(State(st.clone()), AxumPath(id.clone()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"poster bytes");

    let resp = handle_object_revoke(State(st.clone()), AxumPath(id.clone()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let err = match handle_object_get(State(st.clone()), AxumPath(id.clone())).await {
        Err(e) => e,
        Ok(_) => panic!("revoked object must not be served"),
    };
    assert!(matches!(err, AppError::NotFound));

    let err = match handle_object_revoke(State(st), AxumPath(id)).await {
        Err(e) => e,
        Ok(_) => panic!("second revoke must be a miss"),
    };
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn malformed_object_ids_are_rejected() {
    let err = match handle_object_get(State(state()), AxumPath("not-a-uuid".to_string())).await {
        Err(e) => e,
        Ok(_) => panic!("malformed id must not resolve"),
    };
    assert!(matches!(err, AppError::InvalidPath));
}

#[tokio::test]
async fn empty_uploads_are_rejected() {
    let resp = handle_object_upload(State(state()), HeaderMap::new(), Bytes::new()).await;
    let err = match resp {
        Err(e) => e,
        Ok(_) => panic!("empty upload must be rejected"),
    };
    assert!(matches!(err, AppError::EmptyObject));
}

#[tokio::test]
async fn static_assets_serve_with_their_content_type() {
    let resp = handle_static(State(state()), AxumPath("css/marquee.css".to_string()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "text/css");

    let body = body_text(resp).await;
    assert!(body.contains("min-height: 100vh"));
}

#[tokio::test]
async fn static_traversal_is_rejected() {
    let err = match handle_static(State(state()), AxumPath("../Cargo.toml".to_string())).await {
        Err(e) => e,
        Ok(_) => panic!("traversal must be rejected"),
    };
    assert!(matches!(err, AppError::InvalidPath));
}
