use axum::{
    extract::{Path as AxumPath, RawQuery, State},
    http::{HeaderMap, Response, StatusCode, header},
    response::{Html, IntoResponse},
    body::{Body, Bytes},
};
use std::path::Path;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::components::{FooterComponent, HeaderComponent, LayoutComponent};
use crate::errors::AppError;
use crate::services::{DEFAULT_CONTENT_TYPE, StaticService};
use crate::types::AppState;
use crate::utils::{
    DateValue, PriceValue, escape_attr, escape_html, form_url_query, format_date_time,
    format_price, parse_query, remove_keys_from_query,
};

/// Handle home page requests
pub async fn handle_home(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let start_time = std::time::Instant::now();

    let header = HeaderComponent::new();
    let footer = FooterComponent::new();
    let layout = LayoutComponent::new(state.config.shell_template.as_ref().clone());

    let views = format_date_time(DateValue::Instant(OffsetDateTime::now_utc()));

    let mut content = String::new();
    content.push_str("<section class=\"hero\">");
    content.push_str("<h1>What's on tonight</h1>");
    content.push_str("<p>Host, discover, and book events around you.</p>");
    content.push_str(&format!(
        "<p class=\"hero-stamp\">Rendered {}</p>",
        escape_html(&views.date_time)
    ));
    content.push_str("<p><a class=\"cta\" href=\"/preview\">Explore the formatting preview</a></p>");
    content.push_str("</section>");

    let page = layout.render_page("Marquee", &header.render(), &content, &footer.render());

    let duration = start_time.elapsed();
    log::info!("Home page rendered in {:?}ms", duration.as_millis());

    Ok(Html(page).into_response())
}

/// Handle formatting preview requests
pub async fn handle_preview(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let raw_query = raw.unwrap_or_default();
    log::info!("Preview request received, query: '{}'", raw_query);
    let start_time = std::time::Instant::now();

    let params = parse_query(&raw_query);
    let (source, value) = match params.get("at") {
        Some(at) => (at.clone(), DateValue::from(at.as_str())),
        None => ("now".to_string(), DateValue::Instant(OffsetDateTime::now_utc())),
    };
    let views = format_date_time(value);

    let mut content = String::new();
    content.push_str("<section class=\"preview\">");
    content.push_str("<h1>Formatting preview</h1>");
    content.push_str(&format!(
        "<p>Showing views for <code>{}</code>.</p>",
        escape_html(&source)
    ));

    content.push_str("<h2>Date views</h2>");
    content.push_str("<ul class=\"views\">");
    content.push_str(&format!(
        "<li>Date and time: {}</li>",
        escape_html(&views.date_time)
    ));
    content.push_str(&format!(
        "<li>Date only: {}</li>",
        escape_html(&views.date_only)
    ));
    content.push_str(&format!(
        "<li>Time only: {}</li>",
        escape_html(&views.time_only)
    ));
    content.push_str("</ul>");

    content.push_str("<h2>Price samples</h2>");
    content.push_str("<ul class=\"views\">");
    content.push_str(&format!(
        "<li><code>1234.5</code> renders as {}</li>",
        escape_html(&format_price(PriceValue::from(1234.5)))
    ));
    content.push_str(&format!(
        "<li><code>\"abc\"</code> renders as {}</li>",
        escape_html(&format_price(PriceValue::from("abc")))
    ));
    content.push_str("</ul>");

    // Toggle links exercise the query utilities against the live query string
    let pinned = form_url_query("/preview", &raw_query, "at", Some("2026-08-22 19:30:00"));
    let broken = form_url_query("/preview", &raw_query, "at", Some("not-a-date"));
    let cleared = remove_keys_from_query("/preview", &raw_query, &["at"]);

    content.push_str("<h2>Try other instants</h2>");
    content.push_str("<ul class=\"views\">");
    content.push_str(&format!(
        "<li><a href=\"{}\">Pin a sample instant</a></li>",
        escape_attr(&pinned)
    ));
    content.push_str(&format!(
        "<li><a href=\"{}\">Force the invalid-date sentinel</a></li>",
        escape_attr(&broken)
    ));
    content.push_str(&format!(
        "<li><a href=\"{}\">Back to now</a></li>",
        escape_attr(&cleared)
    ));
    content.push_str("</ul>");
    content.push_str("</section>");

    let header = HeaderComponent::new();
    let footer = FooterComponent::new();
    let layout = LayoutComponent::new(state.config.shell_template.as_ref().clone());
    let page = layout.render_page("Preview", &header.render(), &content, &footer.render());

    let duration = start_time.elapsed();
    log::info!("Preview page rendered in {:?}ms", duration.as_millis());

    Ok(Html(page).into_response())
}

/// Handle transient object registration from the raw request body
pub async fn handle_object_upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let (id, path) = state.objects.register(body.to_vec(), content_type)?;
    log::debug!("Upload stored as object {}", id);
    Ok((StatusCode::CREATED, path).into_response())
}

/// Serve a registered object's bytes under its declared content type
pub async fn handle_object_get(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::InvalidPath)?;
    let object = state.objects.get(&id).ok_or(AppError::NotFound)?;

    let mut resp = Response::new(Body::from(object.bytes.clone()));
    resp.headers_mut().insert(
        header::CONTENT_TYPE,
        object
            .content_type
            .parse()
            .unwrap_or_else(|_| header::HeaderValue::from_static(DEFAULT_CONTENT_TYPE)),
    );
    Ok(resp)
}

/// Handle explicit object revocation
pub async fn handle_object_revoke(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::InvalidPath)?;
    if state.objects.revoke(&id) {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(AppError::NotFound)
    }
}

/// Handle static file requests
pub async fn handle_static(
    State(state): State<AppState>,
    AxumPath(path): AxumPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StaticService::new(state.config.static_dir.as_ref().clone());
    let bytes = service.read(&path)?;
    let content_type = service.content_type_for(Path::new(&path));
    let mut resp = Response::new(Body::from(bytes));
    resp.headers_mut().insert(
        header::CONTENT_TYPE,
        content_type
            .parse()
            .unwrap_or_else(|_| header::HeaderValue::from_static(DEFAULT_CONTENT_TYPE)),
    );
    Ok(resp)
}
