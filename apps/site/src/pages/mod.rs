//! Page assembler — per-route orchestration of fetch functions, metadata,
//! JSON-LD and template rendering.

pub mod handlers;
pub mod jsonld;
pub mod meta;
pub mod revalidate;
pub mod sitemap;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde_json::Value;
use tera::Context;

use crate::errors::AppError;
use crate::state::AppState;
use self::meta::PageMeta;
use self::revalidate::Revalidate;

/// Context every template starts from: the site identity, the page's
/// metadata and its JSON-LD blocks.
fn base_context(page_meta: &PageMeta, jsonld_blocks: &[Value]) -> Context {
    let mut context = Context::new();
    context.insert("site_name", meta::SITE_NAME);
    context.insert("meta", page_meta);
    context.insert("jsonld", jsonld_blocks);
    context
}

/// Renders a template and attaches the route's revalidation policy.
fn page_response(
    state: &AppState,
    template: &str,
    context: Context,
    revalidate: Revalidate,
    status: StatusCode,
) -> Result<Response, AppError> {
    let html = state.templates.render(template, &context)?;
    let mut response = (status, Html(html)).into_response();
    let cache_control =
        HeaderValue::from_str(&revalidate.header_value()).map_err(anyhow::Error::from)?;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, cache_control);
    Ok(response)
}

/// The not-found page outcome: 404 status with the not-found metadata
/// variant. Used by parametric routes on an absent record and as the
/// router fallback.
fn not_found_response(state: &AppState) -> Result<Response, AppError> {
    let page_meta = meta::not_found(&state.config);
    let context = base_context(&page_meta, &[]);
    page_response(
        state,
        "not_found.html",
        context,
        Revalidate::STATIC,
        StatusCode::NOT_FOUND,
    )
}
