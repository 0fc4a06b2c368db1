use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::content::models::Region;
use crate::content::{fetch, portable_text};
use crate::errors::AppError;
use crate::pages::revalidate::Revalidate;
use crate::pages::{base_context, jsonld, meta, not_found_response, page_response, sitemap};
use crate::state::AppState;

/// GET /
pub async fn home(State(state): State<AppState>) -> Result<Response, AppError> {
    let testimonials = fetch::featured_testimonials(&state.content).await;
    let featured_posts = fetch::featured_posts(&state.content).await;
    let featured_couples: Vec<_> = fetch::all_couples(&state.content)
        .await
        .into_iter()
        .filter(|couple| couple.featured)
        .take(3)
        .collect();
    let hero = fetch::site_asset(&state.content, "home-hero").await;

    let page_meta = meta::home(&state.config);
    let mut blocks = vec![jsonld::local_business(&state.config, &testimonials)];
    blocks.extend(
        testimonials
            .iter()
            .map(|testimonial| jsonld::review(&state.config, testimonial)),
    );

    let mut context = base_context(&page_meta, &blocks);
    context.insert("testimonials", &testimonials);
    context.insert("featured_posts", &featured_posts);
    context.insert("featured_couples", &featured_couples);
    context.insert("hero", &hero);
    page_response(&state, "home.html", context, Revalidate::HOME, StatusCode::OK)
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> Result<Response, AppError> {
    let team = fetch::site_assets_by_category(&state.content, "team").await;

    let page_meta = meta::about(&state.config);
    let blocks = vec![jsonld::about_page(&state.config)];

    let mut context = base_context(&page_meta, &blocks);
    context.insert("team", &team);
    page_response(&state, "about.html", context, Revalidate::STATIC, StatusCode::OK)
}

/// GET /blog
pub async fn blog_index(State(state): State<AppState>) -> Result<Response, AppError> {
    let posts = fetch::all_posts(&state.content).await;
    let categories = fetch::all_categories(&state.content).await;

    let page_meta = meta::blog_index(&state.config);
    let blocks = vec![jsonld::blog(&state.config, &posts)];

    let mut context = base_context(&page_meta, &blocks);
    context.insert("posts", &posts);
    context.insert("categories", &categories);
    page_response(&state, "blog/index.html", context, Revalidate::BLOG, StatusCode::OK)
}

/// GET /blog/:slug
pub async fn blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Some(detail) = fetch::post_by_slug(&state.content, &slug).await? else {
        return not_found_response(&state);
    };

    let page_meta = meta::blog_post(&state.config, &detail);
    let blocks = vec![jsonld::article(&state.config, &detail, &page_meta.og_image)];
    let body_html = portable_text::render(
        &detail.body,
        state.content.project_id(),
        state.content.dataset(),
    );

    let mut context = base_context(&page_meta, &blocks);
    context.insert("post", &detail.post);
    context.insert("related", &detail.related);
    context.insert("body_html", &body_html);
    page_response(&state, "blog/post.html", context, Revalidate::BLOG, StatusCode::OK)
}

/// GET /portfolio
pub async fn portfolio_index(State(state): State<AppState>) -> Result<Response, AppError> {
    let couples = fetch::all_couples(&state.content).await;

    let page_meta = meta::portfolio_index(&state.config);
    let blocks = vec![jsonld::collection_page(
        &state.config,
        "/portfolio",
        "Real Weddings",
        &page_meta.description,
    )];

    let mut context = base_context(&page_meta, &blocks);
    context.insert("couples", &couples);
    page_response(
        &state,
        "portfolio/index.html",
        context,
        Revalidate::PORTFOLIO,
        StatusCode::OK,
    )
}

/// GET /portfolio/:slug
pub async fn couple(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Some(couple) = fetch::couple_by_slug(&state.content, &slug).await? else {
        return not_found_response(&state);
    };

    let page_meta = meta::couple(&state.config, &couple);
    let mut blocks = vec![jsonld::collection_page(
        &state.config,
        &format!("/portfolio/{}", couple.slug),
        &format!("{} — Real Wedding", couple.names),
        &page_meta.description,
    )];
    blocks.extend(jsonld::couple_review(&state.config, &couple));

    let mut context = base_context(&page_meta, &blocks);
    context.insert("couple", &couple);
    page_response(
        &state,
        "portfolio/couple.html",
        context,
        Revalidate::PORTFOLIO,
        StatusCode::OK,
    )
}

/// GET /venues/:region — location landing page.
pub async fn venues(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Response, AppError> {
    let Some(region) = Region::from_slug(&region) else {
        return not_found_response(&state);
    };
    let venues = fetch::venues_by_region(&state.content, region).await;

    let page_meta = meta::venues(&state.config, region);
    let blocks = vec![jsonld::collection_page(
        &state.config,
        &format!("/venues/{}", region.slug()),
        &format!("{} Wedding Venues", region.display_name()),
        &page_meta.description,
    )];

    let mut context = base_context(&page_meta, &blocks);
    context.insert("region", &region);
    context.insert("region_name", region.display_name());
    context.insert("venues", &venues);
    page_response(&state, "venues.html", context, Revalidate::STATIC, StatusCode::OK)
}

/// GET /vendors
pub async fn vendors(State(state): State<AppState>) -> Result<Response, AppError> {
    let vendors = fetch::all_vendors(&state.content).await;

    let page_meta = meta::vendors(&state.config);
    let blocks = vec![jsonld::collection_page(
        &state.config,
        "/vendors",
        "Preferred Vendors",
        &page_meta.description,
    )];

    let mut context = base_context(&page_meta, &blocks);
    context.insert("vendors", &vendors);
    page_response(&state, "vendors.html", context, Revalidate::STATIC, StatusCode::OK)
}

/// GET /contact
pub async fn contact(State(state): State<AppState>) -> Result<Response, AppError> {
    let page_meta = meta::contact(&state.config);
    let blocks = vec![jsonld::professional_service(&state.config)];

    let context = base_context(&page_meta, &blocks);
    page_response(&state, "contact.html", context, Revalidate::STATIC, StatusCode::OK)
}

/// GET /sitemap.xml — static baseline plus whatever dynamic collections
/// were reachable.
pub async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let posts = fetch::all_posts(&state.content).await;
    let couples = fetch::all_couples(&state.content).await;

    let entries = sitemap::build_entries(&state.config.base_url, &posts, &couples);
    let xml = sitemap::render_xml(&entries);
    (
        [
            (header::CONTENT_TYPE, "application/xml".to_string()),
            (header::CACHE_CONTROL, Revalidate::STATIC.header_value()),
        ],
        xml,
    )
        .into_response()
}

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        sitemap::robots_txt(&state.config.base_url),
    )
        .into_response()
}

/// Router fallback for unknown paths.
pub async fn fallback(State(state): State<AppState>) -> Result<Response, AppError> {
    not_found_response(&state)
}
