pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact;
use crate::pages;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Marketing pages
        .route("/", get(pages::handlers::home))
        .route("/about", get(pages::handlers::about))
        .route("/contact", get(pages::handlers::contact))
        // Blog
        .route("/blog", get(pages::handlers::blog_index))
        .route("/blog/:slug", get(pages::handlers::blog_post))
        // Portfolio
        .route("/portfolio", get(pages::handlers::portfolio_index))
        .route("/portfolio/:slug", get(pages::handlers::couple))
        // Location landing pages + vendor directory
        .route("/venues/:region", get(pages::handlers::venues))
        .route("/vendors", get(pages::handlers::vendors))
        // SEO artifacts
        .route("/sitemap.xml", get(pages::handlers::sitemap_xml))
        .route("/robots.txt", get(pages::handlers::robots))
        // Contact intake
        .route("/api/contact", post(contact::handlers::handle_contact))
        .fallback(pages::handlers::fallback)
        .with_state(state)
}
