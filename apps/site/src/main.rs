mod config;
mod contact;
mod content;
mod errors;
mod pages;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::mailer::{MailSender, ResendMailer};
use crate::content::ContentClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (errors on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Laurel & Pine site v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the content client
    let content = ContentClient::new(
        &config.sanity_project_id,
        &config.sanity_dataset,
        &config.sanity_api_version,
        config.sanity_use_cdn,
    );
    info!(
        "Content client initialized (dataset: {}, cdn: {})",
        config.sanity_dataset, config.sanity_use_cdn
    );

    // Initialize the mail client; the contact endpoint degrades to a 500
    // when the credential is absent.
    let mailer: Option<Arc<dyn MailSender>> = match &config.resend_api_key {
        Some(api_key) => {
            info!("Mail client initialized");
            Some(Arc::new(ResendMailer::new(api_key.clone())))
        }
        None => {
            warn!("RESEND_API_KEY not set; contact submissions will be rejected");
            None
        }
    };

    // Compile templates once
    let templates = Arc::new(render::build_templates(
        &config.sanity_project_id,
        &config.sanity_dataset,
    )?);
    info!("Templates compiled");

    // Build app state
    let state = AppState {
        content,
        mailer,
        templates,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
