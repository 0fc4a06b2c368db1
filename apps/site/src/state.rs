use std::sync::Arc;

use tera::Tera;

use crate::config::Config;
use crate::contact::mailer::MailSender;
use crate::content::ContentClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Built once at startup; everything here is read-only.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentClient,
    /// `None` when no mail credential was configured; the contact endpoint
    /// rejects submissions with a 500 in that case.
    pub mailer: Option<Arc<dyn MailSender>>,
    pub templates: Arc<Tera>,
    pub config: Config,
}
