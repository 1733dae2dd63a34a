use std::sync::Arc;

use crate::account::email::Mailer;
use crate::account::supabase::SupabaseAdmin;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Default: the OpenAI client. Tests swap in a mock.
    pub llm: Arc<dyn CompletionProvider>,
    pub supabase: SupabaseAdmin,
    /// Present only when a mail API key is configured.
    pub mailer: Option<Mailer>,
}
