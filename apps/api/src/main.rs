mod account;
mod config;
mod errors;
mod interests;
mod llm_client;
mod locale;
mod marketplace;
mod routes;
mod state;
mod suggestions;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::account::email::Mailer;
use crate::account::supabase::SupabaseAdmin;
use crate::config::Config;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Gifta API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize hosted-backend admin client (account deletion only)
    let supabase = SupabaseAdmin::new(
        config.supabase_url.clone(),
        config.supabase_service_role_key.clone(),
    );
    info!("Hosted backend admin client initialized");

    let mailer = config.resend_api_key.clone().map(Mailer::new);
    if mailer.is_none() {
        info!("RESEND_API_KEY not set — deletion confirmation emails disabled");
    }

    // Build app state
    let state = AppState {
        llm,
        supabase,
        mailer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
