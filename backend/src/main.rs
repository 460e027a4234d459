use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;
use std::time::Duration;

mod config {
    pub mod server_config;
}
mod error;
mod handlers {
    pub mod contact_handlers;
}
mod models {
    pub mod inquiry;
}
mod utils {
    pub mod delivery;
    pub mod rate_limit;
}

use config::server_config::ServerConfig;
use handlers::contact_handlers;
use utils::delivery::{InquirySink, LogSink, SmtpSink};
use utils::rate_limit::ContactLimiter;

const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(600);

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    limiter: ContactLimiter,
    sink: Arc<dyn InquirySink>,
}

pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let index = config.frontend_dist.join("index.html");
    // Unknown paths get index.html so client-side routes resolve
    let frontend = ServeDir::new(&config.frontend_dist).fallback(ServeFile::new(index));

    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_inquiry))
        .fallback_service(frontend)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        );

    let app = if config.is_development() {
        app.layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
    } else {
        app
    };

    app.with_state(state)
}

fn build_sink(config: &ServerConfig) -> anyhow::Result<Arc<dyn InquirySink>> {
    match &config.smtp {
        Some(smtp) => {
            info!("Forwarding inquiries to {} via {}", config.contact_inbox, smtp.host);
            Ok(Arc::new(SmtpSink::new(smtp, &config.contact_inbox)?))
        }
        None => {
            info!("SMTP_HOST not set, inquiries will only be logged");
            Ok(Arc::new(LogSink))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = ServerConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            ..Default::default()
        }))
    });

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let state = Arc::new(AppState {
        limiter: ContactLimiter::per_minute(config.contact_rate_per_minute),
        sink: build_sink(&config)?,
    });

    // Spawn the limiter cleanup
    let state_for_prune = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            state_for_prune.limiter.prune();
        }
    });

    let app = build_router(state, &config);

    use tokio::net::TcpListener;

    info!("Serving {} on {}", config.frontend_dist.display(), config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
