//! Zenith server binary.
//!
//! Starts an axum HTTP server with structured logging, provider client
//! construction from configuration, and graceful shutdown on
//! SIGTERM/SIGINT.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use zenith_memory::FeedbackLog;
use zenith_providers::{
    build_http_client, build_text_generator, ArtifactStore, MusicClient, SpeechClient,
};
use zenith_server::{app, config, AppState};
use zenith_session::SessionOrchestrator;

fn resolve_config_path() -> (Option<String>, &'static str) {
    if let Some(path) = std::env::args()
        .nth(1)
        .filter(|value| !value.trim().is_empty())
    {
        return (Some(path), "cli-arg");
    }

    if let Ok(path) = std::env::var("ZENITH_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return (Some(path), "env-var");
        }
    }

    (None, "default")
}

#[tokio::main]
async fn main() {
    let (resolved_config_path, config_source) = resolve_config_path();
    let selected_config_path = resolved_config_path.as_deref().or(Some("config.toml"));

    // Load configuration
    let config = config::load_config(selected_config_path)
        .expect("failed to load configuration");

    // Initialize tracing
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        source = config_source,
        path = selected_config_path.unwrap_or("<none>"),
        "resolved startup configuration path"
    );

    // Report missing credentials before the first dependent call; the
    // affected stages degrade rather than block startup.
    for provider in config.providers.missing_credentials() {
        tracing::warn!(
            provider,
            "credential not configured, the dependent stage will degrade"
        );
    }

    // Build provider clients
    let http = build_http_client(config.providers.request_timeout_secs);
    let text = build_text_generator(http.clone(), &config.providers);
    let speech = SpeechClient::new(http.clone(), config.providers.elevenlabs_api_key.clone());
    let music = MusicClient::new(
        http,
        config.providers.music_api_key.clone(),
        config.providers.music_api_url.clone(),
    );
    let artifacts = ArtifactStore::new(&config.storage.output_dir);

    tracing::info!(provider = text.name(), "text generation provider selected");

    // Build application
    let state = AppState {
        orchestrator: Arc::new(SessionOrchestrator::new(text, speech, music, artifacts)),
        feedback: Arc::new(FeedbackLog::new(&config.storage.feedback_path)),
    };
    let app = app(state);
    let addr = SocketAddr::new(config.server.host, config.server.port);

    tracing::info!(%addr, "starting zenith server");

    let listener = TcpListener::bind(addr)
        .await
        .expect("failed to bind to address");

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("zenith server shut down");
}

/// Waits for a SIGINT (Ctrl+C) or SIGTERM signal for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { tracing::info!("received SIGINT, initiating graceful shutdown"); }
        () = terminate => { tracing::info!("received SIGTERM, initiating graceful shutdown"); }
    }
}
