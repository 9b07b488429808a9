use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    handler::Handler,
    http::{header, HeaderName, HeaderValue},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use shared::protocol::iso_timestamp;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;
mod pages;

use app_state::AppState;
use config::{load_settings, Environment};

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    style-src 'self' 'unsafe-inline' https://fonts.googleapis.com https://cdn.jsdelivr.net; \
    font-src 'self' https://fonts.gstatic.com; \
    img-src 'self' data: https:; \
    script-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = load_settings();
    init_tracing(loaded.settings.environment);
    for warning in &loaded.warnings {
        warn!("{warning}");
    }

    let settings = loaded.settings;
    let addr = settings.bind_addr()?;
    let templates = pages::load_templates()?;
    let environment = settings.environment;
    let state = Arc::new(AppState::new(settings, templates));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        %environment,
        url = %format!("http://localhost:{}", addr.port()),
        started_at = %iso_timestamp(Utc::now()),
        "server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if environment.is_production() {
        builder.with_ansi(false).compact().init();
    } else {
        builder.pretty().init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT received, shutting down gracefully"),
        _ = terminate => info!("SIGTERM received, shutting down gracefully"),
    }
}

fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.settings.body_limit_bytes;
    let static_files = ServeDir::new(&state.settings.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(pages::not_found.with_state(state.clone()));

    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(api::health))
        .route("/api/contact", post(api::contact))
        .route("/api/newsletter", post(api::newsletter))
        .route("/api/assessment", post(api::assessment))
        .route("/api/assessment/report", post(api::assessment_report))
        .route("/api/roi", get(api::roi))
        .route("/api/plans", get(api::plans))
        .route("/api/articles", get(api::articles))
        .route("/api/articles/:article/prompt", get(api::article_prompt))
        .route("/api/articles/:article/demo", get(api::article_demo))
        .route("/api/resources", get(api::resource_list))
        .route("/download/article5-card", get(api::article5_card_placeholder))
        .route("/resources/article5-card.txt", get(api::article5_card))
        .route("/resources/prompt-guide.txt", get(api::prompt_guide))
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("cross-origin-opener-policy"),
            HeaderValue::from_static("same-origin"),
        ))
        .layer(CatchPanicLayer::custom(pages::panic_handler(state.clone())))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
