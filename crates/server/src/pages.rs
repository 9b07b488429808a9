use std::{any::Any, backtrace::Backtrace, collections::HashMap, sync::Arc};

use axum::{
    extract::{OriginalUri, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{Datelike, Utc};
use serde::Serialize;
use site_api::{
    assessment::{Wizard, QUESTIONS},
    pricing::format_amount,
    resources::resource_catalog,
};
use tera::{Context, Tera, Value};
use tracing::error;

use crate::{app_state::AppState, config::Environment};

const SITE_TITLE: &str = "Aram Algorithm - AI Red Teaming & EU AI Act Compliance";
const SITE_DESCRIPTION: &str = "Red teaming services for AI safety, security, and EU AI Act Article 5 compliance. Turn AI risk into AI readiness.";
const GENERIC_ERROR: &str = "Something went wrong. Please try again later.";

pub(crate) fn load_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("404.html", include_str!("../templates/404.html")),
        ("error.html", include_str!("../templates/error.html")),
    ])?;
    tera.register_filter("amount", amount_filter);
    Ok(tera)
}

fn amount_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let amount = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg(format!("amount filter expects a number, got {value}")))?;
    Ok(Value::String(format_amount(amount)))
}

#[derive(Debug, Serialize)]
struct PageMeta {
    title: &'static str,
    description: &'static str,
    canonical: String,
    og_image: String,
    year: i32,
    env: &'static str,
}

/// `scheme://host` as seen by the client, honouring a proxy's `X-Forwarded-Proto`.
pub(crate) fn request_origin(headers: &HeaderMap, port: u16) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format!("localhost:{port}"));
    format!("{scheme}://{host}")
}

pub(crate) async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let origin = request_origin(&headers, state.settings.port);
    let meta = PageMeta {
        title: SITE_TITLE,
        description: SITE_DESCRIPTION,
        canonical: format!("{origin}{uri}"),
        og_image: format!("{origin}/images/og-image.jpg"),
        year: Utc::now().year(),
        env: state.settings.environment.as_str(),
    };

    let mut ctx = match Context::from_serialize(&meta) {
        Ok(ctx) => ctx,
        Err(error) => return template_failure(&state, "index.html", error),
    };
    ctx.insert("questions", &QUESTIONS[..]);
    ctx.insert("wizard", &Wizard::new().view());
    ctx.insert("plans", &site_api::list_plans());
    ctx.insert("articles", &site_api::list_articles());
    ctx.insert("prompt", &site_api::article_prompt("5"));
    ctx.insert("resources", &resource_catalog());

    render(&state, "index.html", &ctx, StatusCode::OK)
}

pub(crate) async fn not_found(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let mut ctx = Context::new();
    ctx.insert("title", "Page Not Found - Aram Algorithm");
    ctx.insert("url", &uri.to_string());
    ctx.insert("year", &Utc::now().year());
    render(&state, "404.html", &ctx, StatusCode::NOT_FOUND)
}

fn render(state: &AppState, template: &str, ctx: &Context, status: StatusCode) -> Response {
    match state.templates.render(template, ctx) {
        Ok(body) => (status, Html(body)).into_response(),
        Err(error) => template_failure(state, template, error),
    }
}

fn template_failure(state: &AppState, template: &str, error: tera::Error) -> Response {
    error!(template, error = ?error, "failed to render template");
    internal_error(state, &error.to_string(), format!("{error:?}"))
}

/// Catch-all 500: an error page in production, the raw details otherwise.
pub(crate) fn internal_error(state: &AppState, message: &str, stack: String) -> Response {
    match state.settings.environment {
        Environment::Production => {
            let mut ctx = Context::new();
            ctx.insert("title", "Server Error - Aram Algorithm");
            ctx.insert("message", GENERIC_ERROR);
            ctx.insert("year", &Utc::now().year());
            match state.templates.render("error.html", &ctx) {
                Ok(body) => (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response(),
                Err(error) => {
                    error!(error = ?error, "failed to render error page");
                    (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR).into_response()
                }
            }
        }
        Environment::Development => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": message, "stack": stack })),
        )
            .into_response(),
    }
}

pub(crate) fn panic_handler(
    state: Arc<AppState>,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone {
    move |panic| {
        let message = panic_message(panic.as_ref());
        error!(%message, "request handler panicked");
        internal_error(&state, &message, Backtrace::force_capture().to_string())
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    }
}
