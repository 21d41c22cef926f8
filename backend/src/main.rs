use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use std::sync::Arc;

mod handlers {
    pub mod contact_handlers;
    pub mod contact_dtos;
}
mod utils {
    pub mod mailer;
}

use handlers::contact_handlers;
use utils::mailer::{MailTransport, SmtpMailer};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    // None when EMAIL_PASS is missing; the contact endpoint then records
    // messages instead of sending them.
    pub mailer: Option<Arc<dyn MailTransport>>,
}

pub fn validate_env() {
    if std::env::var("EMAIL_PASS").is_err() {
        tracing::warn!(
            "EMAIL_PASS is not set; contact messages will be logged but not emailed. \
             Set EMAIL_USER and EMAIL_PASS to enable email delivery"
        );
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    validate_env();

    let mailer = SmtpMailer::from_env().map(|m| Arc::new(m) as Arc<dyn MailTransport>);

    let state = Arc::new(AppState { mailer });

    // Create router with CORS
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // Be cautious with `Any` in production; restrict to your frontend origin
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:3001").await.unwrap();
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
