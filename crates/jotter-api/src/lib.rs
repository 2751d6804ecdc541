//! jotter-api - HTTP API for jotter notes.
//!
//! The binary in `main.rs` wires configuration, the database and the
//! summarizer into [`AppState`] and serves [`build_router`].

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use jotter_core::{defaults, Note, NoteInput, NoteRepository};
use jotter_inference::Summarizer;

pub use error::ApiError;
pub use services::NoteService;

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::now_v7().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteService,
}

impl AppState {
    pub fn new(repo: Arc<dyn NoteRepository>, summarizer: Summarizer) -> Self {
        Self {
            notes: NoteService::new(repo, summarizer),
        }
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// OpenAPI document served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jotter API",
        description = "Note CRUD with AI-generated summaries"
    ),
    paths(
        handlers::notes::list_notes,
        handlers::notes::create_note,
        handlers::notes::get_note,
        handlers::notes::update_note,
        handlers::notes::delete_note,
        handlers::health::health_check,
    ),
    components(schemas(
        Note,
        NoteInput,
        error::ErrorDetail,
        error::ValidationErrorBody,
        error::MessageBody,
        handlers::HealthResponse,
    )),
    tags(
        (name = "Notes", description = "Note CRUD operations"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

/// Build the application router with all middleware attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/notes/:id",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
        // Oversized bodies surface as a JSON rejection inside the extractor.
        .layer(DefaultBodyLimit::max(defaults::MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .with_state(state)
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let message = err
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(subsystem = "api", error = %message, "Handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(error::MessageBody {
            detail: error::INTERNAL_SERVER_ERROR.to_string(),
        }),
    )
        .into_response()
}
