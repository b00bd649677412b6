//! HTTP route handlers.

use std::path::Path;
use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::planner::RouteError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/directions", get(directions))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the station pickers.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = IndexTemplate::from_graph(state.planner.graph())
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

    Ok(Html(html))
}

/// Every station with the lines calling there.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    Json(StationListResponse::from_graph(state.planner.graph()))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Directions between two stations.
async fn directions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<DirectionsRequest>,
) -> Response {
    let html = accepts_html(&headers);

    match plan(&state, req).await {
        Ok(response) if html => response.html,
        Ok(response) => response.json,
        Err(err) if html => err.into_html_response(),
        Err(err) => err.into_response(),
    }
}

/// Both renderings of a successful answer.
struct Planned {
    html: Response,
    json: Response,
}

async fn plan(state: &AppState, req: DirectionsRequest) -> Result<Planned, AppError> {
    if req.from.trim().is_empty() || req.to.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "both a start and a destination station are required".to_string(),
        });
    }

    let planner = Arc::clone(&state.planner);
    let (from, to) = (req.from, req.to);
    let directions = tokio::task::spawn_blocking(move || planner.get_directions(&from, &to))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("route query failed: {}", e),
        })??;

    debug!(
        from = %directions.from(),
        to = %directions.to(),
        hops = directions.hops(),
        "answered directions query"
    );

    let html = DirectionsTemplate::from_directions(&directions)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

    Ok(Planned {
        html: Html(html).into_response(),
        json: Json(DirectionsResponse::from_directions(&directions)).into_response(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
    },
    NotFound {
        kind: NotFoundKind,
        message: String,
        suggestions: Vec<String>,
    },
    Internal {
        message: String,
    },
}

/// What a 404 could not find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Station,
    Route,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message, .. }
            | AppError::Internal { message } => message,
        }
    }

    fn log(&self) {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, message = self.message(), "request failed");
        } else {
            warn!(%status, message = self.message(), "request rejected");
        }
    }

    /// Render as an HTML error fragment with the same status.
    fn into_html_response(self) -> Response {
        self.log();
        let status = self.status();
        let title = match &self {
            AppError::BadRequest { .. } => "Invalid request",
            AppError::NotFound {
                kind: NotFoundKind::Station,
                ..
            } => "Unknown station",
            AppError::NotFound {
                kind: NotFoundKind::Route,
                ..
            } => "No route",
            AppError::Internal { .. } => "Something went wrong",
        };
        let message = self.message().to_string();
        let suggestions = match self {
            AppError::NotFound { suggestions, .. } => suggestions,
            _ => Vec::new(),
        };

        let template = ErrorTemplate {
            title: title.to_string(),
            message,
            suggestions,
        };
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response(),
        }
    }
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::StationNotFound(err) => AppError::NotFound {
                kind: NotFoundKind::Station,
                message: err.to_string(),
                suggestions: err.suggestions,
            },
            RouteError::InvalidQuery(message) => AppError::BadRequest { message },
            RouteError::NoRouteFound { .. } => AppError::NotFound {
                kind: NotFoundKind::Route,
                message: e.to_string(),
                suggestions: Vec::new(),
            },
            RouteError::Integrity(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();

        let body = match self {
            AppError::NotFound {
                message,
                suggestions,
                ..
            } => ErrorResponse {
                error: message,
                suggestions,
            },
            AppError::BadRequest { message } | AppError::Internal { message } => ErrorResponse {
                error: message,
                suggestions: Vec::new(),
            },
        };

        (status, Json(body)).into_response()
    }
}
