//! HTTP route handlers.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Form, Query, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::network::{AddStop, NetworkStatistics};
use crate::planner::{Algorithm, PathResult, Planner};

use super::dto::*;
use super::state::AppState;

/// How long browsers may cache a CORS preflight answer.
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stops", get(list_stops))
        .route("/graph", get(graph))
        .route("/route", get(find_route))
        .route("/statistics", get(statistics))
        .route("/search", get(search_stops))
        .route("/buses", get(list_buses))
        .route("/addstop", post(add_stop))
        .route("/addroute", post(add_route))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Cross-origin policy: any origin may call the API.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(CORS_MAX_AGE)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

/// All stops in insertion order.
async fn list_stops(State(state): State<AppState>) -> Json<Vec<String>> {
    let network = state.network.read().await;
    Json(network.stops().to_vec())
}

/// Adjacency dump of the network.
async fn graph(State(state): State<AppState>) -> Json<GraphResponse> {
    let network = state.network.read().await;
    Json(GraphResponse::from_network(&network))
}

/// Find a route between two stops.
///
/// Unknown stops are answered with a not-found result, not an error.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Json<PathResult> {
    let algorithm = Algorithm::from_selector(req.algo.as_deref());
    let network = state.network.read().await;
    let result = Planner::new(&network).find(algorithm, &req.from, &req.to);
    Json(result)
}

/// Network statistics.
async fn statistics(State(state): State<AppState>) -> Json<NetworkStatistics> {
    let network = state.network.read().await;
    Json(network.statistics())
}

/// Case-insensitive substring search over stop names.
async fn search_stops(
    State(state): State<AppState>,
    Query(req): Query<SearchQuery>,
) -> Json<Vec<String>> {
    let query = req.q.unwrap_or_default();
    let network = state.network.read().await;
    let matches = network.search_stops(&query);
    debug!(query = %query, matches = matches.len(), "searched stops");
    Json(matches)
}

/// Distinct bus labels.
async fn list_buses(State(state): State<AppState>) -> Json<Vec<String>> {
    let network = state.network.read().await;
    Json(network.bus_labels())
}

/// Add a stop. A duplicate name is reported, not treated as an error.
///
/// Parameters come from the query string or a url-encoded form body.
async fn add_stop(
    State(state): State<AppState>,
    Query(query): Query<AddStopRequest>,
    form: Option<Form<AddStopRequest>>,
) -> Result<Json<MutationResponse>, AppError> {
    let req = query.or_form(form.map(|Form(form)| form));
    let name = required(req.name, "name")?;

    let mut network = state.network.write().await;
    let response = match network.add_stop(name) {
        AddStop::Added => MutationResponse::ok("Stop added successfully"),
        AddStop::Duplicate => MutationResponse::rejected("Stop already exists"),
    };
    Ok(Json(response))
}

/// Add a bidirectional route.
///
/// Endpoints need not be registered stops. Distance must be a finite,
/// non-negative number and fare a non-negative integer. Parameters come from
/// the query string or a url-encoded form body.
async fn add_route(
    State(state): State<AppState>,
    Query(query): Query<AddRouteRequest>,
    form: Option<Form<AddRouteRequest>>,
) -> Result<Json<MutationResponse>, AppError> {
    let req = query.or_form(form.map(|Form(form)| form));
    let from = required(req.from, "from")?;
    let to = required(req.to, "to")?;
    let bus = required(req.bus, "bus")?;

    let distance_text = required(req.distance, "distance")?;
    let distance: f64 = distance_text
        .trim()
        .parse()
        .ok()
        .filter(|d: &f64| d.is_finite() && *d >= 0.0)
        .ok_or_else(|| AppError::BadRequest {
            message: format!("Invalid distance: {distance_text}"),
        })?;

    let fare_text = required(req.fare, "fare")?;
    let fare: u32 = fare_text.trim().parse().map_err(|_| AppError::BadRequest {
        message: format!("Invalid fare: {fare_text}"),
    })?;

    let mut network = state.network.write().await;
    network.add_route(&from, &to, distance, fare, &bus);
    Ok(Json(MutationResponse::ok("Route added successfully")))
}

/// Unwrap a required request parameter.
fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::BadRequest {
        message: format!("Missing parameter: {name}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
