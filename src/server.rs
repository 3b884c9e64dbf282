//! Grafana JSON-datasource endpoints plus workout upload.
//!
//! Handlers only decode, delegate to the store / query translator, and map
//! errors to status codes.

use crate::dlog;
use crate::error::{IngestError, QueryError};
use crate::query::{QueryRequest, translate};
use crate::store::WorkoutStore;
use crate::types::{Metric, MetricSeries, Workout};
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// The only tag key offered to Grafana's ad-hoc filter picker.
pub const WORKOUT_TAG_KEY: &str = "Workout";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WorkoutStore>,
}

impl AppState {
    pub const fn new(store: Arc<WorkoutStore>) -> Self {
        Self { store }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Conflict(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
        };
        tracing::warn!(status = status.as_u16(), %message, "request rejected");
        (status, Json(ApiError { code, message })).into_response()
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::Conflict(_) => Self::Conflict(err.to_string()),
            IngestError::UnrenderableTimestamp(_) => Self::BadRequest(err.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TagKey {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TagValue {
    pub text: String,
}

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(index))
        .route("/search", get(search).post(search))
        .route("/query", get(query).post(query))
        .route("/tag-keys", get(tag_keys).post(tag_keys))
        .route("/tag-values", get(tag_values).post(tag_values))
        .route("/push", post(push))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Probe: Grafana's "Save & Test".
async fn index() -> StatusCode {
    StatusCode::OK
}

async fn search() -> Json<Vec<&'static str>> {
    Json(Metric::ALL.iter().map(|m| m.name()).collect())
}

async fn tag_keys() -> Json<Vec<TagKey>> {
    Json(vec![TagKey {
        kind: "string",
        text: WORKOUT_TAG_KEY,
    }])
}

async fn tag_values(State(state): State<AppState>) -> Json<Vec<TagValue>> {
    let values = state
        .store
        .tag_values()
        .into_iter()
        .map(|text| TagValue { text })
        .collect();
    Json(values)
}

async fn query(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<MetricSeries>>, AppError> {
    if state.store.is_empty() {
        dlog!("query against empty store, body not decoded");
        return Ok(Json(Vec::new()));
    }

    // Grafana probes some endpoints with a bodyless GET.
    let request: QueryRequest = if body.is_empty() {
        QueryRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("invalid query body: {e}")))?
    };

    let series = translate(&state.store, &request)?;
    dlog!(
        "query answered targets={} series={}",
        request.targets.len(),
        series.len()
    );
    Ok(Json(series))
}

async fn push(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, AppError> {
    let workout: Workout = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid workout body: {e}")))?;

    let timestamp = workout.timestamp;
    let heartrate = workout.heartrate.len();
    let location = workout.location.len();
    let label = state.store.ingest(workout)?;

    tracing::info!(
        timestamp,
        %label,
        heartrate,
        location,
        "imported workout"
    );
    Ok(StatusCode::OK)
}
