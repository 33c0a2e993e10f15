use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::{
    adapters::NetworkSnapshot,
    fare::RiderCategory,
    network::{Metric, PathError, StationId},
    query::{PathQuery, query},
};

#[derive(Clone, Debug, Deserialize)]
pub struct PathParams {
    pub source: u64,
    pub target: u64,
    #[serde(rename = "type")]
    pub path_type: Option<String>,
    pub age: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResponse {
    pub stations: Vec<StationResponse>,
    pub distance: u32,
    pub duration: u32,
    pub fare: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Path(PathError::UnknownStation(_) | PathError::NoPath { .. }) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Path(PathError::SameStation(_)) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Path(PathError::EmptyNetwork | PathError::InvalidDistance(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub fn create_router(snapshot: Arc<NetworkSnapshot>) -> Router {
    Router::new()
        .route("/paths", get(find_path))
        .route("/health", get(health))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(snapshot)
}

pub async fn serve(snapshot: NetworkSnapshot, bind: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    info!(
        addr = %listener.local_addr()?,
        stations = snapshot.station_count(),
        segments = snapshot.segments().len(),
        "serving path queries"
    );

    axum::serve(listener, create_router(Arc::new(snapshot)))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;

    Ok(())
}

/// Resolves query parameters against a snapshot and prices the route.
pub fn route(snapshot: &NetworkSnapshot, params: &PathParams) -> Result<PathResponse, ApiError> {
    let metric = match params.path_type.as_deref() {
        Some(s) => s
            .parse::<Metric>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        None => Metric::default(),
    };
    let rider = params
        .age
        .map(RiderCategory::from_age)
        .unwrap_or_default();

    let request = PathQuery::new(
        StationId::new(params.source),
        StationId::new(params.target),
        metric,
        rider,
    );
    let result = query(&request, snapshot.segments())?;

    let stations = result
        .stations
        .iter()
        .map(|&id| StationResponse {
            id,
            name: snapshot
                .station(id)
                .map(|s| s.name.clone())
                .unwrap_or_default(),
        })
        .collect();

    Ok(PathResponse {
        stations,
        distance: result.distance,
        duration: result.duration,
        fare: result.fare,
    })
}

async fn find_path(
    State(snapshot): State<Arc<NetworkSnapshot>>,
    Query(params): Query<PathParams>,
) -> Result<Json<PathResponse>, ApiError> {
    match route(&snapshot, &params) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            warn!(source = params.source, target = params.target, "path query failed: {e}");
            Err(e)
        }
    }
}

async fn health() -> &'static str {
    "OK"
}
