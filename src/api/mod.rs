//! HTTP API surface
//!
//! One route: `GET /weather?city={name}`. The response body is the fixed
//! JSON contract the frontend consumes; errors carry a machine-readable
//! kind next to a human-readable message.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SkycastError;
use crate::models::{Location, WeatherReport, WeatherSnapshot};
use crate::service::WeatherService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
}

impl AppState {
    pub fn new(service: WeatherService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub city: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiLocation {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ApiConditions {
    pub observed_at: String,
    pub temperature_c: f32,
    pub humidity_pct: u8,
    pub wind_speed_mps: f32,
    pub condition_code: String,
    pub condition_description: String,
    pub icon_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiWeatherReport {
    pub location: ApiLocation,
    pub current: ApiConditions,
    pub forecast: Vec<ApiConditions>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub kind: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

impl From<&Location> for ApiLocation {
    fn from(location: &Location) -> Self {
        Self {
            city: location.city.clone(),
            country: location.country.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

impl From<&WeatherSnapshot> for ApiConditions {
    fn from(snapshot: &WeatherSnapshot) -> Self {
        Self {
            observed_at: snapshot.observed_at.to_rfc3339(),
            temperature_c: snapshot.temperature_c,
            humidity_pct: snapshot.humidity_pct,
            wind_speed_mps: snapshot.wind_speed_mps,
            condition_code: snapshot.condition_code.clone(),
            condition_description: snapshot.condition_description.clone(),
            icon_id: snapshot.icon_id.clone(),
        }
    }
}

impl From<&WeatherReport> for ApiWeatherReport {
    fn from(report: &WeatherReport) -> Self {
        Self {
            location: ApiLocation::from(&report.location),
            current: ApiConditions::from(&report.current),
            forecast: report.forecast.iter().map(ApiConditions::from).collect(),
        }
    }
}

/// Error wrapper that renders the taxonomy as status + JSON body
pub struct ApiError(SkycastError);

impl From<SkycastError> for ApiError {
    fn from(err: SkycastError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self.0 {
            SkycastError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            SkycastError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            SkycastError::Upstream { .. } => (StatusCode::BAD_GATEWAY, "upstream_error"),
            SkycastError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, "upstream_timeout"),
            SkycastError::Config { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };

        if status.is_server_error() {
            warn!("Request failed: {}", self.0);
        }

        let body = ApiErrorBody {
            error: ApiErrorDetail {
                kind: kind.to_string(),
                message: self.0.user_message(),
            },
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .with_state(state)
}

async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<ApiWeatherReport>, ApiError> {
    let report = state.service.weather_for_city(&query.city).await?;
    Ok(Json(ApiWeatherReport::from(&report)))
}
