//! API route handlers

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use forecast_facade::{
    render_insight, DashboardMetrics, DashboardSession, FitResult, ForecastError, ForecastPoint,
    GaussianNoise, Insight, Language, NoiseSource, Recommendation, SalesRecord, Sample,
    SeriesError,
};
use serde::{Deserialize, Serialize};
use std::sync::MutexGuard;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ErrorResponse {
    fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status,
        }
    }
}

impl From<ForecastError> for ErrorResponse {
    fn from(err: ForecastError) -> Self {
        let status = match &err {
            ForecastError::InsufficientData { .. }
            | ForecastError::DegenerateFit(_)
            | ForecastError::InvalidParameter { .. }
            | ForecastError::Series(SeriesError::InvalidSample(_))
            | ForecastError::Series(SeriesError::NoData) => StatusCode::UNPROCESSABLE_ENTITY,
            ForecastError::Series(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

type ApiResult<T> = Result<T, ErrorResponse>;

fn lock(state: &AppState) -> ApiResult<MutexGuard<'_, DashboardSession>> {
    state.session.lock().map_err(|_| {
        ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "session state is unavailable")
    })
}

fn parse_language(code: Option<&str>) -> ApiResult<Language> {
    match code {
        Some(code) => Ok(code.parse()?),
        None => Ok(Language::default()),
    }
}

pub async fn list_series(State(state): State<AppState>) -> ApiResult<Json<Vec<SalesRecord>>> {
    Ok(Json(lock(&state)?.records()))
}

#[derive(Debug, Deserialize)]
pub struct AppendRequest {
    pub label: String,
    pub value: f64,
}

pub async fn append_sample(
    State(state): State<AppState>,
    Json(req): Json<AppendRequest>,
) -> ApiResult<(StatusCode, Json<Sample>)> {
    let sample = lock(&state)?.append(req.label, req.value)?;
    Ok((StatusCode::CREATED, Json(sample)))
}

pub async fn clear_series(State(state): State<AppState>) -> ApiResult<StatusCode> {
    lock(&state)?.clear();
    tracing::info!("series cleared");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn export_series(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let csv = lock(&state)?.export_csv()?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv))
}

pub async fn metrics(State(state): State<AppState>) -> ApiResult<Json<DashboardMetrics>> {
    Ok(Json(lock(&state)?.metrics()))
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastRequest {
    /// Overrides the configured seed for this run
    pub seed: Option<u64>,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub fit: FitResult,
    pub forecast: Vec<ForecastPoint>,
    pub insight: Insight,
    pub recommendation: Recommendation,
    pub lines: Vec<String>,
}

/// Run a forecast on the current series. The body is optional.
pub async fn forecast(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ForecastResponse>> {
    let req: ForecastRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ForecastRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            ErrorResponse::new(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e))
        })?
    };
    let lang = parse_language(req.lang.as_deref())?;

    let mut noise: Box<dyn NoiseSource + Send> = match req.seed {
        Some(seed) => Box::new(GaussianNoise::seeded(seed)),
        None => state.config.noise(),
    };

    let mut session = lock(&state)?;
    let report = session.generate_forecast(noise.as_mut())?;

    Ok(Json(ForecastResponse {
        fit: report.fit,
        forecast: report.points.clone(),
        insight: report.insight,
        recommendation: report.insight.recommendation(),
        lines: render_insight(&report.insight, lang),
    }))
}

#[derive(Debug, Deserialize)]
pub struct InsightQuery {
    pub lang: Option<String>,
}

pub async fn insights(
    State(state): State<AppState>,
    Query(query): Query<InsightQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let lang = parse_language(query.lang.as_deref())?;
    let lines = lock(&state)?.insight_lines(lang).ok_or_else(|| {
        ErrorResponse::new(StatusCode::NOT_FOUND, "No forecast has been generated yet")
    })?;

    Ok(Json(serde_json::json!({
        "lang": lang.code(),
        "rtl": lang.is_rtl(),
        "lines": lines,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use axum::{body::Body, http::Request, Router};
    use forecast_facade::{ForecastConfig, InMemorySeriesStore};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = ForecastConfig::default();
        let session =
            DashboardSession::new(InMemorySeriesStore::with_sample_data(), &config).unwrap();
        app(AppState::new(session, config))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Bytes) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes)
    }

    fn as_json(bytes: &Bytes) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body)["status"], "alive");
    }

    #[tokio::test]
    async fn test_list_and_append_series() {
        let app = test_app();

        let (status, body) = send(&app, "GET", "/api/v1/series", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body).as_array().unwrap().len(), 6);

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/series",
            Some(json!({"label": "Jul", "value": 70000})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(as_json(&body)["period"], 6);

        let (_, body) = send(&app, "GET", "/api/v1/series", None).await;
        assert_eq!(as_json(&body)[6]["label"], "Jul");
    }

    #[tokio::test]
    async fn test_invalid_sample_is_rejected() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/series",
            Some(json!({"label": "Jul", "value": -1})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(as_json(&body)["error"].as_str().unwrap().contains("negative"));
    }

    #[tokio::test]
    async fn test_metrics() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/api/v1/metrics", None).await;
        assert_eq!(status, StatusCode::OK);
        let json = as_json(&body);
        assert_eq!(json["count"], 6);
        assert_eq!(json["total"], 331000.0);
        assert_eq!(json["trend"], "increasing");
    }

    #[tokio::test]
    async fn test_forecast_then_insights() {
        let app = test_app();

        let (status, _) = send(&app, "GET", "/api/v1/insights", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/forecast",
            Some(json!({"seed": 42, "lang": "en"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let json = as_json(&body);
        assert_eq!(json["forecast"].as_array().unwrap().len(), 6);
        assert_eq!(json["forecast"][0]["period"], 6);
        assert_eq!(json["insight"]["direction"], "increasing");
        assert_eq!(json["recommendation"], "growth");
        assert_eq!(json["lines"].as_array().unwrap().len(), 5);

        let (status, body) = send(&app, "GET", "/api/v1/insights?lang=ar", None).await;
        assert_eq!(status, StatusCode::OK);
        let json = as_json(&body);
        assert_eq!(json["lang"], "ar");
        assert_eq!(json["rtl"], true);
    }

    #[tokio::test]
    async fn test_seeded_forecast_is_reproducible() {
        let app = test_app();
        let (_, a) = send(&app, "POST", "/api/v1/forecast", Some(json!({"seed": 7}))).await;
        let (_, b) = send(&app, "POST", "/api/v1/forecast", Some(json!({"seed": 7}))).await;
        assert_eq!(as_json(&a)["forecast"], as_json(&b)["forecast"]);
    }

    #[tokio::test]
    async fn test_forecast_without_body() {
        let app = test_app();
        let (status, _) = send(&app, "POST", "/api/v1/forecast", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_language() {
        let app = test_app();
        let (status, _) = send(&app, "POST", "/api/v1/forecast", Some(json!({"lang": "fr"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_clear_then_forecast_fails() {
        let app = test_app();
        send(&app, "POST", "/api/v1/forecast", Some(json!({"seed": 1}))).await;

        let (status, _) = send(&app, "DELETE", "/api/v1/series", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", "/api/v1/insights", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, "POST", "/api/v1/forecast", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(as_json(&body)["error"].as_str().unwrap().contains("3"));
    }

    #[tokio::test]
    async fn test_export_csv() {
        let app = test_app();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/series/export")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with("Month,Sales"));
        assert!(text.contains("Jan,45000"));
    }
}
