use crate::error::ApiError;
use crate::store::FeedbackStore;
use bytes::Bytes;
use http_body_util::Full;
use hyper::{Method, Response, StatusCode};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use survey_core::{FeedbackRecord, NewFeedback};
use survey_metrics::SurveyMetrics;
use survey_report::SurveyReport;
use tracing::{debug, info, warn};

pub type HttpBody = Full<Bytes>;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<FeedbackStore>>,
    pub metrics: Arc<SurveyMetrics>,
}

impl AppState {
    pub fn new(store: FeedbackStore, metrics: SurveyMetrics) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            metrics: Arc::new(metrics),
        }
    }

    fn records(&self) -> Result<Vec<FeedbackRecord>, ApiError> {
        let store = self
            .store
            .lock()
            .map_err(|_| ApiError::Internal("feedback table lock poisoned".into()))?;
        Ok(store.all())
    }

    fn report(&self) -> Result<SurveyReport, ApiError> {
        let report = SurveyReport::now(&self.records()?);
        self.metrics.observe_report(&report);
        Ok(report)
    }
}

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response<HttpBody>, ApiError> {
    let body = serde_json::to_vec(value).map_err(|e| ApiError::Internal(e.to_string()))?;
    Response::builder()
        .status(status)
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .body(Full::from(Bytes::from(body)))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

fn insert_feedback(state: &AppState, body: &[u8]) -> Result<Response<HttpBody>, ApiError> {
    let new: NewFeedback =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedPayload(e.to_string()))?;
    let viewed = new.viewed();

    let stored = {
        let mut store = state
            .store
            .lock()
            .map_err(|_| ApiError::Internal("feedback table lock poisoned".into()))?;
        store.insert(new)?
    };

    state
        .metrics
        .observe_submission(stored.preferred_color, viewed);
    info!(id = %stored.id, theme = %stored.preferred_color, "feedback row stored");
    json_response(StatusCode::CREATED, &stored)
}

fn route(state: &AppState, method: &Method, path: &str, body: &[u8]) -> Result<Response<HttpBody>, ApiError> {
    match (method, path) {
        (&Method::POST, "/feedback") => insert_feedback(state, body),
        (&Method::GET, "/feedback") => json_response(StatusCode::OK, &state.records()?),
        (&Method::GET, "/feedback/summary") => json_response(StatusCode::OK, &state.report()?),
        (&Method::GET, "/metrics") => {
            state.report()?;
            let text = state
                .metrics
                .render()
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            Response::builder()
                .status(StatusCode::OK)
                .header(hyper::header::CONTENT_TYPE, "text/plain; version=0.0.4")
                .body(Full::from(Bytes::from(text)))
                .map_err(|e| ApiError::Internal(e.to_string()))
        }
        (&Method::GET, "/health") => {
            json_response(StatusCode::OK, &serde_json::json!({ "status": "ok" }))
        }
        _ => Err(ApiError::NotFound),
    }
}

/// Routes one request whose body has already been read.
pub fn dispatch(state: &AppState, method: &Method, path: &str, body: &[u8]) -> Response<HttpBody> {
    debug!(%method, path, "request");
    match route(state, method, path, body) {
        Ok(response) => response,
        Err(e) => {
            if matches!(method, &Method::POST) {
                state.metrics.observe_rejection(e.reason());
            }
            if e.status().is_server_error() {
                warn!(%method, path, error = %e, "request failed");
            }
            e.into_response()
        }
    }
}
