//! API request handlers for the lead store

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lead_common::Lead;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::storage::LeadRepository;

/// Shared application state
pub struct AppState {
    pub storage: Mutex<Box<dyn LeadRepository>>,
}

impl AppState {
    pub fn new(storage: Box<dyn LeadRepository>) -> Self {
        Self {
            storage: Mutex::new(storage),
        }
    }
}

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });

        (self.status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<lead_common::Error> for ApiError {
    fn from(err: lead_common::Error) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// Response from lead submission
#[derive(Debug, Serialize)]
pub struct SubmitLeadResponse {
    pub success: bool,
    pub message: String,
}

/// List of leads
#[derive(Debug, Serialize)]
pub struct LeadsListResponse {
    pub leads: Vec<Lead>,
    pub total: usize,
}

/// Lead count
#[derive(Debug, Serialize)]
pub struct LeadCountResponse {
    pub count: usize,
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "lead-store"
    }))
}

/// Store a lead submitted from a landing page form
pub async fn submit_lead_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Lead>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitLeadResponse>), ApiError> {
    let Json(lead) = payload.map_err(|rejection| {
        warn!("Rejected lead body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    if let Err(err) = lead.validate() {
        warn!("Rejected lead from {:?}: {}", lead.business_name, err);
        return Err(err.into());
    }

    info!("Submitting lead for business: {}", lead.business_name);

    let mut storage = state.storage.lock().await;
    storage.append_lead(&lead).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitLeadResponse {
            success: true,
            message: format!("Lead submitted for business: {}", lead.business_name),
        }),
    ))
}

/// List all leads in submission order
pub async fn list_leads_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LeadsListResponse>, ApiError> {
    info!("Listing all leads");

    let mut storage = state.storage.lock().await;
    let leads = storage.list_leads().await?;
    let total = leads.len();

    Ok(Json(LeadsListResponse { leads, total }))
}

/// Count stored leads
pub async fn count_leads_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LeadCountResponse>, ApiError> {
    let mut storage = state.storage.lock().await;
    let count = storage.count_leads().await?;

    Ok(Json(LeadCountResponse { count }))
}
