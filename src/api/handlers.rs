//! HTTP request handlers for the severance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_settlement, compute_vacation_balance};
use crate::models::{BalanceStatus, LeaveInterval};

use super::request::{SeveranceRequest, VacationBalanceRequest};
use super::response::{
    ApiError, ApiErrorResponse, ENGINE_VERSION, SeveranceResponse, VacationBalanceResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/vacation-balance", post(vacation_balance_handler))
        .route("/severance", post(severance_handler))
        .with_state(state)
}

/// Handler for POST /vacation-balance.
///
/// A missing start date is not an error here: the response carries a zeroed
/// balance with status `missing_start_date`.
async fn vacation_balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<VacationBalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let reference_date = request
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let intervals: Vec<LeaveInterval> =
        request.leave_requests.into_iter().map(Into::into).collect();

    let balance = match compute_vacation_balance(
        request.service_start,
        reference_date,
        &intervals,
        state.policy(),
    ) {
        Ok(balance) => balance,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Vacation balance failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return json_response(api_error.status, api_error.error);
        }
    };

    if balance.status == BalanceStatus::MissingStartDate {
        warn!(
            correlation_id = %correlation_id,
            employee_id = request.employee_id.as_deref().unwrap_or("unknown"),
            "No start date on record, returning zeroed balance"
        );
    } else {
        info!(
            correlation_id = %correlation_id,
            reference_date = %reference_date,
            entitlement = balance.entitlement,
            taken = balance.taken,
            available = balance.available,
            "Vacation balance computed"
        );
    }

    json_response(
        StatusCode::OK,
        VacationBalanceResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            employee_id: request.employee_id,
            balance,
        },
    )
}

/// Handler for POST /severance.
async fn severance_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeveranceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing severance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let input = request.into_input(Utc::now().date_naive());

    let start_time = Instant::now();
    match compute_settlement(&input, state.policy()) {
        Ok(statement) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                termination_date = %statement.termination_date,
                notice_days = statement.notice_days,
                net = %statement.totals.net,
                warnings = statement.audit_trace.warnings.len(),
                duration_us = duration.as_micros(),
                "Settlement computed successfully"
            );
            json_response(
                StatusCode::OK,
                SeveranceResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: ENGINE_VERSION.to_string(),
                    duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
                    statement,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Settlement failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
