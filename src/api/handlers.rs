//! HTTP request handlers for the childcare benefit engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{Evaluation, validate_optional_input};
use crate::error::EngineResult;

use super::request::{CalculationRequest, ValidationRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, RateSnapshotSummary, RatesResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/validate", post(validate_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
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

/// Handler for POST /calculate endpoint.
///
/// Validates the salary, calculates against the applicable rates and wraps
/// the result in a [`CalculationResponse`].
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_calculation(&state, &request) {
        Ok(evaluation) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                salary = evaluation.result.input.salary,
                net_income = evaluation.result.current.net_income,
                benefit_total = evaluation.result.childcare.total,
                warning = evaluation.warning.is_some(),
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            json_response(
                StatusCode::OK,
                CalculationResponse::new(correlation_id, evaluation),
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Resolves the rates for a request and evaluates it.
fn perform_calculation(state: &AppState, request: &CalculationRequest) -> EngineResult<Evaluation> {
    let input = request.to_input()?;
    let calculator = state.calculator(request.effective_date)?;
    calculator.evaluate(&input)
}

/// Handler for POST /validate endpoint.
///
/// Classifies a salary against the newest validation limits.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let outcome = validate_optional_input(request.salary, &state.config().latest().validation);
    info!(
        correlation_id = %correlation_id,
        salary = ?request.salary,
        allows_calculation = outcome.allows_calculation(),
        "Validated salary"
    );
    json_response(StatusCode::OK, outcome)
}

/// Handler for GET /rates endpoint.
async fn rates_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    let snapshots = config
        .config()
        .rates()
        .iter()
        .map(|rates| RateSnapshotSummary {
            effective_date: rates.effective_date,
            fiscal_year: rates.fiscal_year.clone(),
        })
        .collect();

    json_response(
        StatusCode::OK,
        RatesResponse {
            scheme: config.scheme().clone(),
            snapshots,
            current: config.latest().clone(),
        },
    )
}
