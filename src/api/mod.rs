//! HTTP API module for the childcare benefit engine.
//!
//! This module provides the REST API endpoints for calculating benefits,
//! validating salaries and inspecting the loaded statutory rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ValidationRequest};
pub use response::{ApiError, CalculationResponse, RateSnapshotSummary, RatesResponse};
pub use state::AppState;
