//! HTTP API module for the severance engine.
//!
//! This module provides the REST endpoints for vacation balances and
//! severance settlements.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LeaveRequest, SeveranceRequest, VacationBalanceRequest};
pub use response::{
    ApiError, ApiErrorResponse, ENGINE_VERSION, SeveranceResponse, VacationBalanceResponse,
};
pub use state::AppState;
