//! HTTP API module for the leave engine.
//!
//! This module provides REST endpoints for managing employees and their
//! leave ledgers, computing tenure and leave statements, and listing
//! upcoming medical examinations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AdjustmentRequest, AsOfQuery, LedgerEntryRequest, ReminderQuery, StatementRequest,
    UsageRequest,
};
pub use response::{ApiError, ApiErrorResponse, TenureResponse};
pub use state::AppState;
