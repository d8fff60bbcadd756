//! HTTP request handlers for the leave engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_leave_statement, exam_reminders, service_summary};
use crate::error::EngineError;
use crate::models::{Employee, LedgerEntryKind};
use crate::store::EmployeeRepository;

use super::request::{
    AdjustmentRequest, AsOfQuery, ReminderQuery, StatementRequest, UsageRequest,
};
use super::response::{ApiError, ApiErrorResponse, TenureResponse};
use super::state::AppState;

type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/statement", post(statement_handler))
        .route("/employees", get(list_employees_handler).post(create_employee_handler))
        .route(
            "/employees/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/employees/:id/tenure", get(tenure_handler))
        .route("/employees/:id/statement", get(employee_statement_handler))
        .route("/employees/:id/ledger", get(list_ledger_handler))
        .route("/employees/:id/ledger/usage", post(record_usage_handler))
        .route("/employees/:id/ledger/adjustments", post(record_adjustment_handler))
        .route("/employees/:id/ledger/:entry_id", delete(delete_ledger_entry_handler))
        .route("/medical/reminders", get(medical_reminders_handler))
        .with_state(state)
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn json_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> HandlerResult<T> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

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
    Err(ApiErrorResponse::bad_request(error))
}

/// Logs an engine error against the request before it is returned.
fn log_failure(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    error.into()
}

/// Handler for POST /statement.
///
/// Computes a statement from an employee record and ledger supplied in the
/// request body. Nothing is read from or written to the store.
async fn statement_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatementRequest>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statement request");

    let request = json_body(correlation_id, payload)?;
    let as_of = request.as_of.unwrap_or_else(today);
    let entries = request.ledger_entries();

    let start_time = Instant::now();
    let statement = build_leave_statement(&request.employee, &entries, as_of, state.config().ledger());

    info!(
        correlation_id = %correlation_id,
        employee_id = %statement.employee_id,
        as_of = %as_of,
        entitlement = statement.entitlement.total_days,
        remaining = statement.remaining_days,
        warnings = statement.audit_trace.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Statement completed"
    );
    Ok(Json(statement))
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    let employees = state.store().read().list_employees();
    Json(employees)
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<Employee>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let employee = json_body(correlation_id, payload)?;

    state
        .store()
        .write()
        .add_employee(employee.clone())
        .map_err(|e| log_failure(correlation_id, e))?;

    info!(correlation_id = %correlation_id, employee_id = %employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<impl IntoResponse> {
    let employee = state.store().read().get_employee(&id)?;
    Ok(Json(employee))
}

/// Handler for PUT /employees/:id.
///
/// The id in the body must match the path.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Employee>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let employee = json_body(correlation_id, payload)?;

    if employee.id != id {
        warn!(
            correlation_id = %correlation_id,
            path_id = %id,
            body_id = %employee.id,
            "Employee id mismatch"
        );
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            format!("Body id '{}' does not match path id '{}'", employee.id, id),
        )));
    }

    state
        .store()
        .write()
        .update_employee(employee.clone())
        .map_err(|e| log_failure(correlation_id, e))?;

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee updated");
    Ok(Json(employee))
}

/// Handler for DELETE /employees/:id.
///
/// Removes the employee together with their ledger.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    state
        .store()
        .write()
        .delete_employee(&id)
        .map_err(|e| log_failure(correlation_id, e))?;

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /employees/:id/tenure.
async fn tenure_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AsOfQuery>,
) -> HandlerResult<impl IntoResponse> {
    let employee = state.store().read().get_employee(&id)?;
    let as_of = query.as_of.unwrap_or_else(today);

    Ok(Json(TenureResponse {
        employee_id: employee.id.clone(),
        as_of,
        service: service_summary(&employee, as_of),
    }))
}

/// Handler for GET /employees/:id/statement.
async fn employee_statement_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AsOfQuery>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing statement request");

    let (employee, entries) = {
        let store = state.store().read();
        let employee = store
            .get_employee(&id)
            .map_err(|e| log_failure(correlation_id, e))?;
        let entries = store.list_ledger_entries(&id)?;
        (employee, entries)
    };
    let as_of = query.as_of.unwrap_or_else(today);

    let start_time = Instant::now();
    let statement = build_leave_statement(&employee, &entries, as_of, state.config().ledger());

    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        as_of = %as_of,
        entitlement = statement.entitlement.total_days,
        remaining = statement.remaining_days,
        duration_us = start_time.elapsed().as_micros(),
        "Statement completed"
    );
    Ok(Json(statement))
}

/// Handler for GET /employees/:id/ledger.
async fn list_ledger_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<impl IntoResponse> {
    let entries = state.store().read().list_ledger_entries(&id)?;
    Ok(Json(entries))
}

/// Handler for POST /employees/:id/ledger/usage.
///
/// Rejects ranges that end before they start.
async fn record_usage_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UsageRequest>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let request = json_body(correlation_id, payload)?;

    if request.end_date < request.start_date {
        return Err(log_failure(
            correlation_id,
            EngineError::InvalidLedgerEntry {
                message: format!(
                    "leave ends on {} before it starts on {}",
                    request.end_date, request.start_date
                ),
            },
        ));
    }

    let entry = state
        .store()
        .write()
        .append_ledger_entry(&id, LedgerEntryKind::usage(request.start_date, request.end_date))
        .map_err(|e| log_failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        entry_id = entry.id,
        days = entry.kind.usage_days().unwrap_or(0),
        "Leave usage recorded"
    );
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Handler for POST /employees/:id/ledger/adjustments.
async fn record_adjustment_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AdjustmentRequest>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let request = json_body(correlation_id, payload)?;

    let kind = LedgerEntryKind::adjustment(
        request.days,
        request.operation,
        request.effective_date.unwrap_or_else(today),
        request.note,
    );
    let entry = state
        .store()
        .write()
        .append_ledger_entry(&id, kind)
        .map_err(|e| log_failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        entry_id = entry.id,
        signed_days = entry.kind.signed_days().unwrap_or(0),
        "Balance adjustment recorded"
    );
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Handler for DELETE /employees/:id/ledger/:entry_id.
async fn delete_ledger_entry_handler(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(String, u64)>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    state
        .store()
        .write()
        .delete_ledger_entry(&id, entry_id)
        .map_err(|e| log_failure(correlation_id, e))?;

    info!(correlation_id = %correlation_id, employee_id = %id, entry_id, "Ledger entry deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /medical/reminders.
///
/// Lists required examinations that are overdue, due within the window or
/// not scheduled.
async fn medical_reminders_handler(
    State(state): State<AppState>,
    Query(query): Query<ReminderQuery>,
) -> impl IntoResponse {
    let as_of = query.as_of.unwrap_or_else(today);
    let window_days = query
        .window_days
        .unwrap_or(state.config().medical().reminder_window_days);

    let employees = state.store().read().list_employees();
    let reminders = exam_reminders(&employees, as_of, window_days);

    info!(
        as_of = %as_of,
        window_days,
        employees = employees.len(),
        reminders = reminders.len(),
        "Medical reminders computed"
    );
    Json(reminders)
}
