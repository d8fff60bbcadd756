//! Integration tests for the leave engine HTTP API.
//!
//! This test suite covers:
//! - Stateless statements (tenure, entitlement rules, ledger, warnings)
//! - Employee lifecycle (create, update, delete with ledger cascade)
//! - Ledger recording (usage, adjustments, deletion)
//! - Tenure and medical reminder endpoints
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use leave_engine::api::{AppState, create_router};
use leave_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn post_statement(router: Router, body: Value) -> (StatusCode, Value) {
    send(router, "POST", "/statement", Some(body)).await
}

fn employee(id: &str, hire_date: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Employee {}", id),
        "hire_date": hire_date
    })
}

fn warning_codes(statement: &Value) -> Vec<String> {
    statement["audit_trace"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// SECTION 1: Stateless Statements
// =============================================================================

#[tokio::test]
async fn test_statement_base_entitlement_only() {
    let (status, result) = post_statement(
        create_router_for_test(),
        json!({
            "employee": employee("emp_001", "2022-03-01"),
            "as_of": "2025-03-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["entitlement"]["total_days"], 20);
    assert_eq!(result["entitlement"]["tenure_days"], 0);
    assert_eq!(result["used_days"], 0);
    assert_eq!(result["remaining_days"], 20);
    assert_eq!(result["service"]["formatted_total"], "3g");
}

#[tokio::test]
async fn test_statement_ten_year_boundary_is_inclusive() {
    let (_, result) = post_statement(
        create_router_for_test(),
        json!({
            "employee": employee("emp_001", "2015-03-01"),
            "as_of": "2025-03-01"
        }),
    )
    .await;

    assert_eq!(result["entitlement"]["total_tenure_years"], 10);
    assert_eq!(result["entitlement"]["total_days"], 21);
}

#[tokio::test]
async fn test_statement_all_bonuses() {
    let mut body = employee("emp_001", "2000-01-01");
    body["disability"] = json!(true);
    body["children_under_15"] = json!(2);
    body["sole_caregiver"] = json!(true);

    let (_, result) = post_statement(
        create_router_for_test(),
        json!({ "employee": body, "as_of": "2025-06-01" }),
    )
    .await;

    let entitlement = &result["entitlement"];
    assert_eq!(entitlement["base_days"], 20);
    assert_eq!(entitlement["disability_days"], 5);
    assert_eq!(entitlement["tenure_days"], 2);
    assert_eq!(entitlement["family_days"], 3);
    assert_eq!(entitlement["total_days"], 30);
}

#[tokio::test]
async fn test_statement_prior_experience_raises_tenure_band() {
    let mut body = employee("emp_001", "2020-01-01");
    body["previous_experience_days"] = json!(365 * 6);

    let (_, result) = post_statement(
        create_router_for_test(),
        json!({ "employee": body, "as_of": "2025-01-01" }),
    )
    .await;

    // 5 years here + 6 years before
    assert_eq!(result["entitlement"]["total_tenure_years"], 11);
    assert_eq!(result["entitlement"]["tenure_days"], 1);
    assert_eq!(result["service"]["prior_days"], 2190);
}

#[tokio::test]
async fn test_statement_prior_jobs_counted_inclusive() {
    let mut body = employee("emp_001", "2020-01-01");
    body["prior_jobs"] = json!([
        {"company": "Acme", "start_date": "2010-01-01", "end_date": "2019-12-31"}
    ]);

    let (_, result) = post_statement(
        create_router_for_test(),
        json!({ "employee": body, "as_of": "2020-01-01" }),
    )
    .await;

    assert_eq!(result["service"]["prior"]["years"], 10);
    assert_eq!(result["service"]["prior"]["months"], 0);
    assert_eq!(result["service"]["prior"]["days"], 0);
    assert_eq!(result["entitlement"]["tenure_days"], 1);
}

#[tokio::test]
async fn test_statement_ledger_usage_and_adjustment() {
    let (_, result) = post_statement(
        create_router_for_test(),
        json!({
            "employee": employee("emp_001", "2022-01-01"),
            "ledger": [
                {"kind": "usage", "start_date": "2024-01-01", "end_date": "2024-01-05"},
                {"kind": "adjustment", "effective_date": "2024-02-01", "signed_days": 3}
            ],
            "as_of": "2024-06-01"
        }),
    )
    .await;

    assert_eq!(result["used_days"], 2);
    assert_eq!(result["remaining_days"], 18);
    assert_eq!(result["ledger_entries"], 2);
}

#[tokio::test]
async fn test_statement_negative_balance_is_reported_not_clamped() {
    let (status, result) = post_statement(
        create_router_for_test(),
        json!({
            "employee": employee("emp_001", "2022-01-01"),
            "ledger": [
                {"kind": "usage", "start_date": "2024-03-01", "end_date": "2024-03-25"}
            ],
            "as_of": "2024-06-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["remaining_days"], -5);
    assert!(warning_codes(&result).contains(&"NEGATIVE_BALANCE".to_string()));
}

#[tokio::test]
async fn test_statement_inverted_usage_is_skipped_with_warning() {
    let (_, result) = post_statement(
        create_router_for_test(),
        json!({
            "employee": employee("emp_001", "2022-01-01"),
            "ledger": [
                {"id": 7, "kind": "usage", "start_date": "2024-01-10", "end_date": "2024-01-01"},
                {"id": 8, "kind": "usage", "start_date": "2024-02-01", "end_date": "2024-02-02"}
            ],
            "as_of": "2024-06-01"
        }),
    )
    .await;

    assert_eq!(result["used_days"], 2);
    assert!(warning_codes(&result).contains(&"INVALID_LEAVE_INTERVAL".to_string()));
}

#[tokio::test]
async fn test_statement_future_hire_date_is_unavailable_not_negative() {
    let (status, result) = post_statement(
        create_router_for_test(),
        json!({
            "employee": employee("emp_001", "2026-01-01"),
            "as_of": "2025-06-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["service"]["current"].is_null());
    assert_eq!(result["entitlement"]["total_days"], 20);
    assert!(warning_codes(&result).contains(&"TENURE_UNAVAILABLE".to_string()));
}

#[tokio::test]
async fn test_statement_audit_steps_are_sequential() {
    let (_, result) = post_statement(
        create_router_for_test(),
        json!({
            "employee": employee("emp_001", "2015-01-01"),
            "as_of": "2025-06-01"
        }),
    )
    .await;

    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    assert!(!steps.is_empty());
    for (index, step) in steps.iter().enumerate() {
        assert_eq!(step["step_number"], index as u64 + 1);
    }
    let rule_ids: Vec<&str> = steps.iter().map(|s| s["rule_id"].as_str().unwrap()).collect();
    assert!(rule_ids.contains(&"tenure_bonus"));
    assert!(rule_ids.contains(&"family_bonus"));
}

// =============================================================================
// SECTION 2: Employee Lifecycle
// =============================================================================

#[tokio::test]
async fn test_create_and_fetch_employee() {
    let state = create_test_state();

    let (status, created) = send(
        create_router(state.clone()),
        "POST",
        "/employees",
        Some(employee("emp_001", "2018-04-01")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "emp_001");

    let (status, fetched) = send(create_router(state.clone()), "GET", "/employees/emp_001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["hire_date"], "2018-04-01");

    let (_, list) = send(create_router(state), "GET", "/employees", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_duplicate_employee_is_conflict() {
    let state = create_test_state();
    send(create_router(state.clone()), "POST", "/employees", Some(employee("emp_001", "2018-04-01"))).await;

    let (status, error) = send(
        create_router(state),
        "POST",
        "/employees",
        Some(employee("emp_001", "2019-04-01")),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "DUPLICATE_EMPLOYEE");
}

#[tokio::test]
async fn test_update_employee_changes_entitlement() {
    let state = create_test_state();
    send(create_router(state.clone()), "POST", "/employees", Some(employee("emp_001", "2018-04-01"))).await;

    let mut updated = employee("emp_001", "2018-04-01");
    updated["children_under_15"] = json!(1);
    let (status, _) = send(create_router(state.clone()), "PUT", "/employees/emp_001", Some(updated)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, statement) = send(
        create_router(state),
        "GET",
        "/employees/emp_001/statement?as_of=2025-01-01",
        None,
    )
    .await;
    assert_eq!(statement["entitlement"]["family_days"], 1);
    assert_eq!(statement["entitlement"]["total_days"], 21);
}

#[tokio::test]
async fn test_update_with_mismatched_id_is_rejected() {
    let state = create_test_state();
    send(create_router(state.clone()), "POST", "/employees", Some(employee("emp_001", "2018-04-01"))).await;

    let (status, error) = send(
        create_router(state),
        "PUT",
        "/employees/emp_001",
        Some(employee("emp_002", "2018-04-01")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_employee_removes_ledger() {
    let state = create_test_state();
    send(create_router(state.clone()), "POST", "/employees", Some(employee("emp_001", "2018-04-01"))).await;
    send(
        create_router(state.clone()),
        "POST",
        "/employees/emp_001/ledger/usage",
        Some(json!({"start_date": "2024-05-01", "end_date": "2024-05-03"})),
    )
    .await;

    let (status, _) = send(create_router(state.clone()), "DELETE", "/employees/emp_001", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(create_router(state.clone()), "GET", "/employees/emp_001/ledger", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(create_router(state.clone()), "POST", "/employees", Some(employee("emp_001", "2025-01-01"))).await;
    let (_, ledger) = send(create_router(state), "GET", "/employees/emp_001/ledger", None).await;
    assert!(ledger.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_employee_with_blank_name_is_rejected() {
    let (status, error) = send(
        create_router_for_test(),
        "POST",
        "/employees",
        Some(json!({"id": "emp_001", "name": "", "hire_date": "2018-04-01"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_EMPLOYEE");
}

// =============================================================================
// SECTION 3: Ledger Recording
// =============================================================================

#[tokio::test]
async fn test_adjustments_follow_operation_sign() {
    let state = create_test_state();
    send(create_router(state.clone()), "POST", "/employees", Some(employee("emp_001", "2020-01-01"))).await;

    let (status, grant) = send(
        create_router(state.clone()),
        "POST",
        "/employees/emp_001/ledger/adjustments",
        Some(json!({"days": 5, "operation": "add", "effective_date": "2024-12-31", "note": "carry-over"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(grant["signed_days"], 5);

    let (_, taken) = send(
        create_router(state.clone()),
        "POST",
        "/employees/emp_001/ledger/adjustments",
        Some(json!({"days": 2, "operation": "subtract", "effective_date": "2025-01-10"})),
    )
    .await;
    assert_eq!(taken["signed_days"], -2);

    let (_, statement) = send(
        create_router(state),
        "GET",
        "/employees/emp_001/statement?as_of=2025-02-01",
        None,
    )
    .await;
    // used = -(5) - (-2) = -3
    assert_eq!(statement["used_days"], -3);
    assert_eq!(statement["remaining_days"], 23);
}

#[tokio::test]
async fn test_delete_ledger_entry() {
    let state = create_test_state();
    send(create_router(state.clone()), "POST", "/employees", Some(employee("emp_001", "2020-01-01"))).await;
    let (_, entry) = send(
        create_router(state.clone()),
        "POST",
        "/employees/emp_001/ledger/usage",
        Some(json!({"start_date": "2024-05-01", "end_date": "2024-05-03"})),
    )
    .await;
    let entry_id = entry["id"].as_u64().unwrap();

    let uri = format!("/employees/emp_001/ledger/{}", entry_id);
    let (status, _) = send(create_router(state.clone()), "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, error) = send(create_router(state), "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "LEDGER_ENTRY_NOT_FOUND");
}

#[tokio::test]
async fn test_usage_for_unknown_employee_is_404() {
    let (status, error) = send(
        create_router_for_test(),
        "POST",
        "/employees/ghost/ledger/usage",
        Some(json!({"start_date": "2024-05-01", "end_date": "2024-05-03"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// SECTION 4: Tenure and Medical Reminders
// =============================================================================

#[tokio::test]
async fn test_tenure_endpoint_combines_prior_experience() {
    let state = create_test_state();
    let mut body = employee("emp_001", "2023-11-20");
    body["prior_jobs"] = json!([
        {"company": "Acme", "start_date": "2022-01-01", "end_date": "2022-12-27"}
    ]);
    send(create_router(state.clone()), "POST", "/employees", Some(body)).await;

    let (status, tenure) = send(
        create_router(state),
        "GET",
        "/employees/emp_001/tenure?as_of=2024-12-25",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(tenure["employee_id"], "emp_001");
    assert_eq!(tenure["current"]["years"], 1);
    assert_eq!(tenure["current"]["months"], 1);
    assert_eq!(tenure["current"]["days"], 5);
    assert_eq!(tenure["prior"]["months"], 11);
    assert_eq!(tenure["prior"]["days"], 27);
    // 1y 1m 5d + 0y 11m 27d = 1y 12m 32d -> 2y 1m 2d
    assert_eq!(tenure["formatted_total"], "2g 1m 2d");
}

#[tokio::test]
async fn test_medical_reminders_window() {
    let state = create_test_state();

    let mut due_soon = employee("emp_001", "2020-01-01");
    due_soon["medical"] = json!({
        "physical": {"required": true, "next_date": "2025-06-10"},
        "psychological": {"required": false}
    });
    let mut far_off = employee("emp_002", "2020-01-01");
    far_off["medical"] = json!({
        "physical": {"required": true, "next_date": "2026-06-10"},
        "psychological": {"required": false}
    });
    send(create_router(state.clone()), "POST", "/employees", Some(due_soon)).await;
    send(create_router(state.clone()), "POST", "/employees", Some(far_off)).await;

    let (status, reminders) = send(
        create_router(state),
        "GET",
        "/medical/reminders?as_of=2025-06-01",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let reminders = reminders.as_array().unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0]["employee_id"], "emp_001");
    assert_eq!(reminders[0]["kind"], "physical");
    assert_eq!(reminders[0]["status"], "due_soon");
    assert_eq!(reminders[0]["days_remaining"], 9);
}

#[tokio::test]
async fn test_medical_reminders_window_override() {
    let state = create_test_state();
    let mut body = employee("emp_001", "2020-01-01");
    body["medical"] = json!({
        "physical": {"required": true, "next_date": "2025-08-01"},
        "psychological": {"required": false}
    });
    send(create_router(state.clone()), "POST", "/employees", Some(body)).await;

    let (_, default_window) = send(
        create_router(state.clone()),
        "GET",
        "/medical/reminders?as_of=2025-06-01",
        None,
    )
    .await;
    assert!(default_window.as_array().unwrap().is_empty());

    let (_, wide_window) = send(
        create_router(state),
        "GET",
        "/medical/reminders?as_of=2025-06-01&window_days=90",
        None,
    )
    .await;
    assert_eq!(wide_window.as_array().unwrap().len(), 1);
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[tokio::test]
async fn test_statement_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/statement")
                .header("Content-Type", "application/json")
                .body(Body::from("{ invalid json }"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_statement_missing_hire_date() {
    let (status, error) = post_statement(
        create_router_for_test(),
        json!({"employee": {"id": "emp_001", "name": "Ana"}}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("hire_date"));
}

#[tokio::test]
async fn test_statement_missing_content_type() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/statement")
                .body(Body::from(json!({"employee": employee("emp_001", "2020-01-01")}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_adjustment_with_negative_days_is_rejected() {
    let state = create_test_state();
    send(create_router(state.clone()), "POST", "/employees", Some(employee("emp_001", "2020-01-01"))).await;

    let (status, _) = send(
        create_router(state),
        "POST",
        "/employees/emp_001/ledger/adjustments",
        Some(json!({"days": -4})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
