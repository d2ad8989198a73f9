//! HTTP request handlers for the Daily Wage Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{delete, get, post, put},
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::summarize_month;
use crate::error::EngineError;
use crate::models::{Entry, MonthlySummary, User};
use crate::store::{EntryUpdate, UserUpdate};

use super::request::{
    CreateEntryRequest, MonthQuery, PfUpdateRequest, RegisterUserRequest, SetSalaryRequest,
};
use super::response::{
    AdminUsersResponse, ApiError, ApiErrorResponse, EntryCreatedResponse, EntryLookupResponse,
    MessageResponse, PfSettingResponse, UserDeletedResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/api/settings/pf", get(current_pf_handler))
        .route("/api/users", post(register_user_handler))
        .route("/api/users/:user_id/salary", put(set_salary_handler))
        .route(
            "/api/users/:user_id/summary/:year/:month",
            get(monthly_summary_handler),
        )
        .route("/api/users/:user_id/days/:date", get(entry_for_date_handler))
        .route(
            "/api/users/:user_id/entries/:entry_id",
            delete(delete_own_entry_handler),
        )
        .route("/api/entries", post(create_entry_handler))
        .route(
            "/api/admin/settings/pf",
            get(current_pf_handler).put(update_pf_handler),
        )
        .route("/api/admin/users", get(admin_users_handler))
        .route(
            "/api/admin/users/:user_id",
            put(admin_update_user_handler).delete(admin_delete_user_handler),
        )
        .route(
            "/api/admin/users/:user_id/entries",
            get(admin_user_entries_handler),
        )
        .route(
            "/api/admin/entries/:entry_id",
            put(admin_update_entry_handler).delete(admin_delete_entry_handler),
        )
        .with_state(state)
}

// ----------------------------------------------------------------------
// Extraction helpers
// ----------------------------------------------------------------------

fn json_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> ApiResult<T> {
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

fn path_params<T>(
    correlation_id: Uuid,
    params: Result<Path<T>, PathRejection>,
) -> ApiResult<T> {
    params.map(|Path(p)| p).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(correlation_id = %correlation_id, error = %body_text, "Invalid path parameter");
        ApiErrorResponse::bad_request(ApiError::invalid_parameter(body_text))
    })
}

fn query_params<T>(
    correlation_id: Uuid,
    query: Result<Query<T>, QueryRejection>,
) -> ApiResult<T> {
    query.map(|Query(q)| q).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(correlation_id = %correlation_id, error = %body_text, "Invalid query string");
        ApiErrorResponse::bad_request(ApiError::invalid_parameter(body_text))
    })
}

fn engine_failure(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    error.into()
}

// ----------------------------------------------------------------------
// Public routes
// ----------------------------------------------------------------------

/// Handler for GET /.
async fn health_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new(
        "Salary Calculator API is running / सैलरी कैलकुलेटर API चल रहा है",
    ))
}

/// Handler for GET /api/settings/pf and GET /api/admin/settings/pf.
async fn current_pf_handler(State(state): State<AppState>) -> Json<PfSettingResponse> {
    Json(PfSettingResponse {
        pf_percentage: state.store().pf_percentage().await,
    })
}

/// Handler for POST /api/users.
async fn register_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing user registration");

    let request = json_body(correlation_id, payload)?;
    let user = state
        .store()
        .create_user(request.into())
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        user_id = %user.id,
        "User registered"
    );
    Ok((StatusCode::CREATED, Json(user)))
}

/// Handler for PUT /api/users/:user_id/salary.
async fn set_salary_handler(
    State(state): State<AppState>,
    params: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<SetSalaryRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let correlation_id = Uuid::new_v4();
    let user_id = path_params(correlation_id, params)?;
    let request = json_body(correlation_id, payload)?;

    let user = state
        .store()
        .set_daily_rate(user_id, request.daily_salary_rate)
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        user_id = %user_id,
        daily_salary_rate = %request.daily_salary_rate,
        "Daily rate set"
    );
    Ok(Json(user))
}

/// Handler for POST /api/entries.
///
/// Rounds the submitted times, computes the wage snapshot and stores it.
async fn create_entry_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<EntryCreatedResponse>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entry request");

    let request = json_body(correlation_id, payload)?;

    let start_time = Instant::now();
    let (entry, audit_trace) = state
        .store()
        .create_entry(request.into())
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        user_id = %entry.user_id,
        date = %entry.date,
        in_time = %entry.in_time,
        out_time = %entry.out_time,
        daily_salary = %entry.breakdown.daily_salary,
        duration_us = start_time.elapsed().as_micros(),
        "Entry created successfully"
    );
    Ok((
        StatusCode::CREATED,
        Json(EntryCreatedResponse {
            message: "Entry saved successfully / एंट्री सेव हो गई".to_string(),
            entry,
            audit_trace,
        }),
    ))
}

/// Handler for GET /api/users/:user_id/summary/:year/:month.
async fn monthly_summary_handler(
    State(state): State<AppState>,
    params: Result<Path<(Uuid, i32, u32)>, PathRejection>,
) -> ApiResult<Json<MonthlySummary>> {
    let correlation_id = Uuid::new_v4();
    let (user_id, year, month) = path_params(correlation_id, params)?;

    state
        .store()
        .get_user(user_id)
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;
    let entries = state.store().entries_for_user(user_id).await;
    let summary = summarize_month(user_id, year, month, &entries)
        .map_err(|e| engine_failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        user_id = %user_id,
        year,
        month,
        days_worked = summary.days_worked,
        monthly_total = %summary.monthly_total,
        "Monthly summary computed"
    );
    Ok(Json(summary))
}

/// Handler for GET /api/users/:user_id/days/:date.
async fn entry_for_date_handler(
    State(state): State<AppState>,
    params: Result<Path<(Uuid, NaiveDate)>, PathRejection>,
) -> ApiResult<Json<EntryLookupResponse>> {
    let correlation_id = Uuid::new_v4();
    let (user_id, date) = path_params(correlation_id, params)?;

    let entry = state.store().find_entry(user_id, date).await;
    Ok(Json(EntryLookupResponse {
        exists: entry.is_some(),
        entry,
    }))
}

/// Handler for DELETE /api/users/:user_id/entries/:entry_id.
async fn delete_own_entry_handler(
    State(state): State<AppState>,
    params: Result<Path<(Uuid, Uuid)>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let correlation_id = Uuid::new_v4();
    let (user_id, entry_id) = path_params(correlation_id, params)?;

    state
        .store()
        .delete_user_entry(entry_id, user_id)
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        user_id = %user_id,
        entry_id = %entry_id,
        "Entry deleted"
    );
    Ok(Json(MessageResponse::new(
        "Entry deleted successfully / एंट्री डिलीट हो गई",
    )))
}

// ----------------------------------------------------------------------
// Admin routes
// ----------------------------------------------------------------------

/// Handler for PUT /api/admin/settings/pf.
async fn update_pf_handler(
    State(state): State<AppState>,
    payload: Result<Json<PfUpdateRequest>, JsonRejection>,
) -> ApiResult<Json<PfSettingResponse>> {
    let correlation_id = Uuid::new_v4();
    let request = json_body(correlation_id, payload)?;

    let pf_percentage = state
        .store()
        .set_pf_percentage(request.pf_percentage)
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        pf_percentage = %pf_percentage,
        "PF percentage changed"
    );
    Ok(Json(PfSettingResponse { pf_percentage }))
}

/// Handler for GET /api/admin/users.
async fn admin_users_handler(State(state): State<AppState>) -> ApiResult<Json<AdminUsersResponse>> {
    let correlation_id = Uuid::new_v4();
    let users = state
        .store()
        .list_users_with_stats()
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;
    let stats = state
        .store()
        .overall_stats()
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;
    Ok(Json(AdminUsersResponse { users, stats }))
}

/// Handler for PUT /api/admin/users/:user_id.
async fn admin_update_user_handler(
    State(state): State<AppState>,
    params: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let correlation_id = Uuid::new_v4();
    let user_id = path_params(correlation_id, params)?;
    let update = json_body(correlation_id, payload)?;

    let user = state
        .store()
        .update_user(user_id, update)
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;
    Ok(Json(user))
}

/// Handler for DELETE /api/admin/users/:user_id.
async fn admin_delete_user_handler(
    State(state): State<AppState>,
    params: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<UserDeletedResponse>> {
    let correlation_id = Uuid::new_v4();
    let user_id = path_params(correlation_id, params)?;

    let entries_removed = state
        .store()
        .delete_user(user_id)
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        user_id = %user_id,
        entries_removed,
        "User and entries deleted"
    );
    Ok(Json(UserDeletedResponse {
        message: "User deleted successfully / यूजर डिलीट हो गया".to_string(),
        entries_removed,
    }))
}

/// Handler for GET /api/admin/users/:user_id/entries.
///
/// Newest first. `?year=&month=` restricts the listing to one month.
async fn admin_user_entries_handler(
    State(state): State<AppState>,
    params: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Entry>>> {
    let correlation_id = Uuid::new_v4();
    let user_id = path_params(correlation_id, params)?;
    let query = query_params(correlation_id, query)?;

    state
        .store()
        .get_user(user_id)
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;

    let mut entries = state.store().entries_for_user(user_id).await;
    if let Some((year, month)) = query.period() {
        if !(1..=12).contains(&month) {
            return Err(engine_failure(
                correlation_id,
                EngineError::InvalidPeriod { year, month },
            ));
        }
        entries.retain(|e| e.is_in_month(year, month));
    }
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(Json(entries))
}

/// Handler for PUT /api/admin/entries/:entry_id.
///
/// Overwrites stored fields as given; nothing is recomputed.
async fn admin_update_entry_handler(
    State(state): State<AppState>,
    params: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<EntryUpdate>, JsonRejection>,
) -> ApiResult<Json<Entry>> {
    let correlation_id = Uuid::new_v4();
    let entry_id = path_params(correlation_id, params)?;
    let update = json_body(correlation_id, payload)?;

    let entry = state
        .store()
        .update_entry(entry_id, update)
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        entry_id = %entry_id,
        daily_salary = %entry.breakdown.daily_salary,
        "Entry overwritten by admin"
    );
    Ok(Json(entry))
}

/// Handler for DELETE /api/admin/entries/:entry_id.
async fn admin_delete_entry_handler(
    State(state): State<AppState>,
    params: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let correlation_id = Uuid::new_v4();
    let entry_id = path_params(correlation_id, params)?;

    state
        .store()
        .delete_entry(entry_id)
        .await
        .map_err(|e| engine_failure(correlation_id, e))?;

    info!(correlation_id = %correlation_id, entry_id = %entry_id, "Entry deleted by admin");
    Ok(Json(MessageResponse::new(
        "Entry deleted successfully / एंट्री डिलीट हो गई",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        AppState::new(RecordStore::new(dec("12")))
    }

    async fn seeded_user(state: &AppState, rate: Option<&str>) -> User {
        let mut user = User::new("ramesh");
        user.daily_salary_rate = rate.map(dec);
        state.store().create_user(user).await.unwrap()
    }

    fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_bilingual_message() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = read_json(response).await;
        assert!(body.message.contains(" / "));
    }

    #[tokio::test]
    async fn test_create_entry_returns_201_with_snapshot() {
        let state = create_test_state();
        let user = seeded_user(&state, Some("1000")).await;
        let router = create_router(state);

        let body = serde_json::json!({
            "user_id": user.id,
            "date": "2025-03-04",
            "in_time": "09:50",
            "out_time": "18:10"
        })
        .to_string();

        let response = router
            .oneshot(json_request("POST", "/api/entries", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: EntryCreatedResponse = read_json(response).await;
        assert_eq!(created.entry.in_time.to_string(), "10:00");
        assert_eq!(created.entry.out_time.to_string(), "18:00");
        assert_eq!(created.entry.breakdown.daily_salary, dec("880"));
        assert_eq!(created.audit_trace.steps.len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("POST", "/api/entries", "{invalid json".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "user_id": Uuid::new_v4(),
            "date": "2025-03-04",
            "in_time": "09:00"
        })
        .to_string();

        let response = router
            .oneshot(json_request("POST", "/api/entries", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("out_time"));
    }

    #[tokio::test]
    async fn test_entry_without_rate_returns_rate_not_set() {
        let state = create_test_state();
        let user = seeded_user(&state, None).await;
        let router = create_router(state);

        let body = serde_json::json!({
            "user_id": user.id,
            "date": "2025-03-04",
            "in_time": "09:00",
            "out_time": "17:00"
        })
        .to_string();

        let response = router
            .oneshot(json_request("POST", "/api/entries", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "RATE_NOT_SET");
    }

    #[tokio::test]
    async fn test_bad_path_uuid_returns_invalid_parameter() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/users/not-a-uuid/summary/2025/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "INVALID_PARAMETER");
    }

    #[tokio::test]
    async fn test_pf_update_out_of_range_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "PUT",
                "/api/admin/settings/pf",
                r#"{"pf_percentage": 60}"#.to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "INVALID_RATE");
    }

    #[tokio::test]
    async fn test_admin_entries_rejects_invalid_month() {
        let state = create_test_state();
        let user = seeded_user(&state, Some("1000")).await;
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .uri(format!(
                        "/api/admin/users/{}/entries?year=2025&month=13",
                        user.id
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "INVALID_PERIOD");
    }
}
