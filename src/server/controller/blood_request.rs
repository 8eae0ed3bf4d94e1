use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        blood_request::{
            BloodRequestDto, CreateEmergencyRequestDto, DonorResponseDto,
            EmergencyRequestCreatedDto, OtpVerificationDto, VerifyOtpDto,
        },
    },
    server::{
        error::AppError, model::blood_request::CreateEmergencyRequestParams,
        service::lifecycle::RequestLifecycleService, state::AppState,
    },
};

/// Tag for grouping emergency request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

/// Create an emergency blood request.
///
/// Stores a pending, critical request for a single donor, issues a one-time password
/// and alerts the donor in the background (in-app notification, real-time push and SMS).
/// Alert delivery failures never fail this call.
///
/// # Arguments
/// - `state` - Application state containing the database connection and dispatcher
/// - `payload` - Patient, blood group, donor and hospital details
///
/// # Returns
/// - `201 Created` - Request stored, donor contact details returned
/// - `400 Bad Request` - Blank field or unknown blood group
/// - `404 Not Found` - Donor does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = REQUEST_TAG,
    request_body = CreateEmergencyRequestDto,
    responses(
        (status = 201, description = "Successfully created emergency request", body = EmergencyRequestCreatedDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_emergency_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmergencyRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateEmergencyRequestParams::from_dto(payload)?;

    let service = RequestLifecycleService::new(&state.db, &state.dispatcher);
    let created = service.create_emergency_request(params).await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

/// Get an emergency request.
///
/// Returns the request's current status. The OTP code is never included.
///
/// # Returns
/// - `200 OK` - The request
/// - `404 Not Found` - Request does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/requests/{id}",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved request", body = BloodRequestDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestLifecycleService::new(&state.db, &state.dispatcher);
    let request = service.get_request(id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Cancel an emergency request.
///
/// Moves a pending or accepted request to rejected. A donation already scheduled for the
/// request is cancelled with it.
///
/// # Returns
/// - `200 OK` - Request cancelled
/// - `404 Not Found` - Request does not exist
/// - `409 Conflict` - Request already completed or rejected
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/requests/{id}/cancel",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Successfully cancelled request", body = BloodRequestDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request can no longer be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestLifecycleService::new(&state.db, &state.dispatcher);
    let request = service.cancel_request(id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Record the donor's answer to a request.
///
/// Accepting schedules a donation at the request's hospital; declining rejects the
/// request. Only the donor the request was sent to may answer, and only while the
/// request is pending.
///
/// # Returns
/// - `200 OK` - Answer recorded
/// - `400 Bad Request` - Donor is not the request's donor
/// - `404 Not Found` - Request does not exist
/// - `409 Conflict` - Request is no longer pending
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/requests/{id}/respond",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Request ID")
    ),
    request_body = DonorResponseDto,
    responses(
        (status = 200, description = "Successfully recorded response", body = BloodRequestDto),
        (status = 400, description = "Donor is not the request's donor", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request is no longer pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_to_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<DonorResponseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestLifecycleService::new(&state.db, &state.dispatcher);
    let request = service
        .record_donor_response(id, payload.donor_id, payload.accepted)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Verify the donation OTP and complete the request.
///
/// A refused verification is not an error: the response has `success: false` and a
/// `reason` of "Invalid request or not accepted", "Invalid OTP" or "OTP expired". On
/// success the request is completed, the donation recorded and inventory incremented.
///
/// # Returns
/// - `200 OK` - Verification outcome
/// - `500 Internal Server Error` - Database error or missing inventory row
#[utoipa::path(
    post,
    path = "/api/requests/{id}/verify-otp",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Request ID")
    ),
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "Verification outcome", body = OtpVerificationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestLifecycleService::new(&state.db, &state.dispatcher);
    let outcome = service.verify_otp_and_complete(id, &payload.otp).await?;

    Ok((StatusCode::OK, Json(outcome.into_dto(id))))
}
