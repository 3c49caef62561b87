// HTTP handlers for the auth endpoints

use axum::{extract::State, http::StatusCode, Json};
use tracing::debug;

use crate::auth::{
    error::AuthError,
    models::{AuthResponse, SignInRequest, SignUpRequest},
};
use crate::AppState;

/// Handler for POST /signup
///
/// Runs the sign-up validator first; the service layer is only reached
/// with well-formed input.
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "User created", body = AuthResponse),
        (status = 400, description = "Missing or invalid fields", body = String, example = json!({"message": "All fields are required"})),
        (status = 409, description = "Email already registered", body = String, example = json!({"message": "User exists"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"message": "Server error"}))
    ),
    tag = "auth"
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthError> {
    let valid = request.validate()?;
    debug!("sign-up attempt for {}", valid.email);

    let (user, token) = state
        .auth
        .sign_up(valid.name, valid.email, valid.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created".to_string(),
            user,
            token,
        }),
    ))
}

/// Handler for POST /sign-in
#[utoipa::path(
    post,
    path = "/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Missing fields", body = String, example = json!({"message": "Email and password are required"})),
        (status = 401, description = "Wrong password", body = String, example = json!({"message": "Invalid credentials"})),
        (status = 404, description = "Unknown email", body = String, example = json!({"message": "User not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"message": "Server error"}))
    ),
    tag = "auth"
)]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let valid = request.validate()?;
    debug!("sign-in attempt for {}", valid.email);

    let (user, token) = state.auth.sign_in(valid.email, valid.password).await?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user,
        token,
    }))
}
