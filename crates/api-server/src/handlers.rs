use crate::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, StatusResponse};
use crate::messages::{LOGIN_SUCCESS, REGISTER_SUCCESS};
use crate::{ApiError, AppState};
use axum::{extract::State, response::Json};
use tracing::info;

pub async fn root(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: state.config.status_message(),
    })
}

pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    info!("📝 Registration attempt for phone {}", payload.phone);

    let user = state.account_app.register(payload.into()).await?;

    Ok(Json(RegisterResponse {
        message: REGISTER_SUCCESS.to_string(),
        user,
    }))
}

pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state
        .account_app
        .login(&payload.identifier, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: LOGIN_SUCCESS.to_string(),
        data: session.into(),
    }))
}
