use domain::{NewUser, SessionInfo, UserSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: Option<String>,
    pub password: String,
    pub phone: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        NewUser::new(request.name, request.email, request.password, request.phone)
    }
}

/// `identifier` is either an email or a phone number.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub data: LoginData,
}

#[derive(Debug, Serialize)]
pub struct LoginData {
    pub user_id: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
}

impl From<SessionInfo> for LoginData {
    fn from(session: SessionInfo) -> Self {
        Self {
            user_id: session.id,
            user: LoginUser {
                name: session.name,
                email: session.email,
                phone: session.phone,
            },
        }
    }
}
