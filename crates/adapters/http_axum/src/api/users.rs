//! JSON REST handlers for users.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use fitbook_app::ports::{BookingRepository, FitnessClassRepository, UserRepository};
use fitbook_domain::id::UserId;
use fitbook_domain::user::User;

use super::{MessageBody, parse_id};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for creating a user.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Request body for updating a user. Absent fields are left unchanged.
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// JSON representation of a user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<UserResponse>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<UserResponse>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<UserResponse>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(MessageBody {
                message: "User deleted",
            })
            .into_response(),
        }
    }
}

/// `GET /users`
pub async fn list<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// `GET /users/{id}`
pub async fn get<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&id)?;
    let user = state.user_service.get_user(user_id).await?;
    Ok(GetResponse::Ok(Json(user.into())))
}

/// `POST /users`
pub async fn create<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let created = state.user_service.create_user(req.name, req.email).await?;
    Ok(CreateResponse::Created(Json(created.into())))
}

/// `PUT /users/{id}`
pub async fn update<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&id)?;
    let updated = state
        .user_service
        .update_user(user_id, req.name, req.email)
        .await?;
    Ok(GetResponse::Ok(Json(updated.into())))
}

/// `DELETE /users/{id}`
pub async fn delete<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&id)?;
    state.user_service.delete_user(user_id).await?;
    Ok(DeleteResponse::Deleted)
}
