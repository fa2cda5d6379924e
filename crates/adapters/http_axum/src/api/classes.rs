//! JSON REST handlers for fitness classes.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use fitbook_app::ports::{BookingRepository, FitnessClassRepository, UserRepository};
use fitbook_domain::fitness_class::FitnessClass;
use fitbook_domain::id::FitnessClassId;
use fitbook_domain::time;

use super::{MessageBody, parse_id};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for creating or replacing a class.
#[derive(Deserialize)]
pub struct ClassRequest {
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub schedule: String,
}

/// JSON representation of a class.
///
/// `schedule` is ISO 8601; `readable_schedule` is `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Serialize)]
pub struct ClassResponse {
    pub id: FitnessClassId,
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub schedule: String,
    pub readable_schedule: String,
}

impl From<FitnessClass> for ClassResponse {
    fn from(class: FitnessClass) -> Self {
        Self {
            id: class.id,
            schedule: time::to_iso(&class.schedule),
            readable_schedule: time::to_readable(&class.schedule),
            name: class.name,
            description: class.description,
            instructor: class.instructor,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<ClassResponse>>),
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
    Ok(Json<ClassResponse>),
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
    Created(Json<ClassResponse>),
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
                message: "Class deleted",
            })
            .into_response(),
        }
    }
}

/// `GET /classes`
pub async fn list<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let classes = state.class_service.list_classes().await?;
    Ok(ListResponse::Ok(Json(
        classes.into_iter().map(ClassResponse::from).collect(),
    )))
}

/// `GET /classes/{id}`
pub async fn get<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let class_id: FitnessClassId = parse_id(&id)?;
    let class = state.class_service.get_class(class_id).await?;
    Ok(GetResponse::Ok(Json(class.into())))
}

/// `POST /classes`
pub async fn create<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    ApiJson(req): ApiJson<ClassRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let created = state
        .class_service
        .create_class(&req.name, &req.description, &req.instructor, &req.schedule)
        .await?;
    Ok(CreateResponse::Created(Json(created.into())))
}

/// `PUT /classes/{id}`
///
/// Replaces every field; the stored class is untouched on any error.
pub async fn update<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ClassRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let class_id: FitnessClassId = parse_id(&id)?;
    let updated = state
        .class_service
        .update_class(
            class_id,
            &req.name,
            &req.description,
            &req.instructor,
            &req.schedule,
        )
        .await?;
    Ok(GetResponse::Ok(Json(updated.into())))
}

/// `DELETE /classes/{id}`
pub async fn delete<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let class_id: FitnessClassId = parse_id(&id)?;
    state.class_service.delete_class(class_id).await?;
    Ok(DeleteResponse::Deleted)
}
