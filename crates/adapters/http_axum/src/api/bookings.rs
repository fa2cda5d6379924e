//! JSON REST handlers for bookings.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use fitbook_app::ports::{BookingRepository, FitnessClassRepository, UserRepository};
use fitbook_domain::booking::Booking;
use fitbook_domain::id::{BookingId, FitnessClassId, UserId};
use fitbook_domain::time;

use super::{MessageBody, parse_id};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for creating a booking.
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: UserId,
    pub fitness_class_id: FitnessClassId,
    pub status: Option<String>,
}

/// Request body for updating a booking. Absent fields are left unchanged.
#[derive(Deserialize)]
pub struct UpdateBookingRequest {
    pub user_id: Option<UserId>,
    pub fitness_class_id: Option<FitnessClassId>,
    pub status: Option<String>,
}

/// JSON representation of a booking.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: BookingId,
    pub status: String,
    pub user_id: UserId,
    pub fitness_class_id: FitnessClassId,
    pub created_at: String,
    pub readable_created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            status: booking.status,
            user_id: booking.user_id,
            fitness_class_id: booking.fitness_class_id,
            created_at: time::to_iso(&booking.created_at),
            readable_created_at: time::to_readable(&booking.created_at),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<BookingResponse>>),
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
    Ok(Json<BookingResponse>),
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
    Created(Json<BookingResponse>),
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
                message: "Booking deleted",
            })
            .into_response(),
        }
    }
}

/// `GET /bookings`
pub async fn list<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let bookings = state.booking_service.list_bookings().await?;
    Ok(ListResponse::Ok(Json(
        bookings.into_iter().map(BookingResponse::from).collect(),
    )))
}

/// `GET /bookings/{id}`
pub async fn get<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let booking_id: BookingId = parse_id(&id)?;
    let booking = state.booking_service.get_booking(booking_id).await?;
    Ok(GetResponse::Ok(Json(booking.into())))
}

/// `POST /bookings`
pub async fn create<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    ApiJson(req): ApiJson<CreateBookingRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let created = state
        .booking_service
        .create_booking(req.user_id, req.fitness_class_id, req.status)
        .await?;
    Ok(CreateResponse::Created(Json(created.into())))
}

/// `PUT /bookings/{id}`
pub async fn update<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateBookingRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let booking_id: BookingId = parse_id(&id)?;
    let updated = state
        .booking_service
        .update_booking(booking_id, req.user_id, req.fitness_class_id, req.status)
        .await?;
    Ok(GetResponse::Ok(Json(updated.into())))
}

/// `DELETE /bookings/{id}`
pub async fn delete<UR, CR, BR>(
    State(state): State<AppState<UR, CR, BR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let booking_id: BookingId = parse_id(&id)?;
    state.booking_service.delete_booking(booking_id).await?;
    Ok(DeleteResponse::Deleted)
}
