use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::errors::AppError;
use crate::models::{parse_date_time, Booking, BookingRequest};
use crate::state::AppState;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<Booking>, AppError> {
    let request = BookingRequest::from_value(&payload)?;

    let booking = state
        .store
        .create_booking(request)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;

    tracing::info!(id = booking.id, service = %booking.service, "booking created");
    Ok(Json(booking))
}

// GET /api/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state
        .store
        .bookings()
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;
    Ok(Json(bookings))
}

// GET /api/bookings/date/:date
pub async fn list_bookings_by_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let day = parse_date_time(&date)
        .map_err(|_| AppError::InvalidDate(date.clone()))?
        .date();

    let bookings = state
        .store
        .bookings_on(day)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;
    Ok(Json(bookings))
}
