use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::booking::{self, BookingStatus, PaymentMethod};
use crate::entities::booking_service;
use crate::error::{AppError, AppResult};
use crate::policy;
use crate::utils::jwt::Claims;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub address: String,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub id_document_url: Option<String>,
    pub notes: Option<String>,
    pub services: Vec<ServiceItem>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceItem {
    pub service_name: String,
    pub price: Decimal,
    pub duration_minutes: i32,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub address: String,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: BookingStatus,
    pub id_document_url: Option<String>,
    pub notes: Option<String>,
    pub services: Vec<ServiceInfo>,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub id: Uuid,
    pub service_name: String,
    pub price: Decimal,
    pub duration_minutes: i32,
}

fn booking_response(b: booking::Model, services: Vec<booking_service::Model>) -> BookingResponse {
    BookingResponse {
        id: b.id,
        booking_date: b.booking_date,
        booking_time: b.booking_time,
        address: b.address,
        total_amount: b.total_amount,
        payment_method: b.payment_method,
        status: b.status,
        id_document_url: b.id_document_url,
        notes: b.notes,
        services: services
            .into_iter()
            .map(|s| ServiceInfo {
                id: s.id,
                service_name: s.service_name,
                price: s.price,
                duration_minutes: s.duration_minutes,
            })
            .collect(),
    }
}

/// Check a booking submission before any database work.
fn validate_booking(payload: &CreateBookingRequest) -> AppResult<()> {
    if payload.services.is_empty() {
        return Err(AppError::BadRequest(
            "A booking needs at least one service".to_string(),
        ));
    }

    if payload.total_amount <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Total amount must be positive".to_string(),
        ));
    }

    for item in &payload.services {
        if item.price <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Service price must be positive".to_string(),
            ));
        }
        if item.duration_minutes <= 0 {
            return Err(AppError::BadRequest(
                "Service duration must be positive".to_string(),
            ));
        }
    }

    if payload.address.trim().is_empty() {
        return Err(AppError::BadRequest("Address is required".to_string()));
    }

    Ok(())
}

/// Create a booking with its service line items
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    validate_booking(&payload)?;

    // The owner comes from the verified claim, never from the payload
    let owner_id = claims.sub;

    // Booking and its services land together or not at all
    let txn = state.db.begin().await?;

    let new_booking = booking::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(owner_id),
        booking_date: Set(payload.booking_date),
        booking_time: Set(payload.booking_time),
        address: Set(payload.address),
        total_amount: Set(payload.total_amount.round_dp(2)),
        payment_method: Set(payload.payment_method),
        status: Set(BookingStatus::Pending),
        id_document_url: Set(payload.id_document_url),
        notes: Set(payload.notes),
        ..Default::default()
    };

    let created = new_booking.insert(&txn).await?;

    let mut services = Vec::with_capacity(payload.services.len());
    for item in payload.services {
        let new_service = booking_service::ActiveModel {
            id: Set(Uuid::new_v4()),
            booking_id: Set(created.id),
            service_name: Set(item.service_name),
            price: Set(item.price.round_dp(2)),
            duration_minutes: Set(item.duration_minutes),
            ..Default::default()
        };
        services.push(new_service.insert(&txn).await?);
    }

    txn.commit().await?;

    tracing::info!(booking_id = %created.id, "Booking created");

    Ok((
        StatusCode::CREATED,
        Json(booking_response(created, services)),
    ))
}

/// List the caller's bookings with their services
pub async fn my_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    // The owner filter is the select policy compiled into the query
    let bookings = booking::Entity::find()
        .filter(booking::Column::UserId.eq(claims.sub))
        .all(&state.db)
        .await?;

    let ids: Vec<Uuid> = bookings.iter().map(|b| b.id).collect();
    let services = booking_service::Entity::find()
        .filter(booking_service::Column::BookingId.is_in(ids))
        .all(&state.db)
        .await?;

    let responses: Vec<BookingResponse> = bookings
        .into_iter()
        .map(|b| {
            let own: Vec<booking_service::Model> = services
                .iter()
                .filter(|s| s.booking_id == b.id)
                .cloned()
                .collect();
            booking_response(b, own)
        })
        .collect();

    Ok(Json(responses))
}

/// Get one booking, owner only
pub async fn get_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(booking_id): Path<Uuid>,
) -> AppResult<Json<BookingResponse>> {
    let b = booking::Entity::find_by_id(booking_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    // A non-owner sees the same response as a missing row
    if !policy::booking_select(claims.sub, &b) {
        return Err(AppError::NotFound("Booking not found".to_string()));
    }

    let services = booking_service::Entity::find()
        .filter(booking_service::Column::BookingId.eq(b.id))
        .all(&state.db)
        .await?;

    Ok(Json(booking_response(b, services)))
}

/// Cancel a booking, owner only. Cancellation is a status update; no
/// delete operation exists for bookings.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(booking_id): Path<Uuid>,
) -> AppResult<Json<BookingResponse>> {
    let b = booking::Entity::find_by_id(booking_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    if !policy::booking_update(claims.sub, &b) {
        return Err(AppError::Forbidden(
            "You can only cancel your own bookings".to_string(),
        ));
    }

    if !b.status.cancellable() {
        return Err(AppError::BadRequest(
            "Only pending or confirmed bookings can be cancelled".to_string(),
        ));
    }

    let booking_id = b.id;
    let mut active = b.into_active_model();
    active.status = Set(BookingStatus::Cancelled);
    active.updated_at = Set(Utc::now().into());
    let updated = active.update(&state.db).await?;

    let services = booking_service::Entity::find()
        .filter(booking_service::Column::BookingId.eq(booking_id))
        .all(&state.db)
        .await?;

    tracing::info!(booking_id = %booking_id, "Booking cancelled");

    Ok(Json(booking_response(updated, services)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> CreateBookingRequest {
        CreateBookingRequest {
            booking_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            booking_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            address: "12 High Street".to_string(),
            total_amount: Decimal::new(8500, 2),
            payment_method: PaymentMethod::Card,
            id_document_url: None,
            notes: None,
            services: vec![ServiceItem {
                service_name: "Swedish massage".to_string(),
                price: Decimal::new(8500, 2),
                duration_minutes: 60,
            }],
        }
    }

    #[test]
    fn accepts_a_well_formed_submission() {
        assert!(validate_booking(&submission()).is_ok());
    }

    #[test]
    fn rejects_empty_service_list() {
        let mut payload = submission();
        payload.services.clear();
        assert!(validate_booking(&payload).is_err());
    }

    #[test]
    fn rejects_non_positive_total() {
        let mut payload = submission();
        payload.total_amount = Decimal::ZERO;
        assert!(validate_booking(&payload).is_err());

        payload.total_amount = Decimal::new(-100, 2);
        assert!(validate_booking(&payload).is_err());
    }

    #[test]
    fn rejects_non_positive_service_price() {
        let mut payload = submission();
        payload.services[0].price = Decimal::ZERO;
        assert!(validate_booking(&payload).is_err());

        payload.services[0].price = Decimal::new(-500, 2);
        assert!(validate_booking(&payload).is_err());
    }

    #[test]
    fn rejects_non_positive_duration() {
        let mut payload = submission();
        payload.services[0].duration_minutes = 0;
        assert!(validate_booking(&payload).is_err());
    }

    #[test]
    fn rejects_blank_address() {
        let mut payload = submission();
        payload.address = "   ".to_string();
        assert!(validate_booking(&payload).is_err());
    }
}
