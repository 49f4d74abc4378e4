use axum::{extract::State, http::StatusCode, Extension, Json};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::{contact_message, profile};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Submit a contact message. Open to unauthenticated callers; every
/// message starts in status `new`.
pub async fn submit_message(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> AppResult<(StatusCode, Json<contact_message::Model>)> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.message.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "Name, email and message are required".to_string(),
        ));
    }

    let new_message = contact_message::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        message: Set(payload.message),
        ..Default::default()
    };

    let created = new_message.insert(&state.db).await?;

    tracing::info!(message_id = %created.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(created)))
}

/// List contact messages visible to the caller: only those whose email
/// matches the caller's profile email. The filter is the select policy
/// compiled into the query.
pub async fn my_messages(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<contact_message::Model>>> {
    let prof = profile::Entity::find_by_id(claims.sub)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    let messages = contact_message::Entity::find()
        .filter(contact_message::Column::Email.eq(&prof.email))
        .order_by_desc(contact_message::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(messages))
}
