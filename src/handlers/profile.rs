use axum::{extract::State, Extension, Json};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;

use crate::entities::profile;
use crate::error::{AppError, AppResult};
use crate::handlers::auth::ProfileInfo;
use crate::policy;
use crate::utils::jwt::Claims;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

/// Get the caller's own profile
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<ProfileInfo>> {
    let prof = profile::Entity::find_by_id(claims.sub)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    if !policy::profile_select(claims.sub, &prof) {
        return Err(AppError::NotFound("Profile not found".to_string()));
    }

    Ok(Json(prof.into()))
}

/// Update the caller's own profile metadata
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<ProfileInfo>> {
    let prof = profile::Entity::find_by_id(claims.sub)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    if !policy::profile_update(claims.sub, &prof) {
        return Err(AppError::Forbidden(
            "You can only update your own profile".to_string(),
        ));
    }

    let mut active = prof.into_active_model();
    if let Some(full_name) = payload.full_name {
        active.full_name = Set(full_name);
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(phone);
    }
    active.updated_at = Set(Utc::now().into());

    let updated = active.update(&state.db).await?;

    Ok(Json(updated.into()))
}
