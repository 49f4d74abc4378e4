use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{identity, profile};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::create_token;
use crate::utils::validate::validate_signup;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub profile: ProfileInfo,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub profile: ProfileInfo,
}

#[derive(Debug, Serialize)]
pub struct ProfileInfo {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub phone: String,
}

impl From<profile::Model> for ProfileInfo {
    fn from(p: profile::Model) -> Self {
        Self {
            id: p.id,
            email: p.email,
            full_name: p.full_name,
            phone: p.phone,
        }
    }
}

/// Create a profile row for a freshly created identity, copying id and
/// email and defaulting missing metadata to the empty string.
pub async fn provision_profile<C: ConnectionTrait>(
    conn: &C,
    ident: &identity::Model,
    full_name: Option<String>,
    phone: Option<String>,
) -> AppResult<profile::Model> {
    let new_profile = profile::ActiveModel {
        id: Set(ident.id),
        email: Set(ident.email.clone()),
        full_name: Set(full_name.unwrap_or_default()),
        phone: Set(phone.unwrap_or_default()),
        ..Default::default()
    };

    Ok(new_profile.insert(conn).await?)
}

/// Sign up a new customer account
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    // Password checks run before any database access
    validate_signup(&payload.password, &payload.confirm_password)?;

    let existing = identity::Entity::find()
        .filter(identity::Column::Email.eq(&payload.email))
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    // Hash password
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    // Identity and profile land together or not at all
    let txn = state.db.begin().await?;

    let new_identity = identity::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(payload.email.clone()),
        password_hash: Set(password_hash),
        ..Default::default()
    };

    let ident = new_identity.insert(&txn).await?;
    let prof = provision_profile(&txn, &ident, payload.full_name, payload.phone).await?;

    txn.commit().await?;

    tracing::info!(email = %prof.email, "New account created");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            profile: prof.into(),
        }),
    ))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let ident = identity::Entity::find()
        .filter(identity::Column::Email.eq(&payload.email))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let parsed_hash = PasswordHash::new(&ident.password_hash)
        .map_err(|e| AppError::Internal(format!("Failed to parse password hash: {}", e)))?;

    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let prof = profile::Entity::find_by_id(ident.id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Internal("Profile missing for identity".to_string()))?;

    let token = create_token(
        ident.id,
        &ident.email,
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;

    Ok(Json(AuthResponse {
        token,
        profile: prof.into(),
    }))
}
