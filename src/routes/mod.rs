use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, booking, contact, profile};
use crate::middleware::auth::auth_middleware;
use crate::middleware::rate_limit::{create_public_governor, log_request};
use crate::middleware::user_rate_limit::create_user_governor;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // IP-based governor for unauthenticated routes
    let public_governor = create_public_governor();
    // Identity-based governor for authenticated routes
    let user_governor = create_user_governor();

    // Public routes (signup, login)
    let auth_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .layer(public_governor.clone());

    // Public contact form; insertable by anyone
    let contact_routes = Router::new()
        .route("/messages", post(contact::submit_message))
        .layer(public_governor);

    // Authenticated routes: own profile, own bookings, own messages
    let account_routes = Router::new()
        .route("/profile", get(profile::get_profile))
        .route("/profile", put(profile::update_profile))
        .route("/bookings", post(booking::create_booking))
        .route("/bookings", get(booking::my_bookings))
        .route("/bookings/{id}", get(booking::get_booking))
        .route("/bookings/{id}/cancel", put(booking::cancel_booking))
        .route("/contact/messages", get(contact::my_messages))
        .layer(user_governor)
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/contact", contact_routes)
        .nest("/api", account_routes)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
