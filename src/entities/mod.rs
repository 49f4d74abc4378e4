pub mod booking;
pub mod booking_service;
pub mod contact_message;
pub mod identity;
pub mod profile;
