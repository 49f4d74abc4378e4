//! Per-table access rules, evaluated against the caller's identity.
//!
//! Each function answers one question: may this caller perform this
//! operation on this row? Handlers consult these before touching data,
//! so every access decision is reviewable in one place.
//!
//! Tables with no update/delete rule (booking_service, contact_message)
//! are append-only through this API.

use uuid::Uuid;

use crate::entities::{booking, contact_message, profile};

/// A profile is visible only to the identity it belongs to.
pub fn profile_select(caller: Uuid, row: &profile::Model) -> bool {
    row.id == caller
}

/// A profile is writable only by the identity it belongs to.
pub fn profile_update(caller: Uuid, row: &profile::Model) -> bool {
    row.id == caller
}

/// A booking may only be created under the caller's own identity.
pub fn booking_insert(caller: Uuid, owner_id: Uuid) -> bool {
    owner_id == caller
}

/// A booking is visible only to its owner.
pub fn booking_select(caller: Uuid, row: &booking::Model) -> bool {
    row.user_id == caller
}

/// A booking is writable only by its owner.
pub fn booking_update(caller: Uuid, row: &booking::Model) -> bool {
    row.user_id == caller
}

/// A service line inherits visibility from its parent booking.
pub fn booking_service_select(caller: Uuid, parent: &booking::Model) -> bool {
    booking_select(caller, parent)
}

/// Anyone may leave a contact message, authenticated or not.
pub fn contact_message_insert() -> bool {
    true
}

/// A contact message is visible only to the caller whose profile email
/// matches the email on the message.
pub fn contact_message_select(profile_email: &str, row: &contact_message::Model) -> bool {
    row.email == profile_email
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::*;
    use crate::entities::booking::{BookingStatus, PaymentMethod};
    use crate::entities::contact_message::ContactStatus;

    fn profile_row(id: Uuid, email: &str) -> profile::Model {
        profile::Model {
            id,
            email: email.to_string(),
            full_name: "Test User".to_string(),
            phone: String::new(),
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn booking_row(user_id: Uuid) -> booking::Model {
        booking::Model {
            id: Uuid::new_v4(),
            user_id,
            booking_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            booking_time: chrono::NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            address: "12 High Street".to_string(),
            total_amount: Decimal::new(8500, 2),
            payment_method: PaymentMethod::Card,
            status: BookingStatus::Pending,
            id_document_url: None,
            notes: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn message_row(email: &str) -> contact_message::Model {
        contact_message::Model {
            id: Uuid::new_v4(),
            name: "Visitor".to_string(),
            email: email.to_string(),
            phone: None,
            message: "Do you take walk-ins?".to_string(),
            status: ContactStatus::New,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn profile_only_visible_to_matching_identity() {
        let owner = Uuid::new_v4();
        let row = profile_row(owner, "owner@example.com");

        assert!(profile_select(owner, &row));
        assert!(profile_update(owner, &row));
        assert!(!profile_select(Uuid::new_v4(), &row));
        assert!(!profile_update(Uuid::new_v4(), &row));
    }

    #[test]
    fn booking_restricted_to_owner() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let row = booking_row(owner);

        assert!(booking_select(owner, &row));
        assert!(booking_update(owner, &row));
        assert!(booking_insert(owner, owner));
        assert!(!booking_select(stranger, &row));
        assert!(!booking_update(stranger, &row));
        assert!(!booking_insert(stranger, owner));
    }

    #[test]
    fn booking_service_inherits_parent_owner() {
        let owner = Uuid::new_v4();
        let row = booking_row(owner);

        assert!(booking_service_select(owner, &row));
        assert!(!booking_service_select(Uuid::new_v4(), &row));
    }

    #[test]
    fn contact_messages_match_on_profile_email() {
        let row = message_row("guest@example.com");

        assert!(contact_message_insert());
        assert!(contact_message_select("guest@example.com", &row));
        assert!(!contact_message_select("other@example.com", &row));
        // Matching is exact, not case-folded.
        assert!(!contact_message_select("Guest@example.com", &row));
    }
}
