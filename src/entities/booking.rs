use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "booking_status")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl BookingStatus {
    /// Cancellation is only valid before the appointment is done:
    /// pending/confirmed → cancelled; completed and cancelled are final.
    pub fn cancellable(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_method")]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "cash")]
    Cash,
    #[sea_orm(string_value = "card")]
    Card,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub booking_date: Date,
    pub booking_time: Time,
    pub address: String,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: BookingStatus,
    pub id_document_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::UserId",
        to = "super::profile::Column::Id"
    )]
    Profile,
    #[sea_orm(has_many = "super::booking_service::Entity")]
    Services,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::booking_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Services.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_accepts_known_values() {
        let cash: PaymentMethod = serde_json::from_str("\"cash\"").unwrap();
        let card: PaymentMethod = serde_json::from_str("\"card\"").unwrap();
        assert_eq!(cash, PaymentMethod::Cash);
        assert_eq!(card, PaymentMethod::Card);
    }

    #[test]
    fn payment_method_rejects_out_of_set_values() {
        assert!(serde_json::from_str::<PaymentMethod>("\"bitcoin\"").is_err());
        assert!(serde_json::from_str::<PaymentMethod>("\"CASH\"").is_err());
    }

    #[test]
    fn only_open_bookings_are_cancellable() {
        assert!(BookingStatus::Pending.cancellable());
        assert!(BookingStatus::Confirmed.cancellable());
        assert!(!BookingStatus::Completed.cancellable());
        assert!(!BookingStatus::Cancelled.cancellable());
    }

    #[test]
    fn status_serializes_as_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert!(serde_json::from_str::<BookingStatus>("\"refunded\"").is_err());
    }
}
