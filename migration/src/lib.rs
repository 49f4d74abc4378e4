pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_identities;
mod m20260810_000002_create_profiles;
mod m20260810_000003_create_bookings;
mod m20260810_000004_create_booking_services;
mod m20260810_000005_create_contact_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_identities::Migration),
            Box::new(m20260810_000002_create_profiles::Migration),
            Box::new(m20260810_000003_create_bookings::Migration),
            Box::new(m20260810_000004_create_booking_services::Migration),
            Box::new(m20260810_000005_create_contact_messages::Migration),
        ]
    }
}
