use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000003_create_bookings::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingService::Table)
                    .if_not_exists()
                    .col(uuid(BookingService::Id).primary_key())
                    .col(uuid(BookingService::BookingId).not_null())
                    .col(string_len(BookingService::ServiceName, 100).not_null())
                    .col(decimal_len(BookingService::Price, 10, 2).not_null())
                    .col(integer(BookingService::DurationMinutes).not_null())
                    .col(
                        timestamp_with_time_zone(BookingService::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_service_booking")
                            .from(BookingService::Table, BookingService::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookingService {
    Table,
    Id,
    BookingId,
    ServiceName,
    Price,
    DurationMinutes,
    CreatedAt,
}
