use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

use super::m20260810_000002_create_profiles::Profile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Enum types reject out-of-set values at write time
        manager
            .create_type(
                Type::create()
                    .as_enum(BookingStatus::Enum)
                    .values([
                        BookingStatus::Pending,
                        BookingStatus::Confirmed,
                        BookingStatus::Completed,
                        BookingStatus::Cancelled,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(PaymentMethod::Enum)
                    .values([PaymentMethod::Cash, PaymentMethod::Card])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(uuid(Booking::Id).primary_key())
                    .col(uuid(Booking::UserId).not_null())
                    .col(date(Booking::BookingDate).not_null())
                    .col(time(Booking::BookingTime).not_null())
                    .col(string_len(Booking::Address, 255).not_null())
                    .col(decimal_len(Booking::TotalAmount, 10, 2).not_null())
                    .col(
                        ColumnDef::new(Booking::PaymentMethod)
                            .custom(PaymentMethod::Enum)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Booking::Status)
                            .custom(BookingStatus::Enum)
                            .not_null()
                            .default("pending"),
                    )
                    .col(text_null(Booking::IdDocumentUrl))
                    .col(text_null(Booking::Notes))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Booking::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_profile")
                            .from(Booking::Table, Booking::UserId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(BookingStatus::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(PaymentMethod::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    UserId,
    BookingDate,
    BookingTime,
    Address,
    TotalAmount,
    PaymentMethod,
    Status,
    IdDocumentUrl,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum BookingStatus {
    #[sea_orm(iden = "booking_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "confirmed")]
    Confirmed,
    #[sea_orm(iden = "completed")]
    Completed,
    #[sea_orm(iden = "cancelled")]
    Cancelled,
}

#[derive(DeriveIden)]
pub enum PaymentMethod {
    #[sea_orm(iden = "payment_method")]
    Enum,
    #[sea_orm(iden = "cash")]
    Cash,
    #[sea_orm(iden = "card")]
    Card,
}
