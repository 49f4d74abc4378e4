use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_identities::Identity;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(uuid(Profile::Id).primary_key())
                    .col(string_len(Profile::Email, 255).not_null().unique_key())
                    .col(
                        string_len(Profile::FullName, 100)
                            .not_null()
                            .default(""),
                    )
                    .col(string_len(Profile::Phone, 30).not_null().default(""))
                    .col(
                        timestamp_with_time_zone(Profile::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Profile::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Profile id IS the identity id: deleting the identity
                    // removes the profile and everything under it.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_identity")
                            .from(Profile::Table, Profile::Id)
                            .to(Identity::Table, Identity::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    Email,
    FullName,
    Phone,
    CreatedAt,
    UpdatedAt,
}
