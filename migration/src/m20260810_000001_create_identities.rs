use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Identity::Table)
                    .if_not_exists()
                    .col(uuid(Identity::Id).primary_key())
                    .col(string_len(Identity::Email, 255).not_null().unique_key())
                    .col(string_len(Identity::PasswordHash, 255).not_null())
                    .col(
                        timestamp_with_time_zone(Identity::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Identity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Identity {
    Table,
    Id,
    Email,
    PasswordHash,
    CreatedAt,
}
