use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(ContactStatus::Enum)
                    .values([
                        ContactStatus::New,
                        ContactStatus::Read,
                        ContactStatus::Replied,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContactMessage::Table)
                    .if_not_exists()
                    .col(uuid(ContactMessage::Id).primary_key())
                    .col(string_len(ContactMessage::Name, 100).not_null())
                    .col(string_len(ContactMessage::Email, 255).not_null())
                    .col(string_null(ContactMessage::Phone))
                    .col(text(ContactMessage::Message).not_null())
                    .col(
                        ColumnDef::new(ContactMessage::Status)
                            .custom(ContactStatus::Enum)
                            .not_null()
                            .default("new"),
                    )
                    .col(
                        timestamp_with_time_zone(ContactMessage::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactMessage::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ContactStatus::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContactMessage {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Message,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum ContactStatus {
    #[sea_orm(iden = "contact_status")]
    Enum,
    #[sea_orm(iden = "new")]
    New,
    #[sea_orm(iden = "read")]
    Read,
    #[sea_orm(iden = "replied")]
    Replied,
}
