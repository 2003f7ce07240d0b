use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuestBookRows::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GuestBookRows::HKey).uuid().not_null())
                    .col(ColumnDef::new(GuestBookRows::SKey).uuid().not_null())
                    .col(ColumnDef::new(GuestBookRows::Type).string().not_null())
                    .col(ColumnDef::new(GuestBookRows::Name).string().not_null())
                    .col(ColumnDef::new(GuestBookRows::Message).text().not_null())
                    .col(ColumnDef::new(GuestBookRows::ImageUrl).string())
                    .col(
                        ColumnDef::new(GuestBookRows::PostedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(GuestBookRows::HKey)
                            .col(GuestBookRows::SKey),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuestBookRows::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GuestBookRows {
    Table,
    HKey,
    SKey,
    #[sea_orm(iden = "type_")]
    Type,
    Name,
    Message,
    ImageUrl,
    PostedAt,
}
