use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Colors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Colors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Colors::StoreId).uuid().not_null())
                    .col(ColumnDef::new(Colors::Name).string().not_null())
                    .col(ColumnDef::new(Colors::Value).string().not_null())
                    .col(
                        ColumnDef::new(Colors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Colors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Colors::Table, Colors::StoreId)
                            .to(Stores::Table, Stores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Colors::Table)
                    .col(Colors::StoreId)
                    .name("idx_colors_store_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Colors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Colors {
    Table,
    Id,
    StoreId,
    Name,
    Value,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Stores {
    Table,
    Id,
}
