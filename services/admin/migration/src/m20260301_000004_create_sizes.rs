use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sizes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sizes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sizes::StoreId).uuid().not_null())
                    .col(ColumnDef::new(Sizes::Name).string().not_null())
                    .col(ColumnDef::new(Sizes::Value).string().not_null())
                    .col(
                        ColumnDef::new(Sizes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sizes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sizes::Table, Sizes::StoreId)
                            .to(Stores::Table, Stores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Sizes::Table)
                    .col(Sizes::StoreId)
                    .name("idx_sizes_store_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sizes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sizes {
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
