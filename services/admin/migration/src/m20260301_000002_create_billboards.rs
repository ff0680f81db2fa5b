use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Billboards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Billboards::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Billboards::StoreId).uuid().not_null())
                    .col(ColumnDef::new(Billboards::Label).string().not_null())
                    .col(ColumnDef::new(Billboards::ImageUrl).string().not_null())
                    .col(
                        ColumnDef::new(Billboards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Billboards::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Billboards::Table, Billboards::StoreId)
                            .to(Stores::Table, Stores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Billboards::Table)
                    .col(Billboards::StoreId)
                    .name("idx_billboards_store_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Billboards::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Billboards {
    Table,
    Id,
    StoreId,
    Label,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Stores {
    Table,
    Id,
}
