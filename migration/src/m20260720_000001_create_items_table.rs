use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create items table
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Items::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Items::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Items::Description).string_len(300).not_null())
                    .col(ColumnDef::new(Items::Price).double().not_null())
                    .col(ColumnDef::new(Items::Available).boolean().not_null().default(true))
                    .col(ColumnDef::new(Items::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Items::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Index for name lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_items_name")
                    .table(Items::Table)
                    .col(Items::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Name,
    Description,
    Price,
    Available,
    CreatedAt,
    UpdatedAt,
}
