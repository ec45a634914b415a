use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string_len(People::Name, 100))
                    .col(string_len(People::Height, 100))
                    .col(string_len(People::Mass, 100))
                    .col(string_len(People::HairColor, 100))
                    .col(string_len(People::SkinColor, 100))
                    .col(string_len(People::EyeColor, 100))
                    .col(string_len(People::BirthYear, 100))
                    .col(string_len(People::Gender, 100))
                    .col(timestamp(People::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum People {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    CreatedAt,
}
