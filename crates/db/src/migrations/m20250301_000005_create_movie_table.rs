//! Create movie table migration.

use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movie::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movie::Title).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Movie::Tagline)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Movie::Description).text().not_null())
                    .col(ColumnDef::new(Movie::Poster).string_len(512))
                    .col(ColumnDef::new(Movie::Year).integer().not_null())
                    .col(ColumnDef::new(Movie::Country).string_len(30).not_null())
                    .col(ColumnDef::new(Movie::CategoryId).string_len(32))
                    .col(
                        ColumnDef::new(Movie::Draft)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Movie::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_category")
                            .from(Movie::Table, Movie::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: draft (every public read path filters on it)
        manager
            .create_index(
                Index::create()
                    .name("idx_movie_draft")
                    .table(Movie::Table)
                    .col(Movie::Draft)
                    .to_owned(),
            )
            .await?;

        // Index: year (range filter on the list endpoint)
        manager
            .create_index(
                Index::create()
                    .name("idx_movie_year")
                    .table(Movie::Table)
                    .col(Movie::Year)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movie::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Movie {
    Table,
    Id,
    Title,
    Tagline,
    Description,
    Poster,
    Year,
    Country,
    CategoryId,
    Draft,
    CreatedAt,
}
