//! Create rating table migration.

use sea_orm_migration::prelude::*;

use super::m20250301_000005_create_movie_table::Movie;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rating::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rating::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rating::MovieId).string_len(32).not_null())
                    .col(ColumnDef::new(Rating::Ip).string_len(64).not_null())
                    .col(ColumnDef::new(Rating::Star).small_integer().not_null())
                    .col(
                        ColumnDef::new(Rating::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_movie")
                            .from(Rating::Table, Rating::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: movie_id (aggregation loads all ratings of a page of movies).
        // No unique (movie_id, ip) index: the duplicate policy is configurable
        // and "allow" keeps the legacy multi-row behavior.
        manager
            .create_index(
                Index::create()
                    .name("idx_rating_movie_id")
                    .table(Rating::Table)
                    .col(Rating::MovieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rating_movie_ip")
                    .table(Rating::Table)
                    .col(Rating::MovieId)
                    .col(Rating::Ip)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rating {
    Table,
    Id,
    MovieId,
    Ip,
    Star,
    CreatedAt,
}
