//! Create movie join tables (genres, cast, directors).

use sea_orm_migration::prelude::*;

use super::m20250301_000003_create_genre_table::Genre;
use super::m20250301_000004_create_actor_table::Actor;
use super::m20250301_000005_create_movie_table::Movie;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieGenre::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MovieGenre::MovieId).string_len(32).not_null())
                    .col(ColumnDef::new(MovieGenre::GenreId).string_len(32).not_null())
                    .primary_key(
                        Index::create()
                            .col(MovieGenre::MovieId)
                            .col(MovieGenre::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genre_movie")
                            .from(MovieGenre::Table, MovieGenre::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genre_genre")
                            .from(MovieGenre::Table, MovieGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieActor::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MovieActor::MovieId).string_len(32).not_null())
                    .col(ColumnDef::new(MovieActor::ActorId).string_len(32).not_null())
                    .primary_key(
                        Index::create()
                            .col(MovieActor::MovieId)
                            .col(MovieActor::ActorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_actor_movie")
                            .from(MovieActor::Table, MovieActor::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_actor_actor")
                            .from(MovieActor::Table, MovieActor::ActorId)
                            .to(Actor::Table, Actor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieDirector::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MovieDirector::MovieId)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MovieDirector::ActorId)
                            .string_len(32)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(MovieDirector::MovieId)
                            .col(MovieDirector::ActorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_director_movie")
                            .from(MovieDirector::Table, MovieDirector::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_director_actor")
                            .from(MovieDirector::Table, MovieDirector::ActorId)
                            .to(Actor::Table, Actor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovieDirector::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MovieActor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MovieGenre::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MovieGenre {
    Table,
    MovieId,
    GenreId,
}

#[derive(DeriveIden)]
pub enum MovieActor {
    Table,
    MovieId,
    ActorId,
}

#[derive(DeriveIden)]
pub enum MovieDirector {
    Table,
    MovieId,
    ActorId,
}
