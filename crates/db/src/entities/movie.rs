//! Movie entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,

    pub tagline: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Poster image path.
    pub poster: Option<String>,

    pub year: i32,

    pub country: String,

    pub category_id: Option<String>,

    /// Unpublished movies are invisible on every public read path.
    pub draft: bool,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "SetNull"
    )]
    Category,

    #[sea_orm(has_many = "super::movie_genre::Entity")]
    MovieGenre,

    #[sea_orm(has_many = "super::movie_actor::Entity")]
    MovieActor,

    #[sea_orm(has_many = "super::movie_director::Entity")]
    MovieDirector,

    #[sea_orm(has_many = "super::review::Entity")]
    Review,

    #[sea_orm(has_many = "super::rating::Entity")]
    Rating,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
