//! Blog post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub created_at: DateTimeWithTimeZone,
    pub category: String,
    pub website: Option<String>,
    pub document: Option<String>,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::blog_post_cover::Entity")]
    Cover,
}

impl Related<super::blog_post_cover::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cover.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain BlogPost.
impl From<Model> for quill_core::domain::BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            text: model.text,
            created_at: model.created_at.into(),
            category: model.category,
            website: model.website,
            document: model.document,
            deleted: model.deleted,
        }
    }
}

/// Conversion from Domain BlogPost to SeaORM ActiveModel.
impl From<quill_core::domain::BlogPost> for ActiveModel {
    fn from(post: quill_core::domain::BlogPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            text: Set(post.text),
            created_at: Set(post.created_at.into()),
            category: Set(post.category),
            website: Set(post.website),
            document: Set(post.document),
            deleted: Set(post.deleted),
        }
    }
}
