//! Blog post cover entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_post_covers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// One cover per post; the upsert conflicts on this column.
    #[sea_orm(unique)]
    pub blog_post_id: Uuid,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blog_post::Entity",
        from = "Column::BlogPostId",
        to = "super::blog_post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BlogPost,
}

impl Related<super::blog_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogPost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for quill_core::domain::BlogPostCover {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            blog_post_id: model.blog_post_id,
            image: model.image,
        }
    }
}

impl From<quill_core::domain::BlogPostCover> for ActiveModel {
    fn from(cover: quill_core::domain::BlogPostCover) -> Self {
        Self {
            id: Set(cover.id),
            blog_post_id: Set(cover.blog_post_id),
            image: Set(cover.image),
        }
    }
}
