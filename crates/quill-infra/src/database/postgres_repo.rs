//! PostgreSQL blog post repository.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
    Set, TransactionTrait, Unchanged,
};
use uuid::Uuid;

use quill_core::domain::{BlogPost, BlogPostCover};
use quill_core::error::RepoError;
use quill_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::entity::blog_post_cover::{self, Entity as CoverEntity};

/// PostgreSQL blog post repository.
pub struct PostgresBlogPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresBlogPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Posts that have not been soft-deleted. Every read starts here.
    fn active() -> Select<BlogPostEntity> {
        BlogPostEntity::find().filter(not_deleted())
    }
}

/// The soft-delete predicate shared by reads, updates and deletes.
fn not_deleted() -> SimpleExpr {
    blog_post::Column::Deleted.eq(false)
}

fn query_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepoError::NotFound,
        _ => {
            let err_str = e.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

/// Insert a cover or, when the post already has one, overwrite its image.
fn cover_upsert(cover: BlogPostCover) -> sea_orm::Insert<blog_post_cover::ActiveModel> {
    CoverEntity::insert(blog_post_cover::ActiveModel::from(cover)).on_conflict(
        OnConflict::column(blog_post_cover::Column::BlogPostId)
            .update_column(blog_post_cover::Column::Image)
            .to_owned(),
    )
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn list_active(&self) -> Result<Vec<BlogPost>, RepoError> {
        tracing::debug!("Listing blog posts");

        let result = Self::active()
            .order_by_asc(blog_post::Column::CreatedAt)
            .order_by_asc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_active(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let result = Self::active()
            .filter(blog_post::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(
        &self,
        post: BlogPost,
        cover: Option<BlogPostCover>,
    ) -> Result<BlogPost, RepoError> {
        let txn = self.db.begin().await.map_err(query_err)?;

        let model = blog_post::ActiveModel::from(post)
            .insert(&txn)
            .await
            .map_err(query_err)?;

        if let Some(cover) = cover {
            cover_upsert(cover).exec(&txn).await.map_err(query_err)?;
        }

        txn.commit().await.map_err(query_err)?;
        Ok(model.into())
    }

    async fn update(
        &self,
        post: BlogPost,
        cover_image: Option<String>,
    ) -> Result<BlogPost, RepoError> {
        let txn = self.db.begin().await.map_err(query_err)?;

        // Identity, created_at and the deleted flag are never written here.
        let changes = blog_post::ActiveModel {
            id: Unchanged(post.id),
            title: Set(post.title),
            text: Set(post.text),
            category: Set(post.category),
            website: Set(post.website),
            document: Set(post.document),
            ..Default::default()
        };
        let model = BlogPostEntity::update(changes)
            .filter(not_deleted())
            .exec(&txn)
            .await
            .map_err(query_err)?;

        if let Some(image) = cover_image {
            cover_upsert(BlogPostCover::new(model.id, image))
                .exec(&txn)
                .await
                .map_err(query_err)?;
        }

        txn.commit().await.map_err(query_err)?;
        Ok(model.into())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = BlogPostEntity::update_many()
            .col_expr(blog_post::Column::Deleted, Expr::value(true))
            .filter(blog_post::Column::Id.eq(id))
            .filter(not_deleted())
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn covers_for(&self, post_id: Uuid) -> Result<Vec<BlogPostCover>, RepoError> {
        let result = CoverEntity::find()
            .filter(blog_post_cover::Column::BlogPostId.eq(post_id))
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
