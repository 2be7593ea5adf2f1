use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostCover};
use crate::error::RepoError;

/// Blog post storage.
///
/// Reads, updates and deletes only ever see posts whose `deleted` flag is
/// false; implementations apply that filter in one place. Each write is
/// atomic across the post and its cover.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// All visible posts in insertion order.
    async fn list_active(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a visible post by id.
    async fn find_active(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Insert a new post together with its optional cover.
    async fn create(
        &self,
        post: BlogPost,
        cover: Option<BlogPostCover>,
    ) -> Result<BlogPost, RepoError>;

    /// Overwrite the mutable fields of a visible post and, when an image is
    /// given, upsert its cover. `RepoError::NotFound` if the post is gone.
    async fn update(&self, post: BlogPost, cover_image: Option<String>)
    -> Result<BlogPost, RepoError>;

    /// Flag a visible post as deleted. `RepoError::NotFound` if there is none.
    async fn soft_delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Every cover row stored for a post.
    async fn covers_for(&self, post_id: Uuid) -> Result<Vec<BlogPostCover>, RepoError>;
}
