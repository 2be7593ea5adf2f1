//! In-memory blog post storage - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{BlogPost, BlogPostCover};
use quill_core::error::RepoError;
use quill_core::ports::BlogPostRepository;

#[derive(Default)]
struct Tables {
    /// Insertion order is list order.
    posts: Vec<BlogPost>,
    /// Keyed by owning post id.
    covers: HashMap<Uuid, BlogPostCover>,
}

impl Tables {
    fn active(&self) -> impl Iterator<Item = &BlogPost> {
        self.posts.iter().filter(|p| p.is_active())
    }

    fn active_mut(&mut self, id: Uuid) -> Option<&mut BlogPost> {
        self.posts
            .iter_mut()
            .filter(|p| p.is_active())
            .find(|p| p.id == id)
    }
}

/// In-memory blog post repository.
///
/// Both tables sit behind one async RwLock, so every write is atomic.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    tables: RwLock<Tables>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn list_active(&self) -> Result<Vec<BlogPost>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.active().cloned().collect())
    }

    async fn find_active(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.active().find(|p| p.id == id).cloned())
    }

    async fn create(
        &self,
        post: BlogPost,
        cover: Option<BlogPostCover>,
    ) -> Result<BlogPost, RepoError> {
        let mut tables = self.tables.write().await;

        if tables.posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(format!(
                "blog post {} already exists",
                post.id
            )));
        }

        if let Some(cover) = cover {
            tables.covers.insert(post.id, cover);
        }
        tables.posts.push(post.clone());

        tracing::debug!(post_id = %post.id, "Stored blog post in memory");
        Ok(post)
    }

    async fn update(
        &self,
        post: BlogPost,
        cover_image: Option<String>,
    ) -> Result<BlogPost, RepoError> {
        let mut tables = self.tables.write().await;

        let stored = tables.active_mut(post.id).ok_or(RepoError::NotFound)?;
        stored.title = post.title;
        stored.text = post.text;
        stored.category = post.category;
        stored.website = post.website;
        stored.document = post.document;
        let updated = stored.clone();

        if let Some(image) = cover_image {
            tables
                .covers
                .entry(updated.id)
                .and_modify(|cover| cover.image.clone_from(&image))
                .or_insert_with(|| BlogPostCover::new(updated.id, image.clone()));
        }

        Ok(updated)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        let post = tables.active_mut(id).ok_or(RepoError::NotFound)?;
        post.deleted = true;
        Ok(())
    }

    async fn covers_for(&self, post_id: Uuid) -> Result<Vec<BlogPostCover>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.covers.get(&post_id).cloned().into_iter().collect())
    }
}
