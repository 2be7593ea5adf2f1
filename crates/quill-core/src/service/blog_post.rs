use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostCover, BlogPostDraft, DraftMode};
use crate::error::{DomainError, RepoError};
use crate::ports::BlogPostRepository;
use crate::projection::{Action, BlogPostDetail, BlogPostSummary, BlogPostWritten, Projection};

/// CRUD facade over the blog post collection.
///
/// Every lookup goes through the repository's visible-only reads, so a
/// soft-deleted post behaves exactly like a missing one.
#[derive(Clone)]
pub struct BlogPostResource {
    repo: Arc<dyn BlogPostRepository>,
}

/// A request to the combined resource, tagged by action.
#[derive(Debug, Clone)]
pub enum ResourceRequest {
    List,
    Retrieve(Uuid),
    Create(BlogPostDraft),
    Update(Uuid, BlogPostDraft),
    PartialUpdate(Uuid, BlogPostDraft),
    Destroy(Uuid),
}

impl ResourceRequest {
    pub fn action(&self) -> Action {
        match self {
            ResourceRequest::List => Action::List,
            ResourceRequest::Retrieve(_) => Action::Retrieve,
            ResourceRequest::Create(_) => Action::Create,
            ResourceRequest::Update(..) => Action::Update,
            ResourceRequest::PartialUpdate(..) => Action::PartialUpdate,
            ResourceRequest::Destroy(_) => Action::Destroy,
        }
    }
}

/// What the combined resource hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceResponse {
    Many(Vec<Projection>),
    One(Projection),
    Empty,
}

impl BlogPostResource {
    pub fn new(repo: Arc<dyn BlogPostRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<BlogPostSummary>, DomainError> {
        let posts = self.repo.list_active().await?;
        Ok(posts.iter().map(Into::into).collect())
    }

    pub async fn retrieve(&self, id: Uuid) -> Result<BlogPostDetail, DomainError> {
        let post = self.find(id).await?;
        Ok((&post).into())
    }

    pub async fn create(&self, draft: BlogPostDraft) -> Result<BlogPostWritten, DomainError> {
        let post = self.insert(draft).await?;
        Ok((&post).into())
    }

    /// Apply `draft` to a visible post. `DraftMode::Full` is a replace and
    /// demands every required field; `DraftMode::Partial` is a patch.
    pub async fn update(
        &self,
        id: Uuid,
        draft: BlogPostDraft,
        mode: DraftMode,
    ) -> Result<BlogPostWritten, DomainError> {
        let post = self.modify(id, draft, mode).await?;
        Ok((&post).into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo
            .soft_delete(id)
            .await
            .map_err(|e| not_found_or(e, id))
    }

    /// The cover of a visible post.
    pub async fn cover(&self, id: Uuid) -> Result<BlogPostCover, DomainError> {
        self.find(id).await?;
        self.repo
            .covers_for(id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "BlogPostCover",
                id,
            })
    }

    /// Serve the combined resource: run the operation, then render the
    /// result in the shape chosen by the request's action.
    pub async fn handle(&self, request: ResourceRequest) -> Result<ResourceResponse, DomainError> {
        let kind = request.action().projection();

        let post = match request {
            ResourceRequest::List => {
                let posts = self.repo.list_active().await?;
                return Ok(ResourceResponse::Many(
                    posts.iter().map(|p| Projection::of(kind, p)).collect(),
                ));
            }
            ResourceRequest::Destroy(id) => {
                self.delete(id).await?;
                return Ok(ResourceResponse::Empty);
            }
            ResourceRequest::Retrieve(id) => self.find(id).await?,
            ResourceRequest::Create(draft) => self.insert(draft).await?,
            ResourceRequest::Update(id, draft) => self.modify(id, draft, DraftMode::Full).await?,
            ResourceRequest::PartialUpdate(id, draft) => {
                self.modify(id, draft, DraftMode::Partial).await?
            }
        };

        Ok(ResourceResponse::One(Projection::of(kind, &post)))
    }

    async fn find(&self, id: Uuid) -> Result<BlogPost, DomainError> {
        self.repo
            .find_active(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    async fn insert(&self, draft: BlogPostDraft) -> Result<BlogPost, DomainError> {
        let (post, cover) = draft.into_post()?;
        let cover = cover.map(|image| BlogPostCover::new(post.id, image));
        Ok(self.repo.create(post, cover).await?)
    }

    async fn modify(
        &self,
        id: Uuid,
        draft: BlogPostDraft,
        mode: DraftMode,
    ) -> Result<BlogPost, DomainError> {
        let mut post = self.find(id).await?;
        draft.validate(mode)?;
        let cover = draft.apply_to(&mut post);
        self.repo
            .update(post, cover)
            .await
            .map_err(|e| not_found_or(e, id))
    }
}

fn not_found_or(err: RepoError, id: Uuid) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::post_not_found(id),
        other => other.into(),
    }
}
