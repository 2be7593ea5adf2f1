use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cover image attached to a blog post. A post owns at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostCover {
    pub id: Uuid,
    pub blog_post_id: Uuid,
    /// Reference into the object store.
    pub image: String,
}

impl BlogPostCover {
    pub fn new(blog_post_id: Uuid, image: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            blog_post_id,
            image,
        }
    }
}
