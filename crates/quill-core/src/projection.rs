//! Response shapes for blog posts.
//!
//! Each operation exposes a fixed subset of the post's fields. The combined
//! resource picks its shape from the requested [`Action`] alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::BlogPost;

/// What a caller asked the combined resource to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
    PartialUpdate,
    Destroy,
}

/// The field selection applied to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    Summary,
    Detail,
    Write,
}

impl Action {
    pub fn projection(self) -> ProjectionKind {
        match self {
            Action::Retrieve => ProjectionKind::Detail,
            Action::Create | Action::Update => ProjectionKind::Write,
            Action::List | Action::PartialUpdate | Action::Destroy => ProjectionKind::Summary,
        }
    }
}

/// List shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub category: String,
}

/// Detail shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostDetail {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub category: String,
    pub website: Option<String>,
    pub document: Option<String>,
}

/// Create/update shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostWritten {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub category: String,
    pub website: Option<String>,
    pub document: Option<String>,
}

impl From<&BlogPost> for BlogPostSummary {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            created_at: post.created_at,
            category: post.category.clone(),
        }
    }
}

impl From<&BlogPost> for BlogPostDetail {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            text: post.text.clone(),
            created_at: post.created_at,
            category: post.category.clone(),
            website: post.website.clone(),
            document: post.document.clone(),
        }
    }
}

impl From<&BlogPost> for BlogPostWritten {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            text: post.text.clone(),
            category: post.category.clone(),
            website: post.website.clone(),
            document: post.document.clone(),
        }
    }
}

/// A post rendered in one of the three shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Projection {
    Summary(BlogPostSummary),
    Detail(BlogPostDetail),
    Write(BlogPostWritten),
}

impl Projection {
    pub fn of(kind: ProjectionKind, post: &BlogPost) -> Self {
        match kind {
            ProjectionKind::Summary => Projection::Summary(post.into()),
            ProjectionKind::Detail => Projection::Detail(post.into()),
            ProjectionKind::Write => Projection::Write(post.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> BlogPost {
        BlogPost::new(
            "A".to_string(),
            "t".to_string(),
            "news".to_string(),
            Some("https://example.com".to_string()),
            None,
        )
    }

    fn keys(projection: Projection) -> Vec<String> {
        let value = serde_json::to_value(projection).unwrap();
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_action_selects_shape() {
        assert_eq!(Action::Retrieve.projection(), ProjectionKind::Detail);
        assert_eq!(Action::Create.projection(), ProjectionKind::Write);
        assert_eq!(Action::Update.projection(), ProjectionKind::Write);
        assert_eq!(Action::List.projection(), ProjectionKind::Summary);
        assert_eq!(Action::PartialUpdate.projection(), ProjectionKind::Summary);
        assert_eq!(Action::Destroy.projection(), ProjectionKind::Summary);
    }

    #[test]
    fn test_summary_fields() {
        assert_eq!(
            keys(Projection::of(ProjectionKind::Summary, &post())),
            ["category", "created_at", "id", "title"]
        );
    }

    #[test]
    fn test_detail_fields() {
        assert_eq!(
            keys(Projection::of(ProjectionKind::Detail, &post())),
            [
                "category",
                "created_at",
                "document",
                "id",
                "text",
                "title",
                "website"
            ]
        );
    }

    #[test]
    fn test_write_fields_and_nulls() {
        let value = serde_json::to_value(Projection::of(ProjectionKind::Write, &post())).unwrap();
        assert_eq!(value["title"], "A");
        assert_eq!(value["website"], "https://example.com");
        assert!(value["document"].is_null());
        assert!(value.get("created_at").is_none());
        assert!(value.get("deleted").is_none());
    }
}
