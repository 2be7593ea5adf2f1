use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use url::{Host, Url};
use uuid::Uuid;

use crate::error::DomainError;

/// Blog post entity. Posts are never physically removed; `deleted` hides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub category: String,
    pub website: Option<String>,
    /// Reference into the object store.
    pub document: Option<String>,
    pub deleted: bool,
}

impl BlogPost {
    /// Create a new, visible post stamped with the current time.
    pub fn new(
        title: String,
        text: String,
        category: String,
        website: Option<String>,
        document: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            text,
            // timestamptz keeps microseconds
            created_at: Utc::now().trunc_subsecs(6),
            category,
            website,
            document,
            deleted: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

/// Whether a draft must carry every required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    /// Create and full replace: `title`, `text` and `category` are required.
    Full,
    /// Partial update: only supplied fields are checked.
    Partial,
}

/// Writable fields of a post as submitted by a client.
///
/// `website` and `document` are doubly optional: `None` leaves the stored
/// value alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostDraft {
    pub title: Option<String>,
    pub text: Option<String>,
    pub category: Option<String>,
    pub website: Option<Option<String>>,
    pub document: Option<Option<String>>,
    /// Image reference for the cover; replaces any existing cover.
    pub cover: Option<String>,
}

impl BlogPostDraft {
    /// Check the draft, collecting every problem as `"<field>: <reason>"`.
    pub fn validate(&self, mode: DraftMode) -> Result<(), DomainError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("title", &self.title),
            ("text", &self.text),
            ("category", &self.category),
        ] {
            match value {
                None if mode == DraftMode::Full => {
                    errors.push(format!("{field}: This field is required."));
                }
                Some(v) if v.trim().is_empty() => {
                    errors.push(format!("{field}: This field may not be blank."));
                }
                _ => {}
            }
        }

        if let Some(Some(url)) = &self.website {
            if !is_http_url(url) {
                errors.push("website: Enter a valid URL.".to_string());
            }
        }
        if let Some(Some(document)) = &self.document {
            if document.trim().is_empty() {
                errors.push("document: This field may not be blank.".to_string());
            }
        }
        if let Some(image) = &self.cover {
            if image.trim().is_empty() {
                errors.push("cover: This field may not be blank.".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    /// Validate and build a fresh post, handing back the cover image if any.
    pub fn into_post(self) -> Result<(BlogPost, Option<String>), DomainError> {
        self.validate(DraftMode::Full)?;

        // Full validation guarantees the required fields are present.
        let post = BlogPost::new(
            self.title.unwrap_or_default(),
            self.text.unwrap_or_default(),
            self.category.unwrap_or_default(),
            self.website.flatten(),
            self.document.flatten(),
        );
        Ok((post, self.cover))
    }

    /// Overwrite the supplied fields of `post`. Returns the cover image if any.
    ///
    /// Identity, `created_at` and `deleted` are never touched.
    pub fn apply_to(self, post: &mut BlogPost) -> Option<String> {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(text) = self.text {
            post.text = text;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(website) = self.website {
            post.website = website;
        }
        if let Some(document) = self.document {
            post.document = document;
        }
        self.cover
    }
}

/// An absolute `http`/`https` URL whose host is present and well formed.
fn is_http_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    match url.host() {
        Some(Host::Domain(domain)) => {
            !domain.is_empty() && !domain.starts_with('.') && !domain.contains("..")
        }
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> BlogPostDraft {
        BlogPostDraft {
            title: Some("A".to_string()),
            text: Some("t".to_string()),
            category: Some("news".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_into_post_starts_visible() {
        let (post, cover) = full_draft().into_post().unwrap();
        assert_eq!(post.title, "A");
        assert_eq!(post.category, "news");
        assert!(post.is_active());
        assert!(post.website.is_none());
        assert!(cover.is_none());
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let err = BlogPostDraft::default()
            .validate(DraftMode::Full)
            .unwrap_err();
        match err {
            DomainError::Validation(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors[0].starts_with("title:"));
                assert!(errors[2].starts_with("category:"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_into_post_reports_each_missing_field() {
        let draft = BlogPostDraft {
            title: Some("A".to_string()),
            ..Default::default()
        };
        match draft.into_post().unwrap_err() {
            DomainError::Validation(errors) => assert_eq!(
                errors,
                [
                    "text: This field is required.",
                    "category: This field is required.",
                ]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_partial_draft_may_omit_required_fields() {
        let draft = BlogPostDraft {
            text: Some("new body".to_string()),
            ..Default::default()
        };
        assert!(draft.validate(DraftMode::Partial).is_ok());
    }

    #[test]
    fn test_blank_values_rejected() {
        let draft = BlogPostDraft {
            title: Some("   ".to_string()),
            cover: Some(String::new()),
            ..Default::default()
        };
        let err = draft.validate(DraftMode::Partial).unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref e) if e.len() == 2));
    }

    #[test]
    fn test_website_must_be_http_url() {
        for (url, ok) in [
            ("https://example.com/post", true),
            ("http://localhost:8080", true),
            ("ftp://example.com", false),
            ("http://127.0.0.1/x", true),
            ("https://", false),
            ("example.com", false),
            ("http://:80", false),
            ("http://@", false),
            ("https://..", false),
            ("http://<script>", false),
            ("mailto:someone@example.com", false),
        ] {
            let draft = BlogPostDraft {
                website: Some(Some(url.to_string())),
                ..full_draft()
            };
            assert_eq!(draft.validate(DraftMode::Full).is_ok(), ok, "{url}");
        }
    }

    #[test]
    fn test_apply_to_keeps_identity_and_clears_explicit_nulls() {
        let (mut post, _) = BlogPostDraft {
            website: Some(Some("https://example.com".to_string())),
            document: Some(Some("docs/a.pdf".to_string())),
            ..full_draft()
        }
        .into_post()
        .unwrap();
        let id = post.id;
        let created_at = post.created_at;

        let cover = BlogPostDraft {
            title: Some("B".to_string()),
            website: Some(None),
            cover: Some("covers/b.png".to_string()),
            ..Default::default()
        }
        .apply_to(&mut post);

        assert_eq!(post.id, id);
        assert_eq!(post.created_at, created_at);
        assert_eq!(post.title, "B");
        assert_eq!(post.text, "t");
        assert!(post.website.is_none());
        assert_eq!(post.document.as_deref(), Some("docs/a.pdf"));
        assert_eq!(cover.as_deref(), Some("covers/b.png"));
    }
}
