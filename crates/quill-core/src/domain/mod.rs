//! Domain entities - the core business objects.

mod blog_post;
mod cover;

pub use blog_post::{BlogPost, BlogPostDraft, DraftMode};
pub use cover::BlogPostCover;
