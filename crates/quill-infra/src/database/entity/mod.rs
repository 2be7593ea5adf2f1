//! SeaORM entities backing the blog post tables.

pub mod blog_post;
pub mod blog_post_cover;
