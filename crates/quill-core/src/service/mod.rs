//! Application services built on top of the ports.

mod blog_post;

pub use blog_post::{BlogPostResource, ResourceRequest, ResourceResponse};
