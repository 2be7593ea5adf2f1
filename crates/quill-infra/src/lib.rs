//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;

pub use database::InMemoryBlogPostRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresBlogPostRepository;

#[cfg(feature = "postgres")]
pub use sea_orm;
