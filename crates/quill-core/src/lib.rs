//! # Quill Core
//!
//! The domain layer of the Quill blog service.
//! This crate contains the blog post model, its projections and the
//! `BlogPostResource` facade, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod projection;
pub mod service;

pub use error::DomainError;
pub use service::BlogPostResource;
