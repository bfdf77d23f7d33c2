//! Repositories for the blog entities.
//!
//! Repositories borrow any `ConnectionTrait`, so the same code runs on a request's
//! [`crate::DbSession`] or directly on the engine.

pub mod author;
pub mod post;
