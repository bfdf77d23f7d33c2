//! HTTP controller endpoints for the reference blog API.
//!
//! Every handler takes a [`crate::DbSession`], so each request works on its own unit of work.
//! Handlers that write commit explicitly; anything else is rolled back when the handler returns.

pub mod author;
pub mod post;
