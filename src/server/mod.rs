//! Reference blog server built on the facade.
//!
//! This module wires the global [`crate::Db`] into an axum application: startup registers the
//! blog models and initializes the facade from [`crate::config::Config`], controllers take a
//! [`crate::DbSession`] per request, and repositories run against any SeaORM connection so they
//! work inside a session as well as on the bare pool.

pub mod controller;
pub mod data;
pub mod model;
pub mod router;
pub mod startup;
