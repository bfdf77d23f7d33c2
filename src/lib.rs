//! Process-wide SeaORM facade for axum applications.
//!
//! This crate binds a SeaORM engine to a web request lifecycle. A single [`Db`] is shared
//! across the application: models are registered on it, [`Db::init_app`] connects it lazily,
//! [`Db::create_all`] and [`Db::drop_all`] manage the registered tables, and [`DbSession`]
//! provides one unit of work per request that is always released when the request ends.
//! The ORM's column types, operators and query helpers are re-exported from [`prelude`].

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;


pub use db::{session::DbSession, Db, EngineOptions, Metadata};
pub use error::Error;
