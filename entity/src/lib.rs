//! SeaORM entities for the reference blog server.

pub mod prelude;

pub mod author;
pub mod post;
