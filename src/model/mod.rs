//! Data transfer objects shared by the HTTP layer.

pub mod api;
#[cfg(feature = "server")]
pub mod blog;
