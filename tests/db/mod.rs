//! Tests for the database facade lifecycle and sessions.
//!
//! Each test builds an independent facade on its own in-memory SQLite database, so tests can run
//! in parallel without sharing the global instance.

mod lifecycle;
mod session;

use sea_ease_test_utils::prelude::*;
