use axum::extract::FromRef;

use crate::Db;

/// State shared by every route.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}

impl From<Db> for AppState {
    fn from(db: Db) -> Self {
        Self { db }
    }
}

impl FromRef<AppState> for Db {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
