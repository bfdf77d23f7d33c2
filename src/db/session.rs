//! Request-scoped database sessions.
//!
//! A [`DbSession`] is one unit of work on a database transaction. Nothing is persisted until
//! [`DbSession::commit`] is called; a session that goes out of scope any other way (early
//! return, error propagated with `?`, panic) is rolled back and released.
//!
//! Handlers receive a session per request by taking `DbSession` as an extractor. The router
//! state must provide a [`Db`] through `FromRef`, or be a `Db` itself.

use std::{
    ops::Deref,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sea_orm::DatabaseTransaction;

use crate::{db::Db, error::Error};

/// A unit of work bound to one database transaction.
///
/// Dereferences to [`DatabaseTransaction`], so it can be passed anywhere SeaORM expects a
/// `ConnectionTrait`:
///
/// ```ignore
/// async fn create(session: DbSession, Json(dto): Json<NewAuthorDto>) -> Result<Json<AuthorDto>, Error> {
///     let author = AuthorRepository::new(&*session).create(dto.name).await?;
///     session.commit().await?;
///
///     Ok(Json(author.into()))
/// }
/// ```
pub struct DbSession {
    txn: DatabaseTransaction,
    lease: SessionLease,
}

/// Tracks a session in its facade's active count until dropped.
struct SessionLease {
    active: Arc<AtomicUsize>,
    finished: bool,
}

impl SessionLease {
    fn acquire(active: Arc<AtomicUsize>) -> Self {
        let count = active.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!("Session opened ({} active)", count);

        Self {
            active,
            finished: false,
        }
    }
}

impl Drop for SessionLease {
    fn drop(&mut self) {
        let count = self.active.fetch_sub(1, Ordering::SeqCst) - 1;

        if self.finished {
            tracing::trace!("Session released ({} active)", count);
        } else {
            tracing::debug!(
                "Session released without commit, rolled back ({} active)",
                count
            );
        }
    }
}

impl DbSession {
    pub(crate) fn new(txn: DatabaseTransaction, active: Arc<AtomicUsize>) -> Self {
        Self {
            txn,
            lease: SessionLease::acquire(active),
        }
    }

    /// The underlying transaction.
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Commits the unit of work and releases the session.
    pub async fn commit(self) -> Result<(), Error> {
        let DbSession { txn, mut lease } = self;

        txn.commit().await?;
        lease.finished = true;

        Ok(())
    }

    /// Discards the unit of work and releases the session.
    pub async fn rollback(self) -> Result<(), Error> {
        let DbSession { txn, mut lease } = self;

        txn.rollback().await?;
        lease.finished = true;

        Ok(())
    }
}

impl Deref for DbSession {
    type Target = DatabaseTransaction;

    fn deref(&self) -> &Self::Target {
        &self.txn
    }
}

impl std::fmt::Debug for DbSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbSession").finish_non_exhaustive()
    }
}

/// Opens one session per request from the [`Db`] held in router state.
///
/// The session lives as long as the handler and is released when the handler returns.
impl<S> FromRequestParts<S> for DbSession
where
    Db: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let db = Db::from_ref(state);

        db.session().await
    }
}
