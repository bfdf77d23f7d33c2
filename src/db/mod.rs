//! The process-wide database facade.
//!
//! [`Db::global`] returns the single instance shared by the application. It starts out
//! uninitialized: models can be registered on [`Db::model`] at any time, but every operation that
//! needs a connection fails with [`Error::NotInitialized`] until [`Db::init_app`] has connected
//! the engine.

pub mod metadata;
pub mod options;
pub mod session;

use std::{
    future::Future,
    pin::Pin,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, PoisonError, RwLock,
    },
};

use once_cell::sync::Lazy;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema, TransactionTrait};

use crate::{db::session::DbSession, error::Error};

pub use metadata::Metadata;
pub use options::EngineOptions;

static GLOBAL: Lazy<Db> = Lazy::new(Db::isolated);

/// Handle to a database facade.
///
/// Cloning is cheap and every clone refers to the same engine, registry and session count.
#[derive(Clone)]
pub struct Db {
    inner: Arc<DbInner>,
}

#[derive(Default)]
struct DbInner {
    engine: RwLock<Option<DatabaseConnection>>,
    metadata: Metadata,
    active_sessions: Arc<AtomicUsize>,
}

impl Db {
    /// A handle to the process-wide facade. Repeated construction always yields the same
    /// instance as [`Db::global`].
    pub fn new() -> Self {
        GLOBAL.clone()
    }

    /// Creates a facade that shares nothing with [`Db::global`].
    ///
    /// Meant for tests that need their own database, and for applications that talk to more
    /// than one database. Prefer [`Db::new`] or [`Db::global`] everywhere else.
    pub fn isolated() -> Self {
        Self {
            inner: Arc::new(DbInner::default()),
        }
    }

    /// The process-wide facade. Every call returns the same instance.
    pub fn global() -> &'static Db {
        &GLOBAL
    }

    /// Returns true when both handles refer to the same facade.
    pub fn ptr_eq(&self, other: &Db) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Registry of models managed by [`Db::create_all`] and [`Db::drop_all`].
    pub fn model(&self) -> &Metadata {
        &self.inner.metadata
    }

    pub fn is_initialized(&self) -> bool {
        self.inner
            .engine
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Connects the engine to `database_uri`.
    ///
    /// Pool defaults are applied to server databases only, see [`EngineOptions`]. On failure
    /// the facade keeps its previous state and the driver's error is returned. Calling this on
    /// an initialized facade replaces the engine; sessions already open keep their connection.
    pub async fn init_app(&self, database_uri: &str, options: EngineOptions) -> Result<(), Error> {
        let settings = options.resolve(database_uri);
        let conn = Database::connect(options.connect_options(database_uri)).await?;
        let backend = conn.get_database_backend();

        let previous = self
            .inner
            .engine
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(conn);

        if previous.is_some() {
            tracing::warn!("Database facade re-initialized, the previous engine was replaced");
        }

        tracing::info!(
            "Database initialized ({:?}, max connections: {})",
            backend,
            settings
                .max_connections
                .map_or_else(|| "driver default".to_string(), |max| max.to_string())
        );

        Ok(())
    }

    /// The engine's connection pool.
    pub fn connection(&self) -> Result<DatabaseConnection, Error> {
        self.inner
            .engine
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(Error::NotInitialized)
    }

    /// Checks the database is reachable.
    pub async fn ping(&self) -> Result<(), Error> {
        self.connection()?.ping().await?;

        Ok(())
    }

    /// Creates every registered table that does not exist yet, with its indexes.
    pub async fn create_all(&self) -> Result<(), Error> {
        let conn = self.connection()?;
        let schema = Schema::new(conn.get_database_backend());

        for stmt in self.inner.metadata.create_statements(&schema) {
            conn.execute(&stmt.table).await?;
            for index in &stmt.indexes {
                conn.execute(index).await?;
            }

            tracing::debug!("Created table {}", stmt.name);
        }

        Ok(())
    }

    /// Drops every registered table that exists, in reverse registration order.
    pub async fn drop_all(&self) -> Result<(), Error> {
        let conn = self.connection()?;

        for (name, stmt) in self.inner.metadata.drop_statements() {
            conn.execute(&stmt).await?;

            tracing::debug!("Dropped table {}", name);
        }

        Ok(())
    }

    /// Opens a session for one unit of work.
    ///
    /// The session is released when it is committed, rolled back or dropped.
    pub async fn session(&self) -> Result<DbSession, Error> {
        let txn = self.connection()?.begin().await?;

        Ok(DbSession::new(txn, self.inner.active_sessions.clone()))
    }

    /// Runs `f` inside a session, committing when it returns `Ok` and rolling back otherwise.
    ///
    /// ```ignore
    /// let author = db
    ///     .with_session(|session| {
    ///         Box::pin(async move { AuthorRepository::new(&**session).create(name).await })
    ///     })
    ///     .await?;
    /// ```
    pub async fn with_session<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: for<'c> FnOnce(&'c DbSession) -> Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>,
        E: From<Error>,
    {
        let session = self.session().await?;
        let result = f(&session).await;

        match result {
            Ok(value) => {
                session.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = session.rollback().await {
                    tracing::warn!("Failed to roll back session: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    /// Number of sessions opened on this facade and not yet released.
    pub fn active_sessions(&self) -> usize {
        self.inner.active_sessions.load(Ordering::SeqCst)
    }

    /// Closes the engine and returns the facade to the uninitialized state.
    ///
    /// Waits for connections held by open sessions to be returned, so every session must be
    /// released first. Closing an uninitialized facade does nothing.
    pub async fn close(&self) -> Result<(), Error> {
        let engine = self
            .inner
            .engine
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(conn) = engine {
            conn.close().await?;
            tracing::info!("Database connection closed");
        }

        Ok(())
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("initialized", &self.is_initialized())
            .field("tables", &self.inner.metadata.table_names())
            .field("active_sessions", &self.active_sessions())
            .finish()
    }
}
