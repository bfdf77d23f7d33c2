//! Engine options for [`crate::Db::init_app`].
//!
//! Options left unset fall back to defaults that depend on the target: server databases get a
//! pool of [`DEFAULT_POOL_SIZE`] connections plus [`DEFAULT_MAX_OVERFLOW`] overflow, while
//! file-based targets (SQLite) get no pool sizing at all. Options set by the caller always win,
//! including on SQLite.

use std::time::Duration;

use sea_orm::ConnectOptions;

/// Persistent connections kept by the pool of a server database.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Extra connections a server database pool may open under load.
pub const DEFAULT_MAX_OVERFLOW: u32 = 20;

/// Returns true when `uri` targets a file-based database that must not be pooled.
pub fn is_file_based(uri: &str) -> bool {
    uri.starts_with("sqlite")
}

/// Caller-supplied engine options. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Connections kept open by the pool.
    pub pool_size: Option<u32>,
    /// Connections allowed beyond `pool_size`.
    pub max_overflow: Option<u32>,
    /// Check a connection is alive before handing it out. Defaults to `true`.
    pub pool_pre_ping: Option<bool>,
    /// Connections the pool opens eagerly and keeps idle.
    pub min_connections: Option<u32>,
    /// Timeout for establishing a new connection.
    pub connect_timeout: Option<Duration>,
    /// Timeout for acquiring a connection from the pool.
    pub acquire_timeout: Option<Duration>,
    /// Idle time after which a pooled connection is closed.
    pub idle_timeout: Option<Duration>,
    /// Maximum lifetime of a pooled connection.
    pub max_lifetime: Option<Duration>,
    /// Log every SQL statement through the driver. Defaults to `false`.
    pub sql_logging: Option<bool>,
}

/// Pool settings resolved from [`EngineOptions`] for a specific URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub test_before_acquire: bool,
    pub connect_timeout: Option<Duration>,
    pub acquire_timeout: Option<Duration>,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
    pub sql_logging: bool,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = Some(pool_size);
        self
    }

    pub fn max_overflow(mut self, max_overflow: u32) -> Self {
        self.max_overflow = Some(max_overflow);
        self
    }

    pub fn pool_pre_ping(mut self, enabled: bool) -> Self {
        self.pool_pre_ping = Some(enabled);
        self
    }

    pub fn min_connections(mut self, min_connections: u32) -> Self {
        self.min_connections = Some(min_connections);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = Some(timeout);
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    pub fn max_lifetime(mut self, lifetime: Duration) -> Self {
        self.max_lifetime = Some(lifetime);
        self
    }

    pub fn sql_logging(mut self, enabled: bool) -> Self {
        self.sql_logging = Some(enabled);
        self
    }

    /// Resolves these options against the defaults for `uri`.
    ///
    /// The pool's upper bound is `pool_size + max_overflow`. An overflow without a pool size
    /// has nothing to extend and is ignored, and a bound of zero leaves the driver default.
    pub fn resolve(&self, uri: &str) -> PoolSettings {
        let pooled = !is_file_based(uri);

        let pool_size = self.pool_size.or(pooled.then_some(DEFAULT_POOL_SIZE));
        let max_overflow = self.max_overflow.or(pooled.then_some(DEFAULT_MAX_OVERFLOW));

        let max_connections = pool_size
            .map(|size| size.saturating_add(max_overflow.unwrap_or(0)))
            .filter(|max| *max > 0);

        let min_connections = match (self.min_connections, max_connections) {
            (Some(min), Some(max)) => Some(min.min(max)),
            (min, _) => min,
        };

        PoolSettings {
            max_connections,
            min_connections,
            test_before_acquire: self.pool_pre_ping.unwrap_or(true),
            connect_timeout: self.connect_timeout,
            acquire_timeout: self.acquire_timeout,
            idle_timeout: self.idle_timeout,
            max_lifetime: self.max_lifetime,
            sql_logging: self.sql_logging.unwrap_or(false),
        }
    }

    /// Builds the SeaORM connect options for `uri`.
    pub fn connect_options(&self, uri: &str) -> ConnectOptions {
        let settings = self.resolve(uri);

        let mut opt = ConnectOptions::new(uri);
        opt.test_before_acquire(settings.test_before_acquire)
            .sqlx_logging(settings.sql_logging);

        if let Some(max) = settings.max_connections {
            opt.max_connections(max);
        }
        if let Some(min) = settings.min_connections {
            opt.min_connections(min);
        }
        if let Some(timeout) = settings.connect_timeout {
            opt.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.acquire_timeout {
            opt.acquire_timeout(timeout);
        }
        if let Some(timeout) = settings.idle_timeout {
            opt.idle_timeout(timeout);
        }
        if let Some(lifetime) = settings.max_lifetime {
            opt.max_lifetime(lifetime);
        }

        opt
    }
}
