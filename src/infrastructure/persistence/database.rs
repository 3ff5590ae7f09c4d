//! Connection pool creation and schema bootstrap.

use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;
use sqlx::migrate::{MigrateError, Migrator};
use std::time::Duration;

static POSTGRES_MIGRATOR: Migrator = sqlx::migrate!("./migrations/postgres");
static SQLITE_MIGRATOR: Migrator = sqlx::migrate!("./migrations/sqlite");

/// Relational backend selected by the `DATABASE_URL` scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Detects the backend from a connection URL.
    ///
    /// Returns `None` for unsupported schemes.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else {
            None
        }
    }

    fn migrator(self) -> &'static Migrator {
        match self {
            Self::Postgres => &POSTGRES_MIGRATOR,
            Self::Sqlite => &SQLITE_MIGRATOR,
        }
    }
}

/// Returns true for SQLite URLs that live only inside one connection.
fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && (url.contains(":memory:") || url.contains("mode=memory"))
}

/// Opens a connection pool for `url`.
///
/// In-memory SQLite databases are private to a single connection, so the pool is
/// pinned to one connection that never expires.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the URL is invalid.
pub async fn connect(
    url: &str,
    max_connections: u32,
    connect_timeout_secs: u64,
) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let options = AnyPoolOptions::new().acquire_timeout(Duration::from_secs(connect_timeout_secs));

    let options = if is_in_memory(url) {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options.max_connections(max_connections)
    };

    options.connect(url).await
}

/// Creates the `users`, `planets`, `characters` and `favorites` tables if missing.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn run_migrations(pool: &AnyPool, backend: Backend) -> Result<(), MigrateError> {
    backend.migrator().run(pool).await
}

/// Runs a trivial query to verify connectivity.
///
/// # Errors
///
/// Returns the underlying database error.
pub async fn ping(pool: &AnyPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_url() {
        assert_eq!(
            Backend::from_url("postgres://u:p@localhost/db"),
            Some(Backend::Postgres)
        );
        assert_eq!(
            Backend::from_url("postgresql://localhost/db"),
            Some(Backend::Postgres)
        );
        assert_eq!(
            Backend::from_url("sqlite:///tmp/test.db?mode=rwc"),
            Some(Backend::Sqlite)
        );
        assert_eq!(Backend::from_url("sqlite::memory:"), Some(Backend::Sqlite));
        assert_eq!(Backend::from_url("mysql://localhost/db"), None);
    }

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite:///tmp/test.db"));
        assert!(!is_in_memory("postgres://localhost/db"));
    }

    #[tokio::test]
    async fn test_connect_migrate_and_ping_in_memory() {
        let pool = connect("sqlite::memory:", 5, 5).await.unwrap();

        run_migrations(&pool, Backend::Sqlite).await.unwrap();
        ping(&pool).await.unwrap();

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
             AND name IN ('users', 'planets', 'characters', 'favorites')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(tables, 4);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = connect("sqlite::memory:", 1, 5).await.unwrap();

        run_migrations(&pool, Backend::Sqlite).await.unwrap();
        run_migrations(&pool, Backend::Sqlite).await.unwrap();
    }
}
