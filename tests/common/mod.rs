#![allow(dead_code)]

use tempfile::TempDir;

use university_records::db::{DbPool, establish_connection_pool, run_migrations};
use university_records::repository::DieselRepository;

/// Migrated SQLite database living in a temporary directory that is removed
/// on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    /// Repository over a database holding the reference data.
    pub fn seeded_repo(&self) -> DieselRepository {
        let repo = self.repo();
        university_records::seed::seed_database(&repo).expect("seed database");
        repo
    }
}
