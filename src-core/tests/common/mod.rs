use std::sync::Arc;

use tempfile::TempDir;

use catalog_core::db::{self, DbPool};

/// A migrated SQLite database in a temp directory, dropped with the test.
pub struct TestDb {
    pub pool: Arc<DbPool>,
    _dir: TempDir,
}

pub fn setup() -> TestDb {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir
        .path()
        .join("catalog.db")
        .to_string_lossy()
        .into_owned();

    let db_path = db::init(&db_path).expect("failed to init database");
    let pool = db::create_pool(&db_path).expect("failed to create pool");
    db::run_migrations(&pool).expect("failed to run migrations");

    TestDb { pool, _dir: dir }
}
