use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ab_db::open_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}
