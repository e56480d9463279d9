//! Shared test utilities for delve-db unit tests.

pub(crate) mod helpers {
    use crate::DelveDb;
    use crate::service::GameService;

    /// Create an in-memory GameService with the schema applied and no rows.
    pub async fn test_service() -> GameService {
        let db = DelveDb::open_local(":memory:").await.unwrap();
        GameService::from_db(db)
    }

    /// Create an in-memory GameService holding the seed data.
    pub async fn seeded_service() -> GameService {
        let svc = test_service().await;
        svc.seed_initial_data().await.unwrap();
        svc
    }

    /// Count rows of `table` (test-only; table names are trusted literals).
    pub async fn count_rows(svc: &GameService, table: &str) -> i64 {
        let mut rows = svc
            .db()
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
    }
}
