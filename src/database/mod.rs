use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;

pub struct DatabaseManager {
    pub pool: Arc<PgPool>,
}

impl DatabaseManager {
    /// 데이터베이스 매니저 생성
    pub async fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await
            .expect("Failed to create pool");
        Self {
            pool: Arc::new(pool),
        }
    }

    /// 데이터베이스 풀 가져오기
    pub fn get_pool(&self) -> Arc<PgPool> {
        Arc::clone(&self.pool)
    }

    /// 데이터베이스 초기화
    /// 스키마 생성은 멱등적이라 재기동 시 기존 경매 레코드를 유지한다
    pub async fn initialize_database(&self) -> Result<(), sqlx::Error> {
        // 01-create-schema.sql 실행
        let create_schema_sql = include_str!("../sql/01-create-schema.sql");
        self.execute_multi_query(create_schema_sql).await?;

        Ok(())
    }

    /// 여러 쿼리 실행
    async fn execute_multi_query(&self, sql: &str) -> Result<(), sqlx::Error> {
        for query in sql.split(';') {
            let query = query.trim();
            if !query.is_empty() {
                sqlx::query(query).execute(&*self.pool).await?;
            }
        }
        Ok(())
    }
}
