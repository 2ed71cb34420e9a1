// 活动存储库
// 包含活动相关的数据库操作

use futures_util::{FutureExt, future::BoxFuture};
use sqlx::{Error as SqlxError, PgPool};

use crate::database::EventStore;
use crate::database::models::event::{EventEntity, EventInput};

const INIT_SQL: &str = include_str!("../../../migrations/init.sql");

const EVENT_COLUMNS: &str = "id, title, description, date, end_date, location, image_url, \
                             max_participants, created_at, updated_at";

/// 基于 PostgreSQL 的活动存储
#[derive(Clone)]
pub struct EventOperation {
    db: PgPool,
}

impl EventOperation {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 建表（幂等）
    pub async fn migrate(&self) -> Result<(), SqlxError> {
        tracing::info!("Migrating database...");
        sqlx::raw_sql(INIT_SQL).execute(&self.db).await?;
        tracing::info!("Database migration complete");
        Ok(())
    }
}

impl EventStore for EventOperation {
    fn list_events(&self, include_past: bool) -> BoxFuture<'_, Result<Vec<EventEntity>, SqlxError>> {
        async move {
            let sql = if include_past {
                format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY date ASC, id ASC")
            } else {
                format!(
                    "SELECT {EVENT_COLUMNS} FROM events WHERE date >= NOW() ORDER BY date ASC, id ASC"
                )
            };
            sqlx::query_as::<_, EventEntity>(&sql)
                .fetch_all(&self.db)
                .await
        }
        .boxed()
    }

    fn get_event(&self, id: i32) -> BoxFuture<'_, Result<Option<EventEntity>, SqlxError>> {
        async move {
            sqlx::query_as::<_, EventEntity>(&format!(
                "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
            ))
            .bind(id)
            .fetch_optional(&self.db)
            .await
        }
        .boxed()
    }

    fn create_event(&self, input: EventInput) -> BoxFuture<'_, Result<EventEntity, SqlxError>> {
        async move {
            sqlx::query_as::<_, EventEntity>(&format!(
                r#"
                INSERT INTO events (title, description, date, end_date, location, image_url, max_participants)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING {EVENT_COLUMNS}
                "#
            ))
            .bind(input.title)
            .bind(input.description)
            .bind(input.date)
            .bind(input.end_date)
            .bind(input.location)
            .bind(input.image_url)
            .bind(input.max_participants)
            .fetch_one(&self.db)
            .await
        }
        .boxed()
    }

    fn update_event(
        &self,
        id: i32,
        input: EventInput,
    ) -> BoxFuture<'_, Result<Option<EventEntity>, SqlxError>> {
        async move {
            sqlx::query_as::<_, EventEntity>(&format!(
                r#"
                UPDATE events SET
                    title = $1,
                    description = $2,
                    date = $3,
                    end_date = $4,
                    location = $5,
                    image_url = $6,
                    max_participants = $7,
                    updated_at = NOW()
                WHERE id = $8
                RETURNING {EVENT_COLUMNS}
                "#
            ))
            .bind(input.title)
            .bind(input.description)
            .bind(input.date)
            .bind(input.end_date)
            .bind(input.location)
            .bind(input.image_url)
            .bind(input.max_participants)
            .bind(id)
            .fetch_optional(&self.db)
            .await
        }
        .boxed()
    }

    fn delete_event(&self, id: i32) -> BoxFuture<'_, Result<bool, SqlxError>> {
        async move {
            let result = sqlx::query("DELETE FROM events WHERE id = $1")
                .bind(id)
                .execute(&self.db)
                .await?;
            Ok(result.rows_affected() > 0)
        }
        .boxed()
    }
}
