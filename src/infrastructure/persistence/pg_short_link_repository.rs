//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink, Visit};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short links and their visit log.
///
/// Visits live in their own table; the `visits.id` sequence preserves
/// arrival order, so history is read back `ORDER BY id`.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO short_links (short_id, redirect_url)
            VALUES ($1, $2)
            RETURNING short_id, redirect_url, created_at
            "#,
        )
        .bind(&new_link.short_id)
        .bind(&new_link.redirect_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(ShortLink::new(
            row.try_get("short_id")?,
            row.try_get("redirect_url")?,
            row.try_get("created_at")?,
        ))
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortLink>, AppError> {
        let Some(row) = sqlx::query(
            r#"
            SELECT id, short_id, redirect_url, created_at
            FROM short_links
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?
        else {
            return Ok(None);
        };

        let link_id: i64 = row.try_get("id")?;

        let visited_at: Vec<DateTime<Utc>> = sqlx::query_scalar(
            r#"
            SELECT visited_at
            FROM visits
            WHERE short_link_id = $1
            ORDER BY id
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let link = ShortLink::new(
            row.try_get("short_id")?,
            row.try_get("redirect_url")?,
            row.try_get("created_at")?,
        )
        .with_visits(visited_at.into_iter().map(Visit::new).collect());

        Ok(Some(link))
    }

    async fn record_visit(&self, short_id: &str, visit: Visit) -> Result<Option<String>, AppError> {
        let redirect_url: Option<String> = sqlx::query_scalar(
            r#"
            WITH link AS (
                SELECT id, redirect_url
                FROM short_links
                WHERE short_id = $1
            ),
            inserted AS (
                INSERT INTO visits (short_link_id, visited_at)
                SELECT id, $2 FROM link
                RETURNING short_link_id
            )
            SELECT l.redirect_url
            FROM link l
            JOIN inserted i ON i.short_link_id = l.id
            "#,
        )
        .bind(short_id)
        .bind(visit.timestamp)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(redirect_url)
    }

    async fn count_visits(&self, short_id: &str) -> Result<Option<u64>, AppError> {
        let total: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT (SELECT COUNT(*) FROM visits v WHERE v.short_link_id = l.id) AS total
            FROM short_links l
            WHERE l.short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(total.map(|t| t.max(0) as u64))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
