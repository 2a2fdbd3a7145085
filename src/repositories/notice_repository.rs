use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::recruitment_notice::{NoticeDetail, NoticeFields, NoticeSummary};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoticeRepository: Send + Sync {
    /// Stores a new notice and returns its id.
    async fn create(&self, fields: NoticeFields) -> Result<i32>;

    /// Overwrites only the attributes present in `fields`.
    async fn update(&self, id: i32, fields: NoticeFields) -> Result<()>;

    async fn delete(&self, id: i32) -> Result<()>;

    async fn list_all(&self) -> Result<Vec<NoticeSummary>>;

    /// `Ok(None)` when no search was performed.
    async fn search(&self, query: Option<String>) -> Result<Option<Vec<NoticeSummary>>>;

    async fn get_by_id(&self, id: i32) -> Result<Option<NoticeDetail>>;

    async fn list_ids_by_company(&self, company_name: Option<String>) -> Result<Vec<i32>>;
}

#[derive(Clone)]
pub struct PgNoticeRepository {
    pool: PgPool,
}

impl PgNoticeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Builds an `ILIKE` pattern matching `query` anywhere, with the LIKE
/// metacharacters in `query` taken literally.
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl NoticeRepository for PgNoticeRepository {
    async fn create(&self, fields: NoticeFields) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO recruitment_notices (
                company_name, country, area, position, compensation, skill, detail
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(fields.company_name)
        .bind(fields.country)
        .bind(fields.area)
        .bind(fields.position)
        .bind(fields.compensation)
        .bind(fields.skill)
        .bind(fields.detail)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i32, fields: NoticeFields) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE recruitment_notices
            SET
                company_name = COALESCE($2, company_name),
                country = COALESCE($3, country),
                area = COALESCE($4, area),
                position = COALESCE($5, position),
                compensation = COALESCE($6, compensation),
                skill = COALESCE($7, skill),
                detail = COALESCE($8, detail),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(fields.company_name)
        .bind(fields.country)
        .bind(fields.area)
        .bind(fields.position)
        .bind(fields.compensation)
        .bind(fields.skill)
        .bind(fields.detail)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM recruitment_notices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<NoticeSummary>> {
        let items = sqlx::query_as::<_, NoticeSummary>(
            r#"
            SELECT id, company_name, country, area, position, compensation, skill
            FROM recruitment_notices
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn search(&self, query: Option<String>) -> Result<Option<Vec<NoticeSummary>>> {
        let Some(query) = query else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, NoticeSummary>(
            r#"
            SELECT id, company_name, country, area, position, compensation, skill
            FROM recruitment_notices
            WHERE company_name ILIKE $1
               OR country ILIKE $1
               OR area ILIKE $1
               OR position ILIKE $1
               OR compensation ILIKE $1
               OR skill ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(contains_pattern(&query))
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(items))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<NoticeDetail>> {
        let notice = sqlx::query_as::<_, NoticeDetail>(
            r#"
            SELECT id, company_name, country, area, position, compensation, skill, detail
            FROM recruitment_notices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(notice)
    }

    async fn list_ids_by_company(&self, company_name: Option<String>) -> Result<Vec<i32>> {
        let ids = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT id
            FROM recruitment_notices
            WHERE company_name IS NOT DISTINCT FROM $1
            ORDER BY id
            "#,
        )
        .bind(company_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}
