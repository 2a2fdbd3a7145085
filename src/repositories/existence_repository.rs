use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;

/// Answers whether a recruitment notice is currently stored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExistenceChecker: Send + Sync {
    /// Store failures propagate; the caller decides how to surface them.
    async fn exists(&self, notice_id: i32) -> Result<bool>;
}

#[derive(Clone)]
pub struct PgExistenceChecker {
    pool: PgPool,
}

impl PgExistenceChecker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExistenceChecker for PgExistenceChecker {
    async fn exists(&self, notice_id: i32) -> Result<bool> {
        let found = sqlx::query_scalar::<_, i32>("SELECT id FROM recruitment_notices WHERE id = $1")
            .bind(notice_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }
}
