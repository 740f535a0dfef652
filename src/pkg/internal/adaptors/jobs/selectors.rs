use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    pkg::internal::adaptors::jobs::spec::{Job, JobStore},
    prelude::Result,
};

pub struct JobSelector {
    pool: Arc<PgPool>,
}

impl JobSelector {
    pub fn new(pool: Arc<PgPool>) -> Self {
        JobSelector { pool }
    }
}

#[async_trait]
impl JobStore for JobSelector {
    async fn fetch_all(&self) -> Result<Vec<Job>> {
        let rows = sqlx::query_as::<_, Job>(
            "SELECT id, title, company, location, job_type, description, experience, skills, created_at
             FROM jobs ORDER BY created_at DESC",
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, Job>(
            "SELECT id, title, company, location, job_type, description, experience, skills, created_at
             FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("select 1").execute(&*self.pool).await?;
        Ok(())
    }
}
