use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    pkg::internal::adaptors::jobs::spec::{Job, NewJob},
    prelude::Result,
};

pub struct JobMutator<'a> {
    pool: &'a PgPool,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&self, job: &NewJob) -> Result<Job> {
        let row = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (id, title, company, location, job_type, description, experience, skills)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, company, location, job_type, description, experience, skills, created_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.job_type)
        .bind(&job.description)
        .bind(job.experience)
        .bind(&job.skills)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }
}
