use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::prelude::Result;

/// A single posting document from the jobs collection.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: Option<String>,
    pub description: Option<String>,
    pub experience: i32,
    pub skills: Vec<String>,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Deserialize, Debug)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: Option<String>,
    pub description: Option<String>,
    pub experience: i32,
    pub skills: Vec<String>,
}

/// Read seam over the jobs collection. The web surface only ever reads;
/// any backend that can list documents and look one up by id fits here.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Every document in the collection, newest first.
    async fn fetch_all(&self) -> Result<Vec<Job>>;

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Job>>;

    /// Round-trip to the backing store, for health probes.
    async fn ping(&self) -> Result<()>;
}
