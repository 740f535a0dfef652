use crate::{
    pkg::{
        internal::adaptors::jobs::{mutators::JobMutator, spec::NewJob},
        server::state::db_pool,
    },
    prelude::Result,
};

static FIXTURE: &str = include_str!("seed_jobs.json");

/// Loads the bundled demo postings into the jobs table.
pub async fn apply() -> Result<()> {
    let postings: Vec<NewJob> = serde_json::from_str(FIXTURE)?;
    let pool = db_pool()?;
    let mutator = JobMutator::new(&pool);
    let mut count = 0;
    for posting in &postings {
        let job = mutator.create(posting).await?;
        tracing::debug!("seeded job {} ({})", job.title, job.id);
        count += 1;
    }
    println!("Seeded {} jobs", count);
    Ok(())
}
