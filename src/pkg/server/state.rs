use std::sync::Arc;

use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::{
    conf::settings,
    pkg::internal::adaptors::jobs::{selectors::JobSelector, spec::JobStore},
    prelude::Result,
};

pub fn db_pool() -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JobStore>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        Ok(AppState {
            store: Arc::new(JobSelector::new(Arc::new(db_pool()?))),
        })
    }
}
