use askama::Template;

use crate::pkg::internal::adaptors::jobs::spec::Job;

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home<'a> {
    pub query: &'a str,
    pub jobs: Vec<Job>,
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct Listing<'a> {
    pub query: &'a str,
    pub jobs: Vec<Job>,
}

#[derive(Template)]
#[template(path = "job_detail.html")]
pub struct JobDetail {
    pub job: Job,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFound {}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ServerError {}
