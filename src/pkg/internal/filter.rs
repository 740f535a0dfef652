use crate::pkg::internal::adaptors::jobs::spec::Job;

/// Case-insensitive substring filter over the searchable fields of a job.
///
/// A query that trims to empty returns the input unchanged. Otherwise a job
/// is kept when the query as typed appears, ignoring case, in any of title,
/// company, a skill, location, job type or description. Optional fields are
/// skipped when absent. Order is preserved and nothing is ranked.
pub fn filter_jobs(query: &str, jobs: &[Job]) -> Vec<Job> {
    if query.trim().is_empty() {
        return jobs.to_vec();
    }
    let needle = query.to_lowercase();
    jobs.iter()
        .filter(|job| matches(job, &needle))
        .cloned()
        .collect()
}

fn matches(job: &Job, needle: &str) -> bool {
    job.title.to_lowercase().contains(needle)
        || job.company.to_lowercase().contains(needle)
        || job
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(needle))
        || job.location.to_lowercase().contains(needle)
        || job
            .job_type
            .as_deref()
            .is_some_and(|jt| jt.to_lowercase().contains(needle))
        || job
            .description
            .as_deref()
            .is_some_and(|desc| desc.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, company: &str, location: &str, skills: &[&str]) -> Job {
        Job {
            id: format!("{}-{}", title, company).to_lowercase(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            job_type: None,
            description: None,
            experience: 3,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn sample() -> Vec<Job> {
        vec![
            job("Backend Engineer", "Acme", "Remote", &["Go", "SQL"]),
            job("Designer", "Pixel", "NYC", &["Figma"]),
        ]
    }

    #[test]
    fn test_empty_query_returns_input_unchanged() {
        let jobs = sample();
        assert_eq!(filter_jobs("", &jobs), jobs);
        assert_eq!(filter_jobs("   ", &jobs), jobs);
        assert_eq!(filter_jobs("\t\n", &jobs), jobs);
    }

    #[test]
    fn test_matches_skill_case_insensitively() {
        let jobs = sample();
        let result = filter_jobs("go", &jobs);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Backend Engineer");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let jobs = sample();
        assert!(filter_jobs("java", &jobs).is_empty());
    }

    #[test]
    fn test_matches_each_field() {
        let mut jobs = sample();
        jobs[1].job_type = Some("Contract".to_string());
        jobs[1].description = Some("Ship pixel-perfect interfaces".to_string());

        assert_eq!(filter_jobs("backend", &jobs).len(), 1); // title
        assert_eq!(filter_jobs("acme", &jobs).len(), 1); // company
        assert_eq!(filter_jobs("remote", &jobs).len(), 1); // location
        assert_eq!(filter_jobs("contract", &jobs).len(), 1); // job type
        assert_eq!(filter_jobs("perfect", &jobs).len(), 1); // description
    }

    #[test]
    fn test_absent_optional_fields_are_skipped() {
        let jobs = sample();
        // neither job carries a job_type or description
        assert!(filter_jobs("contract", &jobs).is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed_before_matching() {
        let jobs = sample();
        // " go" is non-empty after trim, so the padded form is what must match
        assert!(filter_jobs(" go", &jobs).is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let jobs = vec![
            job("Engineer A", "Acme", "Remote", &["Go"]),
            job("Designer", "Pixel", "NYC", &["Figma"]),
            job("Engineer B", "Acme", "Remote", &["Go"]),
        ];
        let result = filter_jobs("engineer", &jobs);
        let titles: Vec<&str> = result.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Engineer A", "Engineer B"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let jobs = sample();
        let once = filter_jobs("acme", &jobs);
        let twice = filter_jobs("acme", &once);
        assert_eq!(once, twice);
    }
}
