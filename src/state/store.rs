use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::data::{Job, Status};
use super::filter::FilterState;
use crate::error::AppError;

/// The ordered, read-only set of jobs the table displays.
///
/// Job ids are unique within a store. Order is the order the jobs were
/// supplied in and is never changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    /// Build a store, rejecting duplicate ids
    pub fn new(jobs: Vec<Job>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if !seen.insert(job.id) {
                return Err(AppError::DuplicateJobId(job.id));
            }
        }

        Ok(Self { jobs })
    }

    /// The built-in demo data shown when no jobs file is configured
    pub fn sample() -> Self {
        Self {
            jobs: vec![
                Job::new(1)
                    .title("Senior Software Engineer")
                    .url("http://sample-url.com")
                    .company("Sample")
                    .status(Status::Applied),
                Job::new(2)
                    .description("some description")
                    .title("Software Engineer - Python")
                    .url("http://madeup.com/careers/1234")
                    .company("Madeup Co.")
                    .location("Toronto")
                    .status(Status::Bookmarked),
                Job::new(3)
                    .description("new description")
                    .title("Software Engineer - Backend")
                    .url("http://thiscompany.com/careers/1234")
                    .company("thiscompany")
                    .location("Remote")
                    .status(Status::Bookmarked),
            ],
        }
    }

    /// Parse a JSON array of jobs
    pub fn from_json(json: &str, source_name: &str) -> Result<Self, AppError> {
        let jobs: Vec<Job> =
            serde_json::from_str(json).map_err(|e| AppError::parse(source_name, &e))?;
        Self::new(jobs)
    }

    /// Read a jobs file on the calling thread (used at startup)
    pub fn load_blocking(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|e| AppError::read(path, &e))?;
        Self::from_json(&json, &path.display().to_string())
    }

    /// Read a jobs file without blocking the UI thread
    pub async fn load(path: PathBuf) -> Result<Self, AppError> {
        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::read(&path, &e))?;
        Self::from_json(&json, &path.display().to_string())
    }

    #[cfg(test)]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Jobs passing the filter, in store order
    pub fn visible<'a>(&'a self, filter: &'a FilterState) -> impl Iterator<Item = &'a Job> + 'a {
        self.jobs.iter().filter(move |job| filter.matches(job))
    }

    /// How many jobs currently have the given status
    pub fn count_with_status(&self, status: Status) -> u32 {
        let count = self
            .jobs
            .iter()
            .filter(|job| job.status == Some(status))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn visible_ids(store: &JobStore, filter: &FilterState) -> Vec<u64> {
        store.visible(filter).map(|job| job.id).collect()
    }

    #[test]
    fn test_sample_bookmarked() {
        let store = JobStore::sample();
        let filter = FilterState {
            text: String::new(),
            status: Some(Status::Bookmarked),
        };

        assert_eq!(visible_ids(&store, &filter), vec![2, 3]);
    }

    #[test]
    fn test_sample_text_toronto() {
        let store = JobStore::sample();
        let filter = FilterState {
            text: "toronto".to_string(),
            status: None,
        };

        assert_eq!(visible_ids(&store, &filter), vec![2]);
    }

    #[test]
    fn test_sample_unfiltered_keeps_order() {
        let store = JobStore::sample();

        assert_eq!(visible_ids(&store, &FilterState::new()), vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = JobStore::new(vec![Job::new(1), Job::new(2), Job::new(1)]);

        assert_eq!(result, Err(AppError::DuplicateJobId(1)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 10, "jobTitle": "Platform Engineer", "status": "APPLYING"},
            {"id": 11, "companyName": "Initech", "location": null, "status": null}
        ]"#;

        let store = JobStore::from_json(json, "inline").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.jobs()[0].status, Some(Status::Applying));
        assert_eq!(store.jobs()[1].company_name.as_deref(), Some("Initech"));
    }

    #[test]
    fn test_from_json_unknown_status() {
        let json = r#"[{"id": 1, "status": "OFFER"}]"#;

        let err = JobStore::from_json(json, "inline").unwrap_err();

        match err {
            AppError::Parse { source_name, reason } => {
                assert_eq!(source_name, "inline");
                assert!(reason.contains("OFFER"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_blocking_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1, "jobTitle": "Engineer"}}]"#).unwrap();

        let store = JobStore::load_blocking(file.path()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.jobs()[0].job_title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_load_blocking_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = JobStore::load_blocking(&path).unwrap_err();

        assert!(matches!(err, AppError::Read { .. }));
    }

    #[test]
    fn test_count_with_status() {
        let store = JobStore::sample();

        assert_eq!(store.count_with_status(Status::Bookmarked), 2);
        assert_eq!(store.count_with_status(Status::Applied), 1);
        assert_eq!(store.count_with_status(Status::Rejected), 0);
    }
}
