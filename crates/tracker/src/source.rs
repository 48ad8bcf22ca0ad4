//! Data access for job records.
//!
//! The view never knows where records come from; it is handed a
//! [`JobSource`] and asks it to fetch or submit.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::SourceError;
use crate::jobs::{sample_jobs, Job, NewApplication};

/// Capability for reading and submitting job applications
pub trait JobSource {
    /// Fetch every record, in insertion order
    fn fetch_jobs(&self) -> Result<Vec<Job>, SourceError>;

    /// Store a new application and return the created record
    fn submit_application(&mut self, application: NewApplication) -> Result<Job, SourceError>;

    /// Short description for status lines and settings
    fn describe(&self) -> String;

    /// Whether submissions outlive the process
    fn is_persistent(&self) -> bool;
}

/// In-memory source seeded with the placeholder records
#[derive(Debug, Clone)]
pub struct SampleJobSource {
    jobs: Vec<Job>,
}

impl SampleJobSource {
    pub fn new() -> Self {
        Self { jobs: sample_jobs() }
    }

    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }
}

impl Default for SampleJobSource {
    fn default() -> Self {
        Self::new()
    }
}

impl JobSource for SampleJobSource {
    fn fetch_jobs(&self) -> Result<Vec<Job>, SourceError> {
        Ok(self.jobs.clone())
    }

    fn submit_application(&mut self, application: NewApplication) -> Result<Job, SourceError> {
        let job = application.into_job();
        self.jobs.push(job.clone());
        Ok(job)
    }

    fn describe(&self) -> String {
        format!("sample data ({} records)", self.jobs.len())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

/// Source backed by a single JSON file holding an array of records
#[derive(Debug, Clone)]
pub struct FileJobSource {
    path: PathBuf,
}

impl FileJobSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full record list, replacing the file atomically
    fn save_jobs(&self, jobs: &[Job]) -> Result<(), SourceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| SourceError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(jobs)?;

        let mut temp_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "jobs.json".into());
        temp_name.push(".tmp");
        let temp_path = self.path.with_file_name(temp_name);

        let written = fs::File::create(&temp_path).and_then(|mut file| {
            file.write_all(json.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(SourceError::io(&temp_path, e));
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(SourceError::io(&self.path, e));
        }

        Ok(())
    }
}

impl JobSource for FileJobSource {
    fn fetch_jobs(&self) -> Result<Vec<Job>, SourceError> {
        if !self.path.exists() {
            debug!("Job store {:?} does not exist yet, starting empty", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| SourceError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let jobs: Vec<Job> = serde_json::from_str(&content).map_err(|e| SourceError::Parse {
            path: self.path.clone(),
            source: e,
        })?;

        debug!("Loaded {} jobs from {:?}", jobs.len(), self.path);
        Ok(jobs)
    }

    fn submit_application(&mut self, application: NewApplication) -> Result<Job, SourceError> {
        let mut jobs = self.fetch_jobs()?;
        let job = application.into_job();
        jobs.push(job.clone());
        self.save_jobs(&jobs)?;

        info!("Stored application {} ({} at {})", job.id, job.title, job.company);
        Ok(job)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn is_persistent(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobStatus;
    use tempfile::TempDir;

    #[test]
    fn test_sample_source_returns_sample_records() {
        let source = SampleJobSource::new();
        let jobs = source.fetch_jobs().unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs, sample_jobs());
    }

    #[test]
    fn test_sample_source_appends_submissions() {
        let mut source = SampleJobSource::new();
        let job = source
            .submit_application(NewApplication::new("Rust Engineer", "Ferris Co", "2024-03-16"))
            .unwrap();

        let jobs = source.fetch_jobs().unwrap();
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs.last(), Some(&job));
    }

    #[test]
    fn test_file_source_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileJobSource::new(temp_dir.path().join("jobs.json"));
        assert!(source.fetch_jobs().unwrap().is_empty());
    }

    #[test]
    fn test_file_source_creates_parent_dirs_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("store").join("jobs.json");
        let mut source = FileJobSource::new(&path);

        source
            .submit_application(
                NewApplication::new("Platform Engineer", "Acme", "2024-04-01")
                    .with_status(JobStatus::Pending),
            )
            .unwrap();

        assert!(path.exists());
        assert!(!path.with_file_name("jobs.json.tmp").exists());

        let jobs = source.fetch_jobs().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].status, JobStatus::Pending);
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        // A directory at the store path makes the final rename fail
        let path = temp_dir.path().join("jobs.json");
        fs::create_dir(&path).unwrap();

        let source = FileJobSource::new(&path);
        let result = source.save_jobs(&sample_jobs());

        assert!(matches!(result, Err(SourceError::Io { .. })), "got {:?}", result);
        assert!(!temp_dir.path().join("jobs.json.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_only_file_source_is_persistent() {
        assert!(!SampleJobSource::new().is_persistent());
        assert!(FileJobSource::new("/srv/jobs.json").is_persistent());
    }

    #[test]
    fn test_file_source_malformed_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jobs.json");
        fs::write(&path, "{ not json").unwrap();

        let source = FileJobSource::new(&path);
        match source.fetch_jobs() {
            Err(SourceError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
