use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle stage of a tracked application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Applied,
    Pending,
    Rejected,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [JobStatus::Applied, JobStatus::Pending, JobStatus::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Pending => "pending",
            JobStatus::Rejected => "rejected",
        }
    }

    /// Human-readable label for tables and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Pending => "Pending",
            JobStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "applied" => Ok(JobStatus::Applied),
            "pending" => Ok(JobStatus::Pending),
            "rejected" => Ok(JobStatus::Rejected),
            other => Err(format!(
                "unknown status '{}' (expected applied, pending or rejected)",
                other
            )),
        }
    }
}

/// One tracked job application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Identifier, assumed unique
    pub id: String,
    pub title: String,
    pub company: String,
    pub status: JobStatus,
    /// Calendar date kept as an opaque display string
    pub date: String,
}

impl Job {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
        status: JobStatus,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            status,
            date: date.into(),
        }
    }

    /// Case-insensitive substring match over title and company.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.company.to_lowercase().contains(needle)
    }
}

/// Payload for submitting a new application to a data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub title: String,
    pub company: String,
    pub status: JobStatus,
    pub date: String,
}

impl NewApplication {
    pub fn new(title: impl Into<String>, company: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            status: JobStatus::Applied,
            date: date.into(),
        }
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Turn the payload into a record with a fresh v4 id
    pub fn into_job(self) -> Job {
        Job {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            company: self.company,
            status: self.status,
            date: self.date,
        }
    }
}

/// Placeholder records shown until a real data file is configured
pub fn sample_jobs() -> Vec<Job> {
    vec![
        Job::new("1", "Senior Frontend Developer", "Tech Corp", JobStatus::Applied, "2024-03-15"),
        Job::new("2", "Full Stack Engineer", "Innovation Labs", JobStatus::Pending, "2024-03-14"),
        Job::new("3", "React Developer", "StartUp Inc", JobStatus::Rejected, "2024-03-13"),
    ]
}
