// Core tracker library modules

pub mod config;
pub mod error;
pub mod jobs;
pub mod source;
pub mod stats;
pub mod view;

// Re-export commonly used types
pub use config::TrackerConfig;
pub use error::SourceError;
pub use jobs::{Job, JobStatus, NewApplication};
pub use source::{FileJobSource, JobSource, SampleJobSource};
pub use stats::DashboardStats;
pub use view::{StatusIcon, Tab, Tone, ViewController};
