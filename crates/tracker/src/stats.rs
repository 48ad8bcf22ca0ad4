use crate::jobs::{Job, JobStatus};

/// Counters shown on the dashboard tiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub applied: usize,
    pub pending: usize,
    /// Counted for the CLI; the dashboard has no rejected tile
    pub rejected: usize,
}

impl DashboardStats {
    /// Calculate statistics from job list
    pub fn calculate(jobs: &[Job]) -> Self {
        let count = |status: JobStatus| jobs.iter().filter(|j| j.status == status).count();

        Self {
            total: jobs.len(),
            applied: count(JobStatus::Applied),
            pending: count(JobStatus::Pending),
            rejected: count(JobStatus::Rejected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::sample_jobs;
    use proptest::prelude::*;

    fn create_test_job(id: &str, status: JobStatus) -> Job {
        Job::new(id, format!("Role {}", id), "Acme", status, "2024-01-01")
    }

    #[test]
    fn test_sample_counts() {
        let stats = DashboardStats::calculate(&sample_jobs());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.applied, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.rejected, 1);
    }

    #[test]
    fn test_empty_list() {
        let stats = DashboardStats::calculate(&[]);
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_only_matching_status_counts() {
        let jobs = vec![
            create_test_job("a", JobStatus::Pending),
            create_test_job("b", JobStatus::Pending),
            create_test_job("c", JobStatus::Rejected),
        ];
        let stats = DashboardStats::calculate(&jobs);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.applied, 0);
        assert_eq!(stats.pending, 2);
    }

    proptest! {
        #[test]
        fn prop_status_counts_sum_to_total(
            statuses in prop::collection::vec(prop::sample::select(JobStatus::ALL.to_vec()), 0..50)
        ) {
            let jobs: Vec<Job> = statuses
                .iter()
                .enumerate()
                .map(|(i, s)| create_test_job(&i.to_string(), *s))
                .collect();
            let stats = DashboardStats::calculate(&jobs);

            prop_assert_eq!(stats.total, jobs.len());
            prop_assert_eq!(stats.applied + stats.pending + stats.rejected, stats.total);
            prop_assert_eq!(
                stats.applied,
                statuses.iter().filter(|s| **s == JobStatus::Applied).count()
            );
        }
    }
}
