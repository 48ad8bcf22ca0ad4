use jobtrack_core::jobs::{sample_jobs, Job, JobStatus};
use jobtrack_core::view::{Tab, ViewController};
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = JobStatus> {
    prop::sample::select(JobStatus::ALL.to_vec())
}

fn tab_strategy() -> impl Strategy<Value = Tab> {
    prop::sample::select(Tab::ALL.to_vec())
}

fn jobs_strategy() -> impl Strategy<Value = Vec<Job>> {
    prop::collection::vec(("[A-Za-z ]{1,20}", "[A-Za-z ]{1,20}", status_strategy()), 0..30).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, company, status))| {
                    Job::new(i.to_string(), title, company, status, format!("2024-01-{:02}", i % 28 + 1))
                })
                .collect()
        },
    )
}

/// Selecting a tab always lands on that tab, from any starting tab
#[test]
fn property_tab_selection_is_flat() {
    proptest!(|(
        path in prop::collection::vec(tab_strategy(), 1..20),
    )| {
        let mut view = ViewController::new(sample_jobs());
        for tab in path {
            view.select_tab(tab);
            prop_assert_eq!(view.active_tab(), tab);

            // Reselecting the active tab changes nothing
            view.select_tab(tab);
            prop_assert_eq!(view.active_tab(), tab);
        }
    });
}

/// The visible list is an order-preserving subsequence of the full list
#[test]
fn property_search_preserves_order() {
    proptest!(|(
        jobs in jobs_strategy(),
        query in "[a-z]{0,3}",
    )| {
        let mut view = ViewController::new(jobs.clone());
        for c in query.chars() {
            view.push_search_char(c);
        }

        let visible: Vec<&Job> = view.visible_jobs();
        let mut cursor = jobs.iter();
        for job in &visible {
            prop_assert!(
                cursor.any(|j| j.id == job.id),
                "job {} is out of order or missing", job.id
            );
        }

        if query.is_empty() {
            prop_assert_eq!(visible.len(), jobs.len());
        }
    });
}

/// Counters come from the full list regardless of the search text
#[test]
fn property_counters_ignore_search() {
    proptest!(|(
        jobs in jobs_strategy(),
        query in "[a-z]{1,3}",
    )| {
        let mut view = ViewController::new(jobs.clone());
        let before = view.stats();
        for c in query.chars() {
            view.push_search_char(c);
        }

        prop_assert_eq!(view.stats(), before);
        prop_assert_eq!(before.total, jobs.len());
        prop_assert_eq!(
            before.pending,
            jobs.iter().filter(|j| j.status == JobStatus::Pending).count()
        );
    });
}

#[test]
fn test_sample_dashboard_counts() {
    let view = ViewController::new(sample_jobs());
    let stats = view.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.applied, 1);
    assert_eq!(stats.pending, 1);
}
