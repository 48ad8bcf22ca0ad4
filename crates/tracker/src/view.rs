//! View controller: the active tab, the record list and the search text.

use tracing::{debug, warn};

use crate::error::SourceError;
use crate::jobs::{Job, JobStatus};
use crate::source::JobSource;
use crate::stats::DashboardStats;

/// Top-level views reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Jobs,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Jobs, Tab::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Jobs => "Jobs",
            Tab::Settings => "Settings",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Dashboard => '1',
            Tab::Jobs => '2',
            Tab::Settings => '3',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.shortcut() == c)
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Jobs => 1,
            Tab::Settings => 2,
        }
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Color family of a status marker; the renderer picks the concrete color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Yellow,
    Red,
}

/// Visual indicator for a job status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusIcon {
    pub glyph: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Default)]
pub struct ViewController {
    active_tab: Tab,
    jobs: Vec<Job>,
    search: String,
    search_focused: bool,
}

impl ViewController {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            ..Self::default()
        }
    }

    /// Build a controller from whatever the source currently holds
    pub fn from_source(source: &dyn JobSource) -> Result<Self, SourceError> {
        Ok(Self::new(source.fetch_jobs()?))
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            debug!("Switching tab {:?} -> {:?}", self.active_tab, tab);
            self.active_tab = tab;
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.active_tab.previous());
    }

    pub fn status_icon(status: JobStatus) -> StatusIcon {
        match status {
            JobStatus::Applied => StatusIcon { glyph: "✔", tone: Tone::Green },
            JobStatus::Pending => StatusIcon { glyph: "◷", tone: Tone::Yellow },
            JobStatus::Rejected => StatusIcon { glyph: "✘", tone: Tone::Red },
        }
    }

    /// Every record, in insertion order
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Counters over the full list, independent of the search text
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::calculate(&self.jobs)
    }

    /// Records matching the search text, in insertion order
    pub fn visible_jobs(&self) -> Vec<&Job> {
        let needle = self.search.trim().to_lowercase();
        self.jobs.iter().filter(|j| j.matches(&needle)).collect()
    }

    /// Replace the records with a fresh fetch; keeps the old list on error
    pub fn reload(&mut self, source: &dyn JobSource) -> Result<usize, SourceError> {
        match source.fetch_jobs() {
            Ok(jobs) => {
                self.jobs = jobs;
                Ok(self.jobs.len())
            }
            Err(e) => {
                warn!("Reload failed, keeping {} cached jobs: {}", self.jobs.len(), e);
                Err(e)
            }
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    pub fn blur_search(&mut self) {
        self.search_focused = false;
    }

    pub fn push_search_char(&mut self, c: char) {
        if !c.is_control() {
            self.search.push(c);
        }
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }
}
