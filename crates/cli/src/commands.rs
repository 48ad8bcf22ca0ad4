//! Subcommand bodies, writing their output to any `Write` sink.

use std::io::Write;

use anyhow::{Context, Result};
use jobtrack_core::{DashboardStats, JobSource, JobStatus, NewApplication};
use tracing::warn;

/// Date used when `add` is not given one
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub fn list(source: &dyn JobSource, status: Option<JobStatus>, out: &mut impl Write) -> Result<()> {
    let jobs = source.fetch_jobs().context("Failed to load jobs")?;
    for job in jobs.iter().filter(|j| status.map_or(true, |s| j.status == s)) {
        writeln!(
            out,
            "{:<38} {:<10} {:<12} {} @ {}",
            job.id,
            job.status.label(),
            job.date,
            job.title,
            job.company
        )?;
    }
    Ok(())
}

pub fn stats(source: &dyn JobSource, out: &mut impl Write) -> Result<()> {
    let jobs = source.fetch_jobs().context("Failed to load jobs")?;
    let stats = DashboardStats::calculate(&jobs);
    writeln!(out, "Total Applications: {}", stats.total)?;
    writeln!(out, "Applied:            {}", stats.applied)?;
    writeln!(out, "Pending Response:   {}", stats.pending)?;
    writeln!(out, "Rejected:           {}", stats.rejected)?;
    Ok(())
}

/// Store a new application and print its id; refuses sources that would drop it
pub fn add(
    source: &mut dyn JobSource,
    application: NewApplication,
    out: &mut impl Write,
) -> Result<()> {
    if !source.is_persistent() {
        warn!("Refusing to add to {}", source.describe());
        anyhow::bail!("no data_file configured; submissions would not be saved");
    }

    let job = source
        .submit_application(application)
        .context("Failed to store application")?;
    writeln!(out, "{}", job.id)?;
    Ok(())
}
