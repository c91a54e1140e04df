//! Version timeline and revert command handlers

use anyhow::Result;
use colored::*;
use rewind_client::ApiClient;
use rewind_ui::notify::{Notification, Severity};
use rewind_ui::revert::RevertOutcome;
use rewind_ui::session::VersionsSession;
use rewind_ui::timeline::TimelineError;

use crate::config::Config;

/// Show the version timeline of a job
pub async fn show_timeline(config: &Config, job_id: &str) -> Result<()> {
    let client = ApiClient::new(&config.api_url);
    let mut session = VersionsSession::new(client, job_id);
    session.load().await?;

    if let Some(error) = session.error() {
        print_timeline_error(error, session.job_id());
        return Ok(());
    }

    print_timeline(&session);
    Ok(())
}

/// Revert a job to an older version
pub async fn revert(config: &Config, job_id: &str, target_version: u64) -> Result<()> {
    let client = ApiClient::new(&config.api_url);
    let mut session = VersionsSession::new(client, job_id);
    session.load().await?;

    if let Some(error) = session.error() {
        print_timeline_error(error, session.job_id());
        return Ok(());
    }

    if !session.timeline().contains(target_version) {
        println!(
            "{}",
            format!("Job {} has no version {}.", job_id, target_version).yellow()
        );
        return Ok(());
    }

    // The current version carries no revert action.
    if session
        .timeline()
        .current()
        .is_some_and(|row| row.version == target_version)
    {
        println!(
            "{}",
            format!("Version {} is already the current version.", target_version).yellow()
        );
        return Ok(());
    }

    match session.revert_to(target_version).await? {
        Some(RevertOutcome::Reverted(job)) => {
            println!(
                "{}",
                format!(
                    "Reverted job {} to the definition of version {}.",
                    job.name, target_version
                )
                .green()
            );
            println!();
            print_timeline(&session);
        }
        Some(_) => {
            if let Some(notification) = session.notification() {
                print_notification(notification);
            }
        }
        None => {
            println!(
                "{}",
                "A revert for this version is already in flight.".yellow()
            );
        }
    }

    Ok(())
}

/// Print the version timeline
fn print_timeline(session: &VersionsSession) {
    if let Some(job) = session.job() {
        println!("{}", format!("Job {} versions", job.name).bold());
        println!();
    }

    for row in session.timeline().rows() {
        let header = format!("Version #{}", row.version);
        if row.is_current {
            println!("  {} {} {}", "▸".cyan(), header.bold(), "(current)".green());
        } else {
            println!("  {} {}", "▸".cyan(), header.bold());
        }
        println!(
            "    Stable:    {}",
            if row.stable {
                "true".green()
            } else {
                "false".yellow()
            }
        );
        println!("    Submitted: {}", row.submit_time_display().dimmed());
        if row.can_revert() {
            println!(
                "    {}",
                format!("rewind revert {} {}", session.job_id(), row.version).dimmed()
            );
        }
        println!();
    }
}

/// Print the timeline error state
///
/// The requested job ID is echoed back; a missing job never redirects the
/// operator elsewhere.
fn print_timeline_error(error: &TimelineError, job_id: &str) {
    println!("{}", error.title.red().bold());
    println!("  {}", error.message);
    println!("  {}", format!("Requested job: {}", job_id).dimmed());
}

/// Print a notification panel
fn print_notification(notification: &Notification) {
    if !notification.is_shown {
        return;
    }

    let title = match notification.severity {
        Severity::Danger => notification.title.red().bold(),
        Severity::Warning => notification.title.yellow().bold(),
        Severity::Info => notification.title.cyan().bold(),
    };

    println!("{}", title);
    println!("  {}", notification.message);
}
