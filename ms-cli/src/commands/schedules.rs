//! Schedule commands.

use chrono::{DateTime, Utc};
use clap::Subcommand;
use console::style;

use ms_api::MediasiteClient;
use ms_core::error::MsResult;
use ms_models::{Recurrence, Schedule};

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum SchedulesAction {
    /// List schedules.
    List {
        /// Only schedules for this recorder id.
        #[arg(short, long)]
        recorder: Option<String>,
    },
    /// Find a schedule by exact name.
    Find {
        /// Schedule name.
        name: String,
    },
    /// List a schedule's recurrences.
    Recurrences {
        /// Schedule id.
        id: String,
    },
    /// Create an automated schedule.
    Create {
        /// Schedule name.
        name: String,
        /// Folder that receives the presentations.
        #[arg(short, long)]
        folder: String,
        /// Template the presentations are created from.
        #[arg(short, long)]
        template: String,
        /// Recorder that captures them.
        #[arg(short, long)]
        recorder: String,
    },
    /// Add a weekly recurrence to a schedule.
    AddWeekly {
        /// Schedule id.
        id: String,
        /// First recording start, RFC 3339 (e.g. 2024-09-02T14:00:00Z).
        #[arg(long)]
        start: DateTime<Utc>,
        /// Last recording end, RFC 3339.
        #[arg(long)]
        end: DateTime<Utc>,
        /// Recording length in minutes.
        #[arg(short, long)]
        minutes: i32,
        /// Days of the week, e.g. "Monday, Wednesday".
        #[arg(short, long)]
        days: String,
    },
}

pub async fn run(client: &MediasiteClient, action: SchedulesAction, format: OutputFormat) -> MsResult<()> {
    match action {
        SchedulesAction::List { recorder } => {
            let schedules = client.get_schedules(recorder.as_deref()).await?;
            match format {
                OutputFormat::Json => super::print_json(&schedules),
                OutputFormat::Text => print_schedule_table(&schedules),
            }
        }
        SchedulesAction::Find { name } => {
            let schedule = client.find_schedule(&name).await?;
            match format {
                OutputFormat::Json => super::print_json(&schedule),
                OutputFormat::Text => print_schedule_table(std::slice::from_ref(&schedule)),
            }
        }
        SchedulesAction::Recurrences { id } => {
            let recurrences = client.get_schedule_recurrences(&id).await?;
            match format {
                OutputFormat::Json => super::print_json(&recurrences),
                OutputFormat::Text => print_recurrence_table(&recurrences),
            }
        }
        SchedulesAction::Create { name, folder, template, recorder } => {
            let schedule = client.create_schedule(&name, &folder, &template, &recorder).await?;
            match format {
                OutputFormat::Json => super::print_json(&schedule),
                OutputFormat::Text => {
                    println!("{} {} ({})", style("Created").green().bold(), schedule.name, schedule.id);
                }
            }
        }
        SchedulesAction::AddWeekly { id, start, end, minutes, days } => {
            let recurrence = client
                .add_weekly_recurrence(&id, minutes * 60_000, start, end, &days)
                .await?;
            match format {
                OutputFormat::Json => super::print_json(&recurrence),
                OutputFormat::Text => {
                    println!("{} recurrence {} on {}", style("Added").green().bold(), recurrence.id, days);
                }
            }
        }
    }
    Ok(())
}

fn print_schedule_table(schedules: &[Schedule]) {
    if schedules.is_empty() {
        println!("No schedules found.");
        return;
    }
    let mut table = super::new_table(vec!["Name", "Id", "Recorder", "Folder"]);
    for s in schedules {
        table.add_row(vec![
            super::truncate(&s.name, 40),
            s.id.clone(),
            super::or_dash(s.recorder_name.as_deref().or(s.recorder_id.as_deref())),
            super::or_dash(s.folder_id.as_deref()),
        ]);
    }
    println!("{table}");
}

fn print_recurrence_table(recurrences: &[Recurrence]) {
    if recurrences.is_empty() {
        println!("No recurrences found.");
        return;
    }
    let mut table = super::new_table(vec!["Id", "Pattern", "Days", "Start", "End", "Minutes"]);
    for r in recurrences {
        table.add_row(vec![
            r.id.to_string(),
            super::or_dash(r.recurrence_pattern.as_deref()),
            super::or_dash(r.days_of_the_week.as_deref()),
            super::or_dash(r.start_record_date_time.as_deref()),
            super::or_dash(r.end_record_date_time.as_deref()),
            (r.record_duration / 60_000).to_string(),
        ]);
    }
    println!("{table}");
}
