//! Presentation commands.

use std::path::PathBuf;
use std::time::Duration;

use clap::Subcommand;
use console::style;

use ms_api::{ApiResponse, MediasiteClient};
use ms_core::error::MsResult;
use ms_models::Presentation;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum PresentationsAction {
    /// Get a presentation by id.
    Get {
        /// Presentation id.
        id: String,
    },
    /// List the presentations in a folder.
    List {
        /// Folder id (defaults to the configured root folder).
        folder: Option<String>,
    },
    /// Create an interview presentation titled after its participants.
    Interview {
        /// Template to create from.
        #[arg(short, long)]
        template: String,
        /// Folder to create in.
        #[arg(short, long)]
        folder: String,
        /// Player to publish with.
        #[arg(short, long)]
        player: String,
        /// Participant names.
        participants: String,
    },
    /// Upload a media file to a presentation.
    Upload {
        /// Presentation id.
        id: String,
        /// Media file to upload.
        file: PathBuf,
        /// Name to store the file under (defaults to the local file name).
        #[arg(long)]
        send_as: Option<String>,
        /// Poll the processing job until it finishes.
        #[arg(short, long)]
        wait: bool,
    },
    /// Show the state of a processing job.
    Job {
        /// Job id.
        id: String,
    },
}

pub async fn run(
    client: &MediasiteClient,
    action: PresentationsAction,
    format: OutputFormat,
) -> MsResult<()> {
    match action {
        PresentationsAction::Get { id } => {
            let presentation = client.get_presentation(&id).await?;
            match format {
                OutputFormat::Json => super::print_json(&presentation),
                OutputFormat::Text => print_presentation(&presentation),
            }
        }
        PresentationsAction::List { folder } => {
            let folder = super::folder_or_root(client, folder)?;
            let presentations = client.find_presentations_in_folder(&folder).await?;
            match format {
                OutputFormat::Json => super::print_json(&presentations),
                OutputFormat::Text => print_presentation_table(&presentations),
            }
        }
        PresentationsAction::Interview { template, folder, player, participants } => {
            let presentation = client
                .create_interview_presentation(&template, &folder, &player, &participants)
                .await?;
            match format {
                OutputFormat::Json => super::print_json(&presentation),
                OutputFormat::Text => println!(
                    "{} {} ({})",
                    style("Created").green().bold(),
                    presentation.title,
                    presentation.id
                ),
            }
        }
        PresentationsAction::Upload { id, file, send_as, wait } => {
            let job_id = match send_as {
                Some(name) => {
                    let response = client.upload_media_file_with_response(&id, &file, &name).await;
                    if format_is_text(format) {
                        print_upload_steps(&response);
                    } else {
                        super::print_json(&response);
                    }
                    let registered = response.into_result()?.inner;
                    match registered {
                        Some(inner) => (*inner).into_result()?.value,
                        None => None,
                    }
                }
                None => {
                    let job_id = client.upload_media_file(&id, &file).await?;
                    if format_is_text(format) {
                        println!("{} {}", style("Uploaded").green().bold(), file.display());
                    }
                    Some(job_id)
                }
            };

            if let Some(job_id) = job_id {
                if format_is_text(format) {
                    println!("Processing job: {job_id}");
                }
                if wait {
                    wait_for_job(client, &job_id, format).await?;
                }
            }
        }
        PresentationsAction::Job { id } => {
            let job = client.get_job(&id).await?;
            match format {
                OutputFormat::Json => super::print_json(&job),
                OutputFormat::Text => {
                    println!("{}  {}", job.id, super::or_dash(job.status.as_deref()));
                }
            }
        }
    }
    Ok(())
}

fn format_is_text(format: OutputFormat) -> bool {
    matches!(format, OutputFormat::Text)
}

async fn wait_for_job(client: &MediasiteClient, job_id: &str, format: OutputFormat) -> MsResult<()> {
    loop {
        let job = client.get_job(job_id).await?;
        if job.is_finished() {
            match format {
                OutputFormat::Json => super::print_json(&job),
                OutputFormat::Text => {
                    println!("Job {} {}", job.id, super::or_dash(job.status.as_deref()));
                }
            }
            return Ok(());
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
}

fn print_upload_steps(response: &ApiResponse<String>) {
    let mut step = Some(response);
    while let Some(current) = step {
        let mark = if current.success {
            style("ok").green()
        } else {
            style("failed").red()
        };
        println!("{} {} {} {}", mark, current.resource, current.status, current.status_text);
        if let Some(error) = &current.error {
            println!("   {error}");
        }
        step = current.inner.as_deref();
    }
}

fn print_presentation(presentation: &Presentation) {
    println!("{}", style(&presentation.title).bold());
    println!("  Id:        {}", presentation.id);
    println!("  Status:    {}", super::or_dash(presentation.status.as_deref()));
    println!("  Folder:    {}", super::or_dash(presentation.folder_id.as_deref()));
    println!("  Presenter: {}", super::or_dash(presentation.primary_presenter.as_deref()));
    println!("  Recorded:  {}", super::or_dash(presentation.record_date.as_deref()));
    if let Some(duration) = presentation.duration {
        println!("  Duration:  {} min", duration / 60_000);
    }
}

fn print_presentation_table(presentations: &[Presentation]) {
    if presentations.is_empty() {
        println!("No presentations found.");
        return;
    }
    let mut table = super::new_table(vec!["Title", "Id", "Status", "Recorded"]);
    for p in presentations {
        let recorded = p.record_date.as_deref().unwrap_or("-");
        let recorded = recorded.get(..10).unwrap_or(recorded);
        table.add_row(vec![
            super::truncate(&p.title, 40),
            p.id.clone(),
            super::or_dash(p.status.as_deref()),
            recorded.to_string(),
        ]);
    }
    println!("{table}");
    println!("\n{} presentations", presentations.len());
}
