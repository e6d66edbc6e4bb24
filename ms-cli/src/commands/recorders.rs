//! Recorder commands.

use clap::Subcommand;
use console::style;

use ms_api::MediasiteClient;
use ms_core::error::MsResult;
use ms_models::Recorder;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum RecordersAction {
    /// List recorders.
    List {
        /// Only recorders whose name starts with this prefix.
        #[arg(short = 's', long)]
        starts_with: Option<String>,
    },
    /// Find a recorder by exact name.
    Find {
        /// Recorder name.
        name: String,
    },
    /// Show a recorder's state as reported by the server.
    Status {
        /// Recorder id.
        id: String,
    },
    /// Start recording.
    Start {
        /// Recorder id.
        id: String,
    },
    /// Stop recording.
    Stop {
        /// Recorder id.
        id: String,
    },
    /// Ask a recorder for its state directly, bypassing the server.
    DirectStatus {
        /// Recorder host name or address.
        host: String,
    },
    /// Log in to a recorder's web API and print the session ticket.
    Login {
        /// Recorder host name or address.
        host: String,
        /// Recorder user name.
        #[arg(short, long)]
        username: String,
        /// Recorder password.
        #[arg(short, long)]
        password: String,
    },
}

pub async fn run(client: &MediasiteClient, action: RecordersAction, format: OutputFormat) -> MsResult<()> {
    match action {
        RecordersAction::List { starts_with } => {
            let recorders = client.get_recorders(starts_with.as_deref()).await?;
            match format {
                OutputFormat::Json => super::print_json(&recorders),
                OutputFormat::Text => print_recorder_table(&recorders),
            }
        }
        RecordersAction::Find { name } => {
            let recorder = client.find_recorder(&name).await?;
            match format {
                OutputFormat::Json => super::print_json(&recorder),
                OutputFormat::Text => {
                    println!("{}", style(&recorder.name).bold());
                    println!("  Id:      {}", recorder.id);
                    println!("  Serial:  {}", super::or_dash(recorder.serial_number.as_deref()));
                    println!("  Version: {}", super::or_dash(recorder.version.as_deref()));
                    println!("  Web URL: {}", super::or_dash(recorder.web_service_url.as_deref()));
                }
            }
        }
        RecordersAction::Status { id } => {
            let status = client.get_recorder_status(&id).await?;
            match format {
                OutputFormat::Json => super::print_json(&status),
                OutputFormat::Text => print_state(&id, status.recorder_state.as_deref()),
            }
        }
        RecordersAction::Start { id } => {
            client.start_recorder(&id).await?;
            print_action(format, &id, "started");
        }
        RecordersAction::Stop { id } => {
            client.stop_recorder(&id).await?;
            print_action(format, &id, "stopped");
        }
        RecordersAction::DirectStatus { host } => {
            let state = client.recorder_status_direct(&host).await?;
            match format {
                OutputFormat::Json => {
                    super::print_json(&serde_json::json!({ "host": host, "state": state }));
                }
                OutputFormat::Text => print_state(&host, state.as_deref()),
            }
        }
        RecordersAction::Login { host, username, password } => {
            let ticket = client.recorder_login(&host, &username, &password).await?;
            match format {
                OutputFormat::Json => {
                    super::print_json(&serde_json::json!({ "host": host, "ticket": ticket }));
                }
                OutputFormat::Text => match ticket {
                    Some(ticket) => println!("{ticket}"),
                    None => println!("{} no ticket returned by {}", style("Login failed:").red(), host),
                },
            }
        }
    }
    Ok(())
}

fn print_state(target: &str, state: Option<&str>) {
    let state = match state {
        Some(s) if s == ms_models::models::recorder::state::RECORDING => style(s.to_string()).red().bold(),
        Some(s) => style(s.to_string()).green(),
        None => style("unknown".to_string()).dim(),
    };
    println!("{target}: {state}");
}

fn print_action(format: OutputFormat, id: &str, verb: &str) {
    match format {
        OutputFormat::Json => super::print_json(&serde_json::json!({ "id": id, "action": verb })),
        OutputFormat::Text => println!("Recorder {} {}", id, style(verb).bold()),
    }
}

fn print_recorder_table(recorders: &[Recorder]) {
    if recorders.is_empty() {
        println!("No recorders found.");
        return;
    }
    let mut table = super::new_table(vec!["Name", "Id", "Version", "Serial"]);
    for r in recorders {
        table.add_row(vec![
            super::truncate(&r.name, 40),
            r.id.clone(),
            super::or_dash(r.version.as_deref()),
            super::or_dash(r.serial_number.as_deref()),
        ]);
    }
    println!("{table}");
}
