//! Folder commands.

use clap::Subcommand;
use console::style;

use ms_api::MediasiteClient;
use ms_core::error::MsResult;
use ms_models::Folder;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum FoldersAction {
    /// Find a folder by exact name.
    Find {
        /// Folder name.
        name: String,
        /// Only match inside this parent folder.
        #[arg(short, long)]
        parent: Option<String>,
    },
    /// Get a folder by id.
    Get {
        /// Folder id.
        id: String,
    },
    /// List the folders inside a parent folder.
    List {
        /// Parent folder id (defaults to the configured root folder).
        parent: Option<String>,
        /// Only folders whose name starts with this prefix.
        #[arg(short = 's', long)]
        starts_with: Option<String>,
    },
    /// Show the folder tree below a parent folder.
    Tree {
        /// Parent folder id (defaults to the configured root folder).
        parent: Option<String>,
        /// Include the parent folder itself as the tree root.
        #[arg(long)]
        include_parent: bool,
    },
    /// Create a folder.
    Create {
        /// New folder name.
        name: String,
        /// Parent folder id (defaults to the configured root folder).
        #[arg(short, long)]
        parent: Option<String>,
    },
}

pub async fn run(client: &MediasiteClient, action: FoldersAction, format: OutputFormat) -> MsResult<()> {
    match action {
        FoldersAction::Find { name, parent } => {
            let folder = match parent {
                Some(parent) => client.find_folder_in(&name, &parent).await?,
                None => client.find_folder(&name).await?,
            };
            print_folder(&folder, format);
        }
        FoldersAction::Get { id } => {
            let folder = client.get_folder(&id).await?;
            print_folder(&folder, format);
        }
        FoldersAction::List { parent, starts_with } => {
            let parent = super::folder_or_root(client, parent)?;
            let folders = match starts_with {
                Some(prefix) => client.find_folders_starting_with(&prefix, &parent).await?,
                None => client.find_folders(&parent).await?,
            };
            match format {
                OutputFormat::Json => super::print_json(&folders),
                OutputFormat::Text => print_folder_table(&folders),
            }
        }
        FoldersAction::Tree { parent, include_parent } => {
            let parent = super::folder_or_root(client, parent)?;
            let tree = client.find_folders_recursive(&parent, true, include_parent).await?;
            match format {
                OutputFormat::Json => super::print_json(&tree),
                OutputFormat::Text => {
                    if tree.is_empty() {
                        println!("No folders found.");
                    }
                    for folder in &tree {
                        print_tree(folder, 0);
                    }
                }
            }
        }
        FoldersAction::Create { name, parent } => {
            let parent = super::folder_or_root(client, parent)?;
            let folder = client.create_folder(&name, &parent).await?;
            match format {
                OutputFormat::Json => super::print_json(&folder),
                OutputFormat::Text => {
                    println!("{} {} ({})", style("Created").green().bold(), folder.name, folder.id);
                }
            }
        }
    }
    Ok(())
}

fn print_folder(folder: &Folder, format: OutputFormat) {
    match format {
        OutputFormat::Json => super::print_json(folder),
        OutputFormat::Text => {
            println!("{}", style(&folder.name).bold());
            println!("  Id:          {}", folder.id);
            println!("  Parent:      {}", super::or_dash(folder.parent_folder_id.as_deref()));
            println!("  Owner:       {}", super::or_dash(folder.owner.as_deref()));
            println!("  Description: {}", super::or_dash(folder.description.as_deref()));
            println!("  Modified:    {}", super::or_dash(folder.last_modified.as_deref()));
        }
    }
}

fn print_folder_table(folders: &[Folder]) {
    if folders.is_empty() {
        println!("No folders found.");
        return;
    }
    let mut table = super::new_table(vec!["Name", "Id", "Owner"]);
    for folder in folders {
        table.add_row(vec![
            super::truncate(&folder.name, 40),
            folder.id.clone(),
            super::or_dash(folder.owner.as_deref()),
        ]);
    }
    println!("{table}");
    println!("\n{} folders", folders.len());
}

fn print_tree(folder: &Folder, depth: usize) {
    println!(
        "{}{} {}",
        "  ".repeat(depth),
        folder.name,
        style(format!("({})", folder.id)).dim()
    );
    for child in folder.children() {
        print_tree(child, depth + 1);
    }
}
