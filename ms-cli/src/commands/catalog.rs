//! Catalog, template, player and ticket commands.

use console::style;

use ms_api::MediasiteClient;
use ms_core::error::MsResult;

use crate::OutputFormat;

pub async fn templates(client: &MediasiteClient, format: OutputFormat) -> MsResult<()> {
    let templates = client.get_templates().await?;
    match format {
        OutputFormat::Json => super::print_json(&templates),
        OutputFormat::Text => {
            let mut table = super::new_table(vec!["Name", "Id", "Description"]);
            for t in &templates {
                table.add_row(vec![
                    super::truncate(&t.name, 40),
                    t.id.clone(),
                    super::truncate(&super::or_dash(t.description.as_deref()), 50),
                ]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

pub async fn players(client: &MediasiteClient, format: OutputFormat) -> MsResult<()> {
    let players = client.get_players().await?;
    match format {
        OutputFormat::Json => super::print_json(&players),
        OutputFormat::Text => {
            let mut table = super::new_table(vec!["Name", "Id"]);
            for p in &players {
                table.add_row(vec![super::truncate(&p.name, 40), p.id.clone()]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

pub async fn find(client: &MediasiteClient, name: &str, format: OutputFormat) -> MsResult<()> {
    let catalog = client.find_catalog(name).await?;
    match format {
        OutputFormat::Json => super::print_json(&catalog),
        OutputFormat::Text => {
            println!("{}", style(&catalog.name).bold());
            println!("  Id:     {}", catalog.id);
            println!("  URL:    {}", super::or_dash(catalog.catalog_url.as_deref()));
            println!("  Folder: {}", super::or_dash(catalog.linked_folder_id.as_deref()));
        }
    }
    Ok(())
}

pub async fn ticket(
    client: &MediasiteClient,
    resource_id: &str,
    username: &str,
    minutes: i32,
    format: OutputFormat,
) -> MsResult<()> {
    let ticket = client.create_auth_ticket(resource_id, minutes, username).await?;
    match format {
        OutputFormat::Json => super::print_json(&ticket),
        OutputFormat::Text => {
            println!("{}", ticket.ticket_id);
            if let Some(expires) = &ticket.expiration_time {
                println!("{}", style(format!("expires {expires}")).dim());
            }
        }
    }
    Ok(())
}
