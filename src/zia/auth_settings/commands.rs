//! User authentication settings command handlers

use crate::cli::{Cli, Command, GetResource, OutputFormat, UpdateResource};
use crate::output::{output_exempted_urls, output_raw, save_result};
use crate::ui::{create_spinner, finish_spinner};
use crate::zia::session::ZiaSession;

use super::models::UrlListAction;

/// Run the exempted auth URLs list command
pub async fn run_auth_urls_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::AuthUrls(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching exempted URLs...", cli.batch);
    let urls = session.get_exempted_urls().await?;
    finish_spinner(spinner, &format!("Found {} URLs", urls.urls.len()));

    save_result(&cli.save, &urls)?;
    if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
        output_raw(&serde_json::to_value(&urls)?, &args.output);
    } else {
        output_exempted_urls(&urls, &args.output, cli.no_header);
    }
    Ok(())
}

/// Run the exempted auth URLs modification command
pub async fn run_update_auth_urls_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::AuthUrls(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let (action, urls) = if !args.add.is_empty() {
        (UrlListAction::Add, &args.add)
    } else {
        (UrlListAction::Remove, &args.remove)
    };

    let spinner = create_spinner("Modifying exempted URL list...", cli.batch);
    let result = session.modify_exempted_urls(action, urls).await?;
    finish_spinner(spinner, "Done");

    save_result(&cli.save, &result)?;
    if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
        output_raw(&serde_json::to_value(&result)?, &args.output);
    } else {
        output_exempted_urls(&result, &args.output, cli.no_header);
    }
    Ok(())
}
