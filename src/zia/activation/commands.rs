//! Configuration activation command handlers

use crate::cli::{Cli, Command, GetResource, OutputFormat};
use crate::output::{output_activation_status, output_raw, save_result};
use crate::ui::{create_spinner, finish_spinner};
use crate::zia::session::ZiaSession;

/// Run the activation status command
pub async fn run_status_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Status(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching activation status...", cli.batch);
    let status = session.get_activation_status().await?;
    finish_spinner(spinner, "Done");

    match status {
        Some(status) => {
            save_result(&cli.save, &status)?;
            if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                output_raw(&serde_json::to_value(&status)?, &args.output);
            } else {
                output_activation_status(&status, cli.no_header);
            }
        }
        None => eprintln!("No response received from the API"),
    }
    Ok(())
}

/// Run the activate command
pub async fn run_activate_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Activating pending changes...", cli.batch);
    let status = session.activate_changes().await?;
    finish_spinner(spinner, "Done");

    match status {
        Some(status) => println!("Activation status: {}", status.status()),
        None => eprintln!("No response received from the API"),
    }
    Ok(())
}
