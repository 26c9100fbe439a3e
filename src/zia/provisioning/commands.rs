//! Composite provisioning command handlers

use crate::cli::{Cli, Command, CreateResource, ExportResource, OutputFormat, UpdateResource};
use crate::error::ZiaError;
use crate::output::{output_raw, output_users, save_result};
use crate::ui::{create_spinner, finish_spinner};
use crate::zia::read_json_file;
use crate::zia::session::ZiaSession;

use super::models::SublocationPlan;

/// Run the assign-groups command
pub async fn run_assign_groups_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::AssignGroups(args) = &cli.command else {
        unreachable!()
    };

    let spinner = create_spinner("Assigning users to groups...", cli.batch);
    let outcome = session
        .assign_users_to_groups(&args.users, &args.groups, args.default_dept)
        .await?;
    finish_spinner(
        spinner,
        &format!(
            "Matched {} of {} users, updated {}",
            outcome.matched,
            args.users.len(),
            outcome.updated.len()
        ),
    );

    save_result(&cli.save, &outcome)?;
    if outcome.updated.is_empty() {
        eprintln!("No users needed updating");
        return Ok(());
    }
    if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
        output_raw(&serde_json::to_value(&outcome)?, &args.output);
    } else {
        output_users(&outcome.updated, &args.output, cli.no_header);
    }
    Ok(())
}

/// Run the sublocation plan create command
pub async fn run_create_sublocations_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::Sublocations(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let plan: SublocationPlan = serde_json::from_value(read_json_file(&args.file)?)
        .map_err(|e| ZiaError::Json(format!("Invalid sublocation plan {}: {}", args.file, e)))?;

    let spinner = create_spinner(
        &format!(
            "Creating '{}' under {} parent(s)...",
            plan.name,
            plan.parents.len()
        ),
        cli.batch,
    );
    let created = session.create_sublocations_from_plan(&plan).await?;
    finish_spinner(spinner, &format!("Created {} sublocation(s)", created.len()));

    let result = serde_json::Value::Array(created);
    save_result(&cli.save, &result)?;
    output_raw(&result, &args.output);
    Ok(())
}

/// Run the location tree export command
pub async fn run_export_locations_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Export {
        resource: ExportResource::Locations(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Exporting location tree...", cli.batch);
    let tree = session.export_location_tree(args.search.clone()).await?;
    finish_spinner(
        spinner,
        &format!(
            "Exported {} locations, {} sublocations",
            tree.locations.len(),
            tree.sublocation_count()
        ),
    );

    save_result(&cli.save, &tree)?;
    output_raw(&serde_json::to_value(&tree)?, &OutputFormat::Json);
    Ok(())
}

/// Run the bulk user update command
pub async fn run_update_users_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::Users(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let payload = read_json_file(&args.file)?;
    let Some(users) = payload.as_array() else {
        return Err(Box::new(ZiaError::Validation(format!(
            "{} must contain a JSON array of user objects",
            args.file
        ))));
    };

    let spinner = create_spinner(&format!("Updating {} user(s)...", users.len()), cli.batch);
    let confirmations = session.update_users_bulk(users.clone()).await?;
    finish_spinner(spinner, &format!("Updated {} user(s)", confirmations.len()));

    let result = serde_json::Value::Array(confirmations);
    save_result(&cli.save, &result)?;
    output_raw(&result, &args.output);
    Ok(())
}
