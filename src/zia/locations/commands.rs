//! Location command handlers

use log::debug;

use crate::cli::{
    Cli, Command, CreateResource, DeleteResource, GetResource, OutputFormat, UpdateResource,
};
use crate::output::{output_locations, output_locations_lite, output_mutation, output_raw, save_result};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::zia::session::ZiaSession;
use crate::zia::read_json_file;

use super::models::{LocationFilter, LocationLiteFilter, SublocationFilter};

/// Run the location list/get command
pub async fn run_location_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Location(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if args.sublocations {
        let parent_id = args.id.ok_or("Location ID is required with --sublocations")?;
        let filter = SublocationFilter {
            search: args.search.clone(),
            auth_required: args.auth_required,
            bw_enforced: args.bw_enforced,
            enforce_aup: args.enforce_aup,
            enable_firewall: args.enable_firewall,
        };

        debug!("Fetching sublocations of location {}", parent_id);
        let spinner = create_spinner(
            &format!("Fetching sublocations of location {}...", parent_id),
            cli.batch,
        );
        let sublocations = session.get_sublocations(parent_id, &filter).await?;
        finish_spinner(spinner, &format!("Found {} sublocations", sublocations.len()));

        if sublocations.is_empty() {
            eprintln!("No sublocations found for location {}", parent_id);
            return Ok(());
        }
        save_result(&cli.save, &sublocations)?;
        output_locations(&sublocations, &args.output, cli.no_header);
        return Ok(());
    }

    if args.lite {
        let filter = LocationLiteFilter {
            search: args.search.clone(),
            include_sub_locations: args.include_sub_locations.then_some(true),
            include_parent_locations: args.include_parent_locations.then_some(true),
            page: args.page,
            page_size: args.page_size,
        };

        let spinner = create_spinner("Fetching locations (lite)...", cli.batch);
        let locations = session.get_locations_lite(&filter, args.all).await?;
        finish_spinner(spinner, &format!("Found {} locations", locations.len()));

        if locations.is_empty() {
            eprintln!("No locations found");
            return Ok(());
        }
        save_result(&cli.save, &locations)?;
        output_locations_lite(&locations, &args.output, cli.no_header);
        return Ok(());
    }

    if let Some(id) = args.id {
        debug!("Fetching location {}", id);
        let spinner = create_spinner(&format!("Fetching location {}...", id), cli.batch);
        let result = session.get_location(id).await?;
        finish_spinner(spinner, "Done");

        match result {
            Some((location, raw)) => {
                save_result(&cli.save, &raw)?;
                if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                    output_raw(&raw, &args.output);
                } else {
                    output_locations(&[location], &args.output, cli.no_header);
                }
            }
            None => eprintln!("No response received from the API"),
        }
        return Ok(());
    }

    let filter = LocationFilter {
        search: args.search.clone(),
        ssl_scan_enabled: args.ssl_scan_enabled,
        xff_enabled: args.xff_enabled,
        auth_required: args.auth_required,
        bw_enforced: args.bw_enforced,
        partner_id: args.partner_id,
        page: args.page,
        page_size: args.page_size,
    };

    let spinner = create_spinner("Fetching locations...", cli.batch);
    let locations = session.get_locations(&filter, args.all).await?;
    finish_spinner(spinner, &format!("Found {} locations", locations.len()));

    if locations.is_empty() {
        eprintln!("No locations found");
        return Ok(());
    }
    save_result(&cli.save, &locations)?;
    output_locations(&locations, &args.output, cli.no_header);
    Ok(())
}

/// Run the location create command
pub async fn run_create_location_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::Location(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let payload = read_json_file(&args.file)?;
    let spinner = create_spinner("Creating location...", cli.batch);
    let result = session.create_location(payload).await?;
    finish_spinner(spinner, "Done");

    if let Some(value) = &result {
        save_result(&cli.save, value)?;
    }
    output_mutation(&result, &args.output);
    Ok(())
}

/// Run the location update command
pub async fn run_update_location_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::Location(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let payload = read_json_file(&args.file)?;
    let spinner = create_spinner("Updating location...", cli.batch);
    let result = session.update_location(payload).await?;
    finish_spinner(spinner, "Done");

    if let Some(value) = &result {
        save_result(&cli.save, value)?;
    }
    output_mutation(&result, &args.output);
    Ok(())
}

/// Run the location delete command (bulk endpoint for 2+ IDs)
pub async fn run_delete_location_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::Location(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let prompt = format!("Delete {} location(s) {:?}?", args.ids.len(), args.ids);
    if !confirm_action(&prompt, cli.batch, args.yes)? {
        eprintln!("Aborted");
        return Ok(());
    }

    let spinner = create_spinner("Deleting locations...", cli.batch);
    let result = if args.ids.len() == 1 {
        session.delete_location(args.ids[0]).await?
    } else {
        session.bulk_delete_locations(&args.ids).await?
    };
    finish_spinner(spinner, "Done");

    match result {
        Some(_) => println!("Deleted {} location(s)", args.ids.len()),
        None => eprintln!("No response received from the API"),
    }
    Ok(())
}
