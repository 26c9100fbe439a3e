//! Traffic forwarding command handlers

use log::debug;

use crate::cli::{
    Cli, Command, CreateResource, DeleteResource, GetResource, OutputFormat, UpdateResource,
};
use crate::output::{
    output_gre_info, output_mutation, output_raw, output_vips, output_vpn_credentials, save_result,
};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::zia::read_json_file;
use crate::zia::session::ZiaSession;

use super::models::{VipFilter, VpnCredentialFilter};

/// Run the VPN credential list/get command
pub async fn run_vpn_credential_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::VpnCredential(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = args.id {
        debug!("Fetching VPN credential {}", id);
        let spinner = create_spinner(&format!("Fetching VPN credential {}...", id), cli.batch);
        let result = session.get_vpn_credential(id).await?;
        finish_spinner(spinner, "Done");

        match result {
            Some((credential, raw)) => {
                save_result(&cli.save, &raw)?;
                if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                    output_raw(&raw, &args.output);
                } else {
                    output_vpn_credentials(&[credential], &args.output, cli.no_header);
                }
            }
            None => eprintln!("No response received from the API"),
        }
        return Ok(());
    }

    let filter = VpnCredentialFilter {
        search: args.search.clone(),
        credential_type: args.credential_type.clone(),
        include_only_without_location: args.include_only_without_location.then_some(true),
        location_id: args.location_id,
        managed_by: args.managed_by,
        page: args.page,
        page_size: args.page_size,
    };

    let spinner = create_spinner("Fetching VPN credentials...", cli.batch);
    let credentials = session.get_vpn_credentials(&filter, args.all).await?;
    finish_spinner(
        spinner,
        &format!("Found {} VPN credentials", credentials.len()),
    );

    if credentials.is_empty() {
        eprintln!("No VPN credentials found");
        return Ok(());
    }
    save_result(&cli.save, &credentials)?;
    output_vpn_credentials(&credentials, &args.output, cli.no_header);
    Ok(())
}

/// Run the VPN credential create command
pub async fn run_create_vpn_credential_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::VpnCredential(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let payload = read_json_file(&args.file)?;
    let spinner = create_spinner("Adding VPN credential...", cli.batch);
    let result = session.create_vpn_credential(payload).await?;
    finish_spinner(spinner, "Done");

    if let Some(value) = &result {
        save_result(&cli.save, value)?;
    }
    output_mutation(&result, &args.output);
    Ok(())
}

/// Run the VPN credential update command
pub async fn run_update_vpn_credential_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::VpnCredential(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let payload = read_json_file(&args.file)?;
    let spinner = create_spinner("Updating VPN credential...", cli.batch);
    let result = session.update_vpn_credential(payload).await?;
    finish_spinner(spinner, "Done");

    if let Some(value) = &result {
        save_result(&cli.save, value)?;
    }
    output_mutation(&result, &args.output);
    Ok(())
}

/// Run the VPN credential delete command (bulk endpoint for 2+ IDs)
pub async fn run_delete_vpn_credential_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::VpnCredential(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let prompt = format!(
        "Delete {} VPN credential(s) {:?}?",
        args.ids.len(),
        args.ids
    );
    if !confirm_action(&prompt, cli.batch, args.yes)? {
        eprintln!("Aborted");
        return Ok(());
    }

    let spinner = create_spinner("Deleting VPN credentials...", cli.batch);
    let result = if args.ids.len() == 1 {
        session.delete_vpn_credential(args.ids[0]).await?
    } else {
        session.bulk_delete_vpn_credentials(&args.ids).await?
    };
    finish_spinner(spinner, "Done");

    match result {
        Some(_) => println!("Deleted {} VPN credential(s)", args.ids.len()),
        None => eprintln!("No response received from the API"),
    }
    Ok(())
}

/// Run the GRE tunnel info command
pub async fn run_gre_info_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::GreInfo(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching GRE tunnel info...", cli.batch);
    let info = session.get_gre_tunnel_info(&args.ips).await?;
    finish_spinner(spinner, &format!("Found {} tunnels", info.len()));

    if info.is_empty() {
        eprintln!("No GRE tunnel info found");
        return Ok(());
    }
    save_result(&cli.save, &info)?;
    output_gre_info(&info, &args.output, cli.no_header);
    Ok(())
}

/// Run the virtual IP list command
pub async fn run_vip_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Vip(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let filter = VipFilter {
        dc: args.dc.clone(),
        region: args.region.clone(),
        include: args.include.clone(),
        page: args.page,
        page_size: args.page_size,
    };

    let spinner = create_spinner("Fetching virtual IPs...", cli.batch);
    let vips = session.get_virtual_ips(&filter, args.all).await?;
    finish_spinner(spinner, &format!("Found {} virtual IPs", vips.len()));

    if vips.is_empty() {
        eprintln!("No virtual IPs found");
        return Ok(());
    }
    save_result(&cli.save, &vips)?;
    output_vips(&vips, &args.output, cli.no_header);
    Ok(())
}
