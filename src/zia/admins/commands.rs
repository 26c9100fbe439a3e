//! Admin role and admin user command handlers

use crate::cli::{
    Cli, Command, CreateResource, DeleteResource, GetResource, UpdateResource,
};
use crate::output::{output_admin_roles, output_admin_users, output_mutation, save_result};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::zia::read_json_file;
use crate::zia::session::ZiaSession;

use super::models::{AdminRoleFilter, AdminUserFilter};

/// Run the admin role list command
pub async fn run_admin_role_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::AdminRole(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let filter = AdminRoleFilter {
        include_auditor_role: args.include_auditor_role.then_some(true),
        include_partner_role: args.include_partner_role.then_some(true),
    };

    let spinner = create_spinner("Fetching admin roles...", cli.batch);
    let roles = session.get_admin_roles(&filter).await?;
    finish_spinner(spinner, &format!("Found {} roles", roles.len()));

    if roles.is_empty() {
        eprintln!("No admin roles found");
        return Ok(());
    }
    save_result(&cli.save, &roles)?;
    output_admin_roles(&roles, &args.output, cli.no_header);
    Ok(())
}

/// Run the admin user list/get command.
///
/// The API has no single-admin endpoint, so an ID argument filters the full
/// listing client-side.
pub async fn run_admin_user_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::AdminUser(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let filter = AdminUserFilter {
        include_auditor_users: args.include_auditor_users.then_some(true),
        include_admin_users: args.include_admin_users.then_some(true),
        search: args.search.clone(),
        page: args.page,
        page_size: args.page_size,
    };

    let spinner = create_spinner("Fetching admin users...", cli.batch);
    let admins = session
        .get_admin_users(&filter, args.all || args.id.is_some())
        .await?;
    finish_spinner(spinner, &format!("Found {} admin users", admins.len()));

    if let Some(id) = args.id {
        let Some(admin) = admins.into_iter().find(|a| a.id == id) else {
            eprintln!("No admin user with id {} found", id);
            return Ok(());
        };
        save_result(&cli.save, &admin)?;
        output_admin_users(&[admin], &args.output, cli.no_header);
        return Ok(());
    }

    if admins.is_empty() {
        eprintln!("No admin users found");
        return Ok(());
    }
    save_result(&cli.save, &admins)?;
    output_admin_users(&admins, &args.output, cli.no_header);
    Ok(())
}

/// Run the admin user create command
pub async fn run_create_admin_user_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::AdminUser(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let payload = read_json_file(&args.file)?;
    let spinner = create_spinner("Creating admin user...", cli.batch);
    let result = session.create_admin_user(payload).await?;
    finish_spinner(spinner, "Done");

    if let Some(value) = &result {
        save_result(&cli.save, value)?;
    }
    output_mutation(&result, &args.output);
    Ok(())
}

/// Run the admin user update command
pub async fn run_update_admin_user_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::AdminUser(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let payload = read_json_file(&args.file)?;
    let spinner = create_spinner("Updating admin user...", cli.batch);
    let result = session.update_admin_user(payload).await?;
    finish_spinner(spinner, "Done");

    if let Some(value) = &result {
        save_result(&cli.save, value)?;
    }
    output_mutation(&result, &args.output);
    Ok(())
}

/// Run the admin user delete command
pub async fn run_delete_admin_user_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::AdminUser(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let prompt = format!("Delete admin user {}?", args.id);
    if !confirm_action(&prompt, cli.batch, args.yes)? {
        eprintln!("Aborted");
        return Ok(());
    }

    let spinner = create_spinner("Deleting admin user...", cli.batch);
    let result = session.delete_admin_user(args.id).await?;
    finish_spinner(spinner, "Done");

    match result {
        Some(_) => println!("Deleted admin user {}", args.id),
        None => eprintln!("No response received from the API"),
    }
    Ok(())
}
