//! User, group and department command handlers

use log::debug;

use crate::cli::{
    Cli, Command, CreateResource, DeleteResource, GetResource, OutputFormat, UpdateResource,
};
use crate::output::{
    output_departments, output_groups, output_mutation, output_raw, output_users, save_result,
};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::zia::read_json_file;
use crate::zia::session::ZiaSession;

use super::models::{SearchFilter, UserFilter};

/// Run the user list/get command
pub async fn run_user_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::User(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = args.id {
        debug!("Fetching user {}", id);
        let spinner = create_spinner(&format!("Fetching user {}...", id), cli.batch);
        let result = session.get_user(id).await?;
        finish_spinner(spinner, "Done");

        match result {
            Some((user, raw)) => {
                save_result(&cli.save, &raw)?;
                if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                    output_raw(&raw, &args.output);
                } else {
                    output_users(&[user], &args.output, cli.no_header);
                }
            }
            None => eprintln!("No response received from the API"),
        }
        return Ok(());
    }

    let filter = UserFilter {
        name: args.name.clone(),
        dept: args.dept.clone(),
        group: args.group.clone(),
        page: args.page,
        page_size: args.page_size,
    };

    let spinner = create_spinner("Fetching users...", cli.batch);
    let users = session.get_users(&filter, args.all).await?;
    finish_spinner(spinner, &format!("Found {} users", users.len()));

    if users.is_empty() {
        eprintln!("No users found");
        return Ok(());
    }
    save_result(&cli.save, &users)?;
    output_users(&users, &args.output, cli.no_header);
    Ok(())
}

/// Run the group list/get command
pub async fn run_group_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Group(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = args.id {
        let spinner = create_spinner(&format!("Fetching group {}...", id), cli.batch);
        let result = session.get_group(id).await?;
        finish_spinner(spinner, "Done");

        match result {
            Some((group, raw)) => {
                save_result(&cli.save, &raw)?;
                if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                    output_raw(&raw, &args.output);
                } else {
                    output_groups(&[group], &args.output, cli.no_header);
                }
            }
            None => eprintln!("No response received from the API"),
        }
        return Ok(());
    }

    let filter = SearchFilter {
        search: args.search.clone(),
        page: args.page,
        page_size: args.page_size,
    };

    let spinner = create_spinner("Fetching groups...", cli.batch);
    let groups = session.get_groups(&filter, args.all).await?;
    finish_spinner(spinner, &format!("Found {} groups", groups.len()));

    if groups.is_empty() {
        eprintln!("No groups found");
        return Ok(());
    }
    save_result(&cli.save, &groups)?;
    output_groups(&groups, &args.output, cli.no_header);
    Ok(())
}

/// Run the department list/get command
pub async fn run_department_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Department(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = args.id {
        let spinner = create_spinner(&format!("Fetching department {}...", id), cli.batch);
        let result = session.get_department(id).await?;
        finish_spinner(spinner, "Done");

        match result {
            Some((department, raw)) => {
                save_result(&cli.save, &raw)?;
                if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                    output_raw(&raw, &args.output);
                } else {
                    output_departments(&[department], &args.output, cli.no_header);
                }
            }
            None => eprintln!("No response received from the API"),
        }
        return Ok(());
    }

    let filter = SearchFilter {
        search: args.search.clone(),
        page: args.page,
        page_size: args.page_size,
    };

    let spinner = create_spinner("Fetching departments...", cli.batch);
    let departments = session.get_departments(&filter, args.all).await?;
    finish_spinner(spinner, &format!("Found {} departments", departments.len()));

    if departments.is_empty() {
        eprintln!("No departments found");
        return Ok(());
    }
    save_result(&cli.save, &departments)?;
    output_departments(&departments, &args.output, cli.no_header);
    Ok(())
}

/// Run the user create command
pub async fn run_create_user_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::User(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let payload = read_json_file(&args.file)?;
    let spinner = create_spinner("Creating user...", cli.batch);
    let result = session.create_user(payload).await?;
    finish_spinner(spinner, "Done");

    if let Some(value) = &result {
        save_result(&cli.save, value)?;
    }
    output_mutation(&result, &args.output);
    Ok(())
}

/// Run the user update command
pub async fn run_update_user_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::User(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let payload = read_json_file(&args.file)?;
    let spinner = create_spinner("Updating user...", cli.batch);
    let result = session.update_user(payload).await?;
    finish_spinner(spinner, "Done");

    if let Some(value) = &result {
        save_result(&cli.save, value)?;
    }
    output_mutation(&result, &args.output);
    Ok(())
}

/// Run the user delete command (bulk endpoint for 2+ IDs)
pub async fn run_delete_user_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::User(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let prompt = format!("Delete {} user(s) {:?}?", args.ids.len(), args.ids);
    if !confirm_action(&prompt, cli.batch, args.yes)? {
        eprintln!("Aborted");
        return Ok(());
    }

    let spinner = create_spinner("Deleting users...", cli.batch);
    let result = if args.ids.len() == 1 {
        session.delete_user(args.ids[0]).await?
    } else {
        session.bulk_delete_users(&args.ids).await?
    };
    finish_spinner(spinner, "Done");

    match result {
        Some(_) => println!("Deleted {} user(s)", args.ids.len()),
        None => eprintln!("No response received from the API"),
    }
    Ok(())
}
