//! ziactl - Main entry point

use clap::Parser;
use log::{debug, info};

use ziactl::cli::{
    Cli, Command, CreateResource, DeleteResource, ExportResource, GetResource, UpdateResource,
};
use ziactl::zia::{self, CredentialOverrides, CredentialResolver, ZiaClient, ZiaSession};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ziactl v{}", env!("CARGO_PKG_VERSION"));

    // Resolve credentials with fallback logic
    let resolver = CredentialResolver::load(cli.config.as_deref())?;
    let overrides = CredentialOverrides {
        host: cli.host.clone(),
        cloud: cli.cloud.clone(),
        username: cli.username.clone(),
        password: cli.password.clone(),
        api_key: cli.api_key.clone(),
    };
    let settings = resolver.resolve(&overrides)?;
    debug!("Connecting to {}", settings.host);

    let session = ZiaClient::new(settings).login().await?;

    let result = dispatch(&session, &cli).await;

    if result.is_ok() && cli.apply_after && cli.command.is_mutating() {
        match session.activate_changes().await {
            Ok(Some(status)) => info!("Activation status: {}", status.status()),
            Ok(None) => eprintln!("Activation received no response from the API"),
            Err(e) => {
                // Close the session before surfacing the activation failure
                if let Err(logout_err) = session.logout().await {
                    debug!("Logout failed: {}", logout_err);
                }
                return Err(Box::new(e) as Box<dyn std::error::Error>);
            }
        }
        return finish(session, result).await;
    }

    finish(session, result).await
}

/// Close the session, then surface the command result
async fn finish(
    session: ZiaSession,
    result: Result<(), Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = session.logout().await {
        debug!("Logout failed: {}", e);
    }
    result
}

/// Route a parsed command to its handler
async fn dispatch(
    session: &ZiaSession,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Location(_) => zia::run_location_command(session, cli).await,
            GetResource::User(_) => zia::run_user_command(session, cli).await,
            GetResource::Group(_) => zia::run_group_command(session, cli).await,
            GetResource::Department(_) => zia::run_department_command(session, cli).await,
            GetResource::VpnCredential(_) => zia::run_vpn_credential_command(session, cli).await,
            GetResource::Vip(_) => zia::run_vip_command(session, cli).await,
            GetResource::GreInfo(_) => zia::run_gre_info_command(session, cli).await,
            GetResource::AdminRole(_) => zia::run_admin_role_command(session, cli).await,
            GetResource::AdminUser(_) => zia::run_admin_user_command(session, cli).await,
            GetResource::Status(_) => zia::run_status_command(session, cli).await,
            GetResource::AuthUrls(_) => zia::run_auth_urls_command(session, cli).await,
        },
        Command::Create { resource } => match resource {
            CreateResource::Location(_) => zia::run_create_location_command(session, cli).await,
            CreateResource::Sublocations(_) => {
                zia::run_create_sublocations_command(session, cli).await
            }
            CreateResource::User(_) => zia::run_create_user_command(session, cli).await,
            CreateResource::AdminUser(_) => zia::run_create_admin_user_command(session, cli).await,
            CreateResource::VpnCredential(_) => {
                zia::run_create_vpn_credential_command(session, cli).await
            }
        },
        Command::Update { resource } => match resource {
            UpdateResource::Location(_) => zia::run_update_location_command(session, cli).await,
            UpdateResource::User(_) => zia::run_update_user_command(session, cli).await,
            UpdateResource::Users(_) => zia::run_update_users_command(session, cli).await,
            UpdateResource::AdminUser(_) => zia::run_update_admin_user_command(session, cli).await,
            UpdateResource::VpnCredential(_) => {
                zia::run_update_vpn_credential_command(session, cli).await
            }
            UpdateResource::AuthUrls(_) => zia::run_update_auth_urls_command(session, cli).await,
        },
        Command::Delete { resource } => match resource {
            DeleteResource::Location(_) => zia::run_delete_location_command(session, cli).await,
            DeleteResource::User(_) => zia::run_delete_user_command(session, cli).await,
            DeleteResource::VpnCredential(_) => {
                zia::run_delete_vpn_credential_command(session, cli).await
            }
            DeleteResource::AdminUser(_) => zia::run_delete_admin_user_command(session, cli).await,
        },
        Command::Audit { .. } => zia::run_audit_command(session, cli).await,
        Command::Activate => zia::run_activate_command(session, cli).await,
        Command::AssignGroups(_) => zia::run_assign_groups_command(session, cli).await,
        Command::Export { resource } => match resource {
            ExportResource::Locations(_) => zia::run_export_locations_command(session, cli).await,
        },
    }
}
