//! Traffic forwarding module - VPN credentials, GRE tunnels and virtual IPs

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_vpn_credential_command, run_delete_vpn_credential_command, run_gre_info_command,
    run_update_vpn_credential_command, run_vip_command, run_vpn_credential_command,
};
pub use models::{GreTunnelInfo, VipFilter, VirtualIp, VpnCredential, VpnCredentialFilter};
