//! Traffic forwarding output formatters

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::zia::traffic::{GreTunnelInfo, VirtualIp, VpnCredential};

/// Output VPN credentials in the specified format
pub fn output_vpn_credentials(
    credentials: &[VpnCredential],
    format: &OutputFormat,
    no_header: bool,
) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["ID", "TYPE", "FQDN", "IP", "LOCATION", "COMMENTS"]);
            }
            for credential in credentials {
                table.add_row(vec![
                    &credential.id.to_string(),
                    credential.credential_type(),
                    credential.fqdn(),
                    credential.ip_address(),
                    credential.location_name(),
                    credential.comments(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("ID,TYPE,FQDN,IP,LOCATION,COMMENTS");
            }
            for credential in credentials {
                println!(
                    "{},{},{},{},{},{}",
                    credential.id,
                    escape_csv(credential.credential_type()),
                    escape_csv(credential.fqdn()),
                    escape_csv(credential.ip_address()),
                    escape_csv(credential.location_name()),
                    escape_csv(credential.comments())
                );
            }
        }
        OutputFormat::Json => print_json(&credentials),
        OutputFormat::Yaml => print_yaml(&credentials),
    }
}

/// Output GRE tunnel provisioning info in the specified format
pub fn output_gre_info(info: &[GreTunnelInfo], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec![
                    "SOURCE IP",
                    "ENABLED",
                    "TUNNEL IP",
                    "PRIMARY GW",
                    "SECONDARY GW",
                    "TUN ID",
                ]);
            }
            for entry in info {
                table.add_row(vec![
                    entry.ip_address(),
                    &entry.gre_enabled().to_string(),
                    entry.gre_tunnel_ip.as_deref().unwrap_or(""),
                    entry.primary_gw(),
                    entry.secondary_gw(),
                    &entry.tun_id.map(|t| t.to_string()).unwrap_or_default(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("SOURCE_IP,ENABLED,TUNNEL_IP,PRIMARY_GW,SECONDARY_GW,TUN_ID");
            }
            for entry in info {
                println!(
                    "{},{},{},{},{},{}",
                    escape_csv(entry.ip_address()),
                    entry.gre_enabled(),
                    escape_csv(entry.gre_tunnel_ip.as_deref().unwrap_or("")),
                    escape_csv(entry.primary_gw()),
                    escape_csv(entry.secondary_gw()),
                    entry.tun_id.map(|t| t.to_string()).unwrap_or_default()
                );
            }
        }
        OutputFormat::Json => print_json(&info),
        OutputFormat::Yaml => print_yaml(&info),
    }
}

/// Output public service edge virtual IPs in the specified format
pub fn output_vips(vips: &[VirtualIp], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["DATACENTER", "REGION", "CITY", "GRE IPS", "VPN IPS"]);
            }
            for vip in vips {
                table.add_row(vec![
                    vip.data_center(),
                    vip.region(),
                    vip.city(),
                    &vip.gre_ips().join(", "),
                    &vip.vpn_ips().join(", "),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("DATACENTER,REGION,CITY,GRE_IPS,VPN_IPS");
            }
            for vip in vips {
                println!(
                    "{},{},{},{},{}",
                    escape_csv(vip.data_center()),
                    escape_csv(vip.region()),
                    escape_csv(vip.city()),
                    escape_csv(&vip.gre_ips().join(", ")),
                    escape_csv(&vip.vpn_ips().join(", "))
                );
            }
        }
        OutputFormat::Json => print_json(&vips),
        OutputFormat::Yaml => print_yaml(&vips),
    }
}
