//! Nagios service definitions for every host in a group.

use std::fmt::{self, Write};

use tracing::warn;

use mms_types::Host;

/// Command name the generated services invoke.
pub const CHECK_COMMAND: &str = "check_mongodb_mms";

/// Render one `define service` block per host.
///
/// The check command receives the group id and the host's
/// `hostname:port` as its two arguments. Hosts the API reports without a
/// hostname are skipped.
pub fn service_definitions(group_id: &str, hosts: &[Host]) -> String {
    let mut out = String::new();

    for host in hosts {
        let Some(hostname) = host.hostname.as_deref() else {
            warn!(host = %host.id, "skipping host without a hostname");
            continue;
        };
        let address = host.address().unwrap_or_else(|| hostname.to_string());

        if let Err(e) = write_service(&mut out, group_id, hostname, &address) {
            warn!(host = %host.id, error = %e, "failed to render service definition");
        }
    }

    out
}

fn write_service(out: &mut impl Write, group_id: &str, hostname: &str, address: &str) -> fmt::Result {
    writeln!(out, "define service {{")?;
    writeln!(out, "    use                  generic-service")?;
    writeln!(out, "    host_name            {}", hostname)?;
    writeln!(out, "    service_description  MongoDB {} last ping", address)?;
    writeln!(out, "    check_command        {}!{}!{}", CHECK_COMMAND, group_id, address)?;
    writeln!(out, "}}")?;
    writeln!(out)
}
