use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use check_mongodb_mms::{credentials, logging, nagios};
use mms_client::{MmsClient, DEFAULT_ENDPOINT};

#[derive(Parser, Debug)]
#[command(name = "mms-nagios-config")]
#[command(about = "Print Nagios service definitions for every host in an MMS / Ops Manager group")]
struct Args {
    /// The MMS/Ops Manager group ID to list
    #[arg(short = 'g', long = "groupid")]
    group_id: String,

    /// Hostname and port of the MMS/Ops Manager service
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    server: String,

    /// Connection timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let credentials = credentials::load_from_home()?;
    let client = MmsClient::builder()
        .endpoint(args.server)
        .credentials(credentials.username, credentials.apikey)
        .timeout(Duration::from_secs(args.timeout))
        .build()?;

    let hosts = client.get_all_hosts(&args.group_id).await?;
    tracing::debug!(count = hosts.len(), "hosts listed");

    print!("{}", nagios::service_definitions(&args.group_id, &hosts));
    Ok(())
}
