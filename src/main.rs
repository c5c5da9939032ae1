use std::process;
use std::time::Duration;

use clap::{CommandFactory, Parser};

use check_mongodb_mms::settings::{CheckConfig, DEFAULT_THRESHOLD};
use check_mongodb_mms::{logging, probe, CheckResult};
use mms_client::DEFAULT_ENDPOINT;

/// Exit code for a usage error, same as clap's.
const USAGE_EXIT_CODE: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "check_mongodb_mms")]
#[command(about = "Nagios check for MongoDB hosts monitored by MMS / Ops Manager")]
#[command(after_help = "-w and -c support the standard nagios threshold formats.\n\
See https://nagios-plugins.org/doc/guidelines.html#THRESHOLDFORMAT for more details.")]
struct Args {
    /// The MMS/Ops Manager group ID that contains the server
    #[arg(short = 'g', long = "groupid")]
    group_id: Option<String>,

    /// hostname:port of the mongod/s to check
    #[arg(short = 'H', long, default_value = "")]
    hostname: String,

    /// Metric to query (no metric means check last ping age in seconds)
    #[arg(short, long)]
    metric: Option<String>,

    /// Hostname and port of the MMS/Ops Manager service
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    server: String,

    /// Warning threshold for the ping age or metric
    #[arg(short, long, default_value = DEFAULT_THRESHOLD, allow_hyphen_values = true)]
    warning: String,

    /// Critical threshold for the ping age or metric
    #[arg(short, long, default_value = DEFAULT_THRESHOLD, allow_hyphen_values = true)]
    critical: String,

    /// Connection timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,

    /// Seconds after which the latest metric point is considered stale
    #[arg(short = 'a', long = "maxage", default_value_t = 180)]
    max_age: u64,
}

impl Args {
    fn into_config(self) -> Option<CheckConfig> {
        let group_id = self.group_id.filter(|g| !g.is_empty())?;
        if self.server.is_empty() {
            return None;
        }

        let mut config = CheckConfig::new(self.server, group_id, self.hostname)
            .with_thresholds(self.warning, self.critical)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_max_age(Duration::from_secs(self.max_age));
        config.metric = self.metric.filter(|m| !m.is_empty());
        Some(config)
    }
}

fn main() {
    logging::init();

    let Some(config) = Args::parse().into_config() else {
        let _ = Args::command().print_help();
        println!();
        process::exit(USAGE_EXIT_CODE);
    };

    let result = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime.block_on(probe::run(&config)),
        Err(e) => CheckResult::unknown(format!("Failed to start async runtime. Error: {}", e)),
    };

    println!("{}", result);
    process::exit(result.exit_code());
}
