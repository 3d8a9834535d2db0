//! Verify that a set of Salesforce credentials can log in.
//!
//! Prints a JSON report on stdout and always exits 0; the report's
//! `success` field carries the outcome.
//!
//! ```sh
//! export SF_USERNAME='ops@example.org' SF_PASSWORD='...' SF_SECURITY_TOKEN='...'
//! cargo run --bin test-sf-connection -- --domain https://myorg.lightning.force.com/
//! ```

use clap::Parser;
use volunteer_probe::cli::{ConnectionArgs, LogArgs};
use volunteer_probe::{bootstrap, init_logging, ProbeConfig};

#[derive(Parser, Debug)]
#[command(name = "test-sf-connection")]
#[command(about = "Log in to a Salesforce org and print a JSON connection report")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(flatten)]
    log: LogArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log.verbose) {
        eprintln!("Warning: {e}");
    }

    let config = ProbeConfig::from(cli.connection);
    let report = bootstrap(&config).await;
    println!("{}", report.to_json_pretty());
}
