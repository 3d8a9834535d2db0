//! Print Volunteer Job / Shift field metadata and a small data sample.
//!
//! ```sh
//! export SF_USERNAME='ops@example.org' SF_PASSWORD='...' SF_SECURITY_TOKEN='...'
//! cargo run --bin explore-sf-fields -- --domain https://myorg.lightning.force.com/
//! ```

use std::io::Write;

use clap::Parser;
use volunteer_probe::cli::{ConnectionArgs, LogArgs};
use volunteer_probe::{explore, init_logging, ProbeConfig};

#[derive(Parser, Debug)]
#[command(name = "explore-sf-fields")]
#[command(about = "Describe the Volunteers objects and print sample jobs with their recent shifts")]
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
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = explore(&config, &mut stdout).await {
        let _ = writeln!(stdout, "❌ Error: {e}");
    }
}
