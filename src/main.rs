// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (usage errors exit with 2)
// 2. Resolve the arguments into the list of URLs to visit
// 3. Start one browser session and harvest links from every URL
// 4. Print the sorted, deduplicated links to stdout
// 5. Exit with 0 on success, 1 on any error
// =============================================================================

mod browser;
mod cli;
mod harvest;
mod logging;
mod resolve;

use anyhow::Result;
use clap::Parser;

use browser::{ChromeSession, Engine, HttpSession};
use cli::Cli;
use harvest::HarvestReport;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run(cli).await {
        // {:#} prints the whole context chain on one line
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let urls = resolve::resolve_targets(&cli.targets)?;

    let session_options = cli.session_options();
    let harvest_options = cli.harvest_options();

    let report = match cli.engine {
        Engine::Chrome => {
            let session = ChromeSession::launch(&session_options).await?;
            harvest::harvest(session, &urls, &harvest_options).await?
        }
        Engine::Http => {
            let session = HttpSession::new(&session_options)?;
            harvest::harvest(session, &urls, &harvest_options).await?
        }
    };

    print_report(&report, cli.json)
}

// Prints the links either one per line or as JSON
fn print_report(report: &HarvestReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        for link in &report.links {
            println!("{}", link);
        }
    }
    Ok(())
}
