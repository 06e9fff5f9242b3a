// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two invocation forms share the same positional list:
//   site-inspector URL [URL...]
//   site-inspector BASE_URL STATIC_SITE_DIR
//
// Which form was meant is decided later by the resolver (src/resolve/),
// because it depends on whether the second argument is a directory on disk.
// =============================================================================

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::browser::{Engine, SessionOptions};
use crate::harvest::{HarvestOptions, PageErrorPolicy};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code.
// A missing positional argument is a usage error: clap prints the usage
// text to stderr and exits with code 2.
#[derive(Parser, Debug)]
#[command(
    name = "site-inspector",
    version,
    about = "Open web pages in a headless browser and list every link they contain",
    override_usage = "site-inspector [OPTIONS] URL [URL...]\n       \
                      site-inspector [OPTIONS] BASE_URL STATIC_SITE_DIR",
    long_about = "site-inspector loads each page in a real browser, collects the target of every \
                  link resolved against the page's base URI, and prints the sorted, deduplicated \
                  set. Given a base URL and a directory, it visits the pretty URL of every \
                  index.html in that directory."
)]
pub struct Cli {
    /// URLs to visit, or a base URL followed by a static site directory
    #[arg(required = true, value_name = "URL")]
    pub targets: Vec<String>,

    /// Run the browser without a visible window
    ///
    /// Use --headless=false to watch the pages load.
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub headless: bool,

    /// What to do when a page fails to load or its links can't be read
    #[arg(long, value_enum, default_value_t = PageErrorPolicy::Abort)]
    pub on_page_error: PageErrorPolicy,

    /// Which engine loads the pages
    #[arg(long, value_enum, default_value_t = Engine::Chrome)]
    pub engine: Engine,

    /// Path to the Chrome/Chromium executable (auto-detected when omitted)
    #[arg(long, env = "CHROME", value_name = "PATH")]
    pub chrome_path: Option<PathBuf>,

    /// Launch Chrome with --no-sandbox (needed in most containers)
    #[arg(long)]
    pub no_sandbox: bool,

    /// Print the report as JSON instead of one link per line
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Options handed to whichever browser session gets started
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            headless: self.headless,
            chrome_path: self.chrome_path.clone(),
            no_sandbox: self.no_sandbox,
        }
    }

    pub fn harvest_options(&self) -> HarvestOptions {
        HarvestOptions {
            on_page_error: self.on_page_error,
            ..HarvestOptions::default()
        }
    }
}
