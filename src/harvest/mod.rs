// src/harvest/mod.rs
// =============================================================================
// This module visits every URL with one browser session and gathers the
// links found on each page.
//
// How it works:
// 1. For each URL, in order: navigate, extract links, print the status
// 2. Append that page's links to one big list
// 3. When every page is done, sort the list and remove duplicates
//
// Pages are visited strictly one after another. Nothing is printed to
// stdout from here: the caller prints the report once the whole harvest
// succeeded, so a run that fails halfway leaves stdout empty.
// =============================================================================

mod normalize;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use tracing::{info, warn};

use crate::browser::BrowserSession;

pub use normalize::sort_dedup;

// What to do when one page can't be loaded or read (--on-page-error)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageErrorPolicy {
    /// Stop the whole run at the first failing page
    Abort,
    /// Log the failure and carry on with the remaining pages
    Skip,
}

#[derive(Debug, Clone)]
pub struct HarvestOptions {
    pub on_page_error: PageErrorPolicy,
    /// Progress lines are only logged when there are more URLs than this
    pub progress_after: usize,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            on_page_error: PageErrorPolicy::Abort,
            progress_after: 100,
        }
    }
}

/// A page that failed under `PageErrorPolicy::Skip`.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedPage {
    pub url: String,
    pub error: String,
}

/// Everything a finished harvest produced.
#[derive(Debug, Clone, Serialize)]
pub struct HarvestReport {
    /// Number of pages whose links made it into `links`
    pub pages: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedPage>,
    /// Sorted, without duplicates
    pub links: Vec<String>,
}

// Visits every URL with `session` and returns the merged link set
//
// The session is closed before returning, whether the harvest succeeded or
// not. If both the harvest and the close fail, the harvest error wins.
pub async fn harvest<S: BrowserSession>(
    mut session: S,
    urls: &[String],
    options: &HarvestOptions,
) -> Result<HarvestReport> {
    let outcome = visit_all(&mut session, urls, options).await;
    let closed = session.close().await;

    let report = outcome?;
    closed?;
    Ok(report)
}

async fn visit_all<S: BrowserSession>(
    session: &mut S,
    urls: &[String],
    options: &HarvestOptions,
) -> Result<HarvestReport> {
    let mut all = Vec::new();
    let mut pages = 0;
    let mut skipped = Vec::new();
    let start = Instant::now();

    for (i, url) in urls.iter().enumerate() {
        if urls.len() > options.progress_after {
            info!(
                "Loading links from page {} of {} ({:?} since start)...",
                i + 1,
                urls.len(),
                truncate_to_millis(start.elapsed())
            );
        }

        match links_from(session, url).await {
            Ok(links) => {
                all.extend(links);
                pages += 1;
            }
            Err(e) => match options.on_page_error {
                PageErrorPolicy::Abort => return Err(e),
                PageErrorPolicy::Skip => {
                    warn!("skipping {:#}", e);
                    skipped.push(SkippedPage {
                        url: url.clone(),
                        error: format!("{:#}", e),
                    });
                }
            },
        }
    }

    let links = sort_dedup(all);
    info!("Found {} unique links", links.len());
    if !skipped.is_empty() {
        warn!("{} of {} pages were skipped", skipped.len(), urls.len());
    }

    Ok(HarvestReport {
        pages,
        skipped,
        links,
    })
}

// Opens one URL and reads its links, printing the status line on stderr
async fn links_from<S: BrowserSession>(session: &mut S, url: &str) -> Result<Vec<String>> {
    let status = session.navigate(url).await.context(url.to_string())?;
    let links = session.extract_links().await.context(url.to_string())?;

    match status {
        Some(status) => eprintln!("GET {}\n{}", url, status),
        None => eprintln!("GET {}\n(no response)", url),
    }

    Ok(links)
}

fn truncate_to_millis(elapsed: Duration) -> Duration {
    Duration::from_millis(elapsed.as_millis() as u64)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why close the session before looking at the result?
//    - `?` would return early and skip the close
//    - Storing the outcome first means the browser is shut down on the
//      success path and on every error path alike
//
// 2. What does .context(url) do?
//    - It wraps the error with the URL as an outer message
//    - Printing with {:#} shows both: "https://x.test/: net::ERR_..."
//
// 3. Why Rc<RefCell<...>> in the tests?
//    - harvest() takes the session by value, so the test can't look inside
//      it afterwards. The shared Journal is how the test sees what happened
// -----------------------------------------------------------------------------
