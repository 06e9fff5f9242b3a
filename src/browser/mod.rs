// src/browser/mod.rs
// =============================================================================
// This module owns everything that actually loads pages.
//
// The harvester (src/harvest/) never talks to Chrome directly. It only needs
// three things from a browser session:
// - navigate to a URL and report the HTTP status
// - hand back every link target on the current page, already absolute
// - shut down cleanly
//
// Those live in the `BrowserSession` trait. Two engines implement it:
// - chrome: a real Chromium driven over the DevTools protocol
// - http: a lightweight fallback that fetches with reqwest and parses with
//         scraper (no JavaScript, but no browser install needed either)
// =============================================================================

mod chrome;
mod html;
mod http;

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;

pub use chrome::ChromeSession;
pub use html::extract_links;
pub use http::HttpSession;

// Which engine loads the pages (--engine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Headless Chrome/Chromium via the DevTools protocol
    Chrome,
    /// Plain HTTP fetch + HTML parsing, no JavaScript
    Http,
}

/// Settings for starting a browser session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Run without a visible window
    pub headless: bool,
    /// Explicit browser executable, otherwise auto-detected
    pub chrome_path: Option<PathBuf>,
    /// Disable the Chromium sandbox
    pub no_sandbox: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            headless: true,
            chrome_path: None,
            no_sandbox: false,
        }
    }
}

/// HTTP status of the main document after a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStatus {
    pub code: u16,
    pub text: String,
}

impl fmt::Display for NavigationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.text)
    }
}

/// One browsing context that is reused for every page we visit.
///
/// Calls are strictly sequential: each method finishes before the next one
/// starts, and `extract_links` always reads the page loaded by the most
/// recent successful `navigate`.
#[allow(async_fn_in_trait)]
pub trait BrowserSession {
    /// Loads `url` in the session's tab.
    ///
    /// Returns `None` when the page was loaded without an HTTP response
    /// (e.g. `about:blank`).
    async fn navigate(&mut self, url: &str) -> Result<Option<NavigationStatus>>;

    /// Every link target on the current page, resolved against the page's
    /// base URI, in document order.
    async fn extract_links(&mut self) -> Result<Vec<String>>;

    /// Releases the browser. Called exactly once, on every exit path.
    async fn close(self) -> Result<()>;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait here?
//    - The harvester only cares about "navigate, then give me links"
//    - A trait lets Chrome, plain HTTP, and the fake session in the
//      harvester tests all plug into the same loop
//
// 2. Why `async fn` in a trait?
//    - Page loads are network I/O, so every method awaits something
//    - We only use the trait through generics (`S: BrowserSession`), never
//      as `dyn BrowserSession`, so no boxing is needed
//
// 3. Why does close() take `self` and not `&mut self`?
//    - Closing consumes the session: after close() there's nothing left to
//      call, and the compiler enforces that for us
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let status = NavigationStatus {
            code: 404,
            text: "Not Found".to_string(),
        };
        assert_eq!(status.to_string(), "404 Not Found");
    }

    #[test]
    fn test_default_options_are_headless() {
        assert!(SessionOptions::default().headless);
    }
}
