// src/browser/http.rs
// =============================================================================
// The browserless engine (--engine http).
//
// It fetches each page with a plain GET and parses the HTML itself. That's
// fast and needs nothing installed, but it runs no JavaScript: links that a
// page inserts at runtime are invisible here. Use the chrome engine for
// those sites.
//
// Like a browser, a 404 or 500 page is still a page: its status is reported
// and its links are extracted. Only transport failures are errors.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use url::Url;

use super::{extract_links, BrowserSession, NavigationStatus, SessionOptions};

// The page most recently loaded by `navigate`
struct LoadedPage {
    url: Url,
    body: String,
}

/// A browsing "session" backed by one shared HTTP client.
pub struct HttpSession {
    client: Client,
    current: Option<LoadedPage>,
}

impl HttpSession {
    /// Builds the HTTP client. The options only matter for Chrome, so they
    /// are accepted and ignored here.
    pub fn new(_options: &SessionOptions) -> Result<Self> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("site-inspector/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            client,
            current: None,
        })
    }
}

impl BrowserSession for HttpSession {
    async fn navigate(&mut self, url: &str) -> Result<Option<NavigationStatus>> {
        // Drop the previous page first so a failed load can't leave it behind
        self.current = None;

        let response = self.client.get(url).send().await?;

        let status = response.status();
        let final_url = response.url().clone();
        let body = response.text().await?;

        self.current = Some(LoadedPage {
            url: final_url,
            body,
        });

        Ok(Some(NavigationStatus {
            code: status.as_u16(),
            text: status.canonical_reason().unwrap_or_default().to_string(),
        }))
    }

    async fn extract_links(&mut self) -> Result<Vec<String>> {
        let page = self
            .current
            .as_ref()
            .ok_or_else(|| anyhow!("no page has been loaded"))?;

        Ok(extract_links(&page.body, &page.url))
    }

    async fn close(self) -> Result<()> {
        Ok(())
    }
}
