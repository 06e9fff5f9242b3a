// src/browser/chrome.rs
// =============================================================================
// The default engine: a real Chrome/Chromium driven over the DevTools
// protocol with chromiumoxide.
//
// One browser process, one tab, reused for every URL. chromiumoxide splits
// the connection in two halves:
// - `Browser` / `Page`: what we call methods on
// - `Handler`: a stream that must be polled for anything to happen
// We poll the handler on a background tokio task for the whole session.
//
// No timeout is put around the session. Individual navigations are still
// bounded by chromiumoxide's own request timeout.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use chromiumoxide::cdp::js_protocol::runtime::EvaluateParams;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{BrowserSession, NavigationStatus, SessionOptions};

// Runs inside the page. `document.links` is every <a>/<area> with an href;
// each target is resolved against the document's base URI.
const EXTRACT_LINKS_JS: &str =
    "Array.from(document.links, (link) => new URL(link.href, document.baseURI).href)";

/// A headless Chrome with a single tab.
pub struct ChromeSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl ChromeSession {
    /// Starts the browser and opens the tab that every visit will reuse.
    pub async fn launch(options: &SessionOptions) -> Result<Self> {
        let mut builder = BrowserConfig::builder();
        if !options.headless {
            builder = builder.with_head();
        }
        if options.no_sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(path) = &options.chrome_path {
            builder = builder.chrome_executable(path);
        }
        let config = builder
            .build()
            .map_err(|e| anyhow!("invalid browser configuration: {}", e))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch browser")?;

        // The handler stream ends once the browser connection closes
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("browser handler error: {}", e);
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                handler.abort();
                return Err(e).context("failed to open browser tab");
            }
        };

        Ok(Self {
            browser,
            page,
            handler,
        })
    }
}

impl BrowserSession for ChromeSession {
    async fn navigate(&mut self, url: &str) -> Result<Option<NavigationStatus>> {
        self.page.goto(url).await?;

        // The main document's request, if the navigation produced one
        let request = self.page.wait_for_navigation_response().await?;

        Ok(request.and_then(|request| {
            request.response.as_ref().map(|response| NavigationStatus {
                code: u16::try_from(response.status).unwrap_or_default(),
                text: response.status_text.clone(),
            })
        }))
    }

    async fn extract_links(&mut self) -> Result<Vec<String>> {
        let script = EvaluateParams::builder()
            .expression(EXTRACT_LINKS_JS)
            .return_by_value(true)
            .build()
            .map_err(|e| anyhow!("invalid link extraction script: {}", e))?;

        let links = self
            .page
            .evaluate_expression(script)
            .await?
            .into_value::<Vec<String>>()
            .context("link extraction returned something other than a list of strings")?;

        Ok(links)
    }

    async fn close(mut self) -> Result<()> {
        let closed = self.browser.close().await;
        self.handler.abort();
        closed.context("failed to close browser")?;
        Ok(())
    }
}
