// src/browser.rs
//! The browser seam. `Session` is what the fetch loop drives; `ChromeSession`
//! implements it over a headless Chrome tab. Tests script their own `Session`.

use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::config::options::LaunchConfig;
use crate::error::{ScrapeError, SessionError};

const SCROLL_JS: &str = "window.scrollTo(0, document.body.scrollHeight);";

/// Chrome flags for container/CI hosts.
const CHROME_ARGS: [&str; 3] = ["--no-sandbox", "--disable-dev-shm-usage", "--disable-gpu"];

/// Long settle and backoff pauses must not look like a dead browser.
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

pub trait Session {
    fn navigate(&mut self, url: &str) -> Result<(), SessionError>;
    fn current_url(&mut self) -> String;
    fn page_source(&mut self) -> Result<String, SessionError>;
    fn scroll_to_bottom(&mut self) -> Result<(), SessionError>;

    /// Block until `selector` matches at least one element, or `timeout` passes.
    fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<(), SessionError>;

    /// PNG bytes of the current viewport.
    fn screenshot(&mut self) -> Result<Vec<u8>, SessionError>;

    fn title(&mut self) -> Option<String> {
        None
    }
}

fn driver(e: impl std::fmt::Display) -> SessionError {
    SessionError::Driver(e.to_string())
}

/// One Chrome process with one tab. Dropping it shuts the browser down.
pub struct ChromeSession {
    tab: Arc<Tab>,
    _browser: Browser,
}

impl ChromeSession {
    pub fn launch(cfg: &LaunchConfig) -> Result<Self, ScrapeError> {
        let args: Vec<&OsStr> = CHROME_ARGS.iter().map(|a| OsStr::new(*a)).collect();
        let opts = LaunchOptions::default_builder()
            .headless(cfg.headless)
            .window_size(Some(cfg.window_size))
            .idle_browser_timeout(IDLE_TIMEOUT)
            .args(args)
            .build()
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        let browser = Browser::new(opts).map_err(|e| ScrapeError::Launch(e.to_string()))?;
        let tab = browser.new_tab().map_err(|e| ScrapeError::Launch(e.to_string()))?;
        tab.set_user_agent(&cfg.user_agent, None, None)
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        logf!("Browser session started (headless={})", cfg.headless);
        Ok(Self { tab, _browser: browser })
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        logf!("Browser session closed");
    }
}

impl Session for ChromeSession {
    fn navigate(&mut self, url: &str) -> Result<(), SessionError> {
        self.tab.navigate_to(url).map_err(driver)?;
        self.tab.wait_until_navigated().map_err(driver)?;
        Ok(())
    }

    fn current_url(&mut self) -> String {
        self.tab.get_url()
    }

    fn page_source(&mut self) -> Result<String, SessionError> {
        self.tab.get_content().map_err(driver)
    }

    fn scroll_to_bottom(&mut self) -> Result<(), SessionError> {
        self.tab.evaluate(SCROLL_JS, false).map_err(driver)?;
        Ok(())
    }

    fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<(), SessionError> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map(|_| ())
            .map_err(|_| SessionError::Timeout { selector: s!(selector), waited: timeout })
    }

    fn screenshot(&mut self) -> Result<Vec<u8>, SessionError> {
        self.tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(driver)
    }

    fn title(&mut self) -> Option<String> {
        self.tab.get_title().ok()
    }
}
