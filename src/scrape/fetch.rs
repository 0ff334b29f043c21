// src/scrape/fetch.rs
//! One results page, one URL: navigate, settle, check for a block page, scroll,
//! wait for cards, list them. Timeouts and driver errors are retried with
//! randomized backoff; a block page ends the loop at once.

use super::snapshot::Snapshots;
use super::Cursor;
use crate::browser::Session;
use crate::config::options::FetchPolicy;
use crate::error::SessionError;
use crate::specs::Site;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Outer HTML of each listing card.
    Success(Vec<String>),
    Blocked,
    Empty,
    /// Retry budget spent; carries the last error.
    Failed(SessionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub outcome: FetchOutcome,
    pub attempts: u32,
}

enum Attempt {
    Cards(Vec<String>),
    Blocked,
    Empty,
}

pub fn fetch_page(
    session: &mut dyn Session,
    site: &dyn Site,
    url: &str,
    cursor: &Cursor,
    policy: &FetchPolicy,
    snaps: &Snapshots,
) -> FetchReport {
    let budget = policy.retries.max(1);
    let mut last_err = SessionError::Driver(s!("no attempt made"));

    for attempt in 1..=budget {
        let cur = cursor.clone().attempt(attempt);
        logf!("{} (attempt {attempt}/{budget}): {url}", cur);

        match try_once(session, site, url, &cur, policy, snaps) {
            Ok(Attempt::Cards(cards)) => {
                logf!("Found {} job cards on {}", cards.len(), cur);
                return FetchReport { outcome: FetchOutcome::Success(cards), attempts: attempt };
            }
            Ok(Attempt::Blocked) => {
                loge!("Blocked by CAPTCHA or robot-check on {}", cur);
                snaps.save_screenshot("block", &cur, session);
                return FetchReport { outcome: FetchOutcome::Blocked, attempts: attempt };
            }
            Ok(Attempt::Empty) => {
                logw!("No job cards found on {}", cur);
                snaps.save_screenshot("no_cards", &cur, session);
                return FetchReport { outcome: FetchOutcome::Empty, attempts: attempt };
            }
            Err(e) => {
                match &e {
                    SessionError::Timeout { .. } => {
                        logw!("Timeout on {}: {e}", cur);
                        snaps.save_screenshot("timeout", &cur, session);
                    }
                    SessionError::Driver(_) => loge!("Driver error on {}: {e}", cur),
                }
                last_err = e;
                if attempt < budget {
                    policy.backoff.sleep();
                }
            }
        }
    }

    loge!("Failed to load {} after {budget} attempts", cursor);
    FetchReport { outcome: FetchOutcome::Failed(last_err), attempts: budget }
}

fn try_once(
    session: &mut dyn Session,
    site: &dyn Site,
    url: &str,
    cur: &Cursor,
    policy: &FetchPolicy,
    snaps: &Snapshots,
) -> Result<Attempt, SessionError> {
    session.navigate(url)?;
    policy.settle.sleep();

    let landed = session.current_url();
    if let Some(title) = session.title() {
        logd!("Page title: {title}");
    }
    logd!("Current URL: {landed}");

    let html = session.page_source()?;
    snaps.save_html("page_source", cur, &html);
    if site.is_blocked(&landed, &html) {
        return Ok(Attempt::Blocked);
    }

    for _ in 0..policy.scroll_passes {
        session.scroll_to_bottom()?;
        policy.scroll_pause.sleep();
    }

    session.wait_for(site.card_selector(), policy.wait_timeout)?;

    let html = session.page_source()?;
    let cards = site
        .list_cards(&html)
        .map_err(|e| SessionError::Driver(e.to_string()))?;

    if cards.is_empty() { Ok(Attempt::Empty) } else { Ok(Attempt::Cards(cards)) }
}
