// src/core/net.rs

// Blocking HTTP with the retry-forever policy: timeout/connection-class
// errors are logged and retried after a fixed pause, so `fetch` only ever
// errors for non-network conditions (malformed URL and the like). A page
// that answers with a non-2xx status still comes back as text; whether its
// content is usable is the parser's problem, not a network one.

use std::error::Error;
use std::io::Read;
use std::thread;
use std::time::Duration;

use ureq::Agent;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, RETRY_PAUSE_SECS, USER_AGENT};

/// Fetch seam used by the parser and the listing acquirer. Tests substitute
/// canned pages through this.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// ureq-backed fetcher carrying the fixed browser UA and request timeout.
pub struct Client {
    agent: Agent,
}

impl Client {
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
            .user_agent(USER_AGENT)
            .http_status_as_error(false)
            .build();
        Self { agent: Agent::new_with_config(config) }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for Client {
    fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        loop {
            match self.agent.get(url).call() {
                Ok(resp) => {
                    let mut text = String::new();
                    match resp.into_body().into_reader().read_to_string(&mut text) {
                        Ok(_) => return Ok(text),
                        Err(e) => {
                            loge!("{e}, user URL: {url}");
                            thread::sleep(Duration::from_secs(RETRY_PAUSE_SECS));
                        }
                    }
                }
                Err(e) if is_transient(&e) => {
                    loge!("{e}, user URL: {url}");
                    thread::sleep(Duration::from_secs(RETRY_PAUSE_SECS));
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Timeout/connection-class errors get the retry treatment; everything
/// else propagates.
fn is_transient(e: &ureq::Error) -> bool {
    matches!(
        e,
        ureq::Error::Timeout(_)
            | ureq::Error::Io(_)
            | ureq::Error::ConnectionFailed
            | ureq::Error::HostNotFound
    )
}
