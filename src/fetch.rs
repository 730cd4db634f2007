use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::ACCEPT_LANGUAGE;
use tracing::{debug, info};

use crate::error::Result;
use crate::settings::Settings;

/// Turns a URL into a page body. Implemented over HTTP by [`HttpFetcher`]; tests
/// plug in canned pages.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let timeout = (settings.timeout_secs > 0).then(|| Duration::from_secs(settings.timeout_secs));
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(timeout)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let start = Instant::now();
        let body = self
            .client
            .get(url)
            // Labels like "Genres:" only appear in the English layout.
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()?
            .error_for_status()?
            .text()?;
        info!(
            "Fetched {} ({} bytes) in {}ms",
            url,
            body.len(),
            start.elapsed().as_millis()
        );
        Ok(body)
    }
}
