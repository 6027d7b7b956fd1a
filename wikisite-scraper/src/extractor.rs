use crate::error::Result;
use crate::infobox::InfoboxQuery;
use crate::result::ExtractionResult;
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Called after each page with its position in the batch and its result.
pub type ProgressCallback = Arc<dyn Fn(usize, &ExtractionResult) + Send + Sync>;

const USER_AGENT: &str = "Wikisite/0.1 (https://github.com/trapdoorsec/wikisite)";

struct FetchedPage {
    status_code: u16,
    body: String,
    response_time: Duration,
}

/// Fetches Wikipedia pages one at a time and reads the website row of each infobox.
pub struct Extractor {
    client: Client,
    query: InfoboxQuery,
    progress_callback: Option<ProgressCallback>,
}

impl Extractor {
    /// An extractor with no request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            query: InfoboxQuery::website(),
            progress_callback: None,
        })
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Resolve every URL in order. The output always has one entry per input.
    pub async fn extract_all(&self, urls: &[String]) -> Vec<ExtractionResult> {
        info!("Extracting websites from {} pages", urls.len());

        let mut results = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            let result = self.extract(url).await;

            if let Some(ref callback) = self.progress_callback {
                callback(index, &result);
            }

            results.push(result);
        }

        let found = results.iter().filter(|r| r.is_found()).count();
        info!("Extraction complete. {}/{} websites found", found, results.len());
        results
    }

    /// Resolve a single URL. Failures are recorded in the result, never returned.
    pub async fn extract(&self, url: &str) -> ExtractionResult {
        let page = match self.fetch_page(url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Fetch failed for {}: {}", url, e);
                return ExtractionResult::with_error(url.to_string(), e.to_string());
            }
        };

        let mut result = match self.query.extract(&page.body) {
            Ok(website) => ExtractionResult::new(url.to_string(), website),
            Err(e) => {
                warn!("No website for {} (status {}): {}", url, page.status_code, e);
                ExtractionResult::with_error(url.to_string(), e.to_string())
            }
        };
        result.status_code = Some(page.status_code);
        result.response_time = page.response_time;
        result
    }

    /// Fetch `url` and return the website link from its infobox.
    pub async fn fetch_website(&self, url: &str) -> Result<String> {
        let page = self.fetch_page(url).await?;
        self.query.extract(&page.body)
    }

    async fn fetch_page(&self, url: &str) -> Result<FetchedPage> {
        debug!("Fetching {}", url);

        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let status_code = response.status().as_u16();
        let body = response.text().await?;
        let response_time = start.elapsed();

        debug!("{} -> {} ({} bytes in {:?})", url, status_code, body.len(), response_time);

        Ok(FetchedPage {
            status_code,
            body,
            response_time,
        })
    }
}
