use std::time::Duration;

/// Outcome of resolving one Wikipedia page to a company website.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub url: String,
    pub status_code: Option<u16>,
    pub response_time: Duration,
    pub website: Option<String>,
    pub error: Option<String>,
}

impl ExtractionResult {
    pub fn new(url: String, website: String) -> Self {
        Self {
            url,
            status_code: None,
            response_time: Duration::from_secs(0),
            website: Some(website),
            error: None,
        }
    }

    pub fn with_error(url: String, error: String) -> Self {
        Self {
            url,
            status_code: None,
            response_time: Duration::from_secs(0),
            website: None,
            error: Some(error),
        }
    }

    pub fn is_found(&self) -> bool {
        self.website.is_some()
    }

    /// The website, or an empty string for any failure.
    pub fn website_or_empty(&self) -> &str {
        self.website.as_deref().unwrap_or("")
    }
}
