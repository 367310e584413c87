// src/directory/client.rs

use std::time::Duration;

use tracing::debug;

use crate::config::consts::{HTTP_TIMEOUT_SECS, PER_PAGE};

use super::{Brewery, FetchError};

const USER_AGENT: &str = concat!("brew_browse/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the brewery directory. Cheap to clone behind an
/// `Arc`; fetches are expected to run on a worker thread.
pub struct DirectoryClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// One GET against the directory. `None` filters are omitted from
    /// the query; the page cap is always applied. Returns the records
    /// in response order.
    pub fn fetch(
        &self,
        region: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Brewery>, FetchError> {
        let url = format!("{}?{}", self.base_url, build_query(region, category));
        debug!("GET {}", url);

        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let records: Vec<Brewery> = resp.json()?;
        debug!("Directory answered with {} record(s)", records.len());
        Ok(records)
    }
}

/// Assemble the query string. Filter values are percent-encoded, so
/// "New York" travels as `New%20York`; the fixed category vocabulary
/// never needs escaping but gets it anyway.
fn build_query(region: Option<&str>, category: Option<&str>) -> String {
    let mut params: Vec<String> = Vec::with_capacity(3);

    if let Some(region) = region {
        params.push(format!("by_state={}", urlencoding::encode(region)));
    }
    if let Some(category) = category {
        params.push(format!("by_type={}", urlencoding::encode(category)));
    }
    params.push(format!("per_page={}", PER_PAGE));

    params.join("&")
}
