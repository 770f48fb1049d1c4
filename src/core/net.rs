// src/core/net.rs
// Blocking GET against the animals data API.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::{API_KEY_HEADER, QUERY_PARAM, USER_AGENT};
use crate::config::ApiOptions;
use crate::error::Result;
use crate::record::Record;
use crate::source::RecordSource;

/// Records straight from the remote API.
pub struct ApiSource {
    url: String,
    key: String,
    client: Client,
}

impl ApiSource {
    pub fn new(opts: &ApiOptions) -> Result<Self> {
        let (url, key) = opts.credentials()?;
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { url: s!(url), key: s!(key), client })
    }
}

impl RecordSource for ApiSource {
    fn fetch(&self, query: &str) -> Result<Vec<Record>> {
        debug!(url = %self.url, %query, "GET");
        let records: Vec<Record> = self
            .client
            .get(&self.url)
            .header(API_KEY_HEADER, &self.key)
            .query(&[(QUERY_PARAM, query)])
            .send()?
            .error_for_status()?
            .json()?;
        debug!(count = records.len(), "records received");
        Ok(records)
    }
}
