// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub page: PageOptions,
    /// Animal name to search for; prompted when absent.
    pub query: Option<String>,
    /// Preselected skin type; prompted (or auto-selected) when absent.
    pub skin_type: Option<String>,
    /// Read records from this JSON file instead of the API.
    pub data: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub url: Option<String>,
    pub key: Option<String>,
    pub timeout: Duration,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            url: None,
            key: None,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ApiOptions {
    /// Defaults, with url/key taken from `API_URL` / `API_KEY` when set.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            url: var(API_URL_ENV),
            key: var(API_KEY_ENV),
            ..Self::default()
        }
    }

    /// Endpoint and key, or a `Config` error naming what is missing.
    pub fn credentials(&self) -> Result<(&str, &str)> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| Error::Config(format!("API url (set {API_URL_ENV} or --api-url)")))?;
        let key = self
            .key
            .as_deref()
            .ok_or_else(|| Error::Config(format!("API key (set {API_KEY_ENV} or --api-key)")))?;
        Ok((url, key))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
