// src/config/consts.rs

// Data API
pub const API_URL_ENV: &str = "API_URL";
pub const API_KEY_ENV: &str = "API_KEY";
pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const QUERY_PARAM: &str = "name";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("animals_web/", env!("CARGO_PKG_VERSION"));

// Page
pub const DEFAULT_TEMPLATE: &str = "animals_template.html";
pub const DEFAULT_OUTPUT: &str = "animals.html";
pub const SUBTITLE_PLACEHOLDER: &str = "__REPLACE_SUBTITLE_FILTERED_BY_SKIN_TYPE__";
pub const CARDS_PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";
