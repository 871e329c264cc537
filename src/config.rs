use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LANGUAGE: &str = "C++";
pub const DEFAULT_OUTPUT_FILE: &str = "cards.txt";
pub const DEFAULT_BASE_URL: &str = "https://leetcode.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_ATTEMPTS: u32 = 5;
pub const DEFAULT_RETRY_DELAY_MILLIS: u64 = 500;

////////////////////////////////////////////////////////////////////////////////
////////////////////////////////////////////////////////////////////////////////
// Request headers
////////////////////////////////////////////////////////////////////////////////

pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";
pub const ACCEPT_CHARSET: &str = "utf-8,*;q=0.5";
pub const ACCEPT_ENCODING: &str = "gzip";
pub const ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7,zh-TW;q=0.6";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.141 Safari/537.36";

////////////////////////////////////////////////////////////////////////////////
////////////////////////////////////////////////////////////////////////////////
// Endpoints (relative to the base URL)
////////////////////////////////////////////////////////////////////////////////

pub const GRAPHQL_PATH: &str = "/graphql";
pub const ALL_PROBLEMS_PATH: &str = "/api/problems/all/";

pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

pub fn problem_set_path(problem_set: &str) -> String {
    format!("/api/problems/favorite_lists/{}/", problem_set)
}

pub fn user_list_path(list: &str) -> String {
    format!("/list/api/get_list/{}/", list)
}

/// Everything a single run needs to know that is not a problem reference.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Code template language, matched against a snippet's `lang` or `langSlug`
    pub language: String,
    pub output_file: PathBuf,
    pub base_url: String,
    /// Socket timeout applied to every request of the run
    pub timeout: Duration,
    /// Upper bound on attempts per request, at least 1
    pub attempts: u32,
    /// Pause after the n-th failed attempt is `n * retry_delay`
    pub retry_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            attempts: DEFAULT_ATTEMPTS,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MILLIS),
        }
    }
}
