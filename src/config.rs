use std::env;
use std::str::FromStr;

use crate::error::{ConsoleError, ConsoleResult};
use crate::view::Page;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:9090/api/v1/admin";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    /// No timeout unless configured.
    pub http_timeout_secs: Option<u64>,
    /// Fixed submitter recorded on new requests.
    pub submitter_id: i64,
    /// Officer offered for assignment from the urgent list and map popups.
    pub triage_officer_id: i64,
    pub start_page: Page,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout_secs: None,
            submitter_id: 5,
            triage_officer_id: 4,
            start_page: Page::Dashboard,
        }
    }
}

impl Config {
    pub fn from_env() -> ConsoleResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> ConsoleResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let api_base_url = lookup("CONSOLE_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let start_page = match lookup("CONSOLE_START_PAGE") {
            Some(raw) => Page::from_id(&raw).ok_or_else(|| {
                ConsoleError::Config(format!("CONSOLE_START_PAGE: unknown page '{}'", raw))
            })?,
            None => defaults.start_page,
        };

        Ok(Config {
            api_base_url,
            http_timeout_secs: parse_var::<_, u64>(&lookup, "CONSOLE_HTTP_TIMEOUT_SECS")?,
            submitter_id: parse_var::<_, i64>(&lookup, "CONSOLE_SUBMITTER_ID")?
                .unwrap_or(defaults.submitter_id),
            triage_officer_id: parse_var::<_, i64>(&lookup, "CONSOLE_TRIAGE_OFFICER_ID")?
                .unwrap_or(defaults.triage_officer_id),
            start_page,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> ConsoleResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConsoleError::Config(format!("{}: invalid value '{}'", key, raw))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.http_timeout_secs, None);
        assert_eq!(config.submitter_id, 5);
        assert_eq!(config.triage_officer_id, 4);
        assert_eq!(config.start_page, Page::Dashboard);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            ("CONSOLE_API_BASE_URL", "http://backend:8080/api/v1/admin/"),
            ("CONSOLE_HTTP_TIMEOUT_SECS", "15"),
            ("CONSOLE_SUBMITTER_ID", "9"),
            ("CONSOLE_START_PAGE", "inventory"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "http://backend:8080/api/v1/admin");
        assert_eq!(config.http_timeout_secs, Some(15));
        assert_eq!(config.submitter_id, 9);
        assert_eq!(config.start_page, Page::Inventory);
    }

    #[test]
    fn test_invalid_number_is_error() {
        let result = Config::from_lookup(lookup_from(&[("CONSOLE_SUBMITTER_ID", "five")]));
        assert!(matches!(result, Err(ConsoleError::Config(_))));
    }

    #[test]
    fn test_unknown_start_page_is_error() {
        let result = Config::from_lookup(lookup_from(&[("CONSOLE_START_PAGE", "settings")]));
        assert!(matches!(result, Err(ConsoleError::Config(_))));
    }
}
