use std::time::Duration;

use anyhow::{Context, Result};

pub const ENV_URL: &str = "SUPABASE_URL";
pub const ENV_KEY: &str = "SUPABASE_KEY";
pub const ENV_TABLE: &str = "HISTMAP_VISITS_TABLE";
pub const ENV_RPC: &str = "HISTMAP_VISITS_RPC";
pub const ENV_TIMEOUT: &str = "HISTMAP_HTTP_TIMEOUT_SECS";

const DEFAULT_TABLE: &str = "visits";
const DEFAULT_RPC: &str = "visits_by_country";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the hosted analytics backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Service key, sent as both `apikey` and bearer token.
    pub key: String,
    /// Table that receives one row per visit.
    pub table: String,
    /// Stored procedure returning `[{country, count}]`.
    pub rpc: String,
    pub timeout: Duration,
}

impl AnalyticsConfig {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            key: key.into(),
            table: DEFAULT_TABLE.into(),
            rpc: DEFAULT_RPC.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`; `SUPABASE_URL` and `SUPABASE_KEY` are required.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let url = get(ENV_URL).with_context(|| format!("Missing environment variable {ENV_URL}"))?;
        let key = get(ENV_KEY).with_context(|| format!("Missing environment variable {ENV_KEY}"))?;

        let mut config = Self::new(url, key);
        if let Some(table) = get(ENV_TABLE) { config.table = table; }
        if let Some(rpc) = get(ENV_RPC) { config.rpc = rpc; }
        if let Some(secs) = get(ENV_TIMEOUT) {
            let secs: u64 = secs.trim().parse()
                .with_context(|| format!("{ENV_TIMEOUT} must be a whole number of seconds, got {secs:?}"))?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// REST endpoint for the visits table.
    pub fn table_url(&self) -> String { format!("{}/rest/v1/{}", self.url, self.table) }

    /// REST endpoint for the aggregation procedure.
    pub fn rpc_url(&self) -> String { format!("{}/rest/v1/rpc/{}", self.url, self.rpc) }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_required_and_defaults() {
        let config = AnalyticsConfig::from_lookup(lookup(&[(ENV_URL, "https://x.supabase.co/"), (ENV_KEY, "k")])).unwrap();
        assert_eq!(config.url, "https://x.supabase.co");
        assert_eq!(config.table_url(), "https://x.supabase.co/rest/v1/visits");
        assert_eq!(config.rpc_url(), "https://x.supabase.co/rest/v1/rpc/visits_by_country");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn overrides_optional_values() {
        let config = AnalyticsConfig::from_lookup(lookup(&[
            (ENV_URL, "https://x"), (ENV_KEY, "k"),
            (ENV_TABLE, "page_views"), (ENV_RPC, "count_views"), (ENV_TIMEOUT, "3"),
        ])).unwrap();
        assert_eq!(config.table, "page_views");
        assert_eq!(config.rpc, "count_views");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn missing_or_bad_values_are_errors() {
        let err = AnalyticsConfig::from_lookup(lookup(&[(ENV_KEY, "k")])).unwrap_err();
        assert!(err.to_string().contains(ENV_URL));

        let err = AnalyticsConfig::from_lookup(lookup(&[(ENV_URL, "https://x"), (ENV_KEY, " ")])).unwrap_err();
        assert!(err.to_string().contains(ENV_KEY));

        let err = AnalyticsConfig::from_lookup(lookup(&[(ENV_URL, "https://x"), (ENV_KEY, "k"), (ENV_TIMEOUT, "soon")])).unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT));
    }
}
