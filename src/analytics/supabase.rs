use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder};

use super::{
    backend::AnalyticsBackend,
    config::AnalyticsConfig,
    record::{CountryCount, VisitRecord, VisitSummary},
};

/// Visits stored in a hosted Postgres behind a PostgREST API.
pub struct SupabaseBackend {
    client: Client,
    config: AnalyticsConfig,
}

impl SupabaseBackend {
    pub fn new(config: AnalyticsConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("histmap/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .context("build HTTP client")?;
        Ok(Self { client, config })
    }

    /// Backend configured from `SUPABASE_URL` / `SUPABASE_KEY`.
    pub fn from_env() -> Result<Self> { Self::new(AnalyticsConfig::from_env()?) }

    #[inline] pub fn config(&self) -> &AnalyticsConfig { &self.config }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.config.key)
            .bearer_auth(&self.config.key)
    }
}

impl AnalyticsBackend for SupabaseBackend {
    fn record_visit(&self, visit: &VisitRecord) -> Result<()> {
        let url = self.config.table_url();
        self.authorized(self.client.post(&url))
            .header("Prefer", "return=minimal")
            .json(&[visit])
            .send()
            .with_context(|| format!("POST {url}"))?
            .error_for_status()
            .with_context(|| format!("POST {url} returned error status"))?;

        log::info!("[analytics] recorded visit from {}", visit.country);
        Ok(())
    }

    fn visit_summary(&self) -> Result<VisitSummary> {
        let url = self.config.rpc_url();
        let rows: Vec<CountryCount> = self.authorized(self.client.post(&url))
            .json(&serde_json::json!({}))
            .send()
            .with_context(|| format!("POST {url}"))?
            .error_for_status()
            .with_context(|| format!("POST {url} returned error status"))?
            .json()
            .with_context(|| format!("decode visit counts from {url}"))?;

        log::debug!("[analytics] {} country rows", rows.len());
        Ok(VisitSummary::from_counts(rows))
    }
}
