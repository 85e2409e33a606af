use std::collections::HashMap;

use serde_json::{json, Value};

use super::{
    backend::AnalyticsBackend,
    record::{VisitRecord, UNKNOWN_COUNTRY},
};

/// Placeholder when no client address can be determined.
pub const UNKNOWN_IP: &str = "unknown";

/// The parts of an incoming HTTP request the handlers look at.
/// Header names are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct VisitRequest {
    headers: HashMap<String, String>,
}

impl VisitRequest {
    pub fn new<K, V>(headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let headers = headers.into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into()))
            .collect();
        Self { headers }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase())
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Client address: the hosting platform's connection header, else the
    /// first hop of `x-forwarded-for`.
    pub fn client_ip(&self) -> &str {
        self.header("x-nf-client-connection-ip")
            .or_else(|| {
                self.header("x-forwarded-for")
                    .and_then(|v| v.split(',').next())
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
            })
            .unwrap_or(UNKNOWN_IP)
    }

    pub fn country(&self) -> &str { self.header("x-country").unwrap_or(UNKNOWN_COUNTRY) }

    pub fn city(&self) -> Option<&str> { self.header("x-city") }
}

/// Status code and JSON body returned by a handler.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: Value,
}

impl HandlerResponse {
    fn ok(body: Value) -> Self { Self { status_code: 200, body } }

    fn error(err: &anyhow::Error) -> Self {
        Self { status_code: 500, body: json!({ "error": format!("{err:#}") }) }
    }

    #[inline] pub fn is_success(&self) -> bool { (200..300).contains(&self.status_code) }
}

/// Record one page view for the requesting client.
pub fn track_visit(request: &VisitRequest, backend: &dyn AnalyticsBackend) -> HandlerResponse {
    let visit = VisitRecord::new(request.client_ip(), request.country(), request.city().map(str::to_string));
    match backend.record_visit(&visit) {
        Ok(()) => HandlerResponse::ok(json!({ "success": true })),
        Err(err) => {
            log::warn!("[analytics] failed to record visit: {err:#}");
            HandlerResponse::error(&err)
        }
    }
}

/// Total visits and the per-country breakdown.
pub fn get_visits(backend: &dyn AnalyticsBackend) -> HandlerResponse {
    match backend.visit_summary() {
        Ok(summary) => HandlerResponse::ok(json!(summary)),
        Err(err) => {
            log::warn!("[analytics] failed to fetch visit summary: {err:#}");
            HandlerResponse::error(&err)
        }
    }
}
