use std::sync::Mutex;

use anyhow::{anyhow, Result};

use super::record::{VisitRecord, VisitSummary};

/// Durable store for page views. Aggregation is the backend's job.
pub trait AnalyticsBackend: Send + Sync {
    fn record_visit(&self, visit: &VisitRecord) -> Result<()>;
    fn visit_summary(&self) -> Result<VisitSummary>;
}

/// Visits kept in process memory, for tests and local runs.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    visits: Mutex<Vec<VisitRecord>>,
}

impl MemoryBackend {
    pub fn new() -> Self { Self::default() }

    /// Snapshot of everything recorded so far.
    pub fn visits(&self) -> Vec<VisitRecord> {
        self.visits.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl AnalyticsBackend for MemoryBackend {
    fn record_visit(&self, visit: &VisitRecord) -> Result<()> {
        self.visits.lock()
            .map_err(|_| anyhow!("visit store poisoned"))?
            .push(visit.clone());
        Ok(())
    }

    fn visit_summary(&self) -> Result<VisitSummary> {
        let visits = self.visits.lock().map_err(|_| anyhow!("visit store poisoned"))?;
        Ok(VisitSummary::aggregate(visits.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_summarizes() {
        let backend = MemoryBackend::new();
        backend.record_visit(&VisitRecord::new("1.1.1.1", "México", None)).unwrap();
        backend.record_visit(&VisitRecord::new("1.1.1.2", "México", None)).unwrap();

        assert_eq!(backend.visits().len(), 2);
        let summary = backend.visit_summary().unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.countries[0].country, "México");
    }
}
