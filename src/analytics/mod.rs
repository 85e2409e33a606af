mod backend;
mod config;
mod handlers;
mod record;
#[cfg(feature = "analytics")]
mod supabase;

pub use backend::{AnalyticsBackend, MemoryBackend};
pub use config::AnalyticsConfig;
pub use handlers::{get_visits, track_visit, HandlerResponse, VisitRequest, UNKNOWN_IP};
pub use record::{CountryCount, VisitRecord, VisitSummary, UNKNOWN_COUNTRY};
#[cfg(feature = "analytics")]
pub use supabase::SupabaseBackend;
