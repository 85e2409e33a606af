use anyhow::{bail, Result};
use histmap::{get_visits, track_visit, HandlerResponse, SupabaseBackend, VisitRequest};

use crate::cli::{Cli, TrackVisitArgs};

fn finish(resp: HandlerResponse) -> Result<()> {
    if !resp.is_success() {
        bail!("analytics backend returned {}: {}", resp.status_code, resp.body);
    }
    println!("{}", serde_json::to_string_pretty(&resp.body)?);
    Ok(())
}

pub fn track(_cli: &Cli, args: &TrackVisitArgs) -> Result<()> {
    let backend = SupabaseBackend::from_env()?;

    let headers = [
        ("x-nf-client-connection-ip", &args.ip),
        ("x-country", &args.country),
        ("x-city", &args.city),
    ];
    let request = VisitRequest::new(
        headers.into_iter().filter_map(|(k, v)| v.clone().map(|v| (k, v)))
    );

    log::info!("[track-visit] {} from {}", request.client_ip(), request.country());
    finish(track_visit(&request, &backend))
}

pub fn summary(_cli: &Cli) -> Result<()> {
    let backend = SupabaseBackend::from_env()?;
    finish(get_visits(&backend))
}
