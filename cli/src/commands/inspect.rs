use anyhow::Result;
use histmap::{century_label, Dataset, DiskSource, DatasetSource, LayerCatalog, RangeController, LAYERS_FILE};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::InspectArgs) -> Result<()> {
    log::info!("[inspect] loading dataset from {}", args.dataset.display());
    let source = DiskSource::new(&args.dataset);
    let dataset = Dataset::read_from_source(&source)?;

    let counts = dataset.counts();
    println!("features: {} ({} top-level)", counts.features, dataset.len());
    println!("markers:  {}", counts.markers);
    println!("routes:   {}", counts.routes);

    match RangeController::from_dataset(&dataset) {
        Some(ctl) => println!(
            "years:    {} - {} (century {} - {})",
            ctl.min_year(),
            ctl.max_year(),
            century_label(ctl.min_year()),
            century_label(ctl.max_year()),
        ),
        None => println!("years:    undated"),
    }

    if source.has(LAYERS_FILE) {
        let catalog = LayerCatalog::read_from_source(&source)?;
        let default = catalog.default_layer().map(|l| l.name.as_str());
        println!("layers:   {}", catalog.len());
        for layer in catalog.layers() {
            let marker = if Some(layer.name.as_str()) == default { "*" } else { " " };
            println!("  {marker} {} ({})", layer.name, layer.plain_attribution());
        }
    } else {
        log::warn!("[inspect] no {LAYERS_FILE} in {}", args.dataset.display());
    }

    Ok(())
}
