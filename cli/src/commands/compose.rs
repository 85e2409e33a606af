use anyhow::{anyhow, Context, Result};
use histmap::{
    camera_target, compose, write_json_file, CameraTarget, Dataset, ItemId, RangeController, Selection,
    YearRange,
};
use serde_json::{json, Value};

use crate::cli::{Cli, ComposeArgs};

fn camera_json(target: CameraTarget) -> Value {
    match target {
        CameraTarget::Reset { center, zoom } => json!({ "center": center, "zoom": zoom }),
        CameraTarget::Fit { bounds, padding, max_zoom } => json!({
            "bounds": [[bounds.min().y, bounds.min().x], [bounds.max().y, bounds.max().x]],
            "padding": padding,
            "maxZoom": max_zoom,
        }),
    }
}

/// Selection of the given ids in order; repeated ids are selected once.
fn select_ids(dataset: &Dataset, ids: &[String]) -> Result<Selection> {
    ids.iter().try_fold(Selection::new(), |sel, id| {
        let feature = dataset.get(&ItemId::new(id))
            .ok_or_else(|| anyhow!("Unknown feature id '{id}'"))?;
        Ok(sel.select(feature))
    })
}

pub fn run(_cli: &Cli, args: &ComposeArgs) -> Result<()> {
    let dataset = Dataset::read_from_dir(&args.dataset)?;

    let selection = if args.all {
        dataset.features().iter().cloned().collect::<Selection>()
    } else {
        select_ids(&dataset, &args.select)
            .with_context(|| format!("in {}", args.dataset.display()))?
    };

    let range = match (args.unbounded, RangeController::from_dataset(&dataset)) {
        (true, _) => YearRange::UNBOUNDED,
        (false, Some(ctl)) => ctl.normalize(args.from, args.to),
        (false, None) => YearRange::new(args.from, args.to),
    };

    log::info!(
        "[compose] {} selected, range {:?}..{:?}",
        selection.len(), range.start, range.end,
    );

    let view = compose(&selection, &range);
    let out = json!({
        "range": range,
        "selection": selection.ids().collect::<Vec<_>>(),
        "features": view.features,
        "markerCount": view.marker_count(),
        "routeCount": view.route_count(),
        "camera": camera_json(camera_target(&selection, &range)),
    });

    match &args.output {
        Some(path) => {
            write_json_file(path, &out, args.force)?;
            log::info!("[compose] wrote {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&out)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use histmap::Feature;

    use super::*;

    fn ids(sel: &Selection) -> Vec<&str> { sel.ids().map(ItemId::as_str).collect() }

    #[test]
    fn repeated_ids_stay_selected() {
        let dataset = Dataset::new(vec![Feature::new("a", "A"), Feature::new("b", "B")]);
        let args = ["a", "b", "a"].map(String::from);
        assert_eq!(ids(&select_ids(&dataset, &args).unwrap()), ["a", "b"]);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let dataset = Dataset::new(vec![Feature::new("a", "A")]);
        let err = select_ids(&dataset, &["z".to_string()]).unwrap_err();
        assert!(err.to_string().contains("'z'"));
    }
}
