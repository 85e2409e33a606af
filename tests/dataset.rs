use std::{collections::HashMap, sync::Arc};

use histmap::{
    Dataset, DatasetCounts, DatasetSource, DiskSource, ItemId, LayerCatalog, MemSource, Temporal,
    TemporalExtent, DATASET_FILE, LAYERS_FILE,
};

/// A small viewer dataset covering the shapes seen in the wild: numeric and
/// string years, date spans, string and numeric ids, nested sub-polygons.
const MAP_DATA: &str = r##"{
  "polygons": [
    {
      "id": 1,
      "name": "Señorío de Texcoco",
      "color": "#d97706",
      "year": 1431,
      "positions": [[19.51, -98.88], [19.52, -98.86], [19.50, -98.85]],
      "markers": [
        { "id": "m1", "position": [19.51, -98.87], "title": "Palacio", "type": "palace", "year": "1431" },
        { "id": "m2", "position": [19.50, -98.86], "title": "Mercado" }
      ],
      "routes": [
        { "id": "r1", "name": "Calzada", "color": "#000", "positions": [[19.5, -98.9], [19.4, -99.1]],
          "startDate": "1428-01-01", "endDate": "1521-08-13" }
      ],
      "subPolygons": [
        { "id": "1a", "name": "Barrio", "positions": [[19.505, -98.875]], "year": 1500 }
      ]
    },
    {
      "id": "2",
      "name": "Virreinato",
      "startDate": "1535-01-01",
      "endDate": "1821-09-27",
      "positions": [[19.43, -99.13]]
    }
  ]
}"##;

const LAYERS_DATA: &str = r#"{
  "Layers": [
    { "name": "Satélite", "url": "https://tiles.example/sat/{z}/{x}/{y}.png",
      "attribution": "<a href=\"https://example.org\">Example</a> imagery" },
    { "name": "OpenStreetMap", "url": "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
      "attribution": "&copy; <a href=\"https://osm.org\">OpenStreetMap</a>" }
  ]
}"#;

fn mem_source() -> MemSource {
    let mut files: HashMap<String, Arc<[u8]>> = HashMap::new();
    files.insert(DATASET_FILE.to_string(), Arc::from(MAP_DATA.as_bytes()));
    files.insert(LAYERS_FILE.to_string(), Arc::from(LAYERS_DATA.as_bytes()));
    MemSource::new(files)
}

#[test]
fn loads_dataset_from_memory() {
    let dataset = Dataset::read_from_source(&mem_source()).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.counts(), DatasetCounts { features: 3, markers: 2, routes: 1 });

    let texcoco = dataset.get(&ItemId::from("1")).unwrap();
    assert_eq!(texcoco.name, "Señorío de Texcoco");
    assert_eq!(texcoco.temporal_extent(), TemporalExtent::Year(1431));
    assert_eq!(texcoco.markers[0].temporal_extent(), TemporalExtent::Year(1431));
    assert_eq!(texcoco.markers[1].temporal_extent(), TemporalExtent::Unbounded);
    assert_eq!(texcoco.routes[0].temporal_extent(), TemporalExtent::Span { start: 1428, end: 1521 });
    assert_eq!(texcoco.sub_polygons[0].id.as_str(), "1a");

    let virreinato = dataset.get(&ItemId::from("2")).unwrap();
    assert_eq!(virreinato.temporal_extent(), TemporalExtent::Span { start: 1535, end: 1821 });
}

#[test]
fn loads_layers_from_memory() {
    let layers = LayerCatalog::read_from_source(&mem_source()).unwrap();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers.default_layer().unwrap().name, "OpenStreetMap");
    assert_eq!(layers.get("Satélite").unwrap().plain_attribution(), "Example imagery");
}

#[test]
fn loads_dataset_from_disk_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(DATASET_FILE), MAP_DATA).unwrap();

    let src = DiskSource::new(dir.path());
    assert!(src.has(DATASET_FILE));
    assert!(!src.has(LAYERS_FILE));

    let dataset = Dataset::read_from_dir(dir.path()).unwrap();
    let again = Dataset::from_json_bytes(&dataset.to_json_bytes().unwrap()).unwrap();
    assert_eq!(again.counts(), dataset.counts());
    assert_eq!(
        again.get(&ItemId::from("1")).unwrap().routes[0].temporal_extent(),
        TemporalExtent::Span { start: 1428, end: 1521 },
    );
}

#[test]
fn missing_dataset_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::read_from_dir(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains(DATASET_FILE));
}

#[test]
fn duplicate_feature_ids_are_rejected_across_levels() {
    let text = r#"{"polygons": [
        {"id": 1, "name": "A", "subPolygons": [{"id": 2, "name": "A.1"}]},
        {"id": 2, "name": "B"}
    ]}"#;
    let src = MemSource::new(HashMap::from([
        (DATASET_FILE.to_string(), Arc::<[u8]>::from(text.as_bytes())),
    ]));
    let err = Dataset::read_from_source(&src).unwrap_err();
    assert!(format!("{err:#}").contains("Duplicate feature id '2'"));
}
