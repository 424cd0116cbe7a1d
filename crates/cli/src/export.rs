//! Fixture export: GeoJSON documents and polars tables.
//!
//! Output format follows the file extension: `.json`/`.geojson` write a
//! FeatureCollection, `.csv`/`.parquet` write one row per fixture.

use anyhow::{bail, Context, Result};
use geofixture::api::{Coord, CoordSeq, FixtureSample, Geometry, Polygon, Ring};
use polars::prelude::*;
use serde_json::{json, Value};
use std::fs::File;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    GeoJson,
    Csv,
    Parquet,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") | Some("geojson") => Ok(Format::GeoJson),
            Some("csv") => Ok(Format::Csv),
            Some("parquet") => Ok(Format::Parquet),
            other => bail!(
                "unsupported output extension {:?} (use .json, .geojson, .csv or .parquet)",
                other.unwrap_or("")
            ),
        }
    }
}

fn position(c: &Coord) -> Value {
    match c.z {
        Some(z) => json!([c.x(), c.y(), z]),
        None => json!([c.x(), c.y()]),
    }
}

fn positions<'a>(cs: impl IntoIterator<Item = &'a Coord>) -> Value {
    Value::Array(cs.into_iter().map(position).collect())
}

fn line(s: &CoordSeq) -> Value {
    positions(s.coords())
}

fn ring(r: &Ring) -> Value {
    positions(r.coords())
}

fn polygon_rings(p: &Polygon) -> Value {
    let mut rings = vec![ring(p.exterior())];
    rings.extend(p.holes().iter().map(ring));
    Value::Array(rings)
}

/// GeoJSON geometry object. Rings export as closed `LineString`s; M is dropped.
pub fn to_geojson(g: &Geometry) -> Value {
    match g {
        Geometry::Point(c) => json!({"type": "Point", "coordinates": position(c)}),
        Geometry::LineString(s) => json!({"type": "LineString", "coordinates": line(s)}),
        Geometry::LinearRing(r) => json!({"type": "LineString", "coordinates": ring(r)}),
        Geometry::Polygon(p) => json!({"type": "Polygon", "coordinates": polygon_rings(p)}),
        Geometry::MultiPoint(v) => json!({"type": "MultiPoint", "coordinates": positions(v)}),
        Geometry::MultiLineString(v) => json!({
            "type": "MultiLineString",
            "coordinates": v.iter().map(line).collect::<Vec<_>>()
        }),
        Geometry::MultiPolygon(v) => json!({
            "type": "MultiPolygon",
            "coordinates": v.iter().map(polygon_rings).collect::<Vec<_>>()
        }),
        Geometry::Collection(v) => json!({
            "type": "GeometryCollection",
            "geometries": v.iter().map(to_geojson).collect::<Vec<_>>()
        }),
    }
}

pub fn feature_collection(samples: &[FixtureSample<Geometry>]) -> Value {
    let features: Vec<Value> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            json!({
                "type": "Feature",
                "geometry": to_geojson(&s.value),
                "properties": {
                    "index": i,
                    "kind": s.value.kind().name(),
                    "replay_seed": s.replay.seed,
                    "replay_index": s.replay.index,
                }
            })
        })
        .collect();
    json!({"type": "FeatureCollection", "features": features})
}

/// One row per fixture: kind, replay index, coordinate count, envelope, GeoJSON text.
pub fn to_frame(samples: &[FixtureSample<Geometry>]) -> Result<DataFrame> {
    let envs: Vec<_> = samples.iter().map(|s| s.value.envelope()).collect();
    let df = df!(
        "index" => (0..samples.len() as u64).collect::<Vec<u64>>(),
        "kind" => samples.iter().map(|s| s.value.kind().name()).collect::<Vec<_>>(),
        "replay_index" => samples.iter().map(|s| s.replay.index).collect::<Vec<u64>>(),
        "coords" => samples.iter().map(|s| s.value.num_coords() as u64).collect::<Vec<u64>>(),
        "min_x" => envs.iter().map(|e| e.map(|b| b.min_x())).collect::<Vec<Option<f64>>>(),
        "max_x" => envs.iter().map(|e| e.map(|b| b.max_x())).collect::<Vec<Option<f64>>>(),
        "min_y" => envs.iter().map(|e| e.map(|b| b.min_y())).collect::<Vec<Option<f64>>>(),
        "max_y" => envs.iter().map(|e| e.map(|b| b.max_y())).collect::<Vec<Option<f64>>>(),
        "geojson" => samples
            .iter()
            .map(|s| to_geojson(&s.value).to_string())
            .collect::<Vec<String>>()
    )?;
    Ok(df)
}

/// Write `samples` to `path` in the format its extension names.
pub fn write_samples(path: &Path, samples: &[FixtureSample<Geometry>]) -> Result<Format> {
    let format = Format::from_path(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match format {
        Format::GeoJson => {
            let doc = feature_collection(samples);
            std::fs::write(path, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Csv => {
            let mut df = to_frame(samples)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file).finish(&mut df)?;
        }
        Format::Parquet => {
            let mut df = to_frame(samples)?;
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(file).finish(&mut df)?;
        }
    }
    Ok(format)
}

/// Per-kind row counts of a written CSV or Parquet fixture table.
pub fn kind_counts(path: &Path) -> Result<DataFrame> {
    let lf = match Format::from_path(path)? {
        Format::Csv => LazyCsvReader::new(path).with_has_header(true).finish()?,
        Format::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        Format::GeoJson => bail!("kind counts need a .csv or .parquet table"),
    };
    let df = lf
        .group_by([col("kind")])
        .agg([len().alias("n")])
        .sort(["kind"], SortMultipleOptions::default())
        .collect()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geofixture::api::{FixtureStream, Generator, PolygonSpec, ReplayToken, RingSpec};
    use tempfile::tempdir;

    fn samples(n: usize) -> Vec<FixtureSample<Geometry>> {
        let spec = PolygonSpec::new().holes(1);
        let mut stream = FixtureStream::new(spec, 3);
        (0..n)
            .map(|_| {
                let s = stream.generate_next().unwrap();
                FixtureSample {
                    value: Geometry::Polygon(s.value),
                    replay: s.replay,
                }
            })
            .collect()
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.GeoJSON")).unwrap(), Format::GeoJson);
        assert_eq!(Format::from_path(Path::new("x.parquet")).unwrap(), Format::Parquet);
        assert!(Format::from_path(Path::new("x.wkt")).is_err());
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn polygon_geojson_lists_exterior_then_holes() {
        let s = samples(1);
        let v = to_geojson(&s[0].value);
        assert_eq!(v["type"], "Polygon");
        let rings = v["coordinates"].as_array().unwrap();
        assert_eq!(rings.len(), 2);
        let ext = rings[0].as_array().unwrap();
        assert_eq!(ext.first(), ext.last());
    }

    #[test]
    fn ring_exports_as_closed_line_string() {
        let r = RingSpec::new()
            .vertices(4)
            .generate_seeded(ReplayToken { seed: 0, index: 0 })
            .unwrap();
        let v = to_geojson(&Geometry::LinearRing(r));
        assert_eq!(v["type"], "LineString");
        assert_eq!(v["coordinates"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn feature_properties_carry_replay_token() {
        let fc = feature_collection(&samples(3));
        let f = &fc["features"][2];
        assert_eq!(f["properties"]["index"], 2);
        assert_eq!(f["properties"]["replay_seed"], 3);
        assert_eq!(f["properties"]["replay_index"], 2);
        assert_eq!(f["properties"]["kind"], "Polygon");
    }

    #[test]
    fn table_round_trips_through_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/fixtures.csv");
        let s = samples(4);
        assert_eq!(write_samples(&path, &s).unwrap(), Format::Csv);
        let counts = kind_counts(&path).unwrap();
        assert_eq!(counts.height(), 1);
        let n = counts.column("n").unwrap().u32().unwrap().get(0);
        assert_eq!(n, Some(4));
    }

    #[test]
    fn frame_has_expected_columns() {
        let df = to_frame(&samples(2)).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(
            names,
            [
                "index",
                "kind",
                "replay_index",
                "coords",
                "min_x",
                "max_x",
                "min_y",
                "max_y",
                "geojson"
            ]
        );
        assert_eq!(df.height(), 2);
    }
}
