// Tests for `AssetSource` against a temporary asset directory.
#![allow(clippy::unwrap_used)]

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use satlink_api::assets::{DETAIL_FILE, LIST_FILE, POSITIONS_FILE};
use satlink_api::{AssetSource, Error};

fn bundle() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(LIST_FILE),
        r#"[
            {"id": 1, "active": false, "name": "Starship-1"},
            {"id": 2, "active": true, "name": "Dragon-1"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(DETAIL_FILE),
        r#"[
            {"id": 1, "cost_per_launch": 7200000, "first_flight": "2021-12-01", "height": 118, "mass": 1167000},
            {"id": 2, "name": "Dragon One", "cost_per_launch": 5000000, "first_flight": "2010-06-04", "height": 8, "mass": 4200}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(POSITIONS_FILE),
        r#"{"list": [
            {"id": "1", "positions": [{"posX": 0.86, "posY": 0.64}, {"posX": 0.1, "posY": 0.2}]},
            {"id": "2", "positions": []}
        ]}"#,
    )
    .unwrap();
    dir
}

#[tokio::test]
async fn lists_the_catalogue() {
    let dir = bundle();
    let source = AssetSource::new(dir.path());

    let list = source.list_satellites().await.unwrap().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].name.as_deref(), Some("Dragon-1"));
}

#[tokio::test]
async fn detail_borrows_name_from_catalogue() {
    let dir = bundle();
    let source = AssetSource::new(dir.path());

    let detail = source.get_satellite("1").await.unwrap().unwrap();
    assert_eq!(detail.name.as_deref(), Some("Starship-1"));
    assert_eq!(detail.cost_per_launch, Some(7_200_000));

    let named = source.get_satellite("2").await.unwrap().unwrap();
    assert_eq!(named.name.as_deref(), Some("Dragon One"));
}

#[tokio::test]
async fn unknown_id_is_absent() {
    let dir = bundle();
    let source = AssetSource::new(dir.path());

    assert!(source.get_satellite("9").await.unwrap().is_none());
    assert!(source.get_positions("9").await.unwrap().is_none());
}

#[tokio::test]
async fn positions_match_string_ids() {
    let dir = bundle();
    let source = AssetSource::new(dir.path());

    let set = source.get_positions("1").await.unwrap().unwrap();
    assert_eq!(set.positions.unwrap().len(), 2);

    let empty = source.get_positions("2").await.unwrap().unwrap();
    assert_eq!(empty.positions, Some(Vec::new()));
}

#[tokio::test]
async fn missing_files_read_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let source = AssetSource::new(dir.path());

    assert!(source.list_satellites().await.unwrap().is_none());
    assert!(source.get_satellite("1").await.unwrap().is_none());
    assert!(source.get_positions("1").await.unwrap().is_none());
}

#[tokio::test]
async fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(POSITIONS_FILE), "{ broken").unwrap();
    let source = AssetSource::new(dir.path());

    let err = source.get_positions("1").await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
}
