use std::time::Duration;
use tempfile::TempDir;
use hookmenu::config::constants::WEBHOOKS_KEY;
use hookmenu::enums::storage_area::StorageArea;
use hookmenu::services::json_file_storage::JsonFileStorage;
use hookmenu::traits::storage_port::StoragePort;

#[tokio::test]
async fn writes_from_another_instance_are_announced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let watcher = JsonFileStorage::open(&path).unwrap();
    watcher.start_watching().unwrap();
    let mut changes = watcher.subscribe();

    let writer = JsonFileStorage::open(&path).unwrap();
    writer
        .set(StorageArea::Sync, WEBHOOKS_KEY, r#"[{"name":"a"}]"#.to_string())
        .await
        .unwrap();

    let change = tokio::time::timeout(Duration::from_secs(5), changes.recv())
        .await
        .expect("no change announced")
        .unwrap();
    assert!(change.touches(StorageArea::Sync, WEBHOOKS_KEY));
}
