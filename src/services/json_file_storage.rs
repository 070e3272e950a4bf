use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use async_trait::async_trait;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::broadcast;
use crate::config::constants::STORAGE_EVENT_CAPACITY;
use crate::enums::storage_area::StorageArea;
use crate::errors::{HookmenuError, HookmenuResult};
use crate::structs::storage::storage_change::StorageChange;
use crate::traits::storage_port::StoragePort;

type StorageDocument = BTreeMap<StorageArea, BTreeMap<String, String>>;

/// Storage backed by a single JSON file, shared by every process that points
/// at the same path.
///
/// With [`JsonFileStorage::start_watching`] edits made by other processes are
/// announced like local writes.
pub struct JsonFileStorage {
    inner: Arc<FileStorageInner>,
    write_lock: tokio::sync::Mutex<()>,
    watcher: Mutex<Option<RecommendedWatcher>>,
}

struct FileStorageInner {
    path: PathBuf,
    snapshot: Mutex<StorageDocument>,
    events: broadcast::Sender<StorageChange>,
}

impl JsonFileStorage {
    pub fn open(path: impl Into<PathBuf>) -> HookmenuResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| HookmenuError::storage_error(&path.display().to_string(), "open", &e.to_string()))?;
        }

        let snapshot = read_document_sync(&path)?;
        let (events, _) = broadcast::channel(STORAGE_EVENT_CAPACITY);
        log::debug!("🗄️ Opened storage at {}", path.display());

        Ok(Self {
            inner: Arc::new(FileStorageInner {
                path,
                snapshot: Mutex::new(snapshot),
                events,
            }),
            write_lock: tokio::sync::Mutex::new(()),
            watcher: Mutex::new(None),
        })
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Watches the storage file's directory and announces keys whose values
    /// changed on disk. Calling it again is a no-op.
    pub fn start_watching(&self) -> HookmenuResult<()> {
        let mut slot = self.watcher.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return Ok(());
        }

        let inner = Arc::clone(&self.inner);
        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| match result {
            Ok(event) => {
                let ours = event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == inner.path.file_name());
                if ours && !event.kind.is_access() {
                    inner.reload();
                }
            }
            Err(e) => log::warn!("⚠️ Storage watch error: {e}"),
        })?;

        let directory = self.inner.path.parent().unwrap_or_else(|| Path::new("."));
        watcher.watch(directory, RecursiveMode::NonRecursive)?;
        log::info!("👀 Watching {} for changes", self.inner.path.display());

        *slot = Some(watcher);
        Ok(())
    }
}

impl FileStorageInner {
    fn reload(&self) {
        let current = match read_document_sync(&self.path) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("⚠️ Ignoring unreadable storage file: {e}");
                return;
            }
        };

        let changes = {
            let mut snapshot = self.snapshot.lock().unwrap_or_else(PoisonError::into_inner);
            let changes = diff_documents(&snapshot, &current);
            *snapshot = current;
            changes
        };

        for change in changes {
            log::debug!("🔔 Storage keys changed on disk in {}: {:?}", change.area, change.keys);
            let _ = self.events.send(change);
        }
    }
}

#[async_trait]
impl StoragePort for JsonFileStorage {
    async fn get(&self, area: StorageArea, key: &str) -> HookmenuResult<Option<String>> {
        let document = read_document(&self.inner.path).await?;
        Ok(document.get(&area).and_then(|values| values.get(key)).cloned())
    }

    async fn set(&self, area: StorageArea, key: &str, value: String) -> HookmenuResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut document = read_document(&self.inner.path).await?;
        let previous = document
            .entry(area)
            .or_default()
            .insert(key.to_string(), value.clone());

        let serialized = serde_json::to_string_pretty(&document)?;
        {
            let mut snapshot = self.inner.snapshot.lock().unwrap_or_else(PoisonError::into_inner);
            *snapshot = document;
        }

        let tmp_path = self.inner.path.with_extension("json.tmp");
        let path_label = self.inner.path.display().to_string();
        tokio::fs::write(&tmp_path, serialized)
            .await
            .map_err(|e| HookmenuError::storage_error(&path_label, "write", &e.to_string()))?;
        tokio::fs::rename(&tmp_path, &self.inner.path)
            .await
            .map_err(|e| HookmenuError::storage_error(&path_label, "write", &e.to_string()))?;

        if previous.as_deref() != Some(value.as_str()) {
            let _ = self.inner.events.send(StorageChange::new(area, vec![key.to_string()]));
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.inner.events.subscribe()
    }
}

fn parse_document(path: &Path, raw: &str) -> HookmenuResult<StorageDocument> {
    if raw.trim().is_empty() {
        return Ok(StorageDocument::new());
    }
    serde_json::from_str(raw)
        .map_err(|e| HookmenuError::storage_error(&path.display().to_string(), "read", &e.to_string()))
}

fn read_document_sync(path: &Path) -> HookmenuResult<StorageDocument> {
    match std::fs::read_to_string(path) {
        Ok(raw) => parse_document(path, &raw),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StorageDocument::new()),
        Err(e) => Err(HookmenuError::storage_error(&path.display().to_string(), "read", &e.to_string())),
    }
}

async fn read_document(path: &Path) -> HookmenuResult<StorageDocument> {
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => parse_document(path, &raw),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StorageDocument::new()),
        Err(e) => Err(HookmenuError::storage_error(&path.display().to_string(), "read", &e.to_string())),
    }
}

fn diff_documents(before: &StorageDocument, after: &StorageDocument) -> Vec<StorageChange> {
    let empty = BTreeMap::new();
    let areas: std::collections::BTreeSet<StorageArea> = before.keys().chain(after.keys()).copied().collect();

    areas
        .into_iter()
        .filter_map(|area| {
            let old = before.get(&area).unwrap_or(&empty);
            let new = after.get(&area).unwrap_or(&empty);
            let mut keys: Vec<String> = old
                .keys()
                .chain(new.keys())
                .filter(|key| old.get(*key) != new.get(*key))
                .cloned()
                .collect();
            keys.sort();
            keys.dedup();
            (!keys.is_empty()).then(|| StorageChange::new(area, keys))
        })
        .collect()
}
