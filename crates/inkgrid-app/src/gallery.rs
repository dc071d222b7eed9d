//! Gallery store: durable, newest-first collection of published artworks.
//!
//! Persistence goes through the [`KeyValueStore`] capability so the store
//! can run against a directory of JSON blobs ([`FileStore`]), an in-process
//! map ([`MemoryStore`]), or a mock in tests. The whole collection lives
//! under a single key as one serialized blob.
//!
//! Reads never fail: a missing blob seeds the default collection, records
//! that do not parse are skipped, and an unreadable blob falls back to the
//! seed. Before a damaged blob is overwritten it is copied to
//! [`BACKUP_KEY`]. Writes are best-effort: `save` returns the new record
//! even when it could not be persisted.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use fs2::FileExt;
use inkgrid_core::prelude::*;
use inkgrid_core::{now_millis, seed_collection, Artwork, ArtworkCollection, DensityGrid};

use crate::ids::generate_id;

/// Key the artwork collection is stored under.
pub const STORAGE_KEY: &str = "ascii_canvas_artworks";

/// Key a damaged collection blob is copied to before being replaced.
pub const BACKUP_KEY: &str = "ascii_canvas_artworks.bak";

/// String-keyed blob storage.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Hold `key` exclusively until the returned guard is dropped.
    fn lock(&self, key: &str) -> Result<KeyLock>;
}

/// Exclusive hold on a key. Released on drop.
#[derive(Debug)]
pub struct KeyLock {
    _file: Option<File>,
}

impl KeyLock {
    /// A guard for backends that need no cross-process lock.
    pub fn unlocked() -> Self {
        Self { _file: None }
    }

    fn held(file: File) -> Self {
        Self { _file: Some(file) }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File-backed store
// ─────────────────────────────────────────────────────────────────────────────

/// One `<key>.json` file per key inside a directory, locked through a
/// sibling `<key>.lock`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub fn lock_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.lock", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| Error::storage(format!("Failed to create {:?}: {}", self.dir, e)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        let path = self.path_for(key);
        let temp_path = self.dir.join(format!(".{}.json.tmp", key));

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::storage(format!("Failed to open {:?}: {}", temp_path, e)))?;

        file.write_all(value.as_bytes())
            .map_err(|e| Error::storage(format!("Failed to write {:?}: {}", temp_path, e)))?;
        file.flush()
            .map_err(|e| Error::storage(format!("Failed to flush {:?}: {}", temp_path, e)))?;

        std::fs::rename(&temp_path, &path)
            .map_err(|e| Error::storage(format!("Failed to replace {:?}: {}", path, e)))?;

        debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    fn lock(&self, key: &str) -> Result<KeyLock> {
        self.ensure_dir()?;

        // The lock file is never renamed or removed, so every instance
        // contends on the same inode.
        let lock_path = self.lock_path_for(key);
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| Error::storage(format!("Failed to open {:?}: {}", lock_path, e)))?;
        file.lock_exclusive()
            .map_err(|e| Error::storage(format!("Failed to lock {:?}: {}", lock_path, e)))?;

        Ok(KeyLock::held(file))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory store
// ─────────────────────────────────────────────────────────────────────────────

/// Process-local store, used for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| Error::storage("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::storage("memory store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn lock(&self, _key: &str) -> Result<KeyLock> {
        Ok(KeyLock::unlocked())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gallery store
// ─────────────────────────────────────────────────────────────────────────────

/// The artwork collection on top of a key-value backend.
#[derive(Debug)]
pub struct GalleryStore<S> {
    kv: S,
    seed: OnceLock<ArtworkCollection>,
}

impl GalleryStore<FileStore> {
    /// Gallery persisted as JSON inside `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(FileStore::new(dir))
    }
}

impl GalleryStore<MemoryStore> {
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<S: KeyValueStore> GalleryStore<S> {
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            seed: OnceLock::new(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.kv
    }

    /// The seeded default collection, identical for the life of this store.
    fn default_collection(&self) -> ArtworkCollection {
        self.seed.get_or_init(seed_collection).clone()
    }

    /// All artworks, newest first.
    ///
    /// Seeds and persists the default collection on first-ever access.
    pub fn list(&self) -> ArtworkCollection {
        self.load().artworks
    }

    /// Publish a copy of `grid` as a new artwork.
    ///
    /// The record is returned even if it could not be written.
    pub fn save(&self, grid: &DensityGrid) -> Artwork {
        let _guard = match self.kv.lock(STORAGE_KEY) {
            Ok(guard) => Some(guard),
            Err(e) => {
                warn!("Saving without a lock on the gallery: {}", e);
                None
            }
        };

        let Loaded {
            mut artworks,
            damaged,
        } = self.load();

        let mut id = generate_id();
        while artworks.contains_id(&id) {
            id = generate_id();
        }

        let artwork = Artwork::new(id, grid.clone(), now_millis());
        artworks.prepend(artwork.clone());

        if let Some(blob) = damaged {
            if let Err(e) = self.kv.set(BACKUP_KEY, &blob) {
                error!(
                    "Failed to back up damaged artworks, not saving {}: {}",
                    artwork.id, e
                );
                return artwork;
            }
            warn!("Damaged artworks copied to {}", BACKUP_KEY);
        }

        match self.persist(&artworks) {
            Ok(()) => info!("Saved artwork {} ({} total)", artwork.id, artworks.len()),
            Err(e) => error!("Failed to save artwork {}: {}", artwork.id, e),
        }

        artwork
    }

    /// Look up one artwork by identifier.
    pub fn get_by_id(&self, id: &str) -> Option<Artwork> {
        self.list().find(id).cloned()
    }

    fn load(&self) -> Loaded {
        match self.kv.get(STORAGE_KEY) {
            Ok(Some(blob)) => match parse_records(&blob) {
                Some((artworks, 0)) => Loaded::clean(artworks),
                Some((artworks, _)) if !artworks.is_empty() => Loaded {
                    artworks,
                    damaged: Some(blob),
                },
                _ => {
                    warn!("No readable stored artworks, using defaults");
                    Loaded {
                        artworks: self.default_collection(),
                        damaged: Some(blob),
                    }
                }
            },
            Ok(None) => {
                info!("No stored artworks, seeding the default collection");
                let seeded = self.default_collection();
                if let Err(e) = self.persist(&seeded) {
                    warn!("Failed to persist seeded artworks: {}", e);
                }
                Loaded::clean(seeded)
            }
            Err(e) => {
                warn!("Failed to load artworks, using defaults: {}", e);
                Loaded::clean(self.default_collection())
            }
        }
    }

    fn persist(&self, artworks: &ArtworkCollection) -> Result<()> {
        let blob = serde_json::to_string(artworks)?;
        self.kv.set(STORAGE_KEY, &blob)
    }
}

/// A loaded collection, plus the raw blob when parts of it were dropped.
struct Loaded {
    artworks: ArtworkCollection,
    damaged: Option<String>,
}

impl Loaded {
    fn clean(artworks: ArtworkCollection) -> Self {
        Self {
            artworks,
            damaged: None,
        }
    }
}

/// Parse a stored blob record by record.
///
/// Returns the readable artworks and how many records were skipped, or
/// `None` when the blob is not a JSON array at all.
fn parse_records(blob: &str) -> Option<(ArtworkCollection, usize)> {
    let records: Vec<serde_json::Value> = match serde_json::from_str(blob) {
        Ok(records) => records,
        Err(e) => {
            warn!("Failed to parse stored artworks: {}", e);
            return None;
        }
    };

    let total = records.len();
    let artworks: Vec<Artwork> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(artwork) => Some(artwork),
            Err(e) => {
                warn!("Skipping unreadable artwork record {}: {}", index, e);
                None
            }
        })
        .collect();

    let skipped = total - artworks.len();
    Some((ArtworkCollection::from_vec(artworks), skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkgrid_core::{AlwaysBleed, Brush, NoBleed, SEED_ARTWORK_ID};
    use tempfile::tempdir;

    #[test]
    fn test_seed_on_empty() {
        let store = GalleryStore::in_memory();

        let first = store.list();
        assert_eq!(first.len(), 1);
        assert_eq!(first.get(0).unwrap().id, SEED_ARTWORK_ID);

        let second = store.list();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_is_persisted() {
        let store = GalleryStore::in_memory();
        store.list();
        assert!(store.backend().get(STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_save_prepends_and_copies() {
        let store = GalleryStore::in_memory();
        let mut grid = DensityGrid::blank();
        grid.set(3, 3, 4);

        let saved = store.save(&grid);
        grid.set(3, 3, 9);

        let list = store.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().id, saved.id);
        assert_eq!(list.get(0).unwrap().grid.get(3, 3), Some(4));
        assert_eq!(list.get(1).unwrap().id, SEED_ARTWORK_ID);
    }

    #[test]
    fn test_saved_ids_are_distinct() {
        let store = GalleryStore::in_memory();
        let a = store.save(&DensityGrid::blank());
        let b = store.save(&DensityGrid::blank());
        assert_ne!(a.id, b.id);
        assert_ne!(a.id, SEED_ARTWORK_ID);
    }

    #[test]
    fn test_get_by_id() {
        let store = GalleryStore::in_memory();
        let saved = store.save(&DensityGrid::blank());

        assert_eq!(store.get_by_id(&saved.id), Some(saved));
        assert!(store.get_by_id(SEED_ARTWORK_ID).is_some());
        assert!(store.get_by_id("missing").is_none());
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_seed() {
        let kv = MemoryStore::new();
        kv.set(STORAGE_KEY, "{ definitely not json").unwrap();
        let store = GalleryStore::new(kv);

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().id, SEED_ARTWORK_ID);
        assert_eq!(store.list(), list);
    }

    #[test]
    fn test_bad_record_is_skipped_not_the_collection() {
        let kv = MemoryStore::new();
        kv.set(
            STORAGE_KEY,
            r#"[{"id":"mine","grid":[[1,2],[3,4]],"createdAt":1},{"id":"odd","grid":[],"createdAt":2}]"#,
        )
        .unwrap();
        let store = GalleryStore::new(kv);

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().id, "mine");
        assert_eq!(list.get(0).unwrap().grid.get(1, 1), Some(4));
    }

    #[test]
    fn test_save_keeps_readable_records_and_backs_up_blob() {
        let damaged =
            r#"[{"id":"mine","grid":[[1,2],[3,4]],"createdAt":1},{"id":"ragged","grid":[[1],[2,3]],"createdAt":2}]"#;
        let kv = MemoryStore::new();
        kv.set(STORAGE_KEY, damaged).unwrap();
        let store = GalleryStore::new(kv);

        let saved = store.save(&DensityGrid::blank());

        let ids: Vec<String> = store.list().iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids, vec![saved.id.clone(), "mine".to_string()]);
        assert_eq!(
            store.backend().get(BACKUP_KEY).unwrap().as_deref(),
            Some(damaged)
        );
    }

    #[test]
    fn test_unparseable_blob_is_backed_up_before_overwrite() {
        let kv = MemoryStore::new();
        kv.set(STORAGE_KEY, "{ definitely not json").unwrap();
        let store = GalleryStore::new(kv);

        store.save(&DensityGrid::blank());

        assert_eq!(
            store.backend().get(BACKUP_KEY).unwrap().as_deref(),
            Some("{ definitely not json")
        );
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_failed_backup_leaves_blob_untouched() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_lock().returning(|_| Ok(KeyLock::unlocked()));
        kv.expect_get()
            .returning(|_| Ok(Some("{ definitely not json".to_string())));
        kv.expect_set()
            .withf(|key, _| key == BACKUP_KEY)
            .times(1)
            .returning(|_, _| Err(Error::storage("disk full")));
        kv.expect_set().withf(|key, _| key == STORAGE_KEY).never();
        let store = GalleryStore::new(kv);

        let saved = store.save(&DensityGrid::blank());
        assert!(!saved.id.is_empty());
    }

    #[test]
    fn test_clean_save_writes_no_backup() {
        let store = GalleryStore::in_memory();
        store.save(&DensityGrid::blank());
        assert_eq!(store.backend().get(BACKUP_KEY).unwrap(), None);
    }

    #[test]
    fn test_read_failure_falls_back_to_seed() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get()
            .returning(|_| Err(Error::storage("backend offline")));
        kv.expect_set().never();
        let store = GalleryStore::new(kv);

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().id, SEED_ARTWORK_ID);
    }

    #[test]
    fn test_write_failure_still_returns_record() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_lock().returning(|_| Ok(KeyLock::unlocked()));
        kv.expect_get().returning(|_| Ok(None));
        kv.expect_set()
            .returning(|_, _| Err(Error::storage("quota exceeded")));
        let store = GalleryStore::new(kv);

        let mut grid = DensityGrid::blank();
        grid.set(1, 1, 2);
        let saved = store.save(&grid);

        assert!(!saved.id.is_empty());
        assert_eq!(saved.grid, grid);
    }

    #[test]
    fn test_save_writes_under_fixed_key() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_lock().returning(|_| Ok(KeyLock::unlocked()));
        kv.expect_get().returning(|_| Ok(Some("[]".to_string())));
        kv.expect_set()
            .withf(|key, value| key == STORAGE_KEY && value.contains("createdAt"))
            .times(1)
            .returning(|_, _| Ok(()));
        let store = GalleryStore::new(kv);

        store.save(&DensityGrid::blank());
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp = tempdir().unwrap();
        let store = FileStore::new(temp.path().join("gallery"));

        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "[1,2,3]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(store.path_for("k").exists());
        assert!(!temp.path().join("gallery").join(".k.json.tmp").exists());
    }

    #[test]
    fn test_file_store_lock_is_exclusive() {
        let temp = tempdir().unwrap();
        let store = FileStore::new(temp.path());

        let guard = store.lock(STORAGE_KEY).unwrap();
        let other = File::open(store.lock_path_for(STORAGE_KEY)).unwrap();
        assert!(other.try_lock_exclusive().is_err());

        drop(guard);
        assert!(other.try_lock_exclusive().is_ok());
    }

    #[test]
    fn test_file_gallery_concurrent_saves_keep_every_record() {
        let temp = tempdir().unwrap();
        let dir = temp.path().to_path_buf();
        GalleryStore::open(&dir).list();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dir = dir.clone();
                std::thread::spawn(move || GalleryStore::open(dir).save(&DensityGrid::blank()).id)
            })
            .collect();
        let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let list = GalleryStore::open(&dir).list();
        assert_eq!(list.len(), 5);
        for id in &ids {
            assert!(list.contains_id(id));
        }
    }

    #[test]
    fn test_file_gallery_survives_reopen() {
        let temp = tempdir().unwrap();
        let mut grid = DensityGrid::blank();
        Brush::new(NoBleed).draw_line(&mut grid, 0, 0, 9, 0);

        let saved = GalleryStore::open(temp.path()).save(&grid);

        let reopened = GalleryStore::open(temp.path());
        let list = reopened.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list.find(&saved.id).unwrap().grid, grid);
    }

    #[test]
    fn test_end_to_end_publish() {
        let store = GalleryStore::in_memory();
        let prior: Vec<String> = store.list().iter().map(|a| a.id.clone()).collect();

        let mut grid = DensityGrid::blank();
        let mut brush = Brush::new(AlwaysBleed);
        brush.paint(&mut grid, 10, 10);
        brush.draw_line(&mut grid, 0, 0, 5, 5);

        let saved = store.save(&grid);
        let list = store.list();
        let stored = list.find(&saved.id).unwrap();

        assert_eq!(stored.grid, grid);
        assert!(!prior.contains(&saved.id));
    }
}
