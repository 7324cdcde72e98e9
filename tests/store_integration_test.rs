use anyhow::Result;
use singleton_sort::{CardListStore, FileStore, KeyValueStore, MemoryStore, SortError};
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().to_str().unwrap().to_string())
}

/// 測試重新建立 store 時會讀回先前儲存的清單
#[test]
fn test_lists_survive_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;

    {
        let mut store = CardListStore::new(file_store(&temp_dir));
        assert!(store.add_from_text("1 Sol Ring\n1 Polluted Delta").success);
        assert!(store.add_from_text("1 Sol Ring\n4 Island").success);
        store.rename(1, "Mono Blue");
    }

    let store = CardListStore::new(file_store(&temp_dir));
    assert_eq!(store.len(), 2);
    assert_eq!(store.lists()[1].name(), "Mono Blue");
    assert_eq!(store.lists()[1].total_cards(), 5);
    assert_eq!(store.serialize_at(0).as_deref(), Some("1 Sol Ring\n1 Polluted Delta"));
    assert_eq!(store.common_cards().len(), 1);

    Ok(())
}

/// 測試刪除後的索引位移也會寫回檔案
#[test]
fn test_remove_survives_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;

    {
        let mut store = CardListStore::new(file_store(&temp_dir));
        store.add_named_from_text("1 Sol Ring", Some("Elves"));
        store.add_named_from_text("1 Sol Ring\n1 Arid Mesa", Some("Storm"));
        store.add_named_from_text("1 Arid Mesa", Some("Tron"));
        store.remove(0);
    }

    let store = CardListStore::new(file_store(&temp_dir));
    let names: Vec<&str> = store.lists().iter().map(|l| l.name()).collect();
    assert_eq!(names, vec!["Storm", "Tron"]);

    let common = store.common_cards();
    assert_eq!(common.len(), 1);
    assert_eq!(common[0].name, "Arid Mesa");
    assert_eq!(common[0].deck_indices, vec![0, 1]);

    Ok(())
}

#[test]
fn test_clear_all_removes_saved_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let backend = file_store(&temp_dir);
    let saved_path = backend.path_for("singleton-sort-card-lists");

    let mut store = CardListStore::new(backend);
    store.add_from_text("1 Sol Ring");
    assert!(saved_path.exists());

    store.clear_all();
    assert!(!saved_path.exists());
    assert!(CardListStore::new(file_store(&temp_dir)).is_empty());

    Ok(())
}

#[test]
fn test_custom_key_keeps_collections_apart() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let mut pod = CardListStore::with_key(file_store(&temp_dir), "pod-a");
    pod.add_from_text("1 Sol Ring");

    let other = CardListStore::with_key(file_store(&temp_dir), "pod-b");
    assert!(other.is_empty());
    assert_eq!(CardListStore::with_key(file_store(&temp_dir), "pod-a").len(), 1);

    Ok(())
}

#[test]
fn test_corrupt_file_is_ignored() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let backend = file_store(&temp_dir);
    std::fs::write(backend.path_for("singleton-sort-card-lists"), "not json at all")?;

    let mut store = CardListStore::new(backend);
    assert!(store.is_empty());

    // 之後的寫入會覆蓋壞掉的資料
    store.add_from_text("1 Sol Ring");
    assert_eq!(CardListStore::new(file_store(&temp_dir)).len(), 1);

    Ok(())
}

/// 永遠失敗的儲存後端
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn load(&self, _key: &str) -> singleton_sort::Result<Option<String>> {
        Err(SortError::StorageError {
            message: "storage disabled".to_string(),
        })
    }

    fn save(&mut self, _key: &str, _value: &str) -> singleton_sort::Result<()> {
        Err(SortError::StorageError {
            message: "quota exceeded".to_string(),
        })
    }

    fn erase(&mut self, _key: &str) -> singleton_sort::Result<()> {
        Err(SortError::StorageError {
            message: "storage disabled".to_string(),
        })
    }
}

#[test]
fn test_storage_failures_do_not_affect_memory_state() {
    let mut store = CardListStore::new(BrokenStore);
    assert!(store.is_empty());

    assert!(store.add_from_text("1 Sol Ring").success);
    assert!(store.add_from_text("1 Sol Ring").success);
    assert!(!store.has_errors());
    assert_eq!(store.common_cards()[0].deck_indices, vec![0, 1]);

    store.rename(0, "Still works");
    store.remove(1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.lists()[0].name(), "Still works");

    store.clear_all();
    assert!(store.is_empty());
}

#[test]
fn test_memory_store_snapshot_is_json() -> Result<()> {
    let mut store = CardListStore::new(MemoryStore::new());
    store.add_named_from_text("2 Counterspell", Some("Control"));

    let raw = store.backend().get("singleton-sort-card-lists").unwrap();
    let value: serde_json::Value = serde_json::from_str(raw)?;
    assert_eq!(value["version"], 1);
    assert_eq!(value["lists"][0]["name"], "Control");
    assert_eq!(value["lists"][0]["totalCards"], 2);
    assert!(value["savedAt"].is_string());

    Ok(())
}
