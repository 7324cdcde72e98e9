use crate::utils::error::Result;

/// String key-value persistence used by the list store.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
    fn erase(&mut self, key: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn storage_key(&self) -> &str;
    fn export_dir(&self) -> &str;
}
