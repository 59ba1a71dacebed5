//! localStorage を使った閲覧履歴の保存先

use gloo::storage::{LocalStorage, Storage};
use teajia_common::{Error, KeyValueStore, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| Error::Storage(format!("読込失敗: {:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("保存失敗: {:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teajia_common::{RecentHistory, TeaRecord};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_store_round_trip() {
        let mut store = LocalStore;
        store.set("teajiaTest", "value").unwrap();
        assert_eq!(store.get("teajiaTest").unwrap().as_deref(), Some("value"));
        assert_eq!(store.get("teajiaMissing").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_recent_history_in_local_storage() {
        let mut store = LocalStore;
        let mut history = RecentHistory::new();
        history.record_view(&TeaRecord {
            display_name: "Long Jing".into(),
            ..Default::default()
        });
        history.save(&mut store).unwrap();

        let loaded = RecentHistory::load(&store).unwrap();
        assert_eq!(loaded.names(), vec!["Long Jing"]);
    }
}
