use crate::{
    error::{StorageError, StorageErrorCode},
    version::{KeyValueStore, Spawner},
};
use futures::future::LocalBoxFuture;
use wasm_bindgen::JsValue;

/// The browser's `localStorage`.
///
/// The storage is looked up at every write: it may be disabled (private
/// browsing, sandboxed frames) and that is reported as a [`StorageError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::unavailable("No window object"))?;
        let storage = window
            .local_storage()
            .map_err(storage_error)?
            .ok_or_else(|| StorageError::unavailable("localStorage is disabled"))?;

        storage.set_item(key, value).map_err(storage_error)
    }
}

fn storage_error(error: JsValue) -> StorageError {
    serde_wasm_bindgen::from_value(error.clone()).unwrap_or_else(|decode_error| StorageError {
        code: StorageErrorCode::Unknown("Error".to_owned()),
        info: format!("Couldn't decode the error content: {decode_error} ({error:?})"),
    })
}

/// Spawns the tasks on the JavaScript event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl Spawner for BrowserSpawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
