use crate::error::StorageError;
use futures::future::LocalBoxFuture;
use tracing::{debug, warn};

/// version of this library, recorded in the storage at every start
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// namespace of all the keys this SDK writes in the storage
pub const SDK_NAMESPACE: &str = "CBWSDK";

pub const VERSION_KEY: &str = "VERSION";

/// Asynchronous string key-value storage (e.g. the browser's `localStorage`).
pub trait KeyValueStore {
    fn set_item(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StorageError>>;
}

/// Runs detached tasks on the current thread.
pub trait Spawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}

/// A [`KeyValueStore`] whose keys are all prefixed with `-{scope}:` so they
/// don't conflict with the other users of the storage.
#[derive(Debug, Clone)]
pub struct ScopedStore<S> {
    scope: String,
    store: S,
}

impl<S> ScopedStore<S> {
    pub fn open(scope: impl Into<String>, store: S) -> Self {
        Self {
            scope: scope.into(),
            store,
        }
    }

    pub fn scoped_key(&self, key: &str) -> String {
        format!("-{}:{key}", self.scope)
    }
}

impl<S: KeyValueStore> KeyValueStore for ScopedStore<S> {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.set_item(&self.scoped_key(key), value).await
    }
}

/// Record [`LIB_VERSION`] in the SDK's scoped storage.
///
/// The write runs as a detached task on the `spawner`, this function
/// returns immediately. A failure to write is only logged.
pub fn record_version<K, R>(store: K, spawner: &R)
where
    K: KeyValueStore + 'static,
    R: Spawner + ?Sized,
{
    let storage = ScopedStore::open(SDK_NAMESPACE, store);

    spawner.spawn_local(Box::pin(async move {
        match storage.set_item(VERSION_KEY, LIB_VERSION).await {
            Ok(()) => debug!(version = LIB_VERSION, "recorded the SDK version"),
            Err(error) => warn!(%error, "couldn't record the SDK version"),
        }
    }));
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    #[derive(Debug, Clone, Default)]
    pub struct MemoryStore {
        pub items: Rc<RefCell<HashMap<String, String>>>,
    }

    impl KeyValueStore for MemoryStore {
        async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.items
                .borrow_mut()
                .insert(key.to_owned(), value.to_owned());
            Ok(())
        }
    }

    #[derive(Debug, Clone)]
    pub struct FailingStore;

    impl KeyValueStore for FailingStore {
        async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::unavailable("private browsing"))
        }
    }

    /// keeps the spawned tasks until [`QueueSpawner::run`] is called
    #[derive(Default)]
    pub struct QueueSpawner {
        tasks: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
    }

    impl QueueSpawner {
        pub fn pending(&self) -> usize {
            self.tasks.borrow().len()
        }

        pub fn run(&self) {
            let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
            for task in tasks {
                futures::executor::block_on(task);
            }
        }
    }

    impl Spawner for QueueSpawner {
        fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
            self.tasks.borrow_mut().push(task);
        }
    }
}
