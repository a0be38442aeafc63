pub mod kv;

mod employees;
mod seed;

use std::sync::{Mutex, MutexGuard, PoisonError};

use kv::{KvBackend, StorageError};

pub const AUTH_KEY: &str = "auth";
pub const EMPLOYEES_KEY: &str = "employees";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    EmployeesChanged { count: usize },
    SessionChanged { authenticated: bool },
}

type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Single shared data store. All reads and writes funnel through one
/// key/value backend guarded by a mutex, so writers never interleave.
pub struct Store {
    backend: Mutex<Box<dyn KvBackend>>,
    listeners: Mutex<Vec<Listener>>,
}

impl Store {
    pub fn new(backend: Box<dyn KvBackend>) -> Self {
        Store {
            backend: Mutex::new(backend),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Registers a callback fired after every successful mutation.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }

    fn notify(&self, event: StoreEvent) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(&event);
        }
    }

    fn backend(&self) -> MutexGuard<'_, Box<dyn KvBackend>> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_authenticated(&self, value: bool) -> Result<(), StorageError> {
        self.backend()
            .set_item(AUTH_KEY, if value { "true" } else { "false" })?;
        self.notify(StoreEvent::SessionChanged {
            authenticated: value,
        });
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.backend().get_item(AUTH_KEY).as_deref() == Some("true")
    }

    pub fn clear_session(&self) -> Result<(), StorageError> {
        self.backend().remove_item(AUTH_KEY)?;
        self.notify(StoreEvent::SessionChanged {
            authenticated: false,
        });
        Ok(())
    }

    pub fn usage(&self) -> (usize, usize) {
        let backend = self.backend();
        (backend.used_bytes(), backend.quota_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::kv::MemoryBackend;
    use super::*;
    use std::sync::Arc;

    fn memory_store() -> Store {
        Store::new(Box::new(MemoryBackend::new(kv::DEFAULT_QUOTA_BYTES)))
    }

    #[test]
    fn session_flag_round_trips() {
        let store = memory_store();
        assert!(!store.is_authenticated());
        store.set_authenticated(true).unwrap();
        assert!(store.is_authenticated());
        store.set_authenticated(false).unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn clear_session_removes_the_flag() {
        let store = memory_store();
        store.set_authenticated(true).unwrap();
        store.clear_session().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn listeners_observe_session_changes() {
        let store = memory_store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |event| sink.lock().unwrap().push(*event));

        store.set_authenticated(true).unwrap();
        store.clear_session().unwrap();

        let events = seen.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                StoreEvent::SessionChanged {
                    authenticated: true
                },
                StoreEvent::SessionChanged {
                    authenticated: false
                },
            ]
        );
    }
}
