//! Shared access to a namespace from several threads
//!
//! The tree itself is single-threaded. `SharedNamespace` puts it behind one
//! global read-write lock so each command runs to completion under a single
//! guard; recursive deletion in particular performs several mutations on the
//! same directory and must never interleave with another writer.

use crate::error::TreeError;
use crate::protocol::{dispatch, Command, Response};
use crate::tree::Namespace;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to a namespace guarded by a single lock
#[derive(Debug, Clone, Default)]
pub struct SharedNamespace {
    inner: Arc<RwLock<Namespace>>,
}

impl SharedNamespace {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(namespace)),
        }
    }

    /// Run `f` with shared access
    pub fn read<T>(&self, f: impl FnOnce(&Namespace) -> T) -> T {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Run `f` with exclusive access
    pub fn write<T>(&self, f: impl FnOnce(&mut Namespace) -> T) -> T {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Execute a protocol command atomically
    pub fn execute(&self, command: &Command) -> Response {
        self.try_execute(command).unwrap_or(Response::Fail)
    }

    pub fn try_execute(&self, command: &Command) -> Result<Response, TreeError> {
        self.write(|namespace| dispatch(namespace, command))
    }
}
