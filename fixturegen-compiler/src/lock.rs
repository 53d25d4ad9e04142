//! Mutual exclusion around compilation.
//!
//! Generation is pure and never needs a lock; only the write of a module to
//! its output path does. By default each path gets its own lock so distinct
//! fixtures compile in parallel.

use crate::compiler::{CompileReport, Compiler};
use crate::error::CompileError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Granularity of compilation locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockScope {
    /// One lock per output path.
    #[default]
    PerPath,
    /// A single lock serializing every compilation.
    Global,
}

/// Table of locks keyed by output path.
#[derive(Debug, Default)]
pub struct PathLocks {
    scope: LockScope,
    global: Mutex<()>,
    paths: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl PathLocks {
    /// Creates a lock table with the given scope.
    #[must_use]
    pub fn new(scope: LockScope) -> Self {
        Self {
            scope,
            global: Mutex::new(()),
            paths: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the locking scope.
    #[must_use]
    pub fn scope(&self) -> LockScope {
        self.scope
    }

    /// Number of paths currently locked or waited on.
    #[must_use]
    pub fn tracked_paths(&self) -> usize {
        self.paths.lock().len()
    }

    /// Runs `f` while holding the lock for `path`.
    pub fn with_lock<R>(&self, path: &Path, f: impl FnOnce() -> R) -> R {
        match self.scope {
            LockScope::Global => {
                let _guard = self.global.lock();
                f()
            }
            LockScope::PerPath => {
                let key = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
                let entry = self.acquire(&key);
                let result = {
                    let _guard = entry.lock();
                    f()
                };
                self.release(&key, entry);
                result
            }
        }
    }

    fn acquire(&self, key: &Path) -> Arc<Mutex<()>> {
        let mut paths = self.paths.lock();
        Arc::clone(paths.entry(key.to_path_buf()).or_default())
    }

    /// Drops the table entry once no other thread holds or awaits it.
    fn release(&self, key: &Path, entry: Arc<Mutex<()>>) {
        let mut paths = self.paths.lock();
        // the table and `entry` itself
        if Arc::strong_count(&entry) == 2 {
            paths.remove(key);
        }
    }
}

/// Wraps a compiler so that each output path is compiled by one thread at a time.
#[derive(Debug)]
pub struct LockedCompiler<C> {
    inner: C,
    locks: PathLocks,
}

impl<C: Compiler> LockedCompiler<C> {
    /// Wraps `inner` with per-path locking.
    #[must_use]
    pub fn new(inner: C) -> Self {
        Self::with_scope(inner, LockScope::PerPath)
    }

    /// Wraps `inner` with the given locking scope.
    #[must_use]
    pub fn with_scope(inner: C, scope: LockScope) -> Self {
        Self {
            inner,
            locks: PathLocks::new(scope),
        }
    }

    /// Returns the wrapped compiler.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Returns the lock table.
    #[must_use]
    pub fn locks(&self) -> &PathLocks {
        &self.locks
    }
}

impl<C: Compiler> Compiler for LockedCompiler<C> {
    fn compile(&self, source: &str, output: &Path) -> Result<CompileReport, CompileError> {
        self.locks.with_lock(output, || {
            tracing::trace!(path = %output.display(), "compile lock acquired");
            self.inner.compile(source, output)
        })
    }
}
