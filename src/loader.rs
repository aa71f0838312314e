use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use jawi_core::dict::{DictError, Dictionary};
use tracing::{debug, warn};

use crate::engine::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Empty,
    Loading,
    Ready,
}

enum CellState {
    Empty,
    Loading,
    Ready(Arc<Dictionary>),
}

/// A dictionary slot filled at most once, by whichever caller gets there
/// first. Concurrent callers wait for that load instead of starting their
/// own.
pub struct DictionaryCell {
    state: Mutex<CellState>,
    ready: Condvar,
}

impl Default for DictionaryCell {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryCell {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CellState::Empty),
            ready: Condvar::new(),
        }
    }

    /// A cell that is already loaded.
    pub fn with_dictionary(dict: Dictionary) -> Self {
        Self {
            state: Mutex::new(CellState::Ready(Arc::new(dict))),
            ready: Condvar::new(),
        }
    }

    pub fn state(&self) -> LoadState {
        match &*self.lock() {
            CellState::Empty => LoadState::Empty,
            CellState::Loading => LoadState::Loading,
            CellState::Ready(_) => LoadState::Ready,
        }
    }

    /// The loaded dictionary, or `None` while empty or loading.
    pub fn get(&self) -> Option<Arc<Dictionary>> {
        match &*self.lock() {
            CellState::Ready(dict) => Some(Arc::clone(dict)),
            _ => None,
        }
    }

    /// Non-blocking probe that tells "never started" from "in flight".
    pub fn try_get(&self) -> Result<Arc<Dictionary>, EngineError> {
        match &*self.lock() {
            CellState::Empty => Err(EngineError::NotReady),
            CellState::Loading => Err(EngineError::LoadInProgress),
            CellState::Ready(dict) => Ok(Arc::clone(dict)),
        }
    }

    /// Return the dictionary, running `load` first if nobody has.
    ///
    /// Only one `load` runs at a time; other callers block until it
    /// finishes and share its result. A failed load installs the empty
    /// dictionary so that conversion still works by letters alone. If
    /// `load` panics the cell goes back to empty and a waiting caller
    /// takes over.
    pub fn get_or_load<F>(&self, load: F) -> Arc<Dictionary>
    where
        F: FnOnce() -> Result<Dictionary, DictError>,
    {
        let mut state = self.lock();
        loop {
            match &*state {
                CellState::Ready(dict) => return Arc::clone(dict),
                CellState::Loading => {
                    state = self
                        .ready
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                }
                CellState::Empty => break,
            }
        }
        *state = CellState::Loading;
        drop(state);

        let mut guard = LoadingGuard {
            cell: self,
            done: false,
        };
        let dict = match load() {
            Ok(dict) => {
                debug!(stats = ?dict.stats(), "dictionary loaded");
                dict
            }
            Err(e) => {
                warn!("dictionary load failed, using empty dictionary: {e}");
                Dictionary::empty()
            }
        };
        let dict = Arc::new(dict);
        *self.lock() = CellState::Ready(Arc::clone(&dict));
        guard.done = true;
        self.ready.notify_all();
        dict
    }

    fn lock(&self) -> MutexGuard<'_, CellState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Resets a cell stuck in `Loading` when the loader unwinds.
struct LoadingGuard<'c> {
    cell: &'c DictionaryCell,
    done: bool,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.done {
            *self.cell.lock() = CellState::Empty;
            self.cell.ready.notify_all();
        }
    }
}
