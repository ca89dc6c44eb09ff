//! App-wide yewdux store for the log payload.
//!
//! # Design
//! - The payload is fetched once per page; the load state moves out of
//!   [`LoadState::Loading`] exactly once.
//! - The payload sits behind an `Rc` so selectors clone cheaply.

use crate::core::error::LoadError;
use blocklog_models::FetchResult;
use std::rc::Rc;
use yewdux::store::Store;

/// Lifecycle of the primary log fetch.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Request outstanding.
    #[default]
    Loading,
    /// Request failed; holds the page-level message.
    Failed(String),
    /// Payload available.
    Loaded(Rc<FetchResult>),
}

impl LoadState {
    /// Whether the loading indicator should show.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&FetchResult> {
        match self {
            Self::Loaded(result) => Some(result),
            _ => None,
        }
    }

    /// Failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Global viewer store.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct ViewerStore {
    /// Primary fetch state.
    pub load: LoadState,
}

/// Record the outcome of the primary fetch.
///
/// Returns `false` and leaves the store untouched when the load already
/// finished.
pub fn finish_load(store: &mut ViewerStore, outcome: Result<FetchResult, LoadError>) -> bool {
    if !store.load.is_loading() {
        return false;
    }
    store.load = match outcome {
        Ok(result) => LoadState::Loaded(Rc::new(result)),
        Err(err) => LoadState::Failed(err.to_string()),
    };
    true
}
