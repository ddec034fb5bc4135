//! Indexing options, settable programmatically or loaded from config files.

use serde::{Deserialize, Serialize};

use crate::indexer::IndexValue;

/// Start and step for a running index.
///
/// Missing fields fall back to their defaults, so an empty table yields the
/// usual count from 0 by 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "I: IndexValue + Deserialize<'de>"))]
pub struct IndexConfig<I = isize> {
    pub start: I,
    pub step: I,
}

impl<I: IndexValue> Default for IndexConfig<I> {
    fn default() -> Self {
        Self { start: I::zero(), step: I::one() }
    }
}
