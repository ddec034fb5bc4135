//! Walk several borrowed sequences in lock-step, and number the steps.
//!
//! `combine` borrows a tuple of sequences and yields one tuple of element
//! references per step, stopping at the shortest sequence. `index` pairs
//! each element of a sequence, or each tuple of a combination, with a
//! running index that has a configurable start and step.
//!
//! Both adapters offer two interfaces over the same traversal: ordinary
//! iterators for `for` loops, and an explicit cursor protocol (`begin`,
//! `end`, `advance`, `get`) whose reads are bounds-checked.
//!
//! ```
//! use tandem::prelude::*;
//!
//! let mut counts = vec![0; 3];
//! let words = ["one", "three", "five", "seven"];
//!
//! for (i, (count, word)) in index_from(combine((&mut counts, &words)), 1, 2) {
//!     *count = i * word.len() as i32;
//! }
//!
//! assert_eq!(counts, vec![3, 15, 20]);
//! ```

mod combiner;
mod config;
mod cursor;
mod error;
mod indexer;
mod lockstep;
mod sequence;
mod traversal;

pub use crate::combiner::{combine, Combiner, SourceSet, SourceSetMut};
pub use crate::config::IndexConfig;
pub use crate::cursor::{Cursor, EndMarker, Positions};
pub use crate::error::Error;
pub use crate::indexer::{index, index_from, index_with, IndexCursor, IndexValue, Indexed, Indexer};
pub use crate::lockstep::Lockstep;
pub use crate::sequence::{Sequence, SequenceMut, Source, SourceMut};
pub use crate::traversal::{Traversal, TraversalMut};

pub mod prelude {
    pub use crate::{combine, index, index_from, index_with};
    pub use crate::{Traversal, TraversalMut};
}
