//! Traversal positions shared by every adapter in the crate.

use std::fmt::Debug;
use std::hash::Hash;

/// Per-source offsets held by a cursor, one per combined source.
///
/// Only implemented for fixed-size arrays of offsets; the array length is
/// the number of combined sources.
pub trait Positions: Copy + Eq + Hash + Debug + AsRef<[usize]> + AsMut<[usize]> {
    /// Steps every offset forward once, including offsets that already sit
    /// at their own source's end.
    fn advance(&mut self) {
        for pos in self.as_mut() {
            *pos += 1;
        }
    }

    /// True as soon as any offset matches the corresponding end offset.
    /// Checks run left to right and stop at the first match.
    fn any_reached(&self, end: &Self) -> bool {
        self.as_ref().iter().zip(end.as_ref()).any(|(pos, end)| pos == end)
    }
}

impl<const N: usize> Positions for [usize; N] {}

/// A live traversal position.
///
/// Comparing two cursors checks every offset. Comparing a cursor against
/// an `EndMarker` instead asks whether any source is exhausted, which is
/// what stops a traversal at its shortest source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor<P> {
    pub(crate) positions: P,
}

impl<P: Positions> Cursor<P> {
    pub(crate) fn new(positions: P) -> Self {
        Self { positions }
    }

    pub fn advance(&mut self) {
        self.positions.advance();
    }

    pub fn positions(&self) -> &[usize] {
        self.positions.as_ref()
    }

    pub fn is_end(&self, end: &EndMarker<P>) -> bool {
        self.positions.any_reached(&end.positions)
    }
}

/// The position one past the last element of every combined source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EndMarker<P> {
    pub(crate) positions: P,
}

impl<P: Positions> EndMarker<P> {
    pub(crate) fn new(positions: P) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[usize] {
        self.positions.as_ref()
    }
}

impl<P: Positions> PartialEq<EndMarker<P>> for Cursor<P> {
    fn eq(&self, end: &EndMarker<P>) -> bool {
        self.is_end(end)
    }
}

impl<P: Positions> PartialEq<Cursor<P>> for EndMarker<P> {
    fn eq(&self, cursor: &Cursor<P>) -> bool {
        cursor.is_end(self)
    }
}
