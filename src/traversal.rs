//! The cursor protocol shared by single sequences and combinations.
//!
//! A traversal hands out a start `Cursor` and an `EndMarker`, reads the
//! element(s) under a cursor with a bounds check, and can also be walked as
//! a plain iterator. `Indexer` is written against this trait, so it wraps a
//! single borrowed sequence and a `Combiner` the same way.

use crate::cursor::{Cursor, EndMarker, Positions};
use crate::error::Error;
use crate::sequence::{self, Sequence, SequenceMut};

pub trait Traversal {
    type Positions: Positions;

    /// What a read through a cursor produces: a single element reference
    /// for a plain sequence, a tuple of them for a combination.
    type Refs<'s>
    where
        Self: 's;
    type Iter<'s>: Iterator<Item = Self::Refs<'s>>
    where
        Self: 's;

    /// Iterator produced when the traversal is consumed. Its items carry
    /// the borrows the traversal was built from.
    type IntoIter: Iterator;

    fn begin(&self) -> Cursor<Self::Positions>;
    fn end(&self) -> EndMarker<Self::Positions>;

    /// Reads under `cursor`, failing if any source has no element there.
    fn get(&self, cursor: &Cursor<Self::Positions>) -> Result<Self::Refs<'_>, Error>;

    /// Number of steps from `begin` to `end`.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Self::Iter<'_>;
    fn traverse(self) -> Self::IntoIter;
}

pub trait TraversalMut: Traversal {
    type RefsMut<'s>
    where
        Self: 's;
    type IterMut<'s>: Iterator<Item = Self::RefsMut<'s>>
    where
        Self: 's;

    fn get_mut(&mut self, cursor: &Cursor<Self::Positions>) -> Result<Self::RefsMut<'_>, Error>;
    fn iter_mut(&mut self) -> Self::IterMut<'_>;
}

impl<'a, S: Sequence + ?Sized> Traversal for &'a S {
    type Positions = [usize; 1];
    type Refs<'s> = &'s S::Item where Self: 's;
    type Iter<'s> = S::Iter<'s> where Self: 's;
    type IntoIter = S::Iter<'a>;

    fn begin(&self) -> Cursor<Self::Positions> {
        Cursor::new([0])
    }

    fn end(&self) -> EndMarker<Self::Positions> {
        EndMarker::new([Sequence::len(&**self)])
    }

    fn get(&self, cursor: &Cursor<Self::Positions>) -> Result<Self::Refs<'_>, Error> {
        sequence::fetch(&**self, 0, cursor.positions[0])
    }

    fn len(&self) -> usize {
        Sequence::len(&**self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Sequence::iter(&**self)
    }

    fn traverse(self) -> Self::IntoIter {
        Sequence::iter(self)
    }
}

impl<'a, S: SequenceMut + ?Sized> Traversal for &'a mut S {
    type Positions = [usize; 1];
    type Refs<'s> = &'s S::Item where Self: 's;
    type Iter<'s> = S::Iter<'s> where Self: 's;
    type IntoIter = S::IterMut<'a>;

    fn begin(&self) -> Cursor<Self::Positions> {
        Cursor::new([0])
    }

    fn end(&self) -> EndMarker<Self::Positions> {
        EndMarker::new([Sequence::len(&**self)])
    }

    fn get(&self, cursor: &Cursor<Self::Positions>) -> Result<Self::Refs<'_>, Error> {
        sequence::fetch(&**self, 0, cursor.positions[0])
    }

    fn len(&self) -> usize {
        Sequence::len(&**self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Sequence::iter(&**self)
    }

    fn traverse(self) -> Self::IntoIter {
        SequenceMut::iter_mut(self)
    }
}

impl<'a, S: SequenceMut + ?Sized> TraversalMut for &'a mut S {
    type RefsMut<'s> = &'s mut S::Item where Self: 's;
    type IterMut<'s> = S::IterMut<'s> where Self: 's;

    fn get_mut(&mut self, cursor: &Cursor<Self::Positions>) -> Result<Self::RefsMut<'_>, Error> {
        sequence::fetch_mut(&mut **self, 0, cursor.positions[0])
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        SequenceMut::iter_mut(&mut **self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;

    use str_macro::str;

    #[test]
    fn shared_sequence() {
        let words = vec![str!("x"), str!("y"), str!("z")];
        let traversal = &words;

        let end = traversal.end();
        let mut cursor = traversal.begin();
        let mut produced = Vec::new();

        while cursor != end {
            produced.push(Traversal::get(&traversal, &cursor).unwrap().as_str());
            cursor.advance();
        }

        assert_eq!(produced, vec!["x", "y", "z"]);
        assert_eq!(Traversal::len(&traversal), 3);
        assert_eq!(
            Traversal::get(&traversal, &cursor),
            Err(Error::PastEnd { slot: 0, position: 3, len: 3 }),
        );
    }

    #[test]
    fn exclusive_sequence() {
        let mut deque: VecDeque<i32> = (1..=3).collect();
        let mut traversal = &mut deque;

        let mut cursor = traversal.begin();
        cursor.advance();
        *TraversalMut::get_mut(&mut traversal, &cursor).unwrap() = 20;

        for x in TraversalMut::iter_mut(&mut traversal) {
            *x += 1;
        }

        assert_eq!(Traversal::iter(&traversal).copied().collect::<Vec<_>>(), vec![2, 21, 4]);

        for x in Traversal::traverse(traversal) {
            *x *= -1;
        }

        assert_eq!(deque, vec![-2, -21, -4]);
    }

    #[test]
    fn empty_sequence() {
        let empty: &[u8] = &[];

        assert!(empty.begin() == Traversal::end(&empty));
        assert!(Traversal::is_empty(&empty));
        assert!(Traversal::get(&empty, &empty.begin()).is_err());
    }
}
