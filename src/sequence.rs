//! Capabilities describing the borrowed collections an adapter walks over.

use std::collections::{BTreeSet, LinkedList, VecDeque};

use crate::error::Error;

/// An ordered, finite collection that can be walked front to back.
///
/// Only forward traversal is required. Reads at an offset default to
/// walking from the start; collections with random access override `get`.
pub trait Sequence {
    type Item;
    type Iter<'s>: Iterator<Item = &'s Self::Item>
    where
        Self: 's;

    /// Number of steps from the start of this sequence to its end.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Self::Iter<'_>;

    /// The element `pos` steps from the start.
    fn get(&self, pos: usize) -> Option<&Self::Item> {
        self.iter().nth(pos)
    }
}

/// A sequence whose elements can be changed in place.
///
/// Collections that order by value, such as `BTreeSet`, only implement
/// `Sequence`.
pub trait SequenceMut: Sequence {
    type IterMut<'s>: Iterator<Item = &'s mut Self::Item>
    where
        Self: 's;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    fn get_mut(&mut self, pos: usize) -> Option<&mut Self::Item> {
        self.iter_mut().nth(pos)
    }
}

impl<T> Sequence for [T] {
    type Item = T;
    type Iter<'s> = std::slice::Iter<'s, T> where Self: 's;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    fn get(&self, pos: usize) -> Option<&T> {
        <[T]>::get(self, pos)
    }
}

impl<T> SequenceMut for [T] {
    type IterMut<'s> = std::slice::IterMut<'s, T> where Self: 's;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        <[T]>::iter_mut(self)
    }

    fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, pos)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Iter<'s> = std::slice::Iter<'s, T> where Self: 's;

    fn len(&self) -> usize {
        N
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn get(&self, pos: usize) -> Option<&T> {
        self.as_slice().get(pos)
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    type IterMut<'s> = std::slice::IterMut<'s, T> where Self: 's;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.as_mut_slice().iter_mut()
    }

    fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(pos)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Iter<'s> = std::slice::Iter<'s, T> where Self: 's;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn get(&self, pos: usize) -> Option<&T> {
        self.as_slice().get(pos)
    }
}

impl<T> SequenceMut for Vec<T> {
    type IterMut<'s> = std::slice::IterMut<'s, T> where Self: 's;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.as_mut_slice().iter_mut()
    }

    fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(pos)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Iter<'s> = std::collections::vec_deque::Iter<'s, T> where Self: 's;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn get(&self, pos: usize) -> Option<&T> {
        VecDeque::get(self, pos)
    }
}

impl<T> SequenceMut for VecDeque<T> {
    type IterMut<'s> = std::collections::vec_deque::IterMut<'s, T> where Self: 's;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        VecDeque::iter_mut(self)
    }

    fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, pos)
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;
    type Iter<'s> = std::collections::linked_list::Iter<'s, T> where Self: 's;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }
}

impl<T> SequenceMut for LinkedList<T> {
    type IterMut<'s> = std::collections::linked_list::IterMut<'s, T> where Self: 's;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        LinkedList::iter_mut(self)
    }
}

impl<T> Sequence for BTreeSet<T> {
    type Item = T;
    type Iter<'s> = std::collections::btree_set::Iter<'s, T> where Self: 's;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }
}

/// One slot of a combination: a borrowed sequence, either shared (`&S`) or
/// exclusive (`&mut S`).
///
/// Consuming a slot yields the sequence's elements with the slot's own
/// borrow, so a `&mut S` slot hands out `&mut` elements.
pub trait Source {
    type Seq: Sequence + ?Sized;
    type IntoElems: Iterator;

    fn seq(&self) -> &Self::Seq;
    fn into_elems(self) -> Self::IntoElems;
}

/// A slot that allows mutation of its sequence's elements.
pub trait SourceMut: Source {
    fn seq_mut(&mut self) -> &mut Self::Seq;
}

impl<'a, S: Sequence + ?Sized> Source for &'a S {
    type Seq = S;
    type IntoElems = S::Iter<'a>;

    fn seq(&self) -> &S {
        &**self
    }

    fn into_elems(self) -> Self::IntoElems {
        Sequence::iter(self)
    }
}

impl<'a, S: SequenceMut + ?Sized> Source for &'a mut S {
    type Seq = S;
    type IntoElems = S::IterMut<'a>;

    fn seq(&self) -> &S {
        &**self
    }

    fn into_elems(self) -> Self::IntoElems {
        SequenceMut::iter_mut(self)
    }
}

impl<'a, S: SequenceMut + ?Sized> SourceMut for &'a mut S {
    fn seq_mut(&mut self) -> &mut S {
        &mut **self
    }
}

/// Checked read of the element at `position` in the sequence bound to `slot`.
pub(crate) fn fetch<S>(seq: &S, slot: usize, position: usize) -> Result<&S::Item, Error>
where
    S: Sequence + ?Sized,
{
    seq.get(position).ok_or_else(|| Error::past_end(slot, position, seq.len()))
}

/// Checked mutable counterpart of `fetch`.
pub(crate) fn fetch_mut<S>(
    seq: &mut S,
    slot: usize,
    position: usize,
) -> Result<&mut S::Item, Error>
where
    S: SequenceMut + ?Sized,
{
    // NOTE: Length is taken up front, the mutable borrow below outlives any
    //       later use of `seq`.
    let len = seq.len();
    seq.get_mut(position).ok_or_else(|| Error::past_end(slot, position, len))
}
