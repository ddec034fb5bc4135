//! Running indices over a single sequence or a combination.

use std::fmt::Debug;
use std::iter::FusedIterator;

use num_traits::{PrimInt, Signed};

use crate::config::IndexConfig;
use crate::cursor::{Cursor, EndMarker, Positions};
use crate::error::Error;
use crate::traversal::{Traversal, TraversalMut};

/// Integer types usable as a running index. Always signed, so a negative
/// step can count down.
pub trait IndexValue: PrimInt + Signed + Debug {}

impl<T: PrimInt + Signed + Debug> IndexValue for T {}

/// Pairs every element of a traversal with a running index.
///
/// The index starts at `start` and moves by `step` per element. It never
/// affects how far the traversal goes: the inner traversal alone decides
/// when to stop. When wrapping a `Combiner`, each element is the whole
/// tuple, so items look like `(index, (a, b, ..))`.
///
/// ```
/// use tandem::{combine, index, index_from};
///
/// let letters = ["x", "y", "z"];
/// let counted: Vec<_> = index_from(&letters, 10, -1).into_iter().collect();
/// assert_eq!(counted, vec![(10, &"x"), (9, &"y"), (8, &"z")]);
///
/// let nums = [1, 2];
/// let tens = [10, 20, 30];
/// let zipped: Vec<_> = index(combine((&nums, &tens))).into_iter().collect();
/// assert_eq!(zipped, vec![(0, (&1, &10)), (1, (&2, &20))]);
/// ```
///
/// A combiner can also be indexed by reference and used again afterwards.
///
/// ```
/// use tandem::{combine, index};
///
/// let nums = [1, 2, 3];
/// let combiner = combine((&nums,));
/// assert_eq!(index(&combiner).len(), 3);
/// assert_eq!(combiner.len(), 3);
/// ```
///
/// There is nothing to index without an inner traversal, so an indexer has
/// no default:
///
/// ```compile_fail
/// use tandem::Indexer;
///
/// let indexer = Indexer::<&Vec<i32>>::default();
/// ```
#[derive(Debug, Clone)]
pub struct Indexer<T, I = isize> {
    inner: T,
    start: I,
    step: I,
}

/// Indexes a traversal starting at 0, counting up by 1.
pub fn index<T: Traversal>(inner: T) -> Indexer<T> {
    Indexer::new(inner, 0, 1)
}

/// Indexes a traversal with an explicit start and step.
pub fn index_from<T: Traversal, I: IndexValue>(inner: T, start: I, step: I) -> Indexer<T, I> {
    Indexer::new(inner, start, step)
}

/// Indexes a traversal using start and step from configuration.
pub fn index_with<T: Traversal, I: IndexValue>(inner: T, config: IndexConfig<I>) -> Indexer<T, I> {
    Indexer::new(inner, config.start, config.step)
}

impl<T: Traversal, I: IndexValue> Indexer<T, I> {
    pub fn new(inner: T, start: I, step: I) -> Self {
        log::trace!(
            "indexing {} elements, starting at {:?} with step {:?}",
            inner.len(),
            start,
            step,
        );
        Self { inner, start, step }
    }

    pub fn start(&self) -> I {
        self.start
    }

    pub fn step(&self) -> I {
        self.step
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn begin(&self) -> IndexCursor<T::Positions, I> {
        IndexCursor {
            inner: self.inner.begin(),
            index: Some(self.start),
            step: self.step,
        }
    }

    /// The inner traversal's end. Index values play no part in detecting
    /// the end, which keeps empty sources and negative steps uniform.
    pub fn end(&self) -> EndMarker<T::Positions> {
        self.inner.end()
    }

    pub fn get(&self, cursor: &IndexCursor<T::Positions, I>) -> Result<(I, T::Refs<'_>), Error> {
        let refs = self.inner.get(&cursor.inner)?;
        let index = cursor.index.ok_or(Error::IndexOverflow)?;
        Ok((index, refs))
    }

    pub fn iter(&self) -> Indexed<T::Iter<'_>, I> {
        Indexed::new(self.inner.iter(), self.start, self.step)
    }
}

impl<T: TraversalMut, I: IndexValue> Indexer<T, I> {
    pub fn get_mut(
        &mut self,
        cursor: &IndexCursor<T::Positions, I>,
    ) -> Result<(I, T::RefsMut<'_>), Error> {
        let refs = self.inner.get_mut(&cursor.inner)?;
        let index = cursor.index.ok_or(Error::IndexOverflow)?;
        Ok((index, refs))
    }

    pub fn iter_mut(&mut self) -> Indexed<T::IterMut<'_>, I> {
        Indexed::new(self.inner.iter_mut(), self.start, self.step)
    }
}

impl<T: Traversal, I: IndexValue> IntoIterator for Indexer<T, I> {
    type Item = (I, <T::IntoIter as Iterator>::Item);
    type IntoIter = Indexed<T::IntoIter, I>;

    fn into_iter(self) -> Self::IntoIter {
        Indexed::new(self.inner.traverse(), self.start, self.step)
    }
}

impl<'x, T: Traversal, I: IndexValue> IntoIterator for &'x Indexer<T, I> {
    type Item = (I, T::Refs<'x>);
    type IntoIter = Indexed<T::Iter<'x>, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'x, T: TraversalMut, I: IndexValue> IntoIterator for &'x mut Indexer<T, I> {
    type Item = (I, T::RefsMut<'x>);
    type IntoIter = Indexed<T::IterMut<'x>, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An inner cursor plus the running index at its position.
///
/// Advancing always moves the inner cursor first, then adds the step to
/// the index. An index that no longer fits its type is kept as overflowed,
/// and reads through the cursor report `Error::IndexOverflow`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexCursor<P, I> {
    inner: Cursor<P>,
    index: Option<I>,
    step: I,
}

impl<P: Positions, I: IndexValue> IndexCursor<P, I> {
    pub fn advance(&mut self) {
        self.inner.advance();
        self.index = match self.index {
            Some(index) => {
                let next = index.checked_add(&self.step);
                if next.is_none() {
                    log::debug!("running index {:?} overflowed when adding {:?}", index, self.step);
                }
                next
            },
            None => None,
        };
    }

    /// The running index, or `None` once it has overflowed.
    pub fn index(&self) -> Option<I> {
        self.index
    }

    pub fn inner(&self) -> &Cursor<P> {
        &self.inner
    }
}

impl<P: Positions, I> PartialEq<EndMarker<P>> for IndexCursor<P, I> {
    fn eq(&self, end: &EndMarker<P>) -> bool {
        self.inner.is_end(end)
    }
}

impl<P: Positions, I> PartialEq<IndexCursor<P, I>> for EndMarker<P> {
    fn eq(&self, cursor: &IndexCursor<P, I>) -> bool {
        cursor.inner.is_end(self)
    }
}

/// Iterator over `(index, item)` pairs.
///
/// # Panics
///
/// Panics if an item would be produced after the running index has
/// overflowed. An overflow computed after the final item is never observed.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Indexed<It, I> {
    iter: It,
    index: Option<I>,
    step: I,
}

impl<It, I> Indexed<It, I> {
    fn new(iter: It, start: I, step: I) -> Self {
        Self { iter, index: Some(start), step }
    }
}

impl<It: Iterator, I: IndexValue> Iterator for Indexed<It, I> {
    type Item = (I, It::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;

        let index = match self.index {
            Some(index) => index,
            None => panic!("running index overflowed {}", std::any::type_name::<I>()),
        };

        self.index = index.checked_add(&self.step);
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<It: ExactSizeIterator, I: IndexValue> ExactSizeIterator for Indexed<It, I> {}

impl<It: FusedIterator, I: IndexValue> FusedIterator for Indexed<It, I> {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;

    use rand::Rng;
    use str_macro::str;

    use crate::combiner::combine;

    #[test]
    fn default_start_and_step() {
        let letters = vec!["x", "y", "z"];

        let produced: Vec<_> = index(&letters).into_iter().collect();
        assert_eq!(produced, vec![(0, &"x"), (1, &"y"), (2, &"z")]);
    }

    #[test]
    fn counting_down() {
        let letters = vec!["x", "y", "z"];

        let indexer = index_from(&letters, 10, -1);
        assert_eq!(indexer.start(), 10);
        assert_eq!(indexer.step(), -1);

        let produced: Vec<_> = indexer.iter().collect();
        assert_eq!(produced, vec![(10, &"x"), (9, &"y"), (8, &"z")]);
    }

    #[test]
    fn combiner_is_truncated_before_indexing() {
        let a = [1, 2];
        let b = [10, 20, 30];

        let indexer = index(combine((&a, &b)));
        assert_eq!(indexer.len(), 2);

        let produced: Vec<_> = indexer.into_iter().collect();
        assert_eq!(produced, vec![(0, (&1, &10)), (1, (&2, &20))]);
    }

    #[test]
    fn zero_step_tags_every_element() {
        let words: VecDeque<_> = vec![str!("a"), str!("b"), str!("c"), str!("d")].into();

        let tags: Vec<i64> = index_from(&words, 7i64, 0).iter().map(|(i, _)| i).collect();
        assert_eq!(tags, vec![7, 7, 7, 7]);
    }

    #[test]
    fn cursor_protocol() {
        let chars = vec!['a', 'b', 'c'];
        let indexer = index_from(&chars, 5, 2);

        let end = indexer.end();
        let mut cursor = indexer.begin();
        let mut produced = Vec::new();

        while cursor != end {
            produced.push(indexer.get(&cursor).unwrap());
            cursor.advance();
        }

        assert_eq!(produced, vec![(5, &'a'), (7, &'b'), (9, &'c')]);
        assert_eq!(cursor.index(), Some(11));
        assert_eq!(cursor.inner().positions(), &[3]);
        assert!(end == cursor);
        assert_eq!(
            indexer.get(&cursor),
            Err(Error::PastEnd { slot: 0, position: 3, len: 3 }),
        );
    }

    #[test]
    fn combiner_cursor_protocol() {
        let names = vec![str!("ann"), str!("bo")];
        let ages = [31u8, 47, 52];

        let indexer = index_from(combine((&names, &ages)), 1, 1);
        let end = indexer.end();
        let mut cursor = indexer.begin();
        let mut produced = Vec::new();

        while cursor != end {
            let (i, (name, age)) = indexer.get(&cursor).unwrap();
            produced.push(format!("{}:{}:{}", i, name, age));
            cursor.advance();
        }

        assert_eq!(produced, vec!["1:ann:31", "2:bo:47"]);
    }

    #[test]
    fn empty_source() {
        let empty: Vec<u8> = Vec::new();

        let indexer = index_from(&empty, 0, -3);
        assert!(indexer.begin() == indexer.end());
        assert!(indexer.is_empty());
        assert_eq!(indexer.iter().count(), 0);
    }

    #[test]
    fn mutation_through_indexer() {
        let mut scores = vec![0; 4];

        let mut indexer = index_from(&mut scores, 100, -10);
        for (i, score) in indexer.iter_mut() {
            *score = i;
        }

        let mut cursor = indexer.begin();
        cursor.advance();
        let (i, score) = indexer.get_mut(&cursor).unwrap();
        *score += i;

        assert_eq!(scores, vec![100, 180, 80, 70]);
    }

    #[test]
    fn mutation_through_indexed_combiner() {
        let mut totals = vec![0usize; 3];
        let words = ["a", "bb", "ccc", "dddd"];

        for (i, (total, word)) in index(combine((&mut totals, &words))) {
            *total = i as usize * 10 + word.len();
        }

        assert_eq!(totals, vec![1, 12, 23]);

        let mut indexer = index(combine((&mut totals,)));
        for (_, (total,)) in &mut indexer {
            *total += 1;
        }
        let seen: Vec<_> = (&indexer).into_iter().map(|(i, (t,))| (i, *t)).collect();
        assert_eq!(seen, vec![(0, 2), (1, 13), (2, 24)]);
    }

    #[test]
    fn borrowed_combiner_stays_usable() {
        let names = vec![str!("ann"), str!("bo"), str!("cy")];
        let ages = [31u8, 47];
        let combiner = combine((&names, &ages));

        let first: Vec<_> = index(&combiner).into_iter().collect();
        let second: Vec<_> = index_from(&combiner, 10, -5).into_iter().collect();

        assert_eq!(first, vec![(0, (&names[0], &31)), (1, (&names[1], &47))]);
        assert_eq!(second, vec![(10, (&names[0], &31)), (5, (&names[1], &47))]);
        assert_eq!(combiner.len(), 2);

        let indexer = index(&combiner);
        let mut cursor = indexer.begin();
        cursor.advance();
        assert_eq!(indexer.get(&cursor), Ok((1, (&names[1], &47))));
    }

    #[test]
    fn mutation_through_borrowed_combiner() {
        let mut totals = vec![0i32; 3];
        let weights = [2, 3, 4];
        let mut combiner = combine((&mut totals, &weights));

        for (i, (total, weight)) in index_from(&mut combiner, 1, 1) {
            *total = i * *weight;
        }

        let mut indexer = index(&mut combiner);
        let cursor = indexer.begin();
        let (_, (total, _)) = indexer.get_mut(&cursor).unwrap();
        *total = -1;

        assert_eq!(combiner.len(), 3);
        drop(combiner);
        assert_eq!(totals, vec![-1, 6, 12]);
    }

    #[test]
    fn retraversal_is_identical() {
        let a = vec![2.5, 3.5];
        let indexer = index_from(&a, -4, 3);

        let first: Vec<_> = indexer.iter().collect();
        let second: Vec<_> = indexer.iter().collect();
        assert_eq!(first, second);
        assert_eq!(indexer.begin(), indexer.begin());
    }

    #[test]
    fn overflowing_cursor_reports_error() {
        let a = [1, 2, 3];
        let indexer = index_from(&a, i8::MAX - 1, 1);

        let mut cursor = indexer.begin();
        cursor.advance();
        assert_eq!(indexer.get(&cursor), Ok((i8::MAX, &2)));

        cursor.advance();
        assert_eq!(cursor.index(), None);
        assert_eq!(indexer.get(&cursor), Err(Error::IndexOverflow));

        // Staying overflowed does not prevent reaching the end.
        cursor.advance();
        assert!(cursor == indexer.end());
    }

    #[test]
    fn overflow_after_last_element_is_unobserved() {
        let a = [1, 2];

        let produced: Vec<_> = index_from(&a, i8::MIN + 1, -1).into_iter().collect();
        assert_eq!(produced, vec![(i8::MIN + 1, &1), (i8::MIN, &2)]);
    }

    #[test]
    #[should_panic(expected = "running index overflowed")]
    fn overflowing_iterator_panics() {
        let a = [1, 2, 3];
        index_from(&a, i8::MAX - 1, 1).into_iter().for_each(drop);
    }

    #[test]
    fn config_supplies_start_and_step() {
        let a = ["p", "q"];

        let config = IndexConfig { start: 3i16, step: 4 };
        let produced: Vec<_> = index_with(&a, config).into_iter().collect();
        assert_eq!(produced, vec![(3, &"p"), (7, &"q")]);

        let produced: Vec<_> = index_with(&a, IndexConfig::<i32>::default()).into_iter().collect();
        assert_eq!(produced, vec![(0, &"p"), (1, &"q")]);
    }

    #[test]
    fn random_start_and_step() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let len = rng.gen_range(0usize, 30usize);
            let source: Vec<u16> = (0..len).map(|_| rng.gen()).collect();
            let start: i64 = rng.gen_range(-1000i64, 1000i64);
            let step: i64 = rng.gen_range(-50i64, 50i64);

            let indexer = index_from(&source, start, step);
            assert_eq!(indexer.iter().len(), len);

            for (n, (i, x)) in indexer.iter().enumerate() {
                assert_eq!(i, start + n as i64 * step);
                assert_eq!(*x, source[n]);
            }
        }
    }
}
