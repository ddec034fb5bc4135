//! Lock-step combination of several borrowed sequences.

use crate::cursor::{Cursor, EndMarker, Positions};
use crate::error::Error;
use crate::lockstep::Lockstep;
use crate::sequence::{self, Sequence, SequenceMut, Source, SourceMut};
use crate::traversal::{Traversal, TraversalMut};

/// A fixed, non-empty tuple of sources.
///
/// Implemented for tuples of one to twelve `Source`s. There is no
/// implementation for `()`, so combining zero sources does not compile.
pub trait SourceSet {
    const ARITY: usize;

    type Positions: Positions;
    type Refs<'s>
    where
        Self: 's;
    type Iter<'s>: Iterator<Item = Self::Refs<'s>>
    where
        Self: 's;
    type IntoIter: Iterator;

    /// The start offset of every source.
    fn start(&self) -> Self::Positions;

    /// The end offset of every source.
    fn end(&self) -> Self::Positions;

    /// Length of the shortest source.
    fn len(&self) -> usize;

    fn fetch(&self, positions: &Self::Positions) -> Result<Self::Refs<'_>, Error>;
    fn lockstep(&self) -> Self::Iter<'_>;
    fn into_lockstep(self) -> Self::IntoIter;
}

/// A source tuple whose every slot allows mutation.
pub trait SourceSetMut: SourceSet {
    type RefsMut<'s>
    where
        Self: 's;
    type IterMut<'s>: Iterator<Item = Self::RefsMut<'s>>
    where
        Self: 's;

    fn fetch_mut(
        &mut self,
        positions: &Self::Positions,
    ) -> Result<Self::RefsMut<'_>, Error>;
    fn lockstep_mut(&mut self) -> Self::IterMut<'_>;
}

macro_rules! source_set_impl {
    ($n:literal; $($R:ident $r:ident $idx:tt),+) => {
        impl<$($R: Source),+> SourceSet for ($($R,)+) {
            const ARITY: usize = $n;

            type Positions = [usize; $n];
            type Refs<'s> = ($(&'s <$R::Seq as Sequence>::Item,)+) where Self: 's;
            type Iter<'s> = Lockstep<($(<$R::Seq as Sequence>::Iter<'s>,)+)> where Self: 's;
            type IntoIter = Lockstep<($($R::IntoElems,)+)>;

            fn start(&self) -> Self::Positions {
                [0; $n]
            }

            fn end(&self) -> Self::Positions {
                let ($($r,)+) = self;
                [$($r.seq().len(),)+]
            }

            fn len(&self) -> usize {
                let ($($r,)+) = self;
                let mut len = usize::MAX;
                $(len = len.min($r.seq().len());)+
                len
            }

            fn fetch(&self, positions: &Self::Positions) -> Result<Self::Refs<'_>, Error> {
                let ($($r,)+) = self;
                Ok(($(sequence::fetch($r.seq(), $idx, positions[$idx])?,)+))
            }

            fn lockstep(&self) -> Self::Iter<'_> {
                let ($($r,)+) = self;
                Lockstep::new(($($r.seq().iter(),)+))
            }

            fn into_lockstep(self) -> Self::IntoIter {
                let ($($r,)+) = self;
                Lockstep::new(($($r.into_elems(),)+))
            }
        }

        impl<$($R: SourceMut),+> SourceSetMut for ($($R,)+)
        where
            $($R::Seq: SequenceMut,)+
        {
            type RefsMut<'s> = ($(&'s mut <$R::Seq as Sequence>::Item,)+) where Self: 's;
            type IterMut<'s> = Lockstep<($(<$R::Seq as SequenceMut>::IterMut<'s>,)+)>
            where
                Self: 's;

            fn fetch_mut(
                &mut self,
                positions: &Self::Positions,
            ) -> Result<Self::RefsMut<'_>, Error> {
                let ($($r,)+) = self;
                Ok(($(sequence::fetch_mut($r.seq_mut(), $idx, positions[$idx])?,)+))
            }

            fn lockstep_mut(&mut self) -> Self::IterMut<'_> {
                let ($($r,)+) = self;
                Lockstep::new(($($r.seq_mut().iter_mut(),)+))
            }
        }
    };
}

source_set_impl!(1; A a 0);
source_set_impl!(2; A a 0, B b 1);
source_set_impl!(3; A a 0, B b 1, C c 2);
source_set_impl!(4; A a 0, B b 1, C c 2, D d 3);
source_set_impl!(5; A a 0, B b 1, C c 2, D d 3, E e 4);
source_set_impl!(6; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5);
source_set_impl!(7; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6);
source_set_impl!(8; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7);
source_set_impl!(9; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, J j 8);
source_set_impl!(10; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, J j 8, K k 9);
source_set_impl!(11; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, J j 8, K k 9, L l 10);
source_set_impl!(
    12; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, J j 8, K k 9, L l 10, M m 11
);

/// Walks several borrowed sequences together, producing one tuple of
/// element references per step.
///
/// The combination is as long as its shortest source; the tail of any
/// longer source is never visited. Sources are borrowed, never copied, and
/// the set of sources is fixed once the combiner is built. Traversals do
/// not change the combiner, so it can be walked any number of times.
///
/// ```
/// use tandem::combine;
///
/// let nums = vec![1, 2, 3];
/// let names = ["a", "b"];
///
/// let pairs: Vec<_> = combine((&nums, &names)).into_iter().collect();
/// assert_eq!(pairs, vec![(&1, &"a"), (&2, &"b")]);
/// ```
///
/// A combiner always borrows its sources, so there is no default one:
///
/// ```compile_fail
/// use tandem::Combiner;
///
/// let combiner = Combiner::<(&Vec<i32>,)>::default();
/// ```
#[derive(Debug, Clone)]
pub struct Combiner<S> {
    sources: S,
}

/// Combines a tuple of borrowed sequences into a `Combiner`.
///
/// Each slot may be a shared (`&S`) or exclusive (`&mut S`) borrow, and
/// slots may hold different element types. At least one slot is required:
///
/// ```compile_fail
/// let nothing = tandem::combine(());
/// ```
pub fn combine<S: SourceSet>(sources: S) -> Combiner<S> {
    Combiner::new(sources)
}

impl<S: SourceSet> Combiner<S> {
    pub fn new(sources: S) -> Self {
        log::trace!("combining {} sources, shortest has {} elements", S::ARITY, sources.len());
        Self { sources }
    }

    /// Number of combined sources.
    pub fn arity(&self) -> usize {
        S::ARITY
    }

    /// Number of tuples a full traversal produces: the length of the
    /// shortest source.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Same as `Traversal::iter`, without needing the trait in scope.
    pub fn iter(&self) -> S::Iter<'_> {
        self.sources.lockstep()
    }

    /// Releases the borrowed sources.
    pub fn into_sources(self) -> S {
        self.sources
    }
}

impl<S: SourceSetMut> Combiner<S> {
    /// Walks the sources with exclusive access to each element. Writes
    /// through the produced references land in the sources themselves.
    ///
    /// Same as `TraversalMut::iter_mut`, without needing the trait in scope.
    pub fn iter_mut(&mut self) -> S::IterMut<'_> {
        self.sources.lockstep_mut()
    }
}

impl<S: SourceSet> Traversal for Combiner<S> {
    type Positions = S::Positions;
    type Refs<'s> = S::Refs<'s> where Self: 's;
    type Iter<'s> = S::Iter<'s> where Self: 's;
    type IntoIter = S::IntoIter;

    fn begin(&self) -> Cursor<Self::Positions> {
        Cursor::new(self.sources.start())
    }

    fn end(&self) -> EndMarker<Self::Positions> {
        EndMarker::new(self.sources.end())
    }

    fn get(&self, cursor: &Cursor<Self::Positions>) -> Result<Self::Refs<'_>, Error> {
        self.sources.fetch(&cursor.positions)
    }

    fn len(&self) -> usize {
        self.sources.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.sources.lockstep()
    }

    fn traverse(self) -> Self::IntoIter {
        self.sources.into_lockstep()
    }
}

impl<S: SourceSetMut> TraversalMut for Combiner<S> {
    type RefsMut<'s> = S::RefsMut<'s> where Self: 's;
    type IterMut<'s> = S::IterMut<'s> where Self: 's;

    fn get_mut(
        &mut self,
        cursor: &Cursor<Self::Positions>,
    ) -> Result<Self::RefsMut<'_>, Error> {
        self.sources.fetch_mut(&cursor.positions)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.sources.lockstep_mut()
    }
}

impl<'a, S: SourceSet> Traversal for &'a Combiner<S> {
    type Positions = S::Positions;
    type Refs<'s> = S::Refs<'s> where Self: 's;
    type Iter<'s> = S::Iter<'s> where Self: 's;
    type IntoIter = S::Iter<'a>;

    fn begin(&self) -> Cursor<Self::Positions> {
        Traversal::begin(&**self)
    }

    fn end(&self) -> EndMarker<Self::Positions> {
        Traversal::end(&**self)
    }

    fn get(&self, cursor: &Cursor<Self::Positions>) -> Result<Self::Refs<'_>, Error> {
        Traversal::get(&**self, cursor)
    }

    fn len(&self) -> usize {
        self.sources.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.sources.lockstep()
    }

    fn traverse(self) -> Self::IntoIter {
        self.sources.lockstep()
    }
}

impl<'a, S: SourceSetMut> Traversal for &'a mut Combiner<S> {
    type Positions = S::Positions;
    type Refs<'s> = S::Refs<'s> where Self: 's;
    type Iter<'s> = S::Iter<'s> where Self: 's;
    type IntoIter = S::IterMut<'a>;

    fn begin(&self) -> Cursor<Self::Positions> {
        Traversal::begin(&**self)
    }

    fn end(&self) -> EndMarker<Self::Positions> {
        Traversal::end(&**self)
    }

    fn get(&self, cursor: &Cursor<Self::Positions>) -> Result<Self::Refs<'_>, Error> {
        Traversal::get(&**self, cursor)
    }

    fn len(&self) -> usize {
        self.sources.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.sources.lockstep()
    }

    fn traverse(self) -> Self::IntoIter {
        self.sources.lockstep_mut()
    }
}

impl<'a, S: SourceSetMut> TraversalMut for &'a mut Combiner<S> {
    type RefsMut<'s> = S::RefsMut<'s> where Self: 's;
    type IterMut<'s> = S::IterMut<'s> where Self: 's;

    fn get_mut(
        &mut self,
        cursor: &Cursor<Self::Positions>,
    ) -> Result<Self::RefsMut<'_>, Error> {
        TraversalMut::get_mut(&mut **self, cursor)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.sources.lockstep_mut()
    }
}

impl<S: SourceSet> IntoIterator for Combiner<S> {
    type Item = <S::IntoIter as Iterator>::Item;
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.into_lockstep()
    }
}

impl<'c, S: SourceSet> IntoIterator for &'c Combiner<S> {
    type Item = S::Refs<'c>;
    type IntoIter = S::Iter<'c>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.lockstep()
    }
}

impl<'c, S: SourceSetMut> IntoIterator for &'c mut Combiner<S> {
    type Item = S::RefsMut<'c>;
    type IntoIter = S::IterMut<'c>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.lockstep_mut()
    }
}
