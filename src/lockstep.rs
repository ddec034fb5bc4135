use std::iter::FusedIterator;

/// Drives a tuple of iterators one step at a time, all together.
///
/// Every call to `next` pulls from every inner iterator exactly once, in
/// tuple order. The first time any of them comes up empty, the whole
/// iterator stops for good and the items pulled on that step are dropped.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Lockstep<I> {
    iters: I,
    done: bool,
}

impl<I> Lockstep<I> {
    pub(crate) fn new(iters: I) -> Self {
        Self { iters, done: false }
    }
}

fn min_upper(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (None, o) | (o, None) => o,
    }
}

macro_rules! lockstep_impl {
    ($($I:ident $i:ident),+) => {
        impl<$($I: Iterator),+> Iterator for Lockstep<($($I,)+)> {
            type Item = ($($I::Item,)+);

            fn next(&mut self) -> Option<Self::Item> {
                if self.done {
                    return None;
                }

                let ($($i,)+) = &mut self.iters;
                $(let $i = $i.next();)+

                match ($($i,)+) {
                    ($(Some($i),)+) => Some(($($i,)+)),
                    _ => {
                        self.done = true;
                        None
                    },
                }
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                if self.done {
                    return (0, Some(0));
                }

                let ($($i,)+) = &self.iters;
                let mut lower = usize::MAX;
                let mut upper = None;

                $(
                    let (lo, hi) = $i.size_hint();
                    lower = lower.min(lo);
                    upper = min_upper(upper, hi);
                )+

                (lower, upper)
            }
        }

        impl<$($I: ExactSizeIterator),+> ExactSizeIterator for Lockstep<($($I,)+)> {}

        impl<$($I: Iterator),+> FusedIterator for Lockstep<($($I,)+)> {}
    };
}

lockstep_impl!(A a);
lockstep_impl!(A a, B b);
lockstep_impl!(A a, B b, C c);
lockstep_impl!(A a, B b, C c, D d);
lockstep_impl!(A a, B b, C c, D d, E e);
lockstep_impl!(A a, B b, C c, D d, E e, F f);
lockstep_impl!(A a, B b, C c, D d, E e, F f, G g);
lockstep_impl!(A a, B b, C c, D d, E e, F f, G g, H h);
lockstep_impl!(A a, B b, C c, D d, E e, F f, G g, H h, J j);
lockstep_impl!(A a, B b, C c, D d, E e, F f, G g, H h, J j, K k);
lockstep_impl!(A a, B b, C c, D d, E e, F f, G g, H h, J j, K k, L l);
lockstep_impl!(A a, B b, C c, D d, E e, F f, G g, H h, J j, K k, L l, M m);
