//! Bridges between the object-algebra encoding and the other two.
//!
//! A tagged-union list or a Scott-encoded list can be folded by any
//! algebra, and [`ToTagged`] / [`ToScott`] are algebras that rebuild a list
//! in the other encodings. Together they give conversions in every
//! direction without touching elements more than once.

use super::{List, ListAlgebra};

#[cfg(feature = "scott")]
use crate::scott;
#[cfg(feature = "tagged")]
use crate::tagged;

/// Interprets a list as a [`tagged::List`].
///
/// # Examples
///
/// ```rust
/// use sumlist::algebra::{self, List, ToTagged};
///
/// let list = algebra::cons(1, algebra::cons(2, algebra::empty()));
/// let tagged = list.fold(&ToTagged);
/// assert_eq!(tagged.to_vec(), vec![1, 2]);
/// ```
#[cfg(feature = "tagged")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToTagged;

#[cfg(feature = "tagged")]
impl<T: Clone> ListAlgebra<T> for ToTagged {
    type Output = tagged::List<T>;

    fn empty(&self) -> Self::Output {
        tagged::empty()
    }

    fn cons(&self, head: &T, tail: Self::Output) -> Self::Output {
        tagged::cons(head.clone(), tail)
    }
}

/// Interprets a list as a [`scott::List`].
#[cfg(feature = "scott")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToScott;

#[cfg(feature = "scott")]
impl<T: Clone + 'static> ListAlgebra<T> for ToScott {
    type Output = scott::List<T>;

    fn empty(&self) -> Self::Output {
        scott::empty()
    }

    fn cons(&self, head: &T, tail: Self::Output) -> Self::Output {
        scott::cons(head.clone(), tail)
    }
}

/// Folds head to tail over borrowed elements without recursing.
#[cfg(feature = "tagged")]
impl<T> List<T> for tagged::List<T> {
    fn fold<L>(&self, algebra: &L) -> L::Output
    where
        L: ListAlgebra<T> + ?Sized,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(algebra.empty(), |tail, head| algebra.cons(head, tail))
    }
}

/// Folds by dispatching: the empty handler interprets `Empty`, the cons
/// handler interprets the tail first and then the head.
#[cfg(feature = "scott")]
impl<T> List<T> for scott::List<T> {
    fn fold<L>(&self, algebra: &L) -> L::Output
    where
        L: ListAlgebra<T> + ?Sized,
    {
        self.case_of(
            || algebra.empty(),
            |head, tail| algebra.cons(head, tail.fold(algebra)),
        )
    }
}

#[cfg(all(test, feature = "tagged", feature = "scott"))]
mod tests {
    use super::*;
    use crate::algebra::{self, Length};
    use rstest::rstest;

    #[rstest]
    fn round_trip_through_every_encoding() {
        let original = algebra::cons(3, algebra::cons(2, algebra::empty()));
        let as_tagged = original.fold(&ToTagged);
        let as_scott = as_tagged.fold(&ToScott);
        let back = algebra::to_vec(&as_scott);
        assert_eq!(back, vec![3, 2]);
    }

    #[rstest]
    fn tagged_and_scott_lists_accept_any_algebra() {
        let tagged_list: tagged::List<i32> = (1..=5).collect();
        let scott_list: scott::List<i32> = (1..=5).collect();
        assert_eq!(tagged_list.fold(&Length), 5);
        assert_eq!(scott_list.fold(&Length), 5);
    }

    #[rstest]
    fn algebra_map_over_other_encodings() {
        let scott_list = scott::cons(3, scott::cons(2, scott::empty()));
        let squares = algebra::map(&scott_list, |n: &i32| n * n);
        assert_eq!(algebra::to_vec(&squares), vec![9, 4]);
    }
}
