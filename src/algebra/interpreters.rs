//! Ready-made interpreters.

use std::collections::VecDeque;

use super::ListAlgebra;

/// Interprets a list as the ordered sequence of its (cloned) elements.
///
/// `empty` is the empty sequence; `cons` places the head in front of the
/// already-interpreted tail.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use sumlist::algebra::{self, List, Sequence};
///
/// let list = algebra::cons('x', algebra::cons('y', algebra::empty()));
/// assert_eq!(list.fold(&Sequence), VecDeque::from(vec!['x', 'y']));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequence;

impl<T: Clone> ListAlgebra<T> for Sequence {
    type Output = VecDeque<T>;

    fn empty(&self) -> Self::Output {
        VecDeque::new()
    }

    fn cons(&self, head: &T, mut tail: Self::Output) -> Self::Output {
        tail.push_front(head.clone());
        tail
    }
}

/// Interprets a list as its number of elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Length;

impl<T> ListAlgebra<T> for Length {
    type Output = usize;

    fn empty(&self) -> usize {
        0
    }

    fn cons(&self, _head: &T, tail: usize) -> usize {
        tail + 1
    }
}
