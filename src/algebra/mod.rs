//! Object-algebra list.
//!
//! A list is represented by how it folds. [`ListAlgebra`] describes an
//! interpreter: one method per variant, producing a result type the
//! interpreter chooses. A [`List`] is anything that, given any algebra,
//! produces that algebra's result.
//!
//! The `cons` method receives the tail *already interpreted*. The recursion
//! therefore lives inside each list's `fold`, and operations written as
//! algebras ([`map`], [`to_vec`]) contain no explicit recursion.
//!
//! # Examples
//!
//! ```rust
//! use sumlist::algebra::{self, Length};
//! use sumlist::algebra::List as _;
//!
//! let numbers = algebra::cons(3, algebra::cons(2, algebra::empty()));
//! let squares = algebra::map(&numbers, |n: &i32| n * n);
//! assert_eq!(algebra::to_vec(&squares), vec![9, 4]);
//!
//! // The same value, a different interpreter
//! assert_eq!(numbers.fold(&Length), 2);
//! ```
//!
//! # Writing a list directly
//!
//! A list does not have to be assembled from [`empty`] and [`cons`]. Any
//! type that implements [`List`] by driving the algebra itself works the
//! same way with every operation:
//!
//! ```rust
//! use sumlist::algebra::{self, List, ListAlgebra};
//!
//! struct ThreeTwo;
//!
//! impl List<i32> for ThreeTwo {
//!     fn fold<L>(&self, algebra: &L) -> L::Output
//!     where
//!         L: ListAlgebra<i32> + ?Sized,
//!     {
//!         algebra.cons(&3, algebra.cons(&2, algebra.empty()))
//!     }
//! }
//!
//! let squares = algebra::map(ThreeTwo, |n: &i32| n * n);
//! assert_eq!(algebra::to_vec(&squares), vec![9, 4]);
//! ```
//!
//! # Laziness
//!
//! Nothing is evaluated until an algebra is supplied, and every fold
//! re-evaluates the structure. [`map`] composes the mapping into whichever
//! algebra is eventually supplied.
//!
//! # Recursion Depth
//!
//! Folding a list built from nested [`cons`] calls recurses once per node,
//! as does folding a `scott::List`. Folding a slice, a `Vec` or a
//! `tagged::List` is iterative.

mod interop;
mod interpreters;

use std::marker::PhantomData;

#[cfg(feature = "scott")]
pub use interop::ToScott;
#[cfg(feature = "tagged")]
pub use interop::ToTagged;
pub use interpreters::{Length, Sequence};

/// An interpreter for lists: one method per variant.
///
/// The result type is chosen by the algebra, so one list can be
/// interpreted into any number of different results.
///
/// # Examples
///
/// ```rust
/// use sumlist::algebra::{self, List, ListAlgebra};
///
/// struct Total;
///
/// impl ListAlgebra<i32> for Total {
///     type Output = i32;
///
///     fn empty(&self) -> i32 {
///         0
///     }
///
///     fn cons(&self, head: &i32, tail: i32) -> i32 {
///         head + tail
///     }
/// }
///
/// let numbers = algebra::cons(1, algebra::cons(2, algebra::cons(3, algebra::empty())));
/// assert_eq!(numbers.fold(&Total), 6);
/// ```
pub trait ListAlgebra<T> {
    /// The type every list is interpreted into.
    type Output;

    /// Interprets the empty list.
    fn empty(&self) -> Self::Output;

    /// Interprets a head followed by an already-interpreted tail.
    fn cons(&self, head: &T, tail: Self::Output) -> Self::Output;
}

/// A list of `T`, represented as its fold.
///
/// `fold` is generic in the algebra, so the caller picks the result type at
/// every call.
pub trait List<T> {
    /// Interprets this list with `algebra`.
    fn fold<L>(&self, algebra: &L) -> L::Output
    where
        L: ListAlgebra<T> + ?Sized;
}

/// The empty list. Folding it yields `algebra.empty()`.
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

/// A head in front of a tail list. Folding it yields
/// `algebra.cons(&head, tail.fold(algebra))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cons<T, Tail> {
    head: T,
    tail: Tail,
}

/// A list whose elements are those of `list` passed through `function`.
///
/// Created by [`map`].
pub struct Mapped<L, F, A> {
    list: L,
    function: F,
    marker: PhantomData<fn(&A)>,
}

/// Returns the empty list.
#[must_use]
pub const fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

/// Returns a list with `head` in front of `tail`.
#[must_use]
pub const fn cons<T, Tail>(head: T, tail: Tail) -> Cons<T, Tail>
where
    Tail: List<T>,
{
    Cons { head, tail }
}

/// Returns a list with every element `x` replaced by `function(x)`.
///
/// The result folds `list` with an algebra whose `cons` combines
/// `function(head)` with the already-interpreted tail through the caller's
/// algebra, and whose `empty` is the caller's `empty`. No element is visited
/// until the result is folded.
pub const fn map<A, B, L, F>(list: L, function: F) -> Mapped<L, F, A>
where
    L: List<A>,
    F: Fn(&A) -> B,
{
    Mapped {
        list,
        function,
        marker: PhantomData,
    }
}

/// Materializes the list into a `Vec`, head first.
///
/// Folds with [`Sequence`]: the empty list becomes an empty sequence, and
/// each head is placed in front of its interpreted tail.
///
/// # Examples
///
/// ```rust
/// use sumlist::algebra;
///
/// assert!(algebra::to_vec(&algebra::empty::<u8>()).is_empty());
/// assert_eq!(algebra::to_vec(&vec!['a', 'b']), vec!['a', 'b']);
/// ```
pub fn to_vec<T, L>(list: &L) -> Vec<T>
where
    T: Clone,
    L: List<T> + ?Sized,
{
    Vec::from(list.fold(&Sequence))
}

// =============================================================================
// List Implementations
// =============================================================================

impl<T> List<T> for Empty<T> {
    fn fold<L>(&self, algebra: &L) -> L::Output
    where
        L: ListAlgebra<T> + ?Sized,
    {
        algebra.empty()
    }
}

impl<T, Tail> List<T> for Cons<T, Tail>
where
    Tail: List<T>,
{
    fn fold<L>(&self, algebra: &L) -> L::Output
    where
        L: ListAlgebra<T> + ?Sized,
    {
        algebra.cons(&self.head, self.tail.fold(algebra))
    }
}

impl<A, B, L, F> List<B> for Mapped<L, F, A>
where
    L: List<A>,
    F: Fn(&A) -> B,
{
    fn fold<Target>(&self, algebra: &Target) -> Target::Output
    where
        Target: ListAlgebra<B> + ?Sized,
    {
        self.list.fold(&MapAlgebra {
            target: algebra,
            function: &self.function,
            marker: PhantomData,
        })
    }
}

/// Interprets a list of `A` by mapping each head into `B` and handing it to
/// the target algebra.
struct MapAlgebra<'a, Target: ?Sized, F, B> {
    target: &'a Target,
    function: &'a F,
    marker: PhantomData<fn() -> B>,
}

impl<A, B, Target, F> ListAlgebra<A> for MapAlgebra<'_, Target, F, B>
where
    Target: ListAlgebra<B> + ?Sized,
    F: Fn(&A) -> B,
{
    type Output = Target::Output;

    fn empty(&self) -> Self::Output {
        self.target.empty()
    }

    fn cons(&self, head: &A, tail: Self::Output) -> Self::Output {
        self.target.cons(&(self.function)(head), tail)
    }
}

impl<T, L> List<T> for &L
where
    L: List<T> + ?Sized,
{
    fn fold<Algebra>(&self, algebra: &Algebra) -> Algebra::Output
    where
        Algebra: ListAlgebra<T> + ?Sized,
    {
        (**self).fold(algebra)
    }
}

impl<T> List<T> for [T] {
    fn fold<L>(&self, algebra: &L) -> L::Output
    where
        L: ListAlgebra<T> + ?Sized,
    {
        self.iter()
            .rev()
            .fold(algebra.empty(), |tail, head| algebra.cons(head, tail))
    }
}

impl<T> List<T> for Vec<T> {
    fn fold<L>(&self, algebra: &L) -> L::Output
    where
        L: ListAlgebra<T> + ?Sized,
    {
        self.as_slice().fold(algebra)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> std::fmt::Debug for Empty<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Empty")
    }
}

impl<L: Clone, F: Clone, A> Clone for Mapped<L, F, A> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            function: self.function.clone(),
            marker: PhantomData,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
