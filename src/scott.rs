//! Scott-encoded list.
//!
//! The variant is reified as a closure. A [`List`] holds a dispatcher that,
//! given one handler per case, calls the handler for the case it holds,
//! passing that case's payload. Nothing about the list can be observed
//! except by dispatching on it.
//!
//! Two call styles are offered:
//!
//! - positional: [`List::case_of`] takes `on_empty` and `on_cons`
//! - keyed: [`List::match_cases`] takes a [`Cases`] record, which reads
//!   better once a sum type has more than two variants
//!
//! # Examples
//!
//! ```rust
//! use sumlist::scott::{self, Cases, List};
//!
//! let numbers = scott::cons(3, scott::cons(2, scott::empty()));
//! let squares = scott::map(&numbers, |n| n * n);
//! assert_eq!(scott::to_vec(&squares), vec![9, 4]);
//!
//! let first = squares.case_of(|| None, |head, _| Some(*head));
//! assert_eq!(first, Some(9));
//!
//! let described = squares.match_cases(Cases {
//!     empty: || "empty".to_string(),
//!     cons: |head: &i32, tail: &List<i32>| format!("{head} then {} more", tail.len()),
//! });
//! assert_eq!(described, "9 then 1 more");
//! ```
//!
//! # Laziness
//!
//! [`map`] builds a new dispatcher and returns immediately. The mapping
//! function runs only when a consumer dispatches on the result, and it runs
//! again on every dispatch:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use sumlist::scott;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let numbers = scott::cons(1, scott::cons(2, scott::empty()));
//! let doubled = scott::map(&numbers, move |n| {
//!     counter.set(counter.get() + 1);
//!     n * 2
//! });
//! assert_eq!(calls.get(), 0);
//! assert_eq!(scott::to_vec(&doubled), vec![2, 4]);
//! assert_eq!(calls.get(), 2);
//! ```
//!
//! # Recursion Depth
//!
//! [`to_vec`] and the iterators step through the list one dispatch at a
//! time, so their stack depth grows with the number of chained `map` layers,
//! not with the length. Dropping a list releases each node's captured tail
//! from inside the previous node's drop, which recurses once per element.
//! Lists with hundreds of thousands of elements can exhaust the stack when
//! dropped.
//!
//! The encoding is `Rc`-based and therefore neither `Send` nor `Sync`.

use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

#[cfg(feature = "typeclass")]
use crate::typeclass::{Foldable, Functor, TypeConstructor};

/// The handlers a dispatcher can select from.
///
/// Object-safe so that a single stored closure can serve callers with any
/// result type; the result travels back through the implementor.
trait Continuation<T> {
    fn empty(&mut self);
    fn cons(&mut self, head: &T, tail: &List<T>);
}

type Dispatcher<T> = dyn Fn(&mut dyn Continuation<T>);

/// A persistent singly-linked list encoded as a case-dispatching closure.
pub struct List<T> {
    dispatcher: Rc<Dispatcher<T>>,
}

/// Keyed handlers for [`List::match_cases`], one field per variant.
///
/// Closures stored here are checked against the list's element type when
/// `match_cases` is called, so their parameters are usually annotated.
#[derive(Debug, Clone, Copy)]
pub struct Cases<E, C> {
    /// Handler for the empty list.
    pub empty: E,
    /// Handler for a head followed by a tail.
    pub cons: C,
}

/// Returns the empty list: a dispatcher that always selects `on_empty`.
#[must_use]
pub fn empty<T: 'static>() -> List<T> {
    List::from_dispatcher(|continuation| continuation.empty())
}

/// Returns a list whose dispatcher selects `on_cons` with `(head, tail)`.
#[must_use]
pub fn cons<T: 'static>(head: T, tail: List<T>) -> List<T> {
    List::from_dispatcher(move |continuation| continuation.cons(&head, &tail))
}

/// Returns a lazily mapped list.
///
/// Dispatching on the result behaves like dispatching on `list` with
/// handlers that forward the empty case unchanged, and hand the cons case
/// `function(head)` together with the mapped tail. No element is visited
/// when `map` is called.
pub fn map<A, B, F>(list: &List<A>, function: F) -> List<B>
where
    A: 'static,
    B: 'static,
    F: Fn(&A) -> B + 'static,
{
    map_shared(list.clone(), Rc::new(function))
}

/// Materializes the list into a `Vec`, head first.
///
/// The list must be finite; lists built from `empty` and `cons` always are.
pub fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
    list.to_vec()
}

fn map_shared<A, B, F>(list: List<A>, function: Rc<F>) -> List<B>
where
    A: 'static,
    B: 'static,
    F: Fn(&A) -> B + 'static,
{
    List::from_dispatcher(move |continuation: &mut dyn Continuation<B>| {
        list.dispatch(&mut Mapping {
            outer: continuation,
            function: &function,
        });
    })
}

/// Forwards a source list's case to the caller's continuation, mapping the
/// head and deferring the tail.
struct Mapping<'a, 'b, B, F> {
    outer: &'a mut (dyn Continuation<B> + 'b),
    function: &'a Rc<F>,
}

impl<A, B, F> Continuation<A> for Mapping<'_, '_, B, F>
where
    A: 'static,
    B: 'static,
    F: Fn(&A) -> B + 'static,
{
    fn empty(&mut self) {
        self.outer.empty();
    }

    fn cons(&mut self, head: &A, tail: &List<A>) {
        let mapped_tail = map_shared(tail.clone(), Rc::clone(self.function));
        self.outer.cons(&(self.function)(head), &mapped_tail);
    }
}

/// Positional handlers waiting for the dispatcher to pick one.
enum Selection<E, C, R> {
    Pending(E, C),
    Selected(R),
    Spent,
}

impl<T, R, E, C> Continuation<T> for Selection<E, C, R>
where
    E: FnOnce() -> R,
    C: FnOnce(&T, &List<T>) -> R,
{
    fn empty(&mut self) {
        match std::mem::replace(self, Self::Spent) {
            Self::Pending(on_empty, _) => *self = Self::Selected(on_empty()),
            settled => *self = settled,
        }
    }

    fn cons(&mut self, head: &T, tail: &List<T>) {
        match std::mem::replace(self, Self::Spent) {
            Self::Pending(_, on_cons) => *self = Self::Selected(on_cons(head, tail)),
            settled => *self = settled,
        }
    }
}

impl<T> List<T> {
    fn from_dispatcher<D>(dispatcher: D) -> Self
    where
        D: Fn(&mut dyn Continuation<T>) + 'static,
    {
        Self {
            dispatcher: Rc::new(dispatcher),
        }
    }

    fn dispatch(&self, continuation: &mut dyn Continuation<T>) {
        (self.dispatcher)(continuation);
    }

    /// Dispatches on the list with positional handlers.
    ///
    /// Exactly one handler runs: `on_empty` for the empty list, or `on_cons`
    /// with the head and the tail. The result type is chosen per call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumlist::scott;
    ///
    /// let list = scott::cons("a", scott::empty());
    /// assert!(!list.case_of(|| true, |_, _| false));
    /// assert!(scott::empty::<&str>().case_of(|| true, |_, _| false));
    /// ```
    pub fn case_of<R, E, C>(&self, on_empty: E, on_cons: C) -> R
    where
        E: FnOnce() -> R,
        C: FnOnce(&T, &Self) -> R,
    {
        let mut selection = Selection::Pending(on_empty, on_cons);
        self.dispatch(&mut selection);
        match selection {
            Selection::Selected(result) => result,
            Selection::Pending(..) | Selection::Spent => {
                unreachable!("every list dispatcher selects exactly one case")
            }
        }
    }

    /// Dispatches on the list with keyed handlers.
    ///
    /// Equivalent to `case_of(cases.empty, cases.cons)`.
    pub fn match_cases<R, E, C>(&self, cases: Cases<E, C>) -> R
    where
        E: FnOnce() -> R,
        C: FnOnce(&T, &Self) -> R,
    {
        self.case_of(cases.empty, cases.cons)
    }

    /// Returns `true` if the dispatcher selects the empty case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.case_of(|| true, |_, _| false)
    }

    /// Returns the tail, or `None` for the empty list.
    #[must_use]
    pub fn tail(&self) -> Option<Self> {
        self.case_of(|| None, |_, tail| Some(tail.clone()))
    }

    /// Returns the number of elements.
    ///
    /// Forces every layer of a mapped list, so mapping functions run.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut length = 0;
        let mut current = self.clone();
        while let Some(tail) = current.tail() {
            length += 1;
            current = tail;
        }
        length
    }
}

impl<T: Clone> List<T> {
    /// Decomposes the list into a cloned head and its tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumlist::scott;
    ///
    /// let list = scott::cons(1, scott::cons(2, scott::empty()));
    /// let (head, tail) = list.uncons().unwrap();
    /// assert_eq!(head, 1);
    /// assert_eq!(scott::to_vec(&tail), vec![2]);
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(T, Self)> {
        self.case_of(|| None, |head, tail| Some((head.clone(), tail.clone())))
    }

    /// Returns a clone of the first element, or `None` if empty.
    #[must_use]
    pub fn head(&self) -> Option<T> {
        self.case_of(|| None, |head, _| Some(head.clone()))
    }

    /// Returns an iterator over cloned elements, head first.
    #[must_use]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            current: self.clone(),
        }
    }

    /// Materializes the list into a `Vec`, head first.
    ///
    /// The empty handler ends the sequence; the cons handler contributes the
    /// head and hands back the tail for the next step.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: 'static> List<T> {
    /// Returns a lazily mapped list. See [`map`].
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> List<B>
    where
        B: 'static,
        F: Fn(&T) -> B + 'static,
    {
        map(self, function)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over cloned elements of a [`List`].
pub struct Iter<T> {
    current: List<T>,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.current.uncons()?;
        self.current = tail;
        Some(head)
    }
}

impl<T: Clone> IntoIterator for &List<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: 'static> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = iter.into_iter().collect();
        let mut list = empty();
        while let Some(element) = elements.pop() {
            list = cons(element, list);
        }
        list
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Rc::clone(&self.dispatcher),
        }
    }
}

impl<T: 'static> Default for List<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

#[cfg(feature = "typeclass")]
impl<T: 'static> Functor for List<T> {
    fn fmap<B, F>(&self, function: F) -> List<B>
    where
        F: Fn(&T) -> B + 'static,
        B: 'static,
    {
        map(self, function)
    }
}

#[cfg(feature = "typeclass")]
impl<T: Clone> Foldable for List<T> {
    fn fold_left<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter()
            .fold(init, |accumulator, element| function(accumulator, &element))
    }

    fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        self.to_vec()
            .iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn is_empty(&self) -> bool {
        self.case_of(|| true, |_, _| false)
    }

    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
