//! Tagged-union list.
//!
//! The variant is reified as data: a [`List`] value is either
//! [`List::Empty`] or a [`List::Cons`] holding a shared [`Node`] with a head
//! and a tail.
//! Operations inspect the discriminant with `match`, and the compiler checks
//! that every variant is handled.
//!
//! # Examples
//!
//! ```rust
//! use sumlist::tagged;
//!
//! let numbers = tagged::cons(3, tagged::cons(2, tagged::empty()));
//! let squares = tagged::map(&numbers, |n| n * n);
//! assert_eq!(tagged::to_vec(&squares), vec![9, 4]);
//!
//! // The original list is untouched
//! assert_eq!(tagged::to_vec(&numbers), vec![3, 2]);
//! ```
//!
//! # Exhaustiveness
//!
//! The variant set is closed. Adding a variant, or forgetting one, is a
//! compile error in every consumer:
//!
//! ```rust,compile_fail,E0004
//! use sumlist::tagged::List;
//!
//! fn head_or_zero(list: &List<i32>) -> i32 {
//!     match list {
//!         List::Empty => 0,
//!     }
//! }
//! ```
//!
//! # Structural Sharing
//!
//! A `Cons` variant holds a reference-counted [`Node`], so cloning a list
//! and prepending to it never copies a node:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> Empty
//! list2 = cons(0, list1.clone()): 0 -> [1 -> 2 -> 3 -> Empty]  // shares every node of list1
//! ```
//!
//! # Recursion Depth
//!
//! [`map`] recurses once per element and dropping a list releases its nodes
//! recursively, so lists with hundreds of thousands of elements can exhaust
//! the stack. [`to_vec`], [`List::len`] and equality walk the list
//! iteratively.

use std::fmt;
use std::iter::FromIterator;

use crate::ReferenceCounter;
#[cfg(feature = "typeclass")]
use crate::typeclass::{Foldable, Functor, TypeConstructor};

/// A persistent singly-linked list encoded as a tagged union.
///
/// # Examples
///
/// ```rust
/// use sumlist::tagged::List;
///
/// let list = List::cons(1, List::cons(2, List::empty()));
/// match &list {
///     List::Empty => unreachable!(),
///     List::Cons(node) => {
///         assert_eq!(node.head, 1);
///         assert_eq!(node.tail.head(), Some(&2));
///     }
/// }
/// ```
pub enum List<T> {
    /// The empty list.
    Empty,
    /// A shared node holding the first element and the rest of the list.
    Cons(ReferenceCounter<Node<T>>),
}

/// The payload of a [`List::Cons`].
///
/// Every list that starts with this node shares it.
pub struct Node<T> {
    /// The first element.
    pub head: T,
    /// The remaining elements.
    pub tail: List<T>,
}

/// Returns the empty list.
#[inline]
#[must_use]
pub const fn empty<T>() -> List<T> {
    List::Empty
}

/// Returns a list with `head` in front of `tail`.
#[inline]
#[must_use]
pub fn cons<T>(head: T, tail: List<T>) -> List<T> {
    List::cons(head, tail)
}

/// Returns a new list with every element `x` replaced by `function(x)`.
///
/// The input is not modified. Order and length are preserved.
///
/// # Examples
///
/// ```rust
/// use sumlist::tagged;
///
/// let words = tagged::cons("a", tagged::cons("bcd", tagged::empty()));
/// assert_eq!(tagged::to_vec(&tagged::map(&words, |word| word.len())), vec![1, 3]);
/// ```
pub fn map<A, B, F>(list: &List<A>, function: F) -> List<B>
where
    F: Fn(&A) -> B,
{
    list.map(function)
}

/// Materializes the list into a `Vec`, head first.
pub fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
    list.to_vec()
}

impl<T> List<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Creates a list with `head` in front of `tail`.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    #[inline]
    #[must_use]
    pub fn cons(head: T, tail: Self) -> Self {
        Self::Cons(ReferenceCounter::new(Node { head, tail }))
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::cons(element, Self::Empty)
    }

    /// Prepends an element, sharing this whole list as the tail.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self::cons(element, self.clone())
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Cons(node) => Some(&node.head),
        }
    }

    /// Returns the list without its first element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Option<&Self> {
        match self {
            Self::Empty => None,
            Self::Cons(node) => Some(&node.tail),
        }
    }

    /// Decomposes the list into its head and tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumlist::tagged;
    ///
    /// let list = tagged::cons(1, tagged::cons(2, tagged::empty()));
    /// let (head, tail) = list.uncons().unwrap();
    /// assert_eq!(*head, 1);
    /// assert_eq!(tail.head(), Some(&2));
    /// ```
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, &Self)> {
        match self {
            Self::Empty => None,
            Self::Cons(node) => Some((&node.head, &node.tail)),
        }
    }

    /// Returns `true` if this is the empty variant.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if both lists start at the same shared node, or both
    /// are empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumlist::tagged;
    ///
    /// let tail = tagged::cons(2, tagged::empty());
    /// let list = tail.prepend(1);
    /// assert!(list.tail().is_some_and(|rest| rest.ptr_eq(&tail)));
    /// assert!(!tail.ptr_eq(&tagged::cons(2, tagged::empty())));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Cons(node1), Self::Cons(node2)) => ReferenceCounter::ptr_eq(node1, node2),
            _ => false,
        }
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(n); the length is not cached
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns an iterator over references to the elements, head first.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter { current: self }
    }

    /// Returns a new list with every element `x` replaced by `function(x)`.
    ///
    /// Implemented by structural case analysis: `Empty` maps to `Empty`, and
    /// `Cons` maps to `cons(function(head), map(tail))`.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> List<B>
    where
        F: Fn(&T) -> B,
    {
        map_with(self, &function)
    }

    /// Materializes the list into a `Vec`, head first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumlist::tagged;
    ///
    /// let empty: tagged::List<i32> = tagged::empty();
    /// assert!(empty.to_vec().is_empty());
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::new();
        let mut current = self;
        loop {
            match current {
                Self::Empty => return elements,
                Self::Cons(node) => {
                    elements.push(node.head.clone());
                    current = &node.tail;
                }
            }
        }
    }

    /// Builds a list from a `Vec`, keeping the `Vec`'s order.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut list = Self::Empty;
        while let Some(element) = elements.pop() {
            list = Self::cons(element, list);
        }
        list
    }
}

fn map_with<A, B, F>(list: &List<A>, function: &F) -> List<B>
where
    F: Fn(&A) -> B,
{
    match list {
        List::Empty => List::Empty,
        List::Cons(node) => List::cons(function(&node.head), map_with(&node.tail, function)),
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`List`].
pub struct Iter<'a, T> {
    current: &'a List<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            List::Empty => None,
            List::Cons(node) => {
                self.current = &node.tail;
                Some(&node.head)
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cons(node) => Self::Cons(ReferenceCounter::clone(node)),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
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
impl<T> Functor for List<T> {
    fn fmap<B, F>(&self, function: F) -> List<B>
    where
        F: Fn(&T) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

#[cfg(feature = "typeclass")]
impl<T> Foldable for List<T> {
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, function)
    }

    fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(List<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(List<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for List<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_squares_numbers() {
        let numbers = cons(3, cons(2, empty()));
        let squares = map(&numbers, |n| n * n);
        assert_eq!(to_vec(&squares), vec![9, 4]);
    }

    #[rstest]
    fn test_map_of_empty_is_empty() {
        let list: List<i32> = empty();
        assert!(map(&list, |n| n + 1).is_empty());
    }

    #[rstest]
    fn test_cons_shares_tail() {
        let tail = List::cons(2, List::empty());
        let list1 = tail.prepend(1);
        let list2 = tail.prepend(10);
        match (&list1, &list2) {
            (List::Cons(node1), List::Cons(node2)) => {
                assert!(node1.tail.ptr_eq(&node2.tail));
                assert!(node1.tail.ptr_eq(&tail));
            }
            _ => panic!("expected two cons nodes"),
        }
    }

    #[rstest]
    fn test_clone_shares_front_node() {
        let list = cons(1, cons(2, empty()));
        let copy = list.clone();
        assert!(list.ptr_eq(&copy));
        assert!(!list.ptr_eq(&cons(1, cons(2, empty()))));
        assert!(List::<i32>::Empty.ptr_eq(&List::Empty));
    }

    #[rstest]
    fn test_clone_and_prepend_without_clone_elements() {
        #[derive(Debug, PartialEq)]
        struct Token(u8);

        let tail = cons(Token(2), empty());
        let list = tail.prepend(Token(1));
        let copy = list.clone();
        assert_eq!(copy.head(), Some(&Token(1)));
        assert!(copy.tail().is_some_and(|rest| rest.ptr_eq(&tail)));
    }

    #[rstest]
    fn test_head_tail_uncons() {
        let list = cons('a', cons('b', empty()));
        assert_eq!(list.head(), Some(&'a'));
        assert_eq!(list.tail().and_then(List::head), Some(&'b'));
        let empty_list: List<char> = empty();
        assert!(empty_list.uncons().is_none());
        assert!(empty_list.tail().is_none());
    }

    #[rstest]
    #[case(vec![], "[]")]
    #[case(vec![1], "[1]")]
    #[case(vec![1, 2, 3], "[1, 2, 3]")]
    fn test_display(#[case] elements: Vec<i32>, #[case] expected: &str) {
        let list: List<i32> = elements.into_iter().collect();
        assert_eq!(format!("{list}"), expected);
    }

    #[rstest]
    fn test_debug_renders_as_list() {
        let list: List<&str> = vec!["x", "y"].into_iter().collect();
        assert_eq!(format!("{list:?}"), r#"["x", "y"]"#);
    }

    #[rstest]
    fn test_from_iterator_preserves_order() {
        let list: List<i32> = (1..=4).collect();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(list.len(), 4);
    }

    #[rstest]
    fn test_equality_is_structural() {
        let list1 = cons(1, cons(2, empty()));
        let list2: List<i32> = vec![1, 2].into_iter().collect();
        assert_eq!(list1, list2);
        assert_ne!(list1, cons(1, empty()));
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn test_fold_right_visits_tail_first() {
        let list: List<i32> = (1..=3).collect();
        let visited = list.fold_right(Vec::new(), |element, mut accumulator| {
            accumulator.push(*element);
            accumulator
        });
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn test_fmap_matches_map() {
        let list: List<i32> = (1..=3).collect();
        assert_eq!(list.fmap(|n| n * 2), list.map(|n| n * 2));
    }
}
