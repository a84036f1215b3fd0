//! Foldable type class - folding over data structures.
//!
//! A [`Foldable`] structure can be reduced to a single summary value by
//! visiting its elements in order. Both folds borrow the structure, so a
//! persistent list can be folded any number of times.
//!
//! # Laws
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```
//!
//! ## Consistency with `to_vec`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_vec().iter().fold(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sumlist::tagged;
//! use sumlist::typeclass::Foldable;
//!
//! let numbers: tagged::List<i32> = (1..=5).collect();
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//! ```

use super::higher::TypeConstructor;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Examples
///
/// ```rust
/// use sumlist::scott;
/// use sumlist::typeclass::Foldable;
///
/// let list = scott::cons(1, scott::cons(2, scott::cons(3, scott::empty())));
/// let rendered = list.fold_right(String::new(), |element, accumulator| {
///     format!("{element}{accumulator}")
/// });
/// assert_eq!(rendered, "123");
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from head to tail with an accumulator.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - Combines the accumulator with the next element
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &Self::Inner) -> B;

    /// Folds the structure from tail to head with an accumulator.
    ///
    /// # Arguments
    ///
    /// * `init` - The value standing in for the end of the structure
    /// * `function` - Combines an element with the already-folded remainder
    fn fold_right<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(&Self::Inner, B) -> B;

    /// Returns the number of elements.
    fn length(&self) -> usize {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Returns `true` if the structure has no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Materializes the elements, head first, into a `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumlist::scott;
    /// use sumlist::typeclass::Foldable;
    ///
    /// fn elements<F: Foldable<Inner = char>>(foldable: &F) -> Vec<char> {
    ///     foldable.to_vec()
    /// }
    ///
    /// assert_eq!(elements(&scott::cons('a', scott::empty())), vec!['a']);
    /// assert!(elements(&scott::empty::<char>()).is_empty());
    /// ```
    fn to_vec(&self) -> Vec<Self::Inner>
    where
        Self::Inner: Clone,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element.clone());
            accumulator
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(false, |found, element| found || predicate(element))
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        !self.exists(|element| !predicate(element))
    }
}
