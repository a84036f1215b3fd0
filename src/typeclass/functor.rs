//! Functor type class - structure-preserving mapping.
//!
//! Every list encoding in this crate offers a `map` that replaces each
//! element `x` with `f(x)` while keeping order and length. [`Functor`] names
//! that operation so it can be used generically.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x.clone()) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(&f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sumlist::scott;
//! use sumlist::typeclass::Functor;
//!
//! let numbers = scott::cons(1, scott::cons(2, scott::empty()));
//! let labels = numbers.fmap(|n| format!("#{n}"));
//! assert_eq!(labels.to_vec(), vec!["#1".to_string(), "#2".to_string()]);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// Unlike a consuming `map`, `fmap` borrows the structure and the function is
/// `Fn`, because a list applies it once per element and a lazily mapped list
/// may keep it around until the list is consumed. That is also why the
/// function must be `'static`.
///
/// # Examples
///
/// ```rust
/// use sumlist::tagged;
/// use sumlist::typeclass::Functor;
///
/// let numbers = tagged::cons(3, tagged::cons(2, tagged::empty()));
/// let squares = numbers.fmap(|n| n * n);
/// assert_eq!(squares.to_vec(), vec![9, 4]);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to every element, producing a new structure.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms a borrowed element
    ///
    /// # Returns
    ///
    /// A new functor of the same shape holding the transformed elements
    fn fmap<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: Fn(&Self::Inner) -> B + 'static,
        B: 'static;
}
