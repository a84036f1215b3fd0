//! # sumlist
//!
//! Three encodings of the same persistent singly-linked list, for languages
//! (or designs) where a sum type is not just a native tagged ADT.
//!
//! ## Overview
//!
//! Every encoding exposes the same four operations over a `List<T>`:
//! `empty`, `cons`, `map`, and `to_vec`. They differ only in how the two
//! variants (`Empty` and `Cons`) are represented:
//!
//! - **Tagged union** ([`tagged`]): the variant is data, inspected with `match`.
//! - **Scott encoding** ([`scott`]): the variant is a closure that, given one
//!   handler per case, calls the handler for the case it holds.
//! - **Object algebra** ([`algebra`]): the variant is a fold that, given an
//!   interpreter (one method per case), produces the interpreter's result.
//!
//! ## Feature Flags
//!
//! - `typeclass`: `TypeConstructor`, `Functor`, and `Foldable`
//! - `tagged`: Tagged-union list
//! - `scott`: Scott-encoded list
//! - `algebra`: Object-algebra list
//! - `serde`: Serialization of the tagged-union list
//! - `arc`: Use `Arc` instead of `Rc` for tagged-union tails
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use sumlist::{algebra, scott, tagged};
//!
//! let numbers = tagged::cons(3, tagged::cons(2, tagged::empty()));
//! assert_eq!(tagged::to_vec(&tagged::map(&numbers, |n| n * n)), vec![9, 4]);
//!
//! let numbers = scott::cons(3, scott::cons(2, scott::empty()));
//! assert_eq!(scott::to_vec(&scott::map(&numbers, |n| n * n)), vec![9, 4]);
//!
//! let numbers = algebra::cons(3, algebra::cons(2, algebra::empty()));
//! assert_eq!(algebra::to_vec(&algebra::map(numbers, |n: &i32| n * n)), vec![9, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the type class traits. The encodings themselves all export a
/// type named `List`, so they are used through their module paths.
///
/// # Usage
///
/// ```rust
/// use sumlist::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "algebra")]
    pub use crate::algebra::{List as AlgebraList, ListAlgebra};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "tagged")]
pub mod tagged;

#[cfg(feature = "scott")]
pub mod scott;

#[cfg(feature = "algebra")]
pub mod algebra;

/// Reference-counted pointer to a shared tagged-list node.
///
/// The `arc` feature selects `std::sync::Arc`, so tagged lists of `Send +
/// Sync` elements can cross threads.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted pointer to a shared tagged-list node.
///
/// Without the `arc` feature this is `std::rc::Rc`.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;
