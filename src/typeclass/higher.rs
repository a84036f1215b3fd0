//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `List<_>` directly.
//! [`TypeConstructor`] recovers that ability with a generic associated type,
//! which is what lets [`Functor`](super::Functor) state that mapping a
//! `tagged::List<A>` yields a `tagged::List<B>` and mapping a
//! `scott::List<A>` yields a `scott::List<B>`.
//!
//! # Example
//!
//! ```rust
//! use sumlist::tagged;
//! use sumlist::typeclass::TypeConstructor;
//!
//! fn cleared<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers = tagged::cons(1, tagged::empty());
//! let strings: tagged::List<String> = cleared(&numbers);
//! assert!(strings.is_empty());
//! ```

/// A list encoding viewed as a type constructor `List<_>`.
///
/// `Inner` is the element type; `WithType<B>` is the same encoding holding
/// `B` instead. Rebinding to the current element type yields the original
/// type: `tagged::List<T>::WithType<T>` is `tagged::List<T>`.
pub trait TypeConstructor {
    /// The element type.
    type Inner;

    /// The same encoding with elements of type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
