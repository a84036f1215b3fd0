//! Type class traits shared by the list encodings.
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Functor`]: Structure-preserving mapping
//! - [`Foldable`]: Folding over structures to produce summary values
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This crate uses Generic Associated Types (GAT) to emulate HKT
//! behavior, so `Functor::fmap` can promise that mapping a list of one
//! encoding yields a list of the same encoding.
//!
//! The tagged-union and Scott-encoded lists implement all three traits. The
//! object-algebra list is a family of types rather than one type
//! constructor, so it offers `map` and folds through its own
//! [`ListAlgebra`](crate::algebra::ListAlgebra) instead.

mod foldable;
mod functor;
mod higher;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
