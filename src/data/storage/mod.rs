//! # Compact storage of matrices
//!
//! A matrix with structure (a band, a triangle, symmetry) doesn't need all of its values stored.
//! The layouts in this module describe which positions are kept and at which index of a flat
//! array they end up; `Packed` holds such an array together with its layout.

pub mod layout;
pub mod mapping;
pub mod packed;
