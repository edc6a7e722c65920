//! # Linear algebra primitives
//!
//! The dense matrix that compact representations are created from and unpacked into.

pub mod matrix;
