//! # Data structures
//!
//! Matrices and their compact representations, and a linked list.

pub mod linear_algebra;
pub mod list;
pub mod storage;
