//! # Compact storage of structured matrices
//!
//! Matrices with a known structure (diagonal, tridiagonal, triangular or symmetric) can be stored
//! in a flat array that leaves out the zeros and the values that are repeated. This crate provides
//! the index maps between the positions of such matrices and the indices of the flat array, next
//! to the plain row-major and column-major orders.
//!
//! It also contains a singly-linked list with constant time access to both of its ends.
#![warn(missing_docs)]

pub mod data;
pub mod error;
