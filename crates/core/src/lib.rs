//! Domain types and validation for the inventory service.
//!
//! Pure logic only: nothing in this crate performs I/O.

pub mod error;
pub mod product;
pub mod types;
