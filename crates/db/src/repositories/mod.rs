//! SQL repositories. Each repository is a zero-sized struct whose
//! associated functions take the pool explicitly.

pub mod product_repo;

pub use product_repo::ProductRepo;
