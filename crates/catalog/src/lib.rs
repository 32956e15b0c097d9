//! `freshpredict-catalog` — immutable product reference data.
//!
//! Products are created and maintained by catalog management (an external
//! collaborator); this crate only models and validates them.

pub mod product;
pub mod suppliers;

pub use product::Product;
pub use suppliers::SupplierDirectory;
