//! Parties domain module (external suppliers).
//!
//! This crate holds the supplier network reference data, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod supplier;

pub use supplier::{supplier_catalog, total_contract_value, Supplier, SupplierStatus};
