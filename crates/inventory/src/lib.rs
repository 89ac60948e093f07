//! Inventory domain module.
//!
//! This crate contains the inventory reference data and the stock rules that
//! apply to it, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod catalog;
pub mod item;

pub use catalog::{inventory_catalog, total_inventory_value};
pub use item::{InventoryItem, StockStatus};
