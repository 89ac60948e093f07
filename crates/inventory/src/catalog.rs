//! Inventory reference catalog.

use std::sync::OnceLock;

use saberwing_core::{Criticality, DomainError, DomainResult};

use crate::item::InventoryItem;

static CATALOG: OnceLock<Vec<InventoryItem>> = OnceLock::new();

/// The stocked components, built once and shared read-only for the life of
/// the process.
pub fn inventory_catalog() -> &'static [InventoryItem] {
    CATALOG.get_or_init(build_catalog)
}

/// Total value of stock on hand across `items`.
pub fn total_inventory_value(items: &[InventoryItem]) -> DomainResult<u64> {
    items.iter().try_fold(0u64, |acc, item| {
        acc.checked_add(item.stock_value()?)
            .ok_or_else(|| DomainError::invariant("total inventory value overflows"))
    })
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    component: &str,
    supplier: &str,
    current_stock: u32,
    min_stock: u32,
    unit_cost: u64,
    storage_cost_per_day: u64,
    lead_time_base: u32,
    criticality: Criticality,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        component: component.to_string(),
        supplier: supplier.to_string(),
        current_stock,
        min_stock,
        unit_cost,
        storage_cost_per_day,
        lead_time_base,
        criticality,
    }
}

fn build_catalog() -> Vec<InventoryItem> {
    vec![
        entry("engines", "GE F414 Engine Cores", "GE Aerospace", 45, 20, 5_000_000, 1_200, 18, Criticality::High),
        entry("radars", "APG-79 AESA Radar Units", "Raytheon Technologies", 28, 15, 3_000_000, 850, 15, Criticality::High),
        entry("seats", "Mk18 Ejection Seats", "Martin-Baker", 62, 30, 500_000, 200, 9, Criticality::Medium),
        entry("landing-gear", "Landing Gear Systems", "Safran Landing Systems", 34, 18, 1_000_000, 450, 14, Criticality::Medium),
        entry("ins", "HG9900 INS/GPS Units", "Honeywell Aerospace", 52, 25, 230_000, 120, 8, Criticality::Low),
        entry("hmd", "HMDS Gen 3", "Elbit Systems", 48, 20, 500_000, 180, 12, Criticality::Low),
    ]
}
