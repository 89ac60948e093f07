use serde::{Deserialize, Serialize};

use saberwing_core::{Criticality, DomainError, DomainResult};

/// Stock ratio below which an item is `critical`.
pub const CRITICAL_RATIO: f64 = 1.2;

/// Stock ratio below which an item is due for `reorder`.
pub const REORDER_RATIO: f64 = 1.5;

/// A stocked component tracked against its minimum stock level.
///
/// Items are reference data: the estimator reads them, nothing mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub component: String,
    pub supplier: String,
    pub current_stock: u32,
    pub min_stock: u32,
    /// Unit price in whole currency units.
    pub unit_cost: u64,
    pub storage_cost_per_day: u64,
    /// Baseline supplier lead time, in months.
    pub lead_time_base: u32,
    pub criticality: Criticality,
}

/// Reorder urgency derived from `currentStock / minStock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critical,
    Reorder,
    Healthy,
}

impl StockStatus {
    /// Classify a stock ratio. Both boundaries are exclusive on the lower tier:
    /// a ratio of exactly 1.2 is `reorder`, exactly 1.5 is `healthy`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < CRITICAL_RATIO {
            StockStatus::Critical
        } else if ratio < REORDER_RATIO {
            StockStatus::Reorder
        } else {
            StockStatus::Healthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Critical => "critical",
            StockStatus::Reorder => "reorder",
            StockStatus::Healthy => "healthy",
        }
    }
}

impl InventoryItem {
    /// `currentStock / minStock`.
    ///
    /// A zero `minStock` is a catalog integrity failure, reported instead of
    /// producing an infinite or NaN ratio.
    pub fn stock_ratio(&self) -> DomainResult<f64> {
        if self.min_stock == 0 {
            return Err(DomainError::invariant(format!(
                "inventory item '{}' has minStock 0; stock ratio is undefined",
                self.id
            )));
        }
        Ok(f64::from(self.current_stock) / f64::from(self.min_stock))
    }

    pub fn stock_status(&self) -> DomainResult<StockStatus> {
        self.stock_ratio().map(StockStatus::from_ratio)
    }

    /// Value of the stock on hand (`currentStock × unitCost`).
    pub fn stock_value(&self) -> DomainResult<u64> {
        u64::from(self.current_stock)
            .checked_mul(self.unit_cost)
            .ok_or_else(|| {
                DomainError::invariant(format!("stock value of inventory item '{}' overflows", self.id))
            })
    }
}
