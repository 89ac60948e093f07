use saberwing_ai::{
    calculate_summary, AiError, AiScheduler, LocalAiScheduler, MacroParams, NoisePolicy, Prediction,
    ProcurementForecastJob, Summary,
};
use saberwing_inventory::{inventory_catalog, InventoryItem};
use saberwing_parties::{supplier_catalog, Supplier};
use saberwing_products::{sourcing_strategy, SourcingStrategy};

use crate::config::ApiConfig;

/// Read-only state shared by every handler.
///
/// Catalogs are loaded once at startup; the scheduler hands each analysis its
/// own generator, so handlers never contend on shared mutable state.
#[derive(Debug, Clone)]
pub struct AppServices {
    inventory: Vec<InventoryItem>,
    suppliers: Vec<Supplier>,
    strategy: SourcingStrategy,
    scheduler: LocalAiScheduler,
}

impl AppServices {
    pub fn new(
        inventory: Vec<InventoryItem>,
        suppliers: Vec<Supplier>,
        strategy: SourcingStrategy,
        scheduler: LocalAiScheduler,
    ) -> Self {
        Self {
            inventory,
            suppliers,
            strategy,
            scheduler,
        }
    }

    /// Built-in catalogs, with the estimator seeded according to `config`.
    pub fn from_config(config: &ApiConfig) -> Self {
        let policy = match config.estimator_seed {
            Some(seed) => NoisePolicy::Seeded(seed),
            None => NoisePolicy::Entropy,
        };
        Self::new(
            inventory_catalog().to_vec(),
            supplier_catalog().to_vec(),
            sourcing_strategy().clone(),
            LocalAiScheduler::new(policy),
        )
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn strategy(&self) -> &SourcingStrategy {
        &self.strategy
    }

    /// Forecast every inventory item and summarize the result.
    pub fn run_analysis(&self, params: MacroParams) -> Result<(Vec<Prediction>, Summary), AiError> {
        let job = ProcurementForecastJob::new(self.inventory.clone(), params);
        let predictions = self.scheduler.run(&job)?;
        let summary = calculate_summary(&predictions)?;
        Ok((predictions, summary))
    }
}
