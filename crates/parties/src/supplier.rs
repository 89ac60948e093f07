use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use saberwing_core::{DomainError, DomainResult};

/// Supplier status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    Active,
    Suspended,
}

/// An external supplier and the component it delivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub component: String,
    pub unit_cost: u64,
    /// Quoted lead time, in months.
    pub lead_time: u32,
    pub status: SupplierStatus,
    pub contract_value: u64,
    pub location: String,
}

static CATALOG: OnceLock<Vec<Supplier>> = OnceLock::new();

/// The supplier network, built once and shared read-only.
pub fn supplier_catalog() -> &'static [Supplier] {
    CATALOG.get_or_init(build_catalog)
}

pub fn total_contract_value(suppliers: &[Supplier]) -> DomainResult<u64> {
    suppliers
        .iter()
        .try_fold(0u64, |acc, s| acc.checked_add(s.contract_value))
        .ok_or_else(|| DomainError::invariant("total contract value overflows"))
}

fn active(
    id: &str,
    name: &str,
    component: &str,
    unit_cost: u64,
    lead_time: u32,
    contract_value: u64,
    location: &str,
) -> Supplier {
    Supplier {
        id: id.to_string(),
        name: name.to_string(),
        component: component.to_string(),
        unit_cost,
        lead_time,
        status: SupplierStatus::Active,
        contract_value,
        location: location.to_string(),
    }
}

fn build_catalog() -> Vec<Supplier> {
    vec![
        active("ge", "GE Aerospace", "F414 Engine Cores", 5_000_000, 18, 250_000_000, "Lynn, MA"),
        active("raytheon", "Raytheon Technologies", "APG-79 AESA Radar", 3_000_000, 15, 180_000_000, "El Segundo, CA"),
        active("martin-baker", "Martin-Baker", "Mk18 Ejection Seats", 500_000, 9, 45_000_000, "Denham, UK"),
        active("safran", "Safran Landing Systems", "Landing Gear Systems", 1_000_000, 14, 68_000_000, "Vélizy, France"),
        active("honeywell", "Honeywell Aerospace", "HG9900 INS/GPS", 230_000, 8, 28_000_000, "Phoenix, AZ"),
        active("elbit", "Elbit Systems", "HMDS Gen 3", 500_000, 12, 42_000_000, "Haifa, Israel"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_contract_value_is_summed_across_suppliers() {
        assert_eq!(supplier_catalog().len(), 6);
        assert_eq!(total_contract_value(supplier_catalog()).unwrap(), 613_000_000);
        assert_eq!(total_contract_value(&[]).unwrap(), 0);
    }

    #[test]
    fn contract_value_overflow_is_reported() {
        let mut suppliers = supplier_catalog()[..2].to_vec();
        for s in &mut suppliers {
            s.contract_value = u64::MAX / 2 + 1;
        }
        assert!(matches!(
            total_contract_value(&suppliers),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn suspended_status_uses_lowercase_wire_name() {
        let json = serde_json::to_value(SupplierStatus::Suspended).unwrap();
        assert_eq!(json, "suspended");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(&supplier_catalog()[0]).unwrap();
        assert_eq!(json["id"], "ge");
        assert_eq!(json["unitCost"], 5_000_000);
        assert_eq!(json["leadTime"], 18);
        assert_eq!(json["contractValue"], 250_000_000);
        assert_eq!(json["status"], "active");
    }
}
