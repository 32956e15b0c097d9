use serde::{Deserialize, Serialize};

use freshpredict_ledger::EsgMetrics;

/// One-call rollup for the storefront dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    /// Lots at or below their reorder point.
    pub low_stock_count: usize,
    /// Lots inside the expiry alert window.
    pub expiry_risk_count: usize,
    pub preparation_alerts_count: usize,
    pub sustainability_alerts_count: usize,
    pub total_inventory_value_rm: f64,
    pub esg: EsgMetrics,
}
