use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use freshpredict_core::Category;

/// Per-category supplier directory.
///
/// Reference data used to prefill supplier choices on restock; the engine
/// never requires a supplier to appear here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDirectory {
    by_category: HashMap<Category, Vec<String>>,
}

impl SupplierDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suppliers(
        mut self,
        category: Category,
        suppliers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.by_category
            .entry(category)
            .or_default()
            .extend(suppliers.into_iter().map(Into::into));
        self
    }

    /// The Malaysian SME grocer defaults.
    pub fn malaysian_defaults() -> Self {
        Self::new()
            .with_suppliers(
                Category::Poultry,
                ["QL Resources", "Leong Hup", "Kee Song"],
            )
            .with_suppliers(
                Category::Produce,
                ["Cameron Highlands Farm", "Local Supplier", "Sime Darby Plantation"],
            )
            .with_suppliers(
                Category::Dairy,
                ["Dutch Lady Malaysia", "Nestle Malaysia", "Farm Fresh"],
            )
    }

    pub fn suppliers_for(&self, category: Category) -> &[String] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
