//! Driving port for the joined catalogue read models.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::catalogue::{MaterialWithSupplier, ServiceWithMaterials};

/// Read-only access to catalogue views.
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Every material alongside its supplier.
    async fn materials_with_suppliers(
        &self,
    ) -> Result<Vec<MaterialWithSupplier>, PersistenceError>;

    /// Every service alongside the materials it bundles.
    async fn services_with_materials(
        &self,
    ) -> Result<Vec<ServiceWithMaterials>, PersistenceError>;
}
