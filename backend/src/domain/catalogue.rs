//! Joined catalogue read models.
//!
//! Views are derived on read from stored records; they are never submitted.
//! Dangling references degrade gracefully: a material whose supplier is gone
//! reports no supplier, and a service skips materials that no longer exist.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use super::ports::{CatalogueQuery, PersistenceError, RecordRepository};
use super::records::{MaterialRecord, Persisted, RecordId, ServiceRecord, SupplierRecord};

/// Material joined with its supplier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialWithSupplier {
    #[serde(flatten)]
    pub material: Persisted<MaterialRecord>,
    pub supplier: Option<Persisted<SupplierRecord>>,
}

/// Service joined with the materials it bundles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceWithMaterials {
    #[serde(flatten)]
    pub service: Persisted<ServiceRecord>,
    pub materials: Vec<Persisted<MaterialRecord>>,
}

/// Join materials onto their suppliers.
pub fn join_materials(
    materials: Vec<Persisted<MaterialRecord>>,
    suppliers: Vec<Persisted<SupplierRecord>>,
) -> Vec<MaterialWithSupplier> {
    let suppliers: HashMap<RecordId, Persisted<SupplierRecord>> =
        suppliers.into_iter().map(|s| (s.id, s)).collect();
    materials
        .into_iter()
        .map(|material| {
            let supplier = suppliers.get(&material.record.supplier_id).cloned();
            MaterialWithSupplier { material, supplier }
        })
        .collect()
}

/// Join services onto their materials, keeping each service's material order.
pub fn join_services(
    services: Vec<Persisted<ServiceRecord>>,
    materials: Vec<Persisted<MaterialRecord>>,
) -> Vec<ServiceWithMaterials> {
    let materials: HashMap<RecordId, Persisted<MaterialRecord>> =
        materials.into_iter().map(|m| (m.id, m)).collect();
    services
        .into_iter()
        .map(|service| {
            let joined = service
                .record
                .material_ids
                .iter()
                .filter_map(|id| materials.get(id).cloned())
                .collect();
            ServiceWithMaterials {
                service,
                materials: joined,
            }
        })
        .collect()
}

/// [`CatalogueQuery`] built over the record repositories.
#[derive(Clone)]
pub struct CatalogueQueryService {
    suppliers: Arc<dyn RecordRepository<SupplierRecord>>,
    materials: Arc<dyn RecordRepository<MaterialRecord>>,
    services: Arc<dyn RecordRepository<ServiceRecord>>,
}

impl CatalogueQueryService {
    /// Build the query service from the three repositories it joins.
    pub fn new(
        suppliers: Arc<dyn RecordRepository<SupplierRecord>>,
        materials: Arc<dyn RecordRepository<MaterialRecord>>,
        services: Arc<dyn RecordRepository<ServiceRecord>>,
    ) -> Self {
        Self {
            suppliers,
            materials,
            services,
        }
    }
}

#[async_trait]
impl CatalogueQuery for CatalogueQueryService {
    async fn materials_with_suppliers(
        &self,
    ) -> Result<Vec<MaterialWithSupplier>, PersistenceError> {
        let materials = self.materials.list().await?;
        let suppliers = self.suppliers.list().await?;
        Ok(join_materials(materials, suppliers))
    }

    async fn services_with_materials(
        &self,
    ) -> Result<Vec<ServiceWithMaterials>, PersistenceError> {
        let services = self.services.list().await?;
        let materials = self.materials.list().await?;
        Ok(join_services(services, materials))
    }
}
