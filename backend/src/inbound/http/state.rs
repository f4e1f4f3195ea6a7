//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CatalogueQuery, MediaUploader, RecordRepository};
use crate::domain::{
    CatalogueQueryService, MaterialRecord, ReportRecord, ServiceRecord, SubmissionService,
    SupplierRecord, UserRecord,
};
use crate::outbound::store::MemoryRecordStore;

/// Parameter object bundling the port implementations behind the handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub uploader: Arc<dyn MediaUploader>,
    pub suppliers: Arc<dyn RecordRepository<SupplierRecord>>,
    pub users: Arc<dyn RecordRepository<UserRecord>>,
    pub reports: Arc<dyn RecordRepository<ReportRecord>>,
    pub materials: Arc<dyn RecordRepository<MaterialRecord>>,
    pub services: Arc<dyn RecordRepository<ServiceRecord>>,
}

impl HttpStatePorts {
    /// Ports backed by in-memory stores, uploading through `uploader`.
    pub fn in_memory(uploader: Arc<dyn MediaUploader>) -> Self {
        Self {
            uploader,
            suppliers: Arc::new(MemoryRecordStore::new()),
            users: Arc::new(MemoryRecordStore::new()),
            reports: Arc::new(MemoryRecordStore::new()),
            materials: Arc::new(MemoryRecordStore::new()),
            services: Arc::new(MemoryRecordStore::new()),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub submissions: SubmissionService,
    pub suppliers: Arc<dyn RecordRepository<SupplierRecord>>,
    pub users: Arc<dyn RecordRepository<UserRecord>>,
    pub reports: Arc<dyn RecordRepository<ReportRecord>>,
    pub materials: Arc<dyn RecordRepository<MaterialRecord>>,
    pub services: Arc<dyn RecordRepository<ServiceRecord>>,
    pub catalogue: Arc<dyn CatalogueQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Wire the submission and catalogue use-cases over `ports`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use quotation_backend::domain::ports::FixtureMediaUploader;
    /// use quotation_backend::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts::in_memory(Arc::new(FixtureMediaUploader)));
    /// let _catalogue = state.catalogue.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            uploader,
            suppliers,
            users,
            reports,
            materials,
            services,
        } = ports;
        let catalogue = Arc::new(CatalogueQueryService::new(
            suppliers.clone(),
            materials.clone(),
            services.clone(),
        ));
        Self {
            submissions: SubmissionService::new(uploader),
            suppliers,
            users,
            reports,
            materials,
            services,
            catalogue,
        }
    }
}
