//! OpenAPI shapes of the response bodies.
//!
//! Handlers serialise [`Persisted`](crate::domain::Persisted) records and the
//! catalogue views directly. The types here mirror that JSON for the
//! generated document only; nothing constructs them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{MaterialRecord, ReportRecord, ServiceRecord, SupplierRecord, UserRecord};

macro_rules! stored_schema {
    ($(#[$meta:meta])* $name:ident => $record:ty) => {
        $(#[$meta])*
        #[derive(Serialize, ToSchema)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Identifier assigned by the persistence layer.
            #[schema(value_type = String, format = "uuid")]
            pub id: String,
            #[serde(flatten)]
            pub record: $record,
            /// Time of the last create or update.
            pub updated_at: DateTime<Utc>,
        }
    };
}

stored_schema!(
    /// Supplier as stored.
    StoredSupplier => SupplierRecord
);
stored_schema!(
    /// User as stored.
    StoredUser => UserRecord
);
stored_schema!(
    /// Report as stored.
    StoredReport => ReportRecord
);
stored_schema!(
    /// Material as stored.
    StoredMaterial => MaterialRecord
);
stored_schema!(
    /// Service as stored.
    StoredService => ServiceRecord
);

/// Material joined with its supplier, absent when the supplier is gone.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialListing {
    #[serde(flatten)]
    pub material: StoredMaterial,
    pub supplier: Option<StoredSupplier>,
}

/// Service joined with the materials it still references.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
    #[serde(flatten)]
    pub service: StoredService,
    pub materials: Vec<StoredMaterial>,
}
