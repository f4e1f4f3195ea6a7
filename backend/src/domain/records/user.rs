//! Staff account record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::FormRecord;
use crate::domain::Role;
use crate::domain::validation::{FormReader, RawForm, ValidationErrors};

/// Staff account as managed by owners and admins.
///
/// ## Invariants
/// - All name and contact fields are trimmed and non-empty.
/// - `username` is unique among stored accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub phone_number: String,
    pub role: Role,
}

impl FormRecord for UserRecord {
    const KIND: &'static str = "user";

    fn validate(input: &RawForm) -> Result<Self, ValidationErrors> {
        let mut reader = FormReader::new(input);
        let first_name = reader.required_text("firstName", "First name");
        let last_name = reader.required_text("lastName", "Last name");
        let username = reader.required_text("username", "Username");
        let phone_number = reader.required_text("phoneNumber", "Phone number");
        let role = reader
            .one_of("role", "Role", &Role::names())
            .and_then(|raw| raw.parse::<Role>().ok());

        let record = (|| {
            Some(Self {
                first_name: first_name?,
                last_name: last_name?,
                username: username?,
                phone_number: phone_number?,
                role: role?,
            })
        })();
        reader.finish(record)
    }

    fn natural_key(&self) -> Option<&str> {
        Some(self.username.as_str())
    }
}
