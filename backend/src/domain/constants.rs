//! Static enumerations shared by validators and selection widgets.
//!
//! Both lists are process-wide immutable data; the HTTP adapter exposes them
//! verbatim so forms render the same choices the validators accept.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unit-of-measure symbols accepted for materials, in display order.
pub const UNITS: &[&str] = &[
    "pcs", "set", "box", "pack", "roll", "sheet", "bag", "kg", "g", "t", "m", "cm", "mm", "m²",
    "m³", "L", "mL", "hr", "day",
];

/// Return whether `symbol` is one of [`UNITS`].
///
/// Matching is exact; `"KG"` is not `"kg"`.
pub fn is_known_unit(symbol: &str) -> bool {
    UNITS.contains(&symbol)
}

/// Staff account role.
///
/// # Examples
/// ```
/// use quotation_backend::domain::Role;
///
/// let role: Role = "Owner".parse().expect("known role");
/// assert_eq!(role, Role::Owner);
/// assert!("owner".parse::<Role>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Admin,
    Staff,
    Owner,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Staff, Role::Owner];

    /// Wire and display name of the role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
            Role::Owner => "Owner",
        }
    }

    /// Display names of every role, in display order.
    pub fn names() -> [&'static str; 3] {
        Self::ALL.map(Role::as_str)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string names no known [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| UnknownRole(value.to_owned()))
    }
}
