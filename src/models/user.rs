//! Session record for the admin operator.

use serde::{Deserialize, Serialize};

/// The persisted proof of a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub is_authenticated: bool,
}
