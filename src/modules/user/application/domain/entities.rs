// src/modules/user/application/domain/entities.rs

use std::fmt;
use std::str::FromStr;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Manager,
    Worker,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Manager => "manager",
            UserRole::Worker => "worker",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(UserRole::Manager),
            "worker" => Ok(UserRole::Worker),
            other => Err(format!("role must be one of manager, worker (got '{other}')")),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trims and checks the address syntax. Returns the trimmed address.
pub fn normalize_email(raw: &str) -> Result<String, String> {
    let email = raw.trim();

    if EmailAddress::is_valid(email) {
        Ok(email.to_string())
    } else {
        Err(format!("'{email}' is not a valid email address"))
    }
}
