//! Tenant domain model.
//!
//! A tenant is a named isolation boundary. Each tenant gets its own
//! authorization server instance with its own clients and users, while
//! tenant names double as path segments and namespace keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tenant of the identity server.
///
/// Tenant names are lower-cased on construction so that path segments
/// like `/First` and `/first` address the same tenant. Tenants are
/// ephemeral values recreated per request; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenant {
    name: String,
}

impl Tenant {
    /// Creates a tenant, normalizing the name to lower case.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
        }
    }

    /// Returns the normalized tenant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
