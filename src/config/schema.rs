//! Configuration schema definitions.
//!
//! This module defines the configuration structure consumed at router
//! construction. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the request kernel.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct KernelConfig {
    /// Route declarations, in priority order. The key itself is required;
    /// its absence is a fatal configuration error.
    pub routes: Option<Vec<RouteEntry>>,
}

/// One route declaration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteEntry {
    /// Route name, unique in the table. A repeated name overwrites the
    /// earlier declaration.
    pub name: String,

    /// URL pattern with `{placeholder}` segments.
    pub url: String,

    /// Allowed HTTP methods (uppercase). Omitted means GET.
    #[serde(default)]
    pub methods: Option<Vec<String>>,

    /// Controller reference to dispatch to.
    pub controller: String,

    /// Action reference on the controller.
    pub action: String,
}
