//! Microsoft tenant association records.

use serde::{Deserialize, Serialize};

/// Domain suffix Cascade appends to every provisioned tenant.
pub const ONMICROSOFT_SUFFIX: &str = "onmicrosoft.com";

/// The Microsoft tenant associated with a customer.
///
/// The vendor reference does not document this payload; only the tenant
/// domain is represented by name and any remaining fields are kept raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicrosoftTenantAssociation {
    /// Fully qualified tenant domain, e.g. `contoso.onmicrosoft.com`.
    #[serde(rename = "TenantDomain", default, skip_serializing_if = "Option::is_none")]
    pub tenant_domain: Option<String>,

    /// Undocumented fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
