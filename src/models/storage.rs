//! Storage account and blob container models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `Microsoft.Storage/storageAccounts` resource.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StorageAccount {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    /// Storage, StorageV2, BlobStorage, FileStorage or BlockBlobStorage.
    pub kind: Option<String>,
    pub sku: Option<Sku>,
    pub properties: Option<StorageAccountProperties>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Sku {
    /// e.g. Standard_LRS
    pub name: Option<String>,
    /// Standard or Premium
    pub tier: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountProperties {
    pub primary_endpoints: Option<Endpoints>,
    pub provisioning_state: Option<String>,
    pub access_tier: Option<String>,
    pub supports_https_traffic_only: Option<bool>,
}

/// Service endpoint URIs of a storage account.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Endpoints {
    pub blob: Option<String>,
    pub queue: Option<String>,
    pub table: Option<String>,
    pub file: Option<String>,
    pub web: Option<String>,
    pub dfs: Option<String>,
}

impl StorageAccount {
    pub fn sku_tier(&self) -> Option<&str> {
        self.sku.as_ref().and_then(|s| s.tier.as_deref())
    }

    pub fn primary_blob_endpoint(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.primary_endpoints.as_ref())
            .and_then(|e| e.blob.as_deref())
    }
}

/// `blobServices/default/containers` resource.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BlobContainer {
    pub id: Option<String>,
    pub name: Option<String>,
    pub etag: Option<String>,
    pub properties: Option<ContainerProperties>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProperties {
    pub public_access: Option<PublicAccess>,
    pub has_legal_hold: Option<bool>,
    pub has_immutability_policy: Option<bool>,
    pub lease_state: Option<String>,
    pub last_modified_time: Option<String>,
}

/// Anonymous read access level of a container.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublicAccess {
    #[default]
    None,
    Blob,
    Container,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for PublicAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PublicAccess::None => "None",
            PublicAccess::Blob => "Blob",
            PublicAccess::Container => "Container",
            PublicAccess::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

impl BlobContainer {
    /// Access level, treating an absent field as `None`.
    pub fn public_access(&self) -> PublicAccess {
        self.properties
            .as_ref()
            .and_then(|p| p.public_access)
            .unwrap_or_default()
    }

    /// True for any access level other than `None`.
    pub fn has_public_access(&self) -> bool {
        self.public_access() != PublicAccess::None
    }
}
