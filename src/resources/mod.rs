//! Resource lookups, one module per Azure service.
//!
//! - [`aks`] - Managed Kubernetes clusters
//! - [`storage`] - Storage accounts and blob containers
//! - [`loadbalancer`] - Load balancers

mod aks;
mod loadbalancer;
mod storage;

// Re-export public functions
pub use aks::{get_managed_cluster, managed_cluster_version_match};
pub use loadbalancer::{
    get_load_balancer, get_load_balancer_frontend_config_names, load_balancer_exists,
};
pub use storage::{
    get_storage_account_kind, get_storage_account_primary_blob_endpoint,
    get_storage_account_property, get_storage_account_sku_tier, get_storage_blob_container,
    get_storage_blob_container_public_access, get_storage_dns_string, get_storage_uri_suffix,
    storage_account_exists, storage_blob_container_exists,
};
