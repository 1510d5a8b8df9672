//! ARM response models.
//!
//! Only the fields the lookups read are modelled; everything else in the response is ignored:
//! - [`ManagedCluster`] - AKS cluster
//! - [`StorageAccount`] and [`BlobContainer`] - Storage
//! - [`LoadBalancer`] - Network load balancer

mod error_body;
mod load_balancer;
mod managed_cluster;
mod storage;

// Re-export public types
pub use error_body::{ArmErrorBody, ArmErrorDetail};
pub use load_balancer::{
    FrontendIpConfiguration, FrontendIpConfigurationProperties, LoadBalancer,
    LoadBalancerProperties, LoadBalancerSku, SubResource,
};
pub use managed_cluster::{AgentPoolProfile, ManagedCluster, ManagedClusterProperties};
pub use storage::{
    BlobContainer, ContainerProperties, Endpoints, PublicAccess, Sku, StorageAccount,
    StorageAccountProperties,
};
