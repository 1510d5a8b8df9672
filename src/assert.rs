//! Panicking variants of the lookups, for use directly inside tests.
//!
//! Each function calls its `Result`-returning counterpart in [`crate::resources`]
//! and panics on error, which fails the surrounding `#[tokio::test]`.
//!
//! ```no_run
//! # async fn demo() {
//! let exists = azure_test_helpers::assert::storage_account_exists("acct", "rg", "").await;
//! assert!(exists);
//! # }
//! ```

use crate::error::Result;
use crate::models::ManagedCluster;
use crate::resources;

fn ok_or_panic<T>(operation: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|e| panic!("{operation} failed: {e}"))
}

pub async fn storage_account_exists(
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> bool {
    ok_or_panic(
        "storage_account_exists",
        resources::storage_account_exists(storage_account_name, resource_group, subscription_id)
            .await,
    )
}

pub async fn storage_blob_container_exists(
    container_name: &str,
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> bool {
    ok_or_panic(
        "storage_blob_container_exists",
        resources::storage_blob_container_exists(
            container_name,
            storage_account_name,
            resource_group,
            subscription_id,
        )
        .await,
    )
}

pub async fn get_storage_blob_container_public_access(
    container_name: &str,
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> bool {
    ok_or_panic(
        "get_storage_blob_container_public_access",
        resources::get_storage_blob_container_public_access(
            container_name,
            storage_account_name,
            resource_group,
            subscription_id,
        )
        .await,
    )
}

pub async fn get_storage_account_kind(
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> String {
    ok_or_panic(
        "get_storage_account_kind",
        resources::get_storage_account_kind(storage_account_name, resource_group, subscription_id)
            .await,
    )
}

pub async fn get_storage_account_sku_tier(
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> String {
    ok_or_panic(
        "get_storage_account_sku_tier",
        resources::get_storage_account_sku_tier(
            storage_account_name,
            resource_group,
            subscription_id,
        )
        .await,
    )
}

pub async fn get_storage_dns_string(
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> String {
    ok_or_panic(
        "get_storage_dns_string",
        resources::get_storage_dns_string(storage_account_name, resource_group, subscription_id)
            .await,
    )
}

pub async fn get_managed_cluster(
    resource_group: &str,
    cluster_name: &str,
    subscription_id: &str,
) -> ManagedCluster {
    ok_or_panic(
        "get_managed_cluster",
        resources::get_managed_cluster(resource_group, cluster_name, subscription_id).await,
    )
}

pub async fn managed_cluster_version_match(
    k8s_version: &str,
    resource_group: &str,
    cluster_name: &str,
    subscription_id: &str,
) -> bool {
    ok_or_panic(
        "managed_cluster_version_match",
        resources::managed_cluster_version_match(
            k8s_version,
            resource_group,
            cluster_name,
            subscription_id,
        )
        .await,
    )
}

pub async fn load_balancer_exists(
    load_balancer_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> bool {
    ok_or_panic(
        "load_balancer_exists",
        resources::load_balancer_exists(load_balancer_name, resource_group, subscription_id).await,
    )
}
