//! Managed Kubernetes cluster lookups.

use crate::azure::{require_name, ArmClient, Scope};
use crate::config;
use crate::error::{AzureError, Result};
use crate::models::ManagedCluster;

/// Fetch a managed cluster.
///
/// # Arguments
/// * `resource_group` - Resource group; empty falls back to `AZURE_RES_GROUP_NAME`
/// * `cluster_name` - Name of the AKS cluster
/// * `subscription_id` - Subscription; empty falls back to `ARM_SUBSCRIPTION_ID`
///
/// # Returns
/// * `Ok(ManagedCluster)` - The cluster as reported by ARM
/// * `Err` - Empty name, unresolved context, or any API error
pub async fn get_managed_cluster(
    resource_group: &str,
    cluster_name: &str,
    subscription_id: &str,
) -> Result<ManagedCluster> {
    require_name("managed cluster", cluster_name)?;
    let scope = Scope::resolve(resource_group, subscription_id)?;
    let client = ArmClient::new(&scope.subscription_id)?;

    let cluster: ManagedCluster = client
        .get_resource(
            &scope.resource_group,
            &["Microsoft.ContainerService", "managedClusters", cluster_name],
            config::CONTAINER_SERVICE_API_VERSION,
        )
        .await?;
    log::info!(
        "Got managed cluster {cluster_name} version={:?}",
        cluster.kubernetes_version()
    );
    Ok(cluster)
}

/// Check whether the cluster runs exactly `k8s_version`.
///
/// Returns `false` (not an error) on a version mismatch; errors only when the
/// lookup fails or the cluster reports no version.
pub async fn managed_cluster_version_match(
    k8s_version: &str,
    resource_group: &str,
    cluster_name: &str,
    subscription_id: &str,
) -> Result<bool> {
    let cluster = get_managed_cluster(resource_group, cluster_name, subscription_id).await?;
    version_matches(&cluster, k8s_version)
}

pub(crate) fn version_matches(cluster: &ManagedCluster, k8s_version: &str) -> Result<bool> {
    let deployed = cluster
        .kubernetes_version()
        .ok_or(AzureError::MissingField {
            field: "properties.kubernetesVersion",
        })?;
    Ok(deployed == k8s_version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::parse_json;

    fn cluster() -> ManagedCluster {
        let json = std::fs::read_to_string("src/tests/test_data/managed_cluster.json")
            .expect("Error reading test data");
        parse_json(&json).expect("Error parsing cluster")
    }

    #[test]
    fn test_version_matches() {
        let cluster = cluster();
        assert!(version_matches(&cluster, "1.15.7").unwrap());
        assert!(!version_matches(&cluster, "1.15").unwrap());
        assert!(!version_matches(&cluster, "1.16.0").unwrap());
    }

    #[test]
    fn test_version_missing_is_error() {
        let err = version_matches(&ManagedCluster::default(), "1.15.7").unwrap_err();
        assert!(matches!(err, AzureError::MissingField { .. }));
    }

    #[tokio::test]
    async fn test_get_managed_cluster_empty_name() {
        let err = get_managed_cluster("rg", "", "sub").await.unwrap_err();
        assert!(matches!(
            err,
            AzureError::MissingIdentifier {
                kind: "managed cluster"
            }
        ));
    }

    #[tokio::test]
    async fn test_version_match_empty_name() {
        assert!(managed_cluster_version_match("1.15.7", "rg", "", "sub")
            .await
            .is_err());
    }
}
