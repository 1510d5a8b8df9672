//! Azure Kubernetes Service managed cluster.

use serde::{Deserialize, Serialize};

/// `Microsoft.ContainerService/managedClusters` resource.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ManagedCluster {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub properties: Option<ManagedClusterProperties>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterProperties {
    pub kubernetes_version: Option<String>,
    pub provisioning_state: Option<String>,
    pub dns_prefix: Option<String>,
    pub fqdn: Option<String>,
    pub node_resource_group: Option<String>,
    #[serde(default)]
    pub agent_pool_profiles: Vec<AgentPoolProfile>,
}

/// One node pool of the cluster.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AgentPoolProfile {
    pub name: String,
    pub count: Option<u32>,
    pub vm_size: Option<String>,
}

impl ManagedCluster {
    /// Kubernetes version reported by the cluster, if any.
    pub fn kubernetes_version(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.kubernetes_version.as_deref())
    }

    pub fn agent_pool_profiles(&self) -> &[AgentPoolProfile] {
        self.properties
            .as_ref()
            .map(|p| p.agent_pool_profiles.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::parse_json;

    #[test]
    fn test_parse_managed_cluster() {
        let json = std::fs::read_to_string("src/tests/test_data/managed_cluster.json")
            .expect("Error reading test data");
        let cluster: ManagedCluster = parse_json(&json).expect("Error parsing cluster");

        assert_eq!(cluster.name.as_deref(), Some("terratest-aks"));
        assert_eq!(cluster.kubernetes_version(), Some("1.15.7"));
        let pools = cluster.agent_pool_profiles();
        assert_eq!(pools.len(), 1);
        assert_eq!(pools[0].name, "agentpool");
        assert_eq!(pools[0].count, Some(3));
    }

    #[test]
    fn test_cluster_without_properties() {
        let cluster: ManagedCluster = parse_json(r#"{"name": "bare"}"#).unwrap();
        assert_eq!(cluster.kubernetes_version(), None);
        assert!(cluster.agent_pool_profiles().is_empty());
    }
}
