//! Network load balancer model.

use serde::{Deserialize, Serialize};

/// `Microsoft.Network/loadBalancers` resource.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LoadBalancer {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub sku: Option<LoadBalancerSku>,
    pub properties: Option<LoadBalancerProperties>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LoadBalancerSku {
    /// Basic or Standard
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerProperties {
    #[serde(default, rename = "frontendIPConfigurations")]
    pub frontend_ip_configurations: Vec<FrontendIpConfiguration>,
    pub provisioning_state: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FrontendIpConfiguration {
    pub id: Option<String>,
    pub name: Option<String>,
    pub properties: Option<FrontendIpConfigurationProperties>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FrontendIpConfigurationProperties {
    #[serde(rename = "privateIPAddress")]
    pub private_ip_address: Option<String>,
    #[serde(rename = "privateIPAllocationMethod")]
    pub private_ip_allocation_method: Option<String>,
    #[serde(rename = "publicIPAddress")]
    pub public_ip_address: Option<SubResource>,
}

/// Reference to another ARM resource.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SubResource {
    pub id: Option<String>,
}

impl LoadBalancer {
    pub fn frontend_ip_configurations(&self) -> &[FrontendIpConfiguration] {
        self.properties
            .as_ref()
            .map(|p| p.frontend_ip_configurations.as_slice())
            .unwrap_or_default()
    }

    /// Names of the frontend IP configurations, unnamed entries skipped.
    pub fn frontend_config_names(&self) -> Vec<String> {
        self.frontend_ip_configurations()
            .iter()
            .filter_map(|c| c.name.clone())
            .collect()
    }
}
