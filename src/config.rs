//! Environment variable names, ARM api-versions and cloud endpoint tables.

use crate::error::{AzureError, Result};
use std::fmt;
use std::str::FromStr;

/// Subscription used when a caller passes an empty subscription id.
pub const AZURE_SUBSCRIPTION_ID: &str = "ARM_SUBSCRIPTION_ID";
/// Resource group used when a caller passes an empty resource group name.
pub const AZURE_RES_GROUP_NAME: &str = "AZURE_RES_GROUP_NAME";
/// Service principal settings, same names the terraform azurerm provider reads.
pub const AZURE_CLIENT_ID: &str = "ARM_CLIENT_ID";
pub const AZURE_CLIENT_SECRET: &str = "ARM_CLIENT_SECRET";
pub const AZURE_TENANT_ID: &str = "ARM_TENANT_ID";
/// Cloud name, e.g. `AzurePublicCloud` or `AzureChinaCloud`.
pub const AZURE_ENVIRONMENT: &str = "AZURE_ENVIRONMENT";

pub const CONTAINER_SERVICE_API_VERSION: &str = "2019-11-01";
pub const STORAGE_API_VERSION: &str = "2019-06-01";
pub const NETWORK_API_VERSION: &str = "2019-09-01";

/// Seconds before an ARM request is abandoned.
pub const HTTP_TIMEOUT_SEC: u64 = 60;

/// Azure cloud the management calls are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloudEnvironment {
    #[default]
    AzurePublicCloud,
    AzureChinaCloud,
    AzureUSGovernmentCloud,
    AzureGermanCloud,
}

impl CloudEnvironment {
    /// Read `AZURE_ENVIRONMENT`, defaulting to the public cloud when unset or empty.
    pub fn from_env() -> Result<CloudEnvironment> {
        match std::env::var(AZURE_ENVIRONMENT) {
            Ok(name) if !name.trim().is_empty() => name.parse(),
            _ => Ok(CloudEnvironment::default()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CloudEnvironment::AzurePublicCloud => "AzurePublicCloud",
            CloudEnvironment::AzureChinaCloud => "AzureChinaCloud",
            CloudEnvironment::AzureUSGovernmentCloud => "AzureUSGovernmentCloud",
            CloudEnvironment::AzureGermanCloud => "AzureGermanCloud",
        }
    }

    /// Base URL of Azure Resource Manager, without trailing slash.
    pub fn resource_manager_endpoint(&self) -> &'static str {
        match self {
            CloudEnvironment::AzurePublicCloud => "https://management.azure.com",
            CloudEnvironment::AzureChinaCloud => "https://management.chinacloudapi.cn",
            CloudEnvironment::AzureUSGovernmentCloud => "https://management.usgovcloudapi.net",
            CloudEnvironment::AzureGermanCloud => "https://management.microsoftazure.de",
        }
    }

    /// AAD authority host used for service principal logins.
    pub fn authority_host(&self) -> &'static str {
        match self {
            CloudEnvironment::AzurePublicCloud => "https://login.microsoftonline.com",
            CloudEnvironment::AzureChinaCloud => "https://login.chinacloudapi.cn",
            CloudEnvironment::AzureUSGovernmentCloud => "https://login.microsoftonline.us",
            CloudEnvironment::AzureGermanCloud => "https://login.microsoftonline.de",
        }
    }

    /// DNS suffix of storage endpoints, e.g. `core.windows.net`.
    pub fn storage_endpoint_suffix(&self) -> &'static str {
        match self {
            CloudEnvironment::AzurePublicCloud => "core.windows.net",
            CloudEnvironment::AzureChinaCloud => "core.chinacloudapi.cn",
            CloudEnvironment::AzureUSGovernmentCloud => "core.usgovcloudapi.net",
            CloudEnvironment::AzureGermanCloud => "core.cloudapi.de",
        }
    }

    /// OAuth scope for management plane tokens.
    pub fn token_scope(&self) -> String {
        format!("{}/.default", self.resource_manager_endpoint())
    }
}

impl FromStr for CloudEnvironment {
    type Err = AzureError;

    fn from_str(s: &str) -> Result<Self> {
        // Names are matched case-insensitively, as go-autorest does.
        match s.trim().to_ascii_uppercase().as_str() {
            "AZUREPUBLICCLOUD" => Ok(CloudEnvironment::AzurePublicCloud),
            "AZURECHINACLOUD" => Ok(CloudEnvironment::AzureChinaCloud),
            "AZUREUSGOVERNMENTCLOUD" => Ok(CloudEnvironment::AzureUSGovernmentCloud),
            "AZUREGERMANCLOUD" => Ok(CloudEnvironment::AzureGermanCloud),
            _ => Err(AzureError::UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for CloudEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cloud_names() {
        assert_eq!(
            "AzurePublicCloud".parse::<CloudEnvironment>().unwrap(),
            CloudEnvironment::AzurePublicCloud
        );
        assert_eq!(
            "azurechinacloud".parse::<CloudEnvironment>().unwrap(),
            CloudEnvironment::AzureChinaCloud
        );
        assert_eq!(
            " AzureUSGovernmentCloud ".parse::<CloudEnvironment>().unwrap(),
            CloudEnvironment::AzureUSGovernmentCloud
        );
        let err = "MarsCloud".parse::<CloudEnvironment>().unwrap_err();
        assert_eq!(err.to_string(), "unknown Azure environment: MarsCloud");
    }

    #[test]
    fn test_public_cloud_endpoints() {
        let env = CloudEnvironment::default();
        assert_eq!(env.storage_endpoint_suffix(), "core.windows.net");
        assert_eq!(env.token_scope(), "https://management.azure.com/.default");
        assert_eq!(env.to_string(), "AzurePublicCloud");
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for env in [
            CloudEnvironment::AzurePublicCloud,
            CloudEnvironment::AzureChinaCloud,
            CloudEnvironment::AzureUSGovernmentCloud,
            CloudEnvironment::AzureGermanCloud,
        ] {
            assert_eq!(env.name().parse::<CloudEnvironment>().unwrap(), env);
            assert!(!env.resource_manager_endpoint().ends_with('/'));
        }
    }
}
