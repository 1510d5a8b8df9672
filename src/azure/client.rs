//! Authenticated reads against Azure Resource Manager.

use super::auth;
use crate::config::{self, CloudEnvironment};
use crate::error::{AzureError, Result};
use crate::models::ArmErrorBody;
use azure_core::auth::TokenCredential;
use colored::Colorize;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Short-lived client bound to one subscription.
pub struct ArmClient {
    http: reqwest::Client,
    credential: Arc<dyn TokenCredential>,
    environment: CloudEnvironment,
    subscription_id: String,
}

impl ArmClient {
    /// Create a client for `subscription_id` in the cloud named by `AZURE_ENVIRONMENT`.
    pub fn new(subscription_id: &str) -> Result<ArmClient> {
        let environment = CloudEnvironment::from_env()?;
        let credential = auth::new_credential(environment)?;
        ArmClient::with_credential(subscription_id, environment, credential)
    }

    pub fn with_credential(
        subscription_id: &str,
        environment: CloudEnvironment,
        credential: Arc<dyn TokenCredential>,
    ) -> Result<ArmClient> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SEC))
            .build()?;
        Ok(ArmClient {
            http,
            credential,
            environment,
            subscription_id: subscription_id.to_string(),
        })
    }

    /// URL of a resource below a resource group.
    pub fn resource_url(
        &self,
        resource_group: &str,
        provider_path: &[&str],
        api_version: &str,
    ) -> Result<Url> {
        resource_url(
            self.environment.resource_manager_endpoint(),
            &self.subscription_id,
            resource_group,
            provider_path,
            api_version,
        )
    }

    /// GET one resource and deserialize it.
    ///
    /// # Arguments
    /// * `resource_group` - Resource group holding the resource
    /// * `provider_path` - Path segments, e.g. `["Microsoft.Storage", "storageAccounts", "acct"]`
    /// * `api_version` - ARM api-version for the provider
    ///
    /// # Returns
    /// * `Ok(T)` - The parsed resource
    /// * `Err(AzureError::Api)` - ARM answered with a non-success status
    pub async fn get_resource<T: DeserializeOwned>(
        &self,
        resource_group: &str,
        provider_path: &[&str],
        api_version: &str,
    ) -> Result<T> {
        let url = self.resource_url(resource_group, provider_path, api_version)?;
        log::debug!("GET {url}", url = url.as_str().on_blue());

        let scope = self.environment.token_scope();
        let token = self.credential.get_token(&[scope.as_str()]).await?;

        let response = self
            .http
            .get(url.clone())
            .bearer_auth(token.token.secret())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        log::trace!("status={status} body.len()={}", body.len());

        if !status.is_success() {
            log::warn!(
                "{failed} GET {url}: {status}",
                failed = "failed".on_red(),
                url = url.as_str().on_blue()
            );
            return Err(api_error(status.as_u16(), &body));
        }

        parse_json(&body)
    }
}

/// Build `{endpoint}/subscriptions/{sub}/resourceGroups/{rg}/providers/{path..}?api-version=..`.
///
/// Every identifier is pushed as one percent-encoded path segment, so `/`, `?` and `#`
/// inside a name cannot change which resource is addressed or the api-version.
pub(crate) fn resource_url(
    endpoint: &str,
    subscription_id: &str,
    resource_group: &str,
    provider_path: &[&str],
    api_version: &str,
) -> Result<Url> {
    let mut url = Url::parse(endpoint).map_err(|e| AzureError::InvalidUrl(e.to_string()))?;
    let identifiers = [subscription_id, resource_group]
        .into_iter()
        .chain(provider_path.iter().copied());
    for segment in identifiers {
        // The url crate silently drops dot segments, which would shift the path.
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(AzureError::InvalidName {
                kind: "path segment",
                name: segment.to_string(),
            });
        }
    }
    url.path_segments_mut()
        .map_err(|_| AzureError::InvalidUrl(endpoint.to_string()))?
        .pop_if_empty()
        .extend(["subscriptions", subscription_id, "resourceGroups", resource_group, "providers"])
        .extend(provider_path);
    url.query_pairs_mut().append_pair("api-version", api_version);
    Ok(url)
}

/// Deserialize a response body, reporting the JSON path of any failure.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let path = e.path().to_string();
        AzureError::Parse {
            path,
            source: e.into_inner(),
        }
    })
}

/// Turn a non-success response into an [`AzureError::Api`].
///
/// ARM normally answers with `{"error":{"code":..,"message":..}}`; anything else is
/// kept verbatim as the message.
pub fn api_error(status: u16, body: &str) -> AzureError {
    match serde_json::from_str::<ArmErrorBody>(body) {
        Ok(parsed) => AzureError::Api {
            status,
            code: parsed.error.code,
            message: parsed.error.message,
        },
        Err(_) => AzureError::Api {
            status,
            code: String::new(),
            message: body.trim().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StorageAccount;

    const ENDPOINT: &str = "https://management.azure.com";

    #[test]
    fn test_resource_url() {
        let url = resource_url(
            ENDPOINT,
            "00000000-0000-0000-0000-000000000000",
            "rg",
            &["Microsoft.Storage", "storageAccounts", "acct"],
            "2019-06-01",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://management.azure.com/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/acct?api-version=2019-06-01"
        );
    }

    #[test]
    fn test_resource_url_name_cannot_override_api_version() {
        let url = resource_url(
            ENDPOINT,
            "sub",
            "rg",
            &["Microsoft.Network", "loadBalancers", "lb?api-version=2015-01-01&x="],
            "2019-09-01",
        )
        .unwrap();
        assert_eq!(url.query(), Some("api-version=2019-09-01"));
        assert_eq!(
            url.path_segments().unwrap().last(),
            Some("lb%3Fapi-version=2015-01-01&x=")
        );
    }

    #[test]
    fn test_resource_url_group_cannot_redirect_path() {
        let url = resource_url(
            ENDPOINT,
            "sub",
            "other/providers/Microsoft.Storage/storageAccounts/victim#",
            &["Microsoft.Network", "loadBalancers", "lb"],
            "2019-09-01",
        )
        .unwrap();
        assert_eq!(url.query(), Some("api-version=2019-09-01"));
        assert_eq!(url.fragment(), None);
        let segments: Vec<&str> = url.path_segments().unwrap().collect();
        assert_eq!(segments.len(), 8);
        assert_eq!(segments[5], "Microsoft.Network");
        assert_eq!(segments[7], "lb");
        assert!(!segments[3].contains('/'));
    }

    #[test]
    fn test_resource_url_rejects_dot_segments() {
        for bad in ["", ".", ".."] {
            let err = resource_url(ENDPOINT, "sub", bad, &["Microsoft.Network"], "2019-09-01")
                .unwrap_err();
            assert!(matches!(err, AzureError::InvalidName { kind: "path segment", .. }));
        }
    }

    #[test]
    fn test_api_error_parses_arm_body() {
        let body = std::fs::read_to_string("src/tests/test_data/arm_error_not_found.json")
            .expect("Error reading test data");
        let err = api_error(404, &body);
        assert!(err.is_not_found());
        match err {
            AzureError::Api { status, code, message } => {
                assert_eq!(status, 404);
                assert_eq!(code, "ResourceNotFound");
                assert!(message.contains("terratestsa"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_api_error_keeps_plain_body() {
        let err = api_error(502, "  Bad Gateway \n");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Azure API returned 502 (): Bad Gateway");
    }

    #[test]
    fn test_parse_json_reports_path() {
        let err = parse_json::<StorageAccount>(r#"{"name": "acct", "sku": {"tier": 7}}"#)
            .unwrap_err();
        match err {
            AzureError::Parse { path, .. } => assert_eq!(path, "sku.tier"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
