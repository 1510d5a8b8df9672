//! Storage account and blob container lookups.

use crate::azure::{validate_container_name, validate_storage_account_name, ArmClient, Scope};
use crate::config::{self, CloudEnvironment};
use crate::error::{AzureError, Result};
use crate::models::{BlobContainer, StorageAccount};

/// Fetch the properties of a storage account.
///
/// # Arguments
/// * `storage_account_name` - Account name (3-24 lowercase letters/digits)
/// * `resource_group` - Resource group; empty falls back to `AZURE_RES_GROUP_NAME`
/// * `subscription_id` - Subscription; empty falls back to `ARM_SUBSCRIPTION_ID`
pub async fn get_storage_account_property(
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<StorageAccount> {
    validate_storage_account_name(storage_account_name)?;
    let scope = Scope::resolve(resource_group, subscription_id)?;
    let client = ArmClient::new(&scope.subscription_id)?;

    client
        .get_resource(
            &scope.resource_group,
            &["Microsoft.Storage", "storageAccounts", storage_account_name],
            config::STORAGE_API_VERSION,
        )
        .await
}

/// True when the account exists under exactly this name.
///
/// A not-found answer is `Ok(false)`; other failures (auth, network) are returned.
pub async fn storage_account_exists(
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<bool> {
    match get_storage_account_property(storage_account_name, resource_group, subscription_id)
        .await
    {
        Ok(account) => Ok(account.name.as_deref() == Some(storage_account_name)),
        Err(e) if e.is_not_found() => {
            log::info!("Storage account {storage_account_name} not found");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Account kind: Storage, StorageV2, BlobStorage, FileStorage or BlockBlobStorage.
pub async fn get_storage_account_kind(
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<String> {
    let account =
        get_storage_account_property(storage_account_name, resource_group, subscription_id)
            .await?;
    account_kind(&account)
}

/// SKU tier: Standard or Premium.
pub async fn get_storage_account_sku_tier(
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<String> {
    let account =
        get_storage_account_property(storage_account_name, resource_group, subscription_id)
            .await?;
    account_sku_tier(&account)
}

/// Primary blob endpoint URI, e.g. `https://acct.blob.core.windows.net/`.
pub async fn get_storage_account_primary_blob_endpoint(
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<String> {
    let account =
        get_storage_account_property(storage_account_name, resource_group, subscription_id)
            .await?;
    account
        .primary_blob_endpoint()
        .map(str::to_string)
        .ok_or(AzureError::MissingField {
            field: "properties.primaryEndpoints.blob",
        })
}

/// Storage DNS suffix of the cloud selected by `AZURE_ENVIRONMENT`.
pub fn get_storage_uri_suffix() -> Result<String> {
    Ok(CloudEnvironment::from_env()?
        .storage_endpoint_suffix()
        .to_string())
}

/// Blob DNS string of the account, if the account exists.
///
/// # Returns
/// * `Ok(String)` - `https://{account}.blob.{suffix}/`
/// * `Err(AzureError::NotFound)` - The account does not exist
pub async fn get_storage_dns_string(
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<String> {
    if !storage_account_exists(storage_account_name, resource_group, subscription_id).await? {
        return Err(AzureError::not_found(
            "storage account",
            storage_account_name,
            "",
        ));
    }
    let suffix = get_storage_uri_suffix()?;
    Ok(storage_dns_string(storage_account_name, &suffix))
}

/// Fetch a blob container.
pub async fn get_storage_blob_container(
    container_name: &str,
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<BlobContainer> {
    validate_container_name(container_name)?;
    validate_storage_account_name(storage_account_name)?;
    let scope = Scope::resolve(resource_group, subscription_id)?;
    let client = ArmClient::new(&scope.subscription_id)?;

    client
        .get_resource(
            &scope.resource_group,
            &[
                "Microsoft.Storage",
                "storageAccounts",
                storage_account_name,
                "blobServices",
                "default",
                "containers",
                container_name,
            ],
            config::STORAGE_API_VERSION,
        )
        .await
}

/// True when the container exists under exactly this name; not-found is `Ok(false)`.
pub async fn storage_blob_container_exists(
    container_name: &str,
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<bool> {
    match get_storage_blob_container(
        container_name,
        storage_account_name,
        resource_group,
        subscription_id,
    )
    .await
    {
        Ok(container) => Ok(container.name.as_deref() == Some(container_name)),
        Err(e) if e.is_not_found() => {
            log::info!("Container {container_name} not found in {storage_account_name}");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// True when the container allows anonymous access (`Blob` or `Container`).
pub async fn get_storage_blob_container_public_access(
    container_name: &str,
    storage_account_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<bool> {
    let container = get_storage_blob_container(
        container_name,
        storage_account_name,
        resource_group,
        subscription_id,
    )
    .await?;
    log::debug!(
        "Container {container_name} publicAccess={}",
        container.public_access()
    );
    Ok(container.has_public_access())
}

pub(crate) fn account_kind(account: &StorageAccount) -> Result<String> {
    account
        .kind
        .clone()
        .ok_or(AzureError::MissingField { field: "kind" })
}

pub(crate) fn account_sku_tier(account: &StorageAccount) -> Result<String> {
    account
        .sku_tier()
        .map(str::to_string)
        .ok_or(AzureError::MissingField { field: "sku.tier" })
}

pub(crate) fn storage_dns_string(storage_account_name: &str, suffix: &str) -> String {
    format!("https://{storage_account_name}.blob.{suffix}/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::parse_json;

    fn account() -> StorageAccount {
        let json = std::fs::read_to_string("src/tests/test_data/storage_account.json")
            .expect("Error reading test data");
        parse_json(&json).expect("Error parsing storage account")
    }

    #[test]
    fn test_account_kind_and_tier() {
        let account = account();
        assert_eq!(account_kind(&account).unwrap(), "StorageV2");
        assert_eq!(account_sku_tier(&account).unwrap(), "Standard");
    }

    #[test]
    fn test_account_missing_fields() {
        let account = StorageAccount::default();
        assert!(matches!(
            account_kind(&account),
            Err(AzureError::MissingField { field: "kind" })
        ));
        assert!(matches!(
            account_sku_tier(&account),
            Err(AzureError::MissingField { field: "sku.tier" })
        ));
    }

    #[test]
    fn test_storage_dns_string_matches_blob_endpoint() {
        let account = account();
        let dns = storage_dns_string("terratestsa", "core.windows.net");
        assert_eq!(dns, "https://terratestsa.blob.core.windows.net/");
        assert_eq!(Some(dns.as_str()), account.primary_blob_endpoint());
    }

    #[tokio::test]
    async fn test_empty_account_name_fails_fast() {
        let err = storage_account_exists("", "rg", "sub").await.unwrap_err();
        assert!(matches!(err, AzureError::MissingIdentifier { .. }));

        assert!(get_storage_account_kind("", "rg", "sub").await.is_err());
        assert!(get_storage_account_sku_tier("", "rg", "sub").await.is_err());
        assert!(get_storage_dns_string("", "rg", "sub").await.is_err());
        assert!(get_storage_account_primary_blob_endpoint("", "rg", "sub")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_invalid_account_name_fails_fast() {
        let err = get_storage_account_property("Not_Valid", "rg", "sub")
            .await
            .unwrap_err();
        assert!(matches!(err, AzureError::InvalidName { .. }));
    }

    #[tokio::test]
    async fn test_empty_container_name_fails_fast() {
        let err = storage_blob_container_exists("", "terratestsa", "rg", "sub")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AzureError::MissingIdentifier {
                kind: "blob container"
            }
        ));
        assert!(
            get_storage_blob_container_public_access("", "terratestsa", "rg", "sub")
                .await
                .is_err()
        );
        assert!(get_storage_blob_container("container1", "", "rg", "sub")
            .await
            .is_err());
    }
}
