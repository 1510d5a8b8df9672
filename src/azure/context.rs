//! Subscription / resource-group resolution and identifier checks.
//!
//! Every lookup is scoped by a subscription and a resource group. Callers may pass
//! them explicitly or leave them empty to pick up the environment defaults.

use crate::config;
use crate::error::{AzureError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Storage account names: 3-24 lowercase letters or digits.
static STORAGE_ACCOUNT_REGEX: OnceLock<Regex> = OnceLock::new();
/// Container names: 3-63 chars, lowercase letters, digits and single dashes,
/// starting and ending with a letter or digit.
static CONTAINER_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_storage_account_regex() -> &'static Regex {
    STORAGE_ACCOUNT_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9]{3,24}$").expect("Invalid Regex"))
}

fn get_container_regex() -> &'static Regex {
    CONTAINER_REGEX
        .get_or_init(|| Regex::new(r"^[a-z0-9](?:-?[a-z0-9])*$").expect("Invalid Regex"))
}

/// Pick `explicit` when non-empty, else the fallback value when non-empty.
///
/// # Returns
/// * `Some(value)` - The resolved value
/// * `None` - Both inputs were empty
pub fn resolve_with(explicit: &str, fallback: Option<String>) -> Option<String> {
    if !explicit.is_empty() {
        return Some(explicit.to_string());
    }
    fallback.filter(|v| !v.is_empty())
}

/// Resolve the subscription id, falling back to `ARM_SUBSCRIPTION_ID`.
pub fn resolve_subscription_id(explicit: &str) -> Result<String> {
    let resolved = resolve_with(explicit, std::env::var(config::AZURE_SUBSCRIPTION_ID).ok())
        .ok_or(AzureError::MissingSubscription)?;
    log::debug!("Using subscription {resolved}");
    Ok(resolved)
}

/// Resolve the resource group name, falling back to `AZURE_RES_GROUP_NAME`.
pub fn resolve_resource_group_name(explicit: &str) -> Result<String> {
    let resolved = resolve_with(explicit, std::env::var(config::AZURE_RES_GROUP_NAME).ok())
        .ok_or(AzureError::MissingResourceGroup)?;
    log::debug!("Using resource group {resolved}");
    Ok(resolved)
}

/// Reject empty resource names.
pub fn require_name(kind: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AzureError::MissingIdentifier { kind });
    }
    Ok(())
}

pub fn validate_storage_account_name(name: &str) -> Result<()> {
    require_name("storage account", name)?;
    if !get_storage_account_regex().is_match(name) {
        return Err(AzureError::InvalidName {
            kind: "storage account",
            name: name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_container_name(name: &str) -> Result<()> {
    require_name("blob container", name)?;
    // `$root` and `$web` are reserved containers that exist on every account.
    if name == "$root" || name == "$web" {
        return Ok(());
    }
    if !(3..=63).contains(&name.len()) || !get_container_regex().is_match(name) {
        return Err(AzureError::InvalidName {
            kind: "blob container",
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Subscription and resource group after defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub subscription_id: String,
    pub resource_group: String,
}

impl Scope {
    /// Resolve both identifiers, subscription first.
    pub fn resolve(resource_group: &str, subscription_id: &str) -> Result<Scope> {
        let subscription_id = resolve_subscription_id(subscription_id)?;
        let resource_group = resolve_resource_group_name(resource_group)?;
        Ok(Scope {
            subscription_id,
            resource_group,
        })
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "resource group {} (subscription {})",
            self.resource_group, self.subscription_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_explicit_wins() {
        assert_eq!(
            resolve_with("test", Some("from-env".to_string())),
            Some("test".to_string())
        );
        assert_eq!(resolve_with("test", None), Some("test".to_string()));
    }

    #[test]
    fn test_resolve_with_fallback() {
        assert_eq!(
            resolve_with("", Some("from-env".to_string())),
            Some("from-env".to_string())
        );
    }

    #[test]
    fn test_resolve_with_nothing() {
        assert_eq!(resolve_with("", None), None);
        assert_eq!(resolve_with("", Some(String::new())), None);
    }

    #[test]
    fn test_explicit_values_skip_environment() {
        // Explicit values never look at the environment, so these hold whatever is set.
        assert_eq!(resolve_subscription_id("test").unwrap(), "test");
        assert_eq!(resolve_resource_group_name("test").unwrap(), "test");
        let scope = Scope::resolve("rg", "sub").unwrap();
        assert_eq!(scope.to_string(), "resource group rg (subscription sub)");
    }

    #[test]
    fn test_require_name() {
        assert!(require_name("load balancer", "lb-01").is_ok());
        assert!(matches!(
            require_name("load balancer", "  "),
            Err(AzureError::MissingIdentifier { kind: "load balancer" })
        ));
    }

    #[test]
    fn test_validate_storage_account_name() {
        assert!(validate_storage_account_name("terratest0storage").is_ok());
        assert!(validate_storage_account_name("abc").is_ok());
        assert!(matches!(
            validate_storage_account_name(""),
            Err(AzureError::MissingIdentifier { .. })
        ));
        for bad in ["ab", "UpperCase", "with-dash", "a234567890123456789012345"] {
            assert!(
                matches!(
                    validate_storage_account_name(bad),
                    Err(AzureError::InvalidName { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_container_name() {
        assert!(validate_container_name("container1").is_ok());
        assert!(validate_container_name("my-container-1").is_ok());
        assert!(validate_container_name("$web").is_ok());
        for bad in ["ab", "-leading", "trailing-", "double--dash", "Upper"] {
            assert!(
                validate_container_name(bad).is_err(),
                "{bad} should be rejected"
            );
        }
    }
}
