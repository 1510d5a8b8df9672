//! Error type shared by every lookup.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AzureError>;

/// ARM error codes that mean "the thing you asked for is not there".
const NOT_FOUND_CODES: [&str; 5] = [
    "ResourceNotFound",
    "ResourceGroupNotFound",
    "ContainerNotFound",
    "StorageAccountNotFound",
    "NotFound",
];

#[derive(Debug, Error)]
pub enum AzureError {
    #[error("subscription id is empty and environment variable {} is not set", crate::config::AZURE_SUBSCRIPTION_ID)]
    MissingSubscription,

    #[error("resource group name is empty and environment variable {} is not set", crate::config::AZURE_RES_GROUP_NAME)]
    MissingResourceGroup,

    #[error("{kind} name must not be empty")]
    MissingIdentifier { kind: &'static str },

    #[error("'{name}' is not a valid {kind} name")]
    InvalidName { kind: &'static str, name: String },

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("unknown Azure environment: {0}")]
    UnknownEnvironment(String),

    #[error("failed to obtain Azure credential: {0}")]
    Credential(#[from] azure_core::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Azure API returned {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("error parsing response: path={path} error={source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response is missing field {field}")]
    MissingField { field: &'static str },

    #[error("{resource_type} '{name}' not found{}", scope_suffix(.scope))]
    NotFound {
        resource_type: &'static str,
        name: String,
        scope: String,
    },
}

fn scope_suffix(scope: &str) -> String {
    if scope.is_empty() {
        String::new()
    } else {
        format!(" in {scope}")
    }
}

impl AzureError {
    /// True when the error means the resource (or its parent) does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            AzureError::NotFound { .. } => true,
            // A wrong subscription is a caller error, not a missing resource.
            AzureError::Api { code, .. } if code == "SubscriptionNotFound" => false,
            AzureError::Api { status, code, .. } => {
                *status == 404 || NOT_FOUND_CODES.contains(&code.as_str())
            }
            _ => false,
        }
    }

    pub fn not_found(resource_type: &'static str, name: &str, scope: &str) -> AzureError {
        AzureError::NotFound {
            resource_type,
            name: name.to_string(),
            scope: scope.to_string(),
        }
    }
}
