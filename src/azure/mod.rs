//! Azure context, credentials and the management API client.
//!
//! - [`context`] - Subscription / resource group defaulting and name checks
//! - [`auth`] - Credential construction
//! - [`client`] - Authenticated ARM reads

pub mod auth;
pub mod client;
pub mod context;

// Re-export public types and functions
pub use auth::new_credential;
pub use client::{api_error, parse_json, ArmClient};
pub use context::{
    require_name, resolve_resource_group_name, resolve_subscription_id, resolve_with,
    validate_container_name, validate_storage_account_name, Scope,
};
