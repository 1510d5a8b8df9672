//! Helpers for infrastructure tests that need to check Azure resources.
//!
//! Each lookup resolves the subscription / resource group (explicit argument first,
//! environment second), builds a short-lived authenticated ARM client, makes one read
//! call and reduces the answer to a `bool`, a `String` or a typed model.
//!
//! ```no_run
//! # async fn demo() -> azure_test_helpers::Result<()> {
//! use azure_test_helpers::resources;
//!
//! let ok = resources::managed_cluster_version_match("1.15.7", "rg", "aks", "").await?;
//! assert!(ok);
//! # Ok(())
//! # }
//! ```

pub mod assert;
pub mod azure;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;

pub use azure::{resolve_resource_group_name, resolve_subscription_id, Scope};
pub use config::CloudEnvironment;
pub use error::{AzureError, Result};
