//! Credential construction.
//!
//! Token acquisition stays inside `azure_identity`; this module only decides which
//! credential to build.

use crate::config::{self, CloudEnvironment};
use crate::error::{AzureError, Result};
use azure_core::auth::TokenCredential;
use azure_core::error::ErrorKind;
use azure_core::Url;
use azure_identity::{ClientSecretCredential, DefaultAzureCredentialBuilder, TokenCredentialOptions};
use std::sync::Arc;

/// Service principal settings read from `ARM_CLIENT_ID`, `ARM_CLIENT_SECRET`, `ARM_TENANT_ID`.
#[derive(Clone)]
pub struct ServicePrincipal {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

impl ServicePrincipal {
    /// Returns `None` unless all three variables are set and non-empty.
    pub fn from_env() -> Option<ServicePrincipal> {
        let get = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
        Some(ServicePrincipal {
            tenant_id: get(config::AZURE_TENANT_ID)?,
            client_id: get(config::AZURE_CLIENT_ID)?,
            client_secret: get(config::AZURE_CLIENT_SECRET)?,
        })
    }
}

impl std::fmt::Debug for ServicePrincipal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServicePrincipal")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"******")
            .finish()
    }
}

/// Build the credential used to authorize management calls.
///
/// A service principal from the `ARM_*` variables is preferred. Otherwise the
/// `azure_identity` default chain is used (environment, managed identity, az cli).
pub fn new_credential(env: CloudEnvironment) -> Result<Arc<dyn TokenCredential>> {
    match ServicePrincipal::from_env() {
        Some(sp) => {
            log::debug!(
                "Using service principal {client_id} in tenant {tenant_id}",
                client_id = sp.client_id,
                tenant_id = sp.tenant_id
            );
            service_principal_credential(env, sp)
        }
        None => {
            log::debug!("No ARM_* service principal set, using default credential chain");
            Ok(default_credential())
        }
    }
}

/// Environment, managed identity and az cli, tried in that order by `azure_identity`.
fn default_credential() -> Arc<dyn TokenCredential> {
    Arc::new(DefaultAzureCredentialBuilder::new().build())
}

fn service_principal_credential(
    env: CloudEnvironment,
    sp: ServicePrincipal,
) -> Result<Arc<dyn TokenCredential>> {
    let authority_host = Url::parse(env.authority_host()).map_err(|e| {
        AzureError::Credential(azure_core::Error::new(ErrorKind::DataConversion, e))
    })?;
    let mut options = TokenCredentialOptions::default();
    options.set_authority_host(authority_host);
    let credential = ClientSecretCredential::new(
        azure_core::new_http_client(),
        sp.tenant_id,
        sp.client_id,
        sp.client_secret,
        options,
    );
    Ok(Arc::new(credential))
}
