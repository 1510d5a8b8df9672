//! Load balancer lookups.

use crate::azure::{require_name, ArmClient, Scope};
use crate::config;
use crate::error::Result;
use crate::models::LoadBalancer;

/// Fetch a load balancer.
///
/// All identifiers are checked before any credential or network work, so empty
/// inputs fail fast.
pub async fn get_load_balancer(
    load_balancer_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<LoadBalancer> {
    require_name("load balancer", load_balancer_name)?;
    let scope = Scope::resolve(resource_group, subscription_id)?;
    let client = ArmClient::new(&scope.subscription_id)?;

    client
        .get_resource(
            &scope.resource_group,
            &["Microsoft.Network", "loadBalancers", load_balancer_name],
            config::NETWORK_API_VERSION,
        )
        .await
}

/// True if the load balancer exists; a not-found response is `Ok(false)`.
pub async fn load_balancer_exists(
    load_balancer_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<bool> {
    match get_load_balancer(load_balancer_name, resource_group, subscription_id).await {
        Ok(lb) => Ok(lb.name.as_deref() == Some(load_balancer_name)),
        Err(e) if e.is_not_found() => {
            log::info!("Load balancer {load_balancer_name} not found");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Names of the frontend IP configurations on the load balancer.
pub async fn get_load_balancer_frontend_config_names(
    load_balancer_name: &str,
    resource_group: &str,
    subscription_id: &str,
) -> Result<Vec<String>> {
    let lb = get_load_balancer(load_balancer_name, resource_group, subscription_id).await?;
    Ok(lb.frontend_config_names())
}
