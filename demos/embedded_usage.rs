//! Minimal embedding example for the resource handlers
//!
//! This example plays the part of the orchestration engine: it loads a
//! provider configuration, dispatches each declared resource to its handler,
//! and walks it through create -> read -> update -> delete against the
//! in-memory controller.
//!
//! ## Configuration
//!
//! - `CTRLPROV_CONFIG`: Path to a JSON provider configuration (optional)
//! - `CTRLPROV_LOG_LEVEL`: trace, debug, info, warn or error (default: info)
//!
//! ```json
//! {
//!   "controller_ip": "10.0.0.1",
//!   "resources": [
//!     { "type": "controller_private_oob", "enable_private_oob": true },
//!     { "type": "periodic_ping", "gw_name": "gw1", "interval": 30, "ip_address": "10.0.0.2" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use ctrlprov_core::traits::ResourceState;
use ctrlprov_core::{
    MemoryControllerClient, MemoryResourceState, ProviderConfig, ResourceConfig,
};
use std::env;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

fn load_config() -> Result<ProviderConfig> {
    let config = match env::var("CTRLPROV_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path))?;
            ProviderConfig::from_json_str(&json)?
        }
        Err(_) => ProviderConfig::new("10.0.0.1")
            .with_resource(ResourceConfig::ControllerPrivateOob {
                enable_private_oob: true,
            })
            .with_resource(ResourceConfig::PeriodicPing {
                gw_name: "gw1".to_string(),
                interval: 30,
                ip_address: "10.0.0.2".to_string(),
            }),
    };

    config.validate()?;
    Ok(config)
}

fn log_level() -> Level {
    match env::var("CTRLPROV_LOG_LEVEL")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(log_level()).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = load_config()?;
    info!("Configuration loaded: {:?}", config);

    let registry = ctrlprov_resources::registry();
    let client = MemoryControllerClient::new(config.controller_ip.clone());

    // Apply: create then refresh every declared resource
    let mut applied: Vec<(ResourceConfig, MemoryResourceState)> = Vec::new();
    for resource in &config.resources {
        let handler = registry.resource_for(resource)?;
        let mut state = resource.desired_state();

        handler.create(&client, &mut state).await?;
        handler.read(&client, &mut state).await?;
        state.commit();

        info!("Created {} with ID {}", handler.type_name(), state.id());
        applied.push((resource.clone(), state));
    }

    // Flip the private OOB toggle to show an in-place update
    for (resource, state) in applied.iter_mut() {
        let flipped = match resource {
            ResourceConfig::ControllerPrivateOob { enable_private_oob } => !*enable_private_oob,
            _ => continue,
        };

        let handler = registry.resource_for(resource)?;
        state.set_bool("enable_private_oob", flipped);

        if handler.requires_replacement(state) {
            warn!("{} requires replacement, skipping update", handler.type_name());
            continue;
        }

        handler.update(&client, state).await?;
        state.commit();
        info!(
            "Updated {} -> enable_private_oob={}",
            handler.type_name(),
            flipped
        );
    }

    // Destroy in reverse order and confirm absence on refresh
    for (resource, mut state) in applied.into_iter().rev() {
        let handler = registry.resource_for(&resource)?;
        handler.delete(&client, &mut state).await?;
        handler.read(&client, &mut state).await?;

        info!(
            "Deleted {} (ID after refresh: '{}')",
            handler.type_name(),
            state.id()
        );
    }

    info!(
        "Remaining periodic pings on controller: {}",
        client.periodic_ping_count().await
    );

    Ok(())
}
