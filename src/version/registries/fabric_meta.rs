//! Fabric Meta yarn mappings endpoint

use serde::Deserialize;
use tracing::warn;

use crate::version::error::RegistryError;
use crate::version::registries::http_client;
use crate::version::registry::MappingsSource;

/// Default base URL for the Fabric metadata service
const DEFAULT_BASE_URL: &str = "https://meta.fabricmc.net";

/// One yarn build as listed by the endpoint, newest first
#[derive(Debug, Deserialize)]
struct YarnBuild {
    version: String,
}

/// Mappings source backed by Fabric Meta
pub struct FabricMeta {
    client: reqwest::Client,
    base_url: String,
}

impl FabricMeta {
    /// Creates a new FabricMeta with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for FabricMeta {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl MappingsSource for FabricMeta {
    async fn latest_mappings(&self, mc_version: &str) -> Result<Option<String>, RegistryError> {
        let url = format!("{}/v2/versions/yarn/{}", self.base_url, mc_version);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        // Unknown game versions are reported as 404, not an empty list
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            warn!("fabric meta returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let builds: Vec<YarnBuild> = response.json().await.map_err(|e| {
            warn!("Failed to parse yarn build list: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(builds.into_iter().next().map(|b| b.version))
    }
}
