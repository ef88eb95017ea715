//! Mojang piston-meta version manifest

use serde::Deserialize;
use tracing::warn;

use crate::version::error::RegistryError;
use crate::version::registries::http_client;
use crate::version::registry::ManifestSource;
use crate::version::types::ManifestEntry;

/// Default base URL for the Mojang version metadata service
const DEFAULT_BASE_URL: &str = "https://piston-meta.mojang.com";

/// Response from the version manifest endpoint
#[derive(Debug, Deserialize)]
struct ManifestResponse {
    versions: Vec<ManifestEntry>,
}

/// Manifest source backed by piston-meta
pub struct MojangManifest {
    client: reqwest::Client,
    base_url: String,
}

impl MojangManifest {
    /// Creates a new MojangManifest with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for MojangManifest {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl ManifestSource for MojangManifest {
    async fn entries(&self) -> Result<Vec<ManifestEntry>, RegistryError> {
        let url = format!("{}/mc/game/version_manifest.json", self.base_url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("version manifest returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let manifest: ManifestResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse version manifest: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(manifest.versions)
    }
}
