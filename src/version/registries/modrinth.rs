//! Modrinth project version listing

use serde::Deserialize;
use tracing::warn;

use crate::version::error::RegistryError;
use crate::version::registries::http_client;
use crate::version::registry::PackageSource;

/// Default base URL for the Modrinth API
const DEFAULT_BASE_URL: &str = "https://api.modrinth.com";

/// Project slug whose builds are scanned
const PROJECT: &str = "fabric-api";

/// One project build as listed by the version endpoint
#[derive(Debug, Deserialize)]
struct ProjectVersion {
    version_number: String,
    #[serde(default)]
    game_versions: Vec<String>,
}

/// Package source backed by the Modrinth registry
pub struct ModrinthRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl ModrinthRegistry {
    /// Creates a new ModrinthRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for ModrinthRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl PackageSource for ModrinthRegistry {
    async fn version_for_game(&self, mc_version: &str) -> Result<Option<String>, RegistryError> {
        let url = format!("{}/v2/project/{}/version", self.base_url, PROJECT);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(PROJECT.to_string()));
        }

        if !status.is_success() {
            warn!("modrinth returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let builds: Vec<ProjectVersion> = response.json().await.map_err(|e| {
            warn!("Failed to parse modrinth version list: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        // The endpoint lists builds newest first; the first compatible one
        // is the newest compatible one
        Ok(builds
            .into_iter()
            .find(|b| b.game_versions.iter().any(|gv| gv == mc_version))
            .map(|b| b.version_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn version_for_game_returns_first_compatible_build() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/v2/project/fabric-api/version")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"version_number": "0.111.0+1.21.9", "game_versions": ["1.21.9"]},
                    {"version_number": "0.110.5+1.21.8", "game_versions": ["1.21.8"]},
                    {"version_number": "0.110.4+1.21.8", "game_versions": ["1.21.8"]}
                ]"#,
            )
            .create_async()
            .await;

        let registry = ModrinthRegistry::new(&server.url());
        let result = registry.version_for_game("1.21.8").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, Some("0.110.5+1.21.8".to_string()));
    }

    #[tokio::test]
    async fn version_for_game_returns_none_when_no_build_matches() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/v2/project/fabric-api/version")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"version_number": "0.110.5+1.21.8", "game_versions": ["1.21.8"]}]"#)
            .create_async()
            .await;

        let registry = ModrinthRegistry::new(&server.url());
        let result = registry.version_for_game("1.22").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn version_for_game_handles_missing_game_versions_field() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/v2/project/fabric-api/version")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"version_number": "0.1.0"},
                    {"version_number": "0.110.5+1.21.8", "game_versions": ["1.21.8"]}
                ]"#,
            )
            .create_async()
            .await;

        let registry = ModrinthRegistry::new(&server.url());
        let result = registry.version_for_game("1.21.8").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, Some("0.110.5+1.21.8".to_string()));
    }

    #[tokio::test]
    async fn version_for_game_reports_missing_project() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/v2/project/fabric-api/version")
            .with_status(404)
            .create_async()
            .await;

        let registry = ModrinthRegistry::new(&server.url());
        let result = registry.version_for_game("1.21.8").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }
}
