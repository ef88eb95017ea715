//! Source traits for the three remote endpoints

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::ManifestEntry;

/// Fetches the game version manifest
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetches all manifest entries, newest first as served by the endpoint
    async fn entries(&self) -> Result<Vec<ManifestEntry>, RegistryError>;
}

/// Looks up deobfuscation mappings builds for a game version
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MappingsSource: Send + Sync {
    /// Returns the newest mappings build for `mc_version`, or `None` when
    /// no build exists for that version yet
    async fn latest_mappings(&self, mc_version: &str) -> Result<Option<String>, RegistryError>;
}

/// Looks up package builds compatible with a game version
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PackageSource: Send + Sync {
    /// Returns the version number of a build compatible with `mc_version`,
    /// or `None` when the registry lists no such build
    async fn version_for_game(&self, mc_version: &str) -> Result<Option<String>, RegistryError>;
}
