use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of the Mojang version manifest
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub release_type: String,
}

impl ManifestEntry {
    /// Whether this entry is a stable release (as opposed to a snapshot,
    /// pre-release or release candidate)
    pub fn is_release(&self) -> bool {
        self.release_type == "release"
    }
}

/// Completeness of a resolved version record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
    /// All dependency lookups succeeded
    Complete,
    /// At least one dependency could not be resolved
    Partial,
}

/// Dependency versions resolved for a single Minecraft release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    pub minecraft: String,
    pub yarn_mappings: Option<String>,
    pub fabric_api: Option<String>,
    pub paper: String,
    pub data_version: Option<i32>,
    pub status: VersionStatus,
}

impl ResolvedVersion {
    /// Builds a record with `status` derived from the lookup results.
    /// `paper` is derived from the game version and always present, so only
    /// the three optional fields decide completeness.
    pub fn new(
        minecraft: String,
        yarn_mappings: Option<String>,
        fabric_api: Option<String>,
        paper: String,
        data_version: Option<i32>,
    ) -> Self {
        let status = if yarn_mappings.is_some() && fabric_api.is_some() && data_version.is_some() {
            VersionStatus::Complete
        } else {
            VersionStatus::Partial
        };
        Self {
            minecraft,
            yarn_mappings,
            fabric_api,
            paper,
            data_version,
            status,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == VersionStatus::Complete
    }
}

/// Resolved records keyed by game version, newest first
pub type VersionReport = IndexMap<String, ResolvedVersion>;
