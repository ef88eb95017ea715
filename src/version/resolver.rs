//! Resolves compatible dependency versions per Minecraft release
//!
//! The resolver is the catch boundary for every remote lookup: a failed
//! lookup becomes an absent field (logged), never an error to the caller.

use tracing::{debug, error, info, warn};

use crate::config::{MAX_CANDIDATES, PAPER_VERSION_SUFFIX};
use crate::version::registries::{FabricMeta, ModrinthRegistry, MojangManifest};
use crate::version::registry::{ManifestSource, MappingsSource, PackageSource};
use crate::version::semver::{is_supported_release, sort_newest_first};
use crate::version::tables::StaticTables;
use crate::version::types::{ResolvedVersion, VersionReport};

pub struct VersionResolver {
    manifest: Box<dyn ManifestSource>,
    mappings: Box<dyn MappingsSource>,
    packages: Box<dyn PackageSource>,
    tables: StaticTables,
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::with_sources(
            Box::new(MojangManifest::default()),
            Box::new(FabricMeta::default()),
            Box::new(ModrinthRegistry::default()),
            StaticTables::default(),
        )
    }
}

impl VersionResolver {
    pub fn with_sources(
        manifest: Box<dyn ManifestSource>,
        mappings: Box<dyn MappingsSource>,
        packages: Box<dyn PackageSource>,
        tables: StaticTables,
    ) -> Self {
        Self {
            manifest,
            mappings,
            packages,
            tables,
        }
    }

    /// Lists the releases to resolve, newest first.
    ///
    /// Keeps stable releases in the supported series, truncated to the
    /// [`MAX_CANDIDATES`] newest. A filter narrows the list without
    /// reordering it. A manifest failure yields an empty list, not an error.
    pub async fn list_candidate_versions(&self, filter: Option<&[String]>) -> Vec<String> {
        let entries = match self.manifest.entries().await {
            Ok(entries) => entries,
            Err(e) => {
                error!("Failed to fetch version manifest: {}", e);
                return Vec::new();
            }
        };

        let mut ids: Vec<String> = entries
            .into_iter()
            .filter(|e| e.is_release() && is_supported_release(&e.id))
            .map(|e| e.id)
            .collect();

        sort_newest_first(&mut ids);
        ids.truncate(MAX_CANDIDATES);

        if let Some(filter) = filter {
            ids.retain(|id| filter.contains(id));
        }

        debug!("Candidate versions: {}", ids.join(", "));
        ids
    }

    /// Newest yarn mappings build for a game version, absent on any failure
    pub async fn lookup_mappings(&self, mc_version: &str) -> Option<String> {
        match self.mappings.latest_mappings(mc_version).await {
            Ok(mappings) => mappings,
            Err(e) => {
                warn!("Failed to fetch yarn mappings for {}: {}", mc_version, e);
                None
            }
        }
    }

    /// Fabric API build for a game version.
    ///
    /// Known versions come from the static table without a network call;
    /// only unknown versions hit the Modrinth registry.
    pub async fn lookup_package_version(&self, mc_version: &str) -> Option<String> {
        if let Some(fabric) = self.tables.fabric_api(mc_version) {
            return Some(fabric.to_string());
        }

        match self.packages.version_for_game(mc_version).await {
            Ok(version) => version,
            Err(e) => {
                warn!("Failed to fetch Fabric API version for {}: {}", mc_version, e);
                None
            }
        }
    }

    /// Paper artifact version, derived from the game version
    pub fn paper_version(&self, mc_version: &str) -> String {
        format!("{mc_version}{PAPER_VERSION_SUFFIX}")
    }

    /// World data format revision, from the static table only
    pub fn data_version(&self, mc_version: &str) -> Option<i32> {
        self.tables.data_version(mc_version)
    }

    /// Resolves every candidate version into a report, newest first
    pub async fn resolve_all(&self, filter: Option<&[String]>) -> VersionReport {
        let candidates = self.list_candidate_versions(filter).await;

        let mut report = VersionReport::new();
        for mc_version in candidates {
            info!("Resolving Minecraft {}", mc_version);

            let yarn = self.lookup_mappings(&mc_version).await;
            let fabric_api = self.lookup_package_version(&mc_version).await;
            let paper = self.paper_version(&mc_version);
            let data_version = self.data_version(&mc_version);

            let record =
                ResolvedVersion::new(mc_version.clone(), yarn, fabric_api, paper, data_version);
            debug!("Resolved {}: {:?}", mc_version, record.status);
            report.insert(mc_version, record);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::RegistryError;
    use crate::version::registry::{MockManifestSource, MockMappingsSource, MockPackageSource};
    use crate::version::types::{ManifestEntry, VersionStatus};

    fn entry(id: &str, release_type: &str) -> ManifestEntry {
        ManifestEntry {
            id: id.to_string(),
            release_type: release_type.to_string(),
        }
    }

    fn resolver_with_manifest(entries: Vec<ManifestEntry>) -> VersionResolver {
        let mut manifest = MockManifestSource::new();
        manifest.expect_entries().returning(move || Ok(entries.clone()));
        VersionResolver::with_sources(
            Box::new(manifest),
            Box::new(MockMappingsSource::new()),
            Box::new(MockPackageSource::new()),
            StaticTables::default(),
        )
    }

    #[tokio::test]
    async fn candidates_are_sorted_newest_first_and_truncated() {
        let entries = vec![
            entry("24w46a", "snapshot"),
            entry("1.21.4", "release"),
            entry("1.21.10", "release"),
            entry("1.21.8", "release"),
            entry("1.21.5", "release"),
            entry("1.21.6", "release"),
            entry("1.21.7", "release"),
            entry("1.20.4", "release"),
        ];
        let resolver = resolver_with_manifest(entries);

        let candidates = resolver.list_candidate_versions(None).await;

        assert_eq!(candidates, ["1.21.10", "1.21.8", "1.21.7", "1.21.6", "1.21.5"]);
    }

    #[tokio::test]
    async fn filter_narrows_without_reordering() {
        let entries = vec![entry("1.21.9", "release"), entry("1.21.4", "release")];
        let resolver = resolver_with_manifest(entries);

        let filter = vec!["1.21.4".to_string()];
        let candidates = resolver.list_candidate_versions(Some(&filter)).await;

        assert_eq!(candidates, ["1.21.4"]);

        // Filter order never wins over sorted order
        let entries = vec![entry("1.21.9", "release"), entry("1.21.4", "release")];
        let resolver = resolver_with_manifest(entries);
        let filter = vec!["1.21.4".to_string(), "1.21.9".to_string()];
        let candidates = resolver.list_candidate_versions(Some(&filter)).await;
        assert_eq!(candidates, ["1.21.9", "1.21.4"]);
    }

    #[tokio::test]
    async fn manifest_failure_yields_empty_report() {
        let mut manifest = MockManifestSource::new();
        manifest
            .expect_entries()
            .returning(|| Err(RegistryError::InvalidResponse("boom".to_string())));
        let resolver = VersionResolver::with_sources(
            Box::new(manifest),
            Box::new(MockMappingsSource::new()),
            Box::new(MockPackageSource::new()),
            StaticTables::default(),
        );

        let report = resolver.resolve_all(None).await;

        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn package_lookup_prefers_static_table_over_network() {
        // No expectation on the package source: any call would panic
        let resolver = VersionResolver::with_sources(
            Box::new(MockManifestSource::new()),
            Box::new(MockMappingsSource::new()),
            Box::new(MockPackageSource::new()),
            StaticTables::default(),
        );

        let result = resolver.lookup_package_version("1.21.5").await;

        assert_eq!(result, Some("0.109.0+1.21.5".to_string()));
    }

    #[tokio::test]
    async fn package_lookup_falls_through_to_registry_on_table_miss() {
        let mut packages = MockPackageSource::new();
        packages
            .expect_version_for_game()
            .withf(|mc| mc == "1.21.9")
            .returning(|_| Ok(Some("0.111.0+1.21.9".to_string())));
        let resolver = VersionResolver::with_sources(
            Box::new(MockManifestSource::new()),
            Box::new(MockMappingsSource::new()),
            Box::new(packages),
            StaticTables::default(),
        );

        let result = resolver.lookup_package_version("1.21.9").await;

        assert_eq!(result, Some("0.111.0+1.21.9".to_string()));
    }

    #[tokio::test]
    async fn lookup_failures_become_absent_fields() {
        let mut mappings = MockMappingsSource::new();
        mappings
            .expect_latest_mappings()
            .returning(|_| Err(RegistryError::InvalidResponse("timeout".to_string())));
        let resolver = VersionResolver::with_sources(
            Box::new(MockManifestSource::new()),
            Box::new(mappings),
            Box::new(MockPackageSource::new()),
            StaticTables::default(),
        );

        assert_eq!(resolver.lookup_mappings("1.21.4").await, None);
    }

    #[test]
    fn paper_version_is_pure() {
        let resolver = VersionResolver::with_sources(
            Box::new(MockManifestSource::new()),
            Box::new(MockMappingsSource::new()),
            Box::new(MockPackageSource::new()),
            StaticTables::default(),
        );

        assert_eq!(resolver.paper_version("1.21.4"), "1.21.4-R0.1-SNAPSHOT");
        assert_eq!(resolver.paper_version("1.21.4"), resolver.paper_version("1.21.4"));
    }

    #[tokio::test]
    async fn resolve_all_derives_status_per_version() {
        let entries = vec![entry("1.21.9", "release"), entry("1.21.8", "release")];
        let mut manifest = MockManifestSource::new();
        manifest.expect_entries().returning(move || Ok(entries.clone()));

        let mut mappings = MockMappingsSource::new();
        mappings
            .expect_latest_mappings()
            .returning(|mc| match mc {
                "1.21.8" => Ok(Some("1.21.8+build.2".to_string())),
                _ => Ok(None),
            });

        // 1.21.9 misses the static table and the registry has no build yet
        let mut packages = MockPackageSource::new();
        packages
            .expect_version_for_game()
            .withf(|mc| mc == "1.21.9")
            .returning(|_| Ok(None));

        let resolver = VersionResolver::with_sources(
            Box::new(manifest),
            Box::new(mappings),
            Box::new(packages),
            StaticTables::default(),
        );

        let report = resolver.resolve_all(None).await;

        let keys: Vec<_> = report.keys().cloned().collect();
        assert_eq!(keys, ["1.21.9", "1.21.8"]);

        let newest = &report["1.21.9"];
        assert_eq!(newest.status, VersionStatus::Partial);
        assert_eq!(newest.data_version, None);

        let known = &report["1.21.8"];
        assert_eq!(known.status, VersionStatus::Complete);
        assert_eq!(known.yarn_mappings, Some("1.21.8+build.2".to_string()));
        assert_eq!(known.fabric_api, Some("0.110.5+1.21.8".to_string()));
        assert_eq!(known.paper, "1.21.8-R0.1-SNAPSHOT");
        assert_eq!(known.data_version, Some(4082));
    }
}
