//! Static fallback tables for known releases
//!
//! These are manually curated and will lag behind new game releases; keep
//! them in sync with the versions the mod actually ships for.
// TODO: add 1.21.9+ rows once Fabric API builds for them are published

/// Known-good Fabric API builds per game version. Checked before the
/// Modrinth registry to avoid a network round-trip, and used as a fallback
/// when the registry's response shape changes.
pub const FABRIC_API_FALLBACK: &[(&str, &str)] = &[
    ("1.21.4", "0.108.0+1.21.4"),
    ("1.21.5", "0.109.0+1.21.5"),
    ("1.21.6", "0.109.5+1.21.6"),
    ("1.21.7", "0.110.0+1.21.7"),
    ("1.21.8", "0.110.5+1.21.8"),
];

/// World data format revision per game version. No remote source exists
/// for these; unknown versions stay unresolved.
pub const DATA_VERSIONS: &[(&str, i32)] = &[
    ("1.21.4", 4080),
    ("1.21.5", 4081),
    ("1.21.6", 4081),
    ("1.21.7", 4081),
    ("1.21.8", 4082),
];

/// Immutable lookup tables handed to the resolver at construction
#[derive(Debug, Clone, Copy)]
pub struct StaticTables {
    pub fabric_api: &'static [(&'static str, &'static str)],
    pub data_versions: &'static [(&'static str, i32)],
}

impl StaticTables {
    pub fn fabric_api(&self, mc_version: &str) -> Option<&'static str> {
        self.fabric_api
            .iter()
            .find(|(mc, _)| *mc == mc_version)
            .map(|(_, fabric)| *fabric)
    }

    pub fn data_version(&self, mc_version: &str) -> Option<i32> {
        self.data_versions
            .iter()
            .find(|(mc, _)| *mc == mc_version)
            .map(|(_, data)| *data)
    }
}

impl Default for StaticTables {
    fn default() -> Self {
        Self {
            fabric_api: FABRIC_API_FALLBACK,
            data_versions: DATA_VERSIONS,
        }
    }
}
