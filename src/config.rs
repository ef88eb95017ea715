use std::time::Duration;

// =============================================================================
// Network constants
// =============================================================================

/// Timeout for each registry request (10 seconds)
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent sent on every registry request
pub const USER_AGENT: &str = "mc-version-check/0.1.0";

// =============================================================================
// Resolution constants
// =============================================================================

/// How many of the newest matching releases to resolve per run
pub const MAX_CANDIDATES: usize = 5;

/// Fabric Loader version pinned in generated gradle.properties
pub const LOADER_VERSION: &str = "0.16.9";

/// Suffix appended to a game version to form the Paper artifact version
pub const PAPER_VERSION_SUFFIX: &str = "-R0.1-SNAPSHOT";
