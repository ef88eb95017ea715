//! Concrete HTTP implementations of the source traits

pub mod fabric_meta;
pub mod modrinth;
pub mod mojang;

pub use fabric_meta::FabricMeta;
pub use modrinth::ModrinthRegistry;
pub use mojang::MojangManifest;

/// Shared HTTP client builder: every registry uses the same User-Agent and
/// per-request timeout.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(crate::config::USER_AGENT)
        .timeout(crate::config::FETCH_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client")
}
