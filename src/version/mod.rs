//! Version resolution layer
//!
//! This module determines which Minecraft releases the mod can be built
//! against and which dependency versions go with each of them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Manifest   │────▶│             │     │   Tables    │
//! │  (Mojang)   │     │             │◀────│ (fallbacks) │
//! └─────────────┘     │             │     └─────────────┘
//! ┌─────────────┐     │  Resolver   │
//! │  Mappings   │────▶│             │────▶ VersionReport
//! │ (FabricMeta)│     │             │
//! └─────────────┘     │             │
//! ┌─────────────┐     │             │
//! │  Packages   │────▶│             │
//! │ (Modrinth)  │     └─────────────┘
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`resolver`]: orchestrates per-version lookups into a [`types::VersionReport`]
//! - [`registry`]: source traits for the three remote endpoints
//! - [`registries`]: concrete HTTP implementations (Mojang, Fabric Meta, Modrinth)
//! - [`tables`]: static fallback tables for known releases
//! - [`semver`]: release-id matching and numeric version ordering
//! - [`error`]: error types for registry operations
//! - [`types`]: `ResolvedVersion`, `VersionStatus`, `VersionReport`

pub mod error;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod semver;
pub mod tables;
pub mod types;
