//! Firefox add-on update manifests generated from GitHub release listings.
//!
//! The crate holds the pure core of the `update-manifest` action: input
//! validation that collects every problem before reporting, and the transform
//! that turns a list of releases into an update manifest for one add-on.
//!
//! # Modules
//!
//! - [`addon_id`] - Add-on identifier validation (`AddonId`)
//! - [`asset_filter`] - Regular-expression asset selection (`AssetFilter`)
//! - [`error`] - Semantic error types for rejected inputs
//! - [`generator`] - Release list to update manifest transform
//! - [`manifest`] - Update manifest schema types
//! - [`release`] - Release and asset records from the hosting API
//! - [`repository`] - `owner/repo` reference validation (`RepositoryRef`)
//! - [`validator`] - Field-keyed validation error accumulator
//!
//! # Examples
//!
//! ```
//! use update_manifest::{AddonId, Asset, AssetFilter, Release, generate_update_manifest};
//!
//! let addon_id = AddonId::try_from("name@example.com").expect("valid addon id");
//! let releases = vec![Release::new(
//!     "v1.0.0",
//!     vec![Asset::new("addon.xpi", "https://example.com/addon.xpi")],
//! )];
//!
//! let manifest = generate_update_manifest(&releases, &addon_id, &AssetFilter::none());
//! let updates = manifest.updates_for(addon_id.as_str()).expect("addon entry");
//! assert_eq!(updates[0].version, "1.0.0");
//! ```

pub mod addon_id;
pub mod asset_filter;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod release;
pub mod repository;
pub mod validator;

pub use addon_id::{AddonId, is_valid_addon_id, validate_addon_id};
pub use asset_filter::{AssetFilter, validate_asset_filter};
pub use error::{ManifestError, Result};
pub use generator::{generate_update_manifest, normalise_version};
pub use manifest::{Addon, BrowserCompatibility, Update, UpdateManifest};
pub use release::{Asset, Release, parse_releases};
pub use repository::{RepositoryRef, is_valid_repository, validate_repository};
pub use validator::Validator;
