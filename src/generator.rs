//! Release list to update manifest transform.
//!
//! Each release contributes at most one update entry. Releases are visited
//! in input order:
//!
//! 1. Assets are narrowed by the [`AssetFilter`].
//! 2. A release with no remaining assets is skipped with a warning; later
//!    releases are still processed.
//! 3. When several assets remain, the first is used and a warning is logged.
//! 4. One leading `v` is stripped from the tag to form the version.

use log::warn;

use crate::addon_id::AddonId;
use crate::asset_filter::AssetFilter;
use crate::manifest::{Update, UpdateManifest};
use crate::release::Release;

/// Build the update manifest for `addon_id` from `releases`.
///
/// The releases are only borrowed; the returned manifest lists at most one
/// update per release, in input order.
///
/// # Examples
///
/// ```
/// use update_manifest::{AddonId, AssetFilter, generate_update_manifest};
///
/// let addon_id = AddonId::try_from("{692884b1-e357-4adb-9e3c-f4a3d74bb38b}")
///     .expect("valid addon id");
/// let manifest = generate_update_manifest(&[], &addon_id, &AssetFilter::none());
/// assert_eq!(manifest.updates_for(addon_id.as_str()), Some(&[][..]));
/// ```
#[must_use]
pub fn generate_update_manifest(
    releases: &[Release],
    addon_id: &AddonId,
    filter: &AssetFilter,
) -> UpdateManifest {
    let updates = releases
        .iter()
        .filter_map(|release| update_for_release(release, filter))
        .collect();
    UpdateManifest::for_addon(addon_id.as_str(), updates)
}

/// Derive the update entry for a single release, or `None` when no asset
/// survives the filter.
#[must_use]
pub fn update_for_release(release: &Release, filter: &AssetFilter) -> Option<Update> {
    let candidates = filter.retain(&release.assets);
    let Some(selected) = candidates.first() else {
        warn!("{}", missing_assets_message(release, filter));
        return None;
    };

    if candidates.len() > 1 {
        warn!(
            "Found {} assets for release {}. Using the first asset.",
            candidates.len(),
            release.tag_name
        );
    }

    Some(Update::new(
        normalise_version(&release.tag_name),
        selected.browser_download_url.as_str(),
    ))
}

/// Strip a single leading `v` from a release tag.
///
/// Only the first character is considered, so `version2` becomes
/// `ersion2`.
///
/// # Examples
///
/// ```
/// use update_manifest::normalise_version;
///
/// assert_eq!(normalise_version("v1.2.3"), "1.2.3");
/// assert_eq!(normalise_version("1.2.3"), "1.2.3");
/// assert_eq!(normalise_version("vv1"), "v1");
/// ```
#[must_use]
pub fn normalise_version(tag_name: &str) -> &str {
    tag_name.strip_prefix('v').unwrap_or(tag_name)
}

fn missing_assets_message(release: &Release, filter: &AssetFilter) -> String {
    match filter.pattern() {
        Some(pattern) => format!(
            "No assets found for release {}. Filter used: {pattern}",
            release.tag_name
        ),
        None => format!("No assets found for release {}.", release.tag_name),
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
