//! Update manifest schema types.
//!
//! Mirrors the Firefox add-on update manifest structure:
//!
//! ```json
//! {
//!   "addons": {
//!     "{692884b1-e357-4adb-9e3c-f4a3d74bb38b}": {
//!       "updates": [
//!         { "version": "1.0.0", "update_link": "https://example.com/addon-1.0.0.xpi" }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Optional schema fields are omitted from the serialized output when unset.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Compatibility bounds for one browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserCompatibility {
    /// The minimum browser version the add-on runs on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_min_version: Option<String>,
    /// The maximum browser version the add-on runs on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_max_version: Option<String>,
    /// The maximum browser version the add-on is likely to run on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory_max_version: Option<String>,
}

/// One update entry for an add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// The version this entry describes.
    pub version: String,
    /// Link to the XPI file for this version.
    pub update_link: String,
    /// `sha256:` or `sha512:` prefixed hash of the linked file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_hash: Option<String>,
    /// Link to an HTML page describing the update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_info_url: Option<String>,
    /// Browser compatibility keyed by browser name (only `gecko` is read).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications: Option<BTreeMap<String, BrowserCompatibility>>,
}

impl Update {
    /// Create an update entry with a version and download link.
    ///
    /// # Examples
    ///
    /// ```
    /// use update_manifest::Update;
    ///
    /// let update = Update::new("1.0.0", "https://example.com/a.xpi");
    /// let json = serde_json::to_string(&update).expect("serializable");
    /// assert_eq!(json, r#"{"version":"1.0.0","update_link":"https://example.com/a.xpi"}"#);
    /// ```
    #[must_use]
    pub fn new(version: impl Into<String>, update_link: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            update_link: update_link.into(),
            update_hash: None,
            update_info_url: None,
            applications: None,
        }
    }
}

/// The manifest entry for one add-on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    /// Update entries in release order.
    #[serde(default)]
    pub updates: Vec<Update>,
}

/// The complete update manifest document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateManifest {
    /// Add-on entries keyed by add-on identifier.
    pub addons: BTreeMap<String, Addon>,
}

impl UpdateManifest {
    /// Create a manifest with a single add-on entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use update_manifest::UpdateManifest;
    ///
    /// let manifest = UpdateManifest::for_addon("name@example.com", Vec::new());
    /// assert_eq!(manifest.updates_for("name@example.com"), Some(&[][..]));
    /// ```
    #[must_use]
    pub fn for_addon(addon_id: impl Into<String>, updates: Vec<Update>) -> Self {
        let mut addons = BTreeMap::new();
        addons.insert(addon_id.into(), Addon { updates });
        Self { addons }
    }

    /// Return the updates listed for `addon_id`, if the add-on is present.
    #[must_use]
    pub fn updates_for(&self, addon_id: &str) -> Option<&[Update]> {
        self.addons
            .get(addon_id)
            .map(|addon| addon.updates.as_slice())
    }

    /// Serialize the manifest as JSON indented by two spaces.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
