//! Release records as returned by the hosting API.
//!
//! Only the fields the manifest transform reads are modelled. Unknown JSON
//! fields in API payloads are ignored during deserialization.

use serde::{Deserialize, Serialize};

/// A downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// The file name shown on the release page.
    pub name: String,
    /// The public download URL for the file.
    pub browser_download_url: String,
}

impl Asset {
    /// Create an asset record.
    #[must_use]
    pub fn new(name: impl Into<String>, browser_download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            browser_download_url: browser_download_url.into(),
        }
    }
}

/// A single versioned release and its assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// The free-form version label, optionally prefixed with `v`.
    pub tag_name: String,
    /// Files attached to the release, in API order.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Release {
    /// Create a release record.
    #[must_use]
    pub fn new(tag_name: impl Into<String>, assets: Vec<Asset>) -> Self {
        Self {
            tag_name: tag_name.into(),
            assets,
        }
    }
}

/// Parse a JSON array of releases.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or a release lacks `tag_name`.
///
/// # Examples
///
/// ```
/// use update_manifest::parse_releases;
///
/// let json = r#"[{"tag_name":"v1.0","id":1,"assets":[
///     {"name":"a.xpi","browser_download_url":"https://example.com/a.xpi","size":10}
/// ]}]"#;
/// let releases = parse_releases(json).expect("valid releases");
/// assert_eq!(releases[0].tag_name, "v1.0");
/// assert_eq!(releases[0].assets[0].name, "a.xpi");
/// ```
pub fn parse_releases(json: &str) -> Result<Vec<Release>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_empty_list() {
        let releases = parse_releases("[]").expect("valid JSON");
        assert!(releases.is_empty());
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"[{
            "url": "https://api.github.com/repos/o/r/releases/1",
            "tag_name": "v2.0.0",
            "draft": false,
            "assets": [{
                "id": 7,
                "name": "addon.xpi",
                "content_type": "application/x-xpinstall",
                "browser_download_url": "https://github.com/o/r/releases/download/v2.0.0/addon.xpi"
            }]
        }]"#;
        let releases = parse_releases(json).expect("valid JSON");
        assert_eq!(
            releases,
            vec![Release::new(
                "v2.0.0",
                vec![Asset::new(
                    "addon.xpi",
                    "https://github.com/o/r/releases/download/v2.0.0/addon.xpi"
                )]
            )]
        );
    }

    #[test]
    fn missing_assets_default_to_empty() {
        let releases = parse_releases(r#"[{"tag_name":"v1"}]"#).expect("valid JSON");
        assert!(releases.first().is_some_and(|r| r.assets.is_empty()));
    }

    #[test]
    fn rejects_release_without_tag() {
        assert!(parse_releases(r#"[{"assets":[]}]"#).is_err());
    }
}
