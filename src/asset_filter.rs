//! Regular-expression asset selection.
//!
//! An [`AssetFilter`] narrows a release's assets to those whose names match
//! a pattern. Matching is a search anywhere in the name, not a full match.
//! The empty pattern produces a pass-through filter.

use super::error::{ManifestError, Result};
use super::release::Asset;
use super::validator::{Validator, field};
use regex::Regex;
use std::fmt;

/// A compiled, optional asset name filter.
///
/// # Examples
///
/// ```
/// use update_manifest::{Asset, AssetFilter};
///
/// let filter = AssetFilter::new(r"\.firefox\.signed.*").expect("valid pattern");
/// let assets = vec![
///     Asset::new("pkg.firefox.signed.xpi", "https://example.com/U"),
///     Asset::new("pkg.other.xpi", "https://example.com/X"),
/// ];
/// let retained = filter.retain(&assets);
/// assert_eq!(retained.len(), 1);
/// assert_eq!(retained[0].name, "pkg.firefox.signed.xpi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    pattern: Option<Regex>,
}

impl AssetFilter {
    /// Return a filter that retains every asset.
    #[must_use]
    pub const fn none() -> Self {
        Self { pattern: None }
    }

    /// Compile `pattern` into a filter. The empty string yields
    /// [`AssetFilter::none`].
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidAssetFilter`] if the pattern does not
    /// compile.
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Ok(Self::none());
        }
        Regex::new(pattern)
            .map(|regex| Self {
                pattern: Some(regex),
            })
            .map_err(|err| ManifestError::InvalidAssetFilter {
                pattern: pattern.to_owned(),
                reason: err.to_string(),
            })
    }

    /// Return true if a pattern is applied.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Return the pattern source, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }

    /// Return true if the asset named `name` passes the filter.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.as_ref().is_none_or(|regex| regex.is_match(name))
    }

    /// Return the assets that pass the filter, in their original order.
    #[must_use]
    pub fn retain<'a>(&self, assets: &'a [Asset]) -> Vec<&'a Asset> {
        assets
            .iter()
            .filter(|asset| self.matches(&asset.name))
            .collect()
    }
}

impl TryFrom<&str> for AssetFilter {
    type Error = ManifestError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for AssetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern().unwrap_or_default())
    }
}

/// Compile `pattern`, recording an `asset-filter` error on `validator` when
/// it is not a valid regular expression.
///
/// Returns the compiled filter on success.
pub fn validate_asset_filter(validator: &mut Validator, pattern: &str) -> Option<AssetFilter> {
    match AssetFilter::new(pattern) {
        Ok(filter) => Some(filter),
        Err(err) => {
            validator.add_error(
                field::ASSET_FILTER,
                format!("The asset filter is not a valid regular expression: {err}"),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn assets() -> Vec<Asset> {
        vec![
            Asset::new("pkg.firefox.signed.xpi", "U"),
            Asset::new("pkg.other.xpi", "X"),
            Asset::new("checksums.txt", "C"),
        ]
    }

    #[rstest]
    fn empty_pattern_retains_everything(assets: Vec<Asset>) {
        let filter = AssetFilter::new("").expect("empty pattern");
        assert!(!filter.is_active());
        assert_eq!(filter.retain(&assets).len(), 3);
    }

    #[rstest]
    #[case::signed(r"\.firefox\.signed.*", &["pkg.firefox.signed.xpi"])]
    #[case::extension(r"\.xpi$", &["pkg.firefox.signed.xpi", "pkg.other.xpi"])]
    #[case::substring("other", &["pkg.other.xpi"])]
    #[case::nothing("\\.zip$", &[])]
    fn pattern_searches_names(
        assets: Vec<Asset>,
        #[case] pattern: &str,
        #[case] expected: &[&str],
    ) {
        let filter = AssetFilter::new(pattern).expect("valid pattern");
        let names: Vec<&str> = filter
            .retain(&assets)
            .into_iter()
            .map(|asset| asset.name.as_str())
            .collect();
        assert_eq!(names, expected);
    }

    #[rstest]
    fn filtering_is_idempotent(assets: Vec<Asset>) {
        let filter = AssetFilter::new(r"\.xpi$").expect("valid pattern");
        let first: Vec<Asset> = filter.retain(&assets).into_iter().cloned().collect();
        let second: Vec<Asset> = filter.retain(&first).into_iter().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = AssetFilter::new("(unclosed").expect_err("invalid pattern");
        assert!(matches!(err, ManifestError::InvalidAssetFilter { .. }));
    }

    #[test]
    fn validate_asset_filter_records_error() {
        let mut validator = Validator::new();
        let filter = validate_asset_filter(&mut validator, "[z-a]");
        assert!(filter.is_none());
        let message = validator
            .error(field::ASSET_FILTER)
            .expect("asset-filter error");
        assert!(message.contains("not a valid regular expression"));
    }

    #[test]
    fn display_shows_pattern() {
        let filter = AssetFilter::new("signed").expect("valid pattern");
        assert_eq!(filter.to_string(), "signed");
        assert_eq!(AssetFilter::none().to_string(), "");
    }
}
