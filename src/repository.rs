//! Repository reference newtype and validation.
//!
//! A reference is the `owner/repo` pair used to address the GitHub releases
//! endpoint. Exactly two non-empty segments separated by `/` are accepted.

use super::error::{ManifestError, Result};
use super::validator::{Validator, field};
use std::fmt;

/// Message recorded under the `repository` field for rejected references.
pub const INVALID_REPOSITORY_MESSAGE: &str = "The repository must be in the format owner/repo";

/// Split `value` into its owner and repository segments.
fn split_reference(value: &str) -> Option<(&str, &str)> {
    let mut segments = value.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
            Some((owner, repo))
        }
        _ => None,
    }
}

/// Return true if `value` is an `owner/repo` reference.
///
/// # Examples
///
/// ```
/// use update_manifest::is_valid_repository;
///
/// assert!(is_valid_repository("owner/repo"));
/// assert!(!is_valid_repository("owner/repo/extra"));
/// assert!(!is_valid_repository("ownerrepo"));
/// ```
#[must_use]
pub fn is_valid_repository(value: &str) -> bool {
    split_reference(value).is_some()
}

/// Record a `repository` error on `validator` if `value` is not an
/// `owner/repo` reference.
pub fn validate_repository(validator: &mut Validator, value: &str) {
    validator.check(
        is_valid_repository(value),
        field::REPOSITORY,
        INVALID_REPOSITORY_MESSAGE,
    );
}

/// A validated `owner/repo` reference.
///
/// # Examples
///
/// ```
/// use update_manifest::RepositoryRef;
///
/// let reference = RepositoryRef::try_from("mozilla/addons").expect("valid reference");
/// assert_eq!(reference.owner(), "mozilla");
/// assert_eq!(reference.repo(), "addons");
/// assert_eq!(reference.to_string(), "mozilla/addons");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    owner: String,
    repo: String,
}

impl RepositoryRef {
    /// Return the owning user or organisation.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Return the repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl TryFrom<&str> for RepositoryRef {
    type Error = ManifestError;

    fn try_from(value: &str) -> Result<Self> {
        split_reference(value)
            .map(|(owner, repo)| Self {
                owner: owner.to_owned(),
                repo: repo.to_owned(),
            })
            .ok_or_else(|| ManifestError::InvalidRepository {
                value: value.to_owned(),
            })
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("owner/repo")]
    #[case::dotted("some.org/my-addon.rs")]
    fn accepts_two_segments(#[case] value: &str) {
        assert!(is_valid_repository(value));
    }

    #[rstest]
    #[case::three_segments("owner/repo/extra")]
    #[case::one_segment("ownerrepo")]
    #[case::empty_owner("/repo")]
    #[case::empty_repo("owner/")]
    #[case::empty("")]
    fn rejects_other_shapes(#[case] value: &str) {
        assert!(!is_valid_repository(value));
    }

    #[test]
    fn validate_repository_records_error() {
        let mut validator = Validator::new();
        validate_repository(&mut validator, "owner/repo/extra");
        assert_eq!(
            validator.error(field::REPOSITORY),
            Some(INVALID_REPOSITORY_MESSAGE)
        );
    }

    #[test]
    fn try_from_splits_segments() {
        let reference = RepositoryRef::try_from("owner/repo").expect("valid reference");
        assert_eq!(reference.owner(), "owner");
        assert_eq!(reference.repo(), "repo");
    }

    #[test]
    fn try_from_rejects_invalid_reference() {
        let err = RepositoryRef::try_from("ownerrepo").expect_err("invalid reference");
        assert_eq!(
            err,
            ManifestError::InvalidRepository {
                value: "ownerrepo".to_owned()
            }
        );
    }
}
