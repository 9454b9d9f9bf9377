//! Add-on identifier newtype and validation.
//!
//! Firefox accepts two identifier shapes: an RFC 4122 UUID wrapped in curly
//! braces, and an e-mail-like string following the HTML living standard's
//! valid e-mail address grammar.

use super::error::{ManifestError, Result};
use super::validator::{Validator, field};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Braced RFC 4122 UUID, case-insensitive.
const UUID_PATTERN: &str = r"(?i)^\{[a-f0-9]{8}(-[a-f0-9]{4}){3}-[a-f0-9]{12}\}$";

/// Valid e-mail address per the HTML living standard.
const EMAIL_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@",
    r"[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
    r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
);

/// Message recorded under the `addon-id` field for rejected identifiers.
pub const INVALID_ADDON_ID_MESSAGE: &str =
    "The addon ID is neither a valid e-mail nor a valid UUID";

fn uuid_regex() -> Option<&'static Regex> {
    static UUID: OnceLock<Option<Regex>> = OnceLock::new();
    UUID.get_or_init(|| Regex::new(UUID_PATTERN).ok()).as_ref()
}

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
}

/// Return true if `value` is a braced UUID such as
/// `{692884b1-e357-4adb-9e3c-f4a3d74bb38b}`.
#[must_use]
pub fn is_valid_uuid(value: &str) -> bool {
    uuid_regex().is_some_and(|re| re.is_match(value))
}

/// Return true if `value` is a valid e-mail address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(value))
}

/// Return true if `value` is an acceptable add-on identifier.
///
/// # Examples
///
/// ```
/// use update_manifest::is_valid_addon_id;
///
/// assert!(is_valid_addon_id("{692884b1-e357-4adb-9e3c-f4a3d74bb38b}"));
/// assert!(is_valid_addon_id("name@example.com"));
/// assert!(!is_valid_addon_id("not-an-addon-id"));
/// ```
#[must_use]
pub fn is_valid_addon_id(value: &str) -> bool {
    is_valid_email(value) || is_valid_uuid(value)
}

/// Record an `addon-id` error on `validator` if `value` is not a valid
/// identifier.
pub fn validate_addon_id(validator: &mut Validator, value: &str) {
    validator.check(
        is_valid_addon_id(value),
        field::ADDON_ID,
        INVALID_ADDON_ID_MESSAGE,
    );
}

/// A validated add-on identifier.
///
/// # Examples
///
/// ```
/// use update_manifest::AddonId;
///
/// let id = AddonId::try_from("name@example.com").expect("valid id");
/// assert_eq!(id.as_str(), "name@example.com");
/// assert!(AddonId::try_from("not-an-addon-id").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddonId(String);

impl AddonId {
    /// Return the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for AddonId {
    type Error = ManifestError;

    fn try_from(value: &str) -> Result<Self> {
        Self::try_from(value.to_owned())
    }
}

impl TryFrom<String> for AddonId {
    type Error = ManifestError;

    fn try_from(value: String) -> Result<Self> {
        if is_valid_addon_id(&value) {
            Ok(Self(value))
        } else {
            Err(ManifestError::InvalidAddonId { value })
        }
    }
}

impl AsRef<str> for AddonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
