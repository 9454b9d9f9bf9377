//! Field-keyed validation error accumulator.
//!
//! [`Validator`] collects one message per input field instead of failing on
//! the first problem, so a workflow run can report every bad input at once.
//! The first message recorded for a field wins; later failures of the same
//! field are ignored.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Input field names used as validator keys.
pub mod field {
    /// The add-on identifier input.
    pub const ADDON_ID: &str = "addon-id";
    /// The `owner/repo` repository input.
    pub const REPOSITORY: &str = "repository";
    /// The manifest output path input.
    pub const OUTPUT_FILE: &str = "output-file";
    /// The GitHub API token input.
    pub const GITHUB_TOKEN: &str = "github-token";
    /// The optional asset filter input.
    pub const ASSET_FILTER: &str = "asset-filter";
}

/// Accumulates validation errors keyed by input field name.
///
/// Entries keep insertion order, which is also the key order of
/// [`Validator::to_json`].
///
/// # Examples
///
/// ```
/// use update_manifest::Validator;
///
/// let mut validator = Validator::new();
/// validator.check("".is_empty(), "email", "Email is required");
/// assert!(validator.is_valid());
///
/// validator.check(false, "email", "Email is invalid");
/// assert!(!validator.is_valid());
/// assert_eq!(validator.error("email"), Some("Email is invalid"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    errors: Vec<(String, String)>,
}

impl Validator {
    /// Create an empty validator.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record `message` for `field` unless the field already has an error.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let key = field.into();
        if self.error(&key).is_none() {
            self.errors.push((key, message.into()));
        }
    }

    /// Record `message` for `field` when `passed` is false.
    pub fn check(&mut self, passed: bool, field: &str, message: &str) {
        if !passed {
            self.add_error(field, message);
        }
    }

    /// Return true if no errors have been recorded.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Return the number of fields with an error.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Return true if no field has an error.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Return the message recorded for `field`, if any.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, message)| message.as_str())
    }

    /// Iterate over `(field, message)` pairs in insertion order.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(key, message)| (key.as_str(), message.as_str()))
    }

    /// Render the errors as a JSON object indented by two spaces.
    ///
    /// An empty validator renders as `{}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use update_manifest::Validator;
    ///
    /// let mut validator = Validator::new();
    /// validator.add_error("input-name", "error message");
    /// assert_eq!(validator.to_json(), "{\n  \"input-name\": \"error message\"\n}");
    /// ```
    #[must_use]
    pub fn to_json(&self) -> String {
        // A map of strings to strings cannot fail to serialize.
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("{}"))
    }
}

impl Serialize for Validator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, message) in &self.errors {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}
