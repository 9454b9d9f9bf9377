//! Error types for rejected manifest inputs.
//!
//! Each variant names the rejected value and the constraint it violated so
//! the message can be surfaced to workflow authors unchanged.

use thiserror::Error;

/// Errors arising from invalid manifest inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// The add-on identifier is neither a braced UUID nor an e-mail address.
    #[error("invalid addon ID \"{value}\": expected a braced UUID or an e-mail address")]
    InvalidAddonId {
        /// The rejected identifier.
        value: String,
    },

    /// The repository reference is not of the form `owner/repo`.
    #[error("invalid repository \"{value}\": expected owner/repo")]
    InvalidRepository {
        /// The rejected reference.
        value: String,
    },

    /// The asset filter does not compile as a regular expression.
    #[error("invalid asset filter \"{pattern}\": {reason}")]
    InvalidAssetFilter {
        /// The rejected pattern source.
        pattern: String,
        /// The regular-expression compiler's description of the problem.
        reason: String,
    },
}

/// Result type alias using [`ManifestError`].
pub type Result<T> = std::result::Result<T, ManifestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_addon_id_names_the_value() {
        let err = ManifestError::InvalidAddonId {
            value: "not-an-addon-id".to_owned(),
        };
        assert!(err.to_string().contains("not-an-addon-id"));
    }

    #[test]
    fn invalid_asset_filter_includes_reason() {
        let err = ManifestError::InvalidAssetFilter {
            pattern: "(".to_owned(),
            reason: "unclosed group".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains('('));
        assert!(msg.contains("unclosed group"));
    }
}
