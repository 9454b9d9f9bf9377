//! Shared helpers for action integration tests.

use std::cell::Cell;

use update_manifest::{Asset, Release, RepositoryRef};
use update_manifest_action::cli::Inputs;
use update_manifest_action::github::{FetchError, ReleaseSource};

/// Add-on identifier used across scenarios.
pub const ADDON_ID: &str = "{692884b1-e357-4adb-9e3c-f4a3d74bb38b}";

/// A release source that serves canned releases and counts calls.
#[derive(Debug, Default)]
pub struct StubReleaseSource {
    releases: Vec<Release>,
    fail: bool,
    calls: Cell<usize>,
}

impl StubReleaseSource {
    /// Serve `releases` on every call.
    pub fn with_releases(releases: Vec<Release>) -> Self {
        Self {
            releases,
            ..Self::default()
        }
    }

    /// Fail every call with an HTTP error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of times releases were requested.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ReleaseSource for StubReleaseSource {
    fn list_releases(&self, repository: &RepositoryRef) -> Result<Vec<Release>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(FetchError::HttpError {
                url: format!("https://api.github.com/repos/{repository}/releases"),
                reason: "http status: 500".to_owned(),
            });
        }
        Ok(self.releases.clone())
    }
}

/// Two installable releases around one without assets, newest first.
pub fn sample_releases() -> Vec<Release> {
    vec![
        Release::new(
            "v1.2.0",
            vec![
                Asset::new(
                    "addon-1.2.0.firefox.signed.xpi",
                    "https://example.com/1.2.0.xpi",
                ),
                Asset::new("addon-1.2.0.chrome.zip", "https://example.com/1.2.0.zip"),
            ],
        ),
        Release::new("v1.1.0", Vec::new()),
        Release::new(
            "1.0.0",
            vec![Asset::new(
                "addon-1.0.0.firefox.signed.xpi",
                "https://example.com/1.0.0.xpi",
            )],
        ),
    ]
}

/// Complete, valid inputs writing to `output_file`.
pub fn valid_inputs(output_file: &str) -> Inputs {
    Inputs {
        github_token: "secret".to_owned(),
        addon_id: ADDON_ID.to_owned(),
        repository: "owner/repo".to_owned(),
        output_file: output_file.to_owned(),
        ..Inputs::default()
    }
}
