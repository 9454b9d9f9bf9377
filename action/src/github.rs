//! Release listing via the GitHub REST API.
//!
//! Provides a trait-based abstraction over the releases endpoint so the run
//! orchestration can be exercised without network access.

use std::sync::OnceLock;
use std::time::Duration;

use update_manifest::{Release, RepositoryRef, parse_releases};

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version requested on every call.
const API_VERSION: &str = "2022-11-28";

/// Page size requested from the releases endpoint (the API maximum).
const PER_PAGE: u8 = 100;

/// Network timeout for a single API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("update-manifest-action/", env!("CARGO_PKG_VERSION"));

/// Trait for listing the releases of a repository.
///
/// Releases are returned in the order the host lists them, newest first for
/// GitHub.
#[cfg_attr(test, mockall::automock)]
pub trait ReleaseSource {
    /// List every release of `repository`.
    ///
    /// # Errors
    ///
    /// Returns an error if a request fails or a response cannot be decoded.
    fn list_releases(&self, repository: &RepositoryRef) -> Result<Vec<Release>, FetchError>;
}

/// Errors arising from release listing.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be completed.
    #[error("request failed for {url}: {reason}")]
    HttpError {
        /// The URL that was requested.
        url: String,
        /// A human-readable description of the failure.
        reason: String,
    },

    /// The repository does not exist or the token cannot see it (HTTP 404).
    #[error("repository not found: {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The response body is not a release list.
    #[error("invalid release payload from {url}: {source}")]
    InvalidPayload {
        /// The URL whose body failed to decode.
        url: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// One page of the releases listing.
#[derive(Debug)]
struct ReleasePage {
    releases: Vec<Release>,
    next: Option<String>,
}

/// HTTP-based release source using `ureq`.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    api_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for the API at `api_url` authenticated with `token`.
    #[must_use]
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    /// Construct the URL of the first releases page for `repository`.
    ///
    /// # Examples
    ///
    /// ```
    /// use update_manifest::RepositoryRef;
    /// use update_manifest_action::github::GitHubClient;
    ///
    /// let client = GitHubClient::new("https://api.github.com/", "token");
    /// let repository = RepositoryRef::try_from("owner/repo").expect("valid reference");
    /// assert_eq!(
    ///     client.releases_url(&repository),
    ///     "https://api.github.com/repos/owner/repo/releases?per_page=100"
    /// );
    /// ```
    #[must_use]
    pub fn releases_url(&self, repository: &RepositoryRef) -> String {
        format!(
            "{}/repos/{}/{}/releases?per_page={PER_PAGE}",
            self.api_url.trim_end_matches('/'),
            repository.owner(),
            repository.repo()
        )
    }

    fn fetch_page(&self, url: &str) -> Result<ReleasePage, FetchError> {
        let response = http_agent()
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", format!("Bearer {}", self.token))
            .call()
            .map_err(|e| map_ureq_error(url, &e))?;

        let next = response
            .headers()
            .get("link")
            .and_then(|value| value.to_str().ok())
            .and_then(next_page_url);
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| FetchError::HttpError {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;
        let releases = parse_releases(&body).map_err(|source| FetchError::InvalidPayload {
            url: url.to_owned(),
            source,
        })?;

        Ok(ReleasePage { releases, next })
    }
}

impl ReleaseSource for GitHubClient {
    fn list_releases(&self, repository: &RepositoryRef) -> Result<Vec<Release>, FetchError> {
        let mut releases = Vec::new();
        let mut next = Some(self.releases_url(repository));
        while let Some(url) = next {
            let page = self.fetch_page(&url)?;
            releases.extend(page.releases);
            next = page.next;
        }
        Ok(releases)
    }
}

/// Extract the `rel="next"` target from an RFC 8288 `Link` header.
fn next_page_url(link_header: &str) -> Option<String> {
    link_header.split(',').find_map(|entry| {
        let (target, params) = entry.split_once(';')?;
        let is_next = params.split(';').any(|param| param.trim() == "rel=\"next\"");
        if !is_next {
            return None;
        }
        target
            .trim()
            .strip_prefix('<')
            .and_then(|url| url.strip_suffix('>'))
            .map(str::to_owned)
    })
}

/// Shared `ureq` agent with request timeout configuration.
fn http_agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build();
        ureq::Agent::new_with_config(config)
    })
}

/// Map a ureq error to a [`FetchError`].
fn map_ureq_error(url: &str, err: &ureq::Error) -> FetchError {
    match err {
        ureq::Error::StatusCode(404) => FetchError::NotFound {
            url: url.to_owned(),
        },
        other => FetchError::HttpError {
            url: url.to_owned(),
            reason: other.to_string(),
        },
    }
}
