//! Input definitions for the update manifest action.
//!
//! Every input can be passed as a flag or through the environment variable
//! GitHub Actions sets for a step's `with:` block (`INPUT_<NAME>`, upper
//! cased, hyphens kept). Missing inputs default to empty strings so the
//! validator can report all of them together instead of clap stopping at the
//! first one.

use clap::Parser;

use crate::github::DEFAULT_API_URL;

/// Generate a Firefox add-on update manifest from GitHub releases.
#[derive(Parser, Debug, Clone)]
#[command(name = "update-manifest-action")]
#[command(version, about)]
#[command(long_about = concat!(
    "Generate a Firefox add-on update manifest from GitHub releases.\n\n",
    "Releases of the given repository are fetched from the GitHub API. For ",
    "each release the first asset matching --asset-filter becomes an update ",
    "entry; releases without a matching asset are skipped. The manifest is ",
    "written to --output-file and exposed as the `manifest` step output.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Generate a manifest for signed XPI assets:\n",
    "    $ update-manifest-action --github-token \"$TOKEN\" \\\n",
    "        --addon-id 'addon@example.com' --repository owner/repo \\\n",
    "        --output-file updates.json --asset-filter '\\.signed\\.xpi$'\n",
))]
pub struct Inputs {
    /// Token used to authenticate GitHub API requests.
    #[arg(
        long,
        env = "INPUT_GITHUB-TOKEN",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub github_token: String,

    /// Add-on identifier: a braced UUID or an e-mail-like ID.
    #[arg(long, env = "INPUT_ADDON-ID", default_value = "", hide_default_value = true)]
    pub addon_id: String,

    /// Repository whose releases are listed, as owner/repo.
    #[arg(long, env = "INPUT_REPOSITORY", default_value = "", hide_default_value = true)]
    pub repository: String,

    /// Path the manifest JSON is written to.
    #[arg(long, env = "INPUT_OUTPUT-FILE", default_value = "", hide_default_value = true)]
    pub output_file: String,

    /// Regular expression selecting which release assets are eligible.
    #[arg(long, env = "INPUT_ASSET-FILTER", default_value = "", hide_default_value = true)]
    pub asset_filter: String,

    /// Base URL of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl Inputs {
    /// Return the token with surrounding whitespace removed.
    #[must_use]
    pub fn github_token(&self) -> &str {
        self.github_token.trim()
    }

    /// Return the add-on identifier with surrounding whitespace removed.
    #[must_use]
    pub fn addon_id(&self) -> &str {
        self.addon_id.trim()
    }

    /// Return the repository reference with surrounding whitespace removed.
    #[must_use]
    pub fn repository(&self) -> &str {
        self.repository.trim()
    }

    /// Return the output path with surrounding whitespace removed.
    #[must_use]
    pub fn output_file(&self) -> &str {
        self.output_file.trim()
    }

    /// Return the asset filter with surrounding whitespace removed.
    #[must_use]
    pub fn asset_filter(&self) -> &str {
        self.asset_filter.trim()
    }
}

impl Default for Inputs {
    /// Creates an `Inputs` instance with every input empty and the public
    /// GitHub API URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use update_manifest_action::cli::Inputs;
    ///
    /// let inputs = Inputs::default();
    /// assert!(inputs.addon_id.is_empty());
    /// assert_eq!(inputs.api_url, "https://api.github.com");
    /// ```
    fn default() -> Self {
        Self {
            github_token: String::new(),
            addon_id: String::new(),
            repository: String::new(),
            output_file: String::new(),
            asset_filter: String::new(),
            api_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
