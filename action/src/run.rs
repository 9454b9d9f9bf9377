//! Validate, fetch, generate, and write orchestration.
//!
//! A run has four stages:
//!
//! 1. Every input is validated and all problems are reported together.
//! 2. Releases are listed through a [`ReleaseSource`].
//! 3. The update manifest is generated and serialized.
//! 4. The manifest is written to the output file.
//!
//! No release is fetched when validation fails.

use camino::Utf8PathBuf;
use log::{debug, info};
use update_manifest::validator::field;
use update_manifest::{
    AddonId, AssetFilter, RepositoryRef, Validator, generate_update_manifest, validate_addon_id,
    validate_asset_filter, validate_repository,
};

use crate::cli::Inputs;
use crate::error::{ActionError, Result};
use crate::github::ReleaseSource;
use crate::output::write_manifest;

/// Inputs that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedInputs {
    /// The add-on the manifest is generated for.
    pub addon_id: AddonId,
    /// The repository whose releases are listed.
    pub repository: RepositoryRef,
    /// The asset filter, inactive when no pattern was given.
    pub filter: AssetFilter,
    /// Where the manifest is written.
    pub output_file: Utf8PathBuf,
}

/// The result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// The file the manifest was written to.
    pub output_file: Utf8PathBuf,
    /// The number of update entries in the manifest.
    pub update_count: usize,
}

/// Check every input, collecting all problems on one [`Validator`].
///
/// # Errors
///
/// Returns the populated validator when any input is missing or malformed.
///
/// # Examples
///
/// ```
/// use update_manifest_action::cli::Inputs;
/// use update_manifest_action::run::validate_inputs;
///
/// let validator = validate_inputs(&Inputs::default()).expect_err("inputs are empty");
/// assert_eq!(validator.error("addon-id"), Some("The addon ID is required"));
/// assert_eq!(validator.error("github-token"), Some("The GitHub token is required"));
/// ```
pub fn validate_inputs(inputs: &Inputs) -> std::result::Result<ValidatedInputs, Validator> {
    let mut validator = Validator::new();
    validator.check(
        !inputs.addon_id().is_empty(),
        field::ADDON_ID,
        "The addon ID is required",
    );
    validator.check(
        !inputs.output_file().is_empty(),
        field::OUTPUT_FILE,
        "The output file is required",
    );
    validator.check(
        !inputs.github_token().is_empty(),
        field::GITHUB_TOKEN,
        "The GitHub token is required",
    );
    validator.check(
        !inputs.repository().is_empty(),
        field::REPOSITORY,
        "The repository is required",
    );
    validate_repository(&mut validator, inputs.repository());
    validate_addon_id(&mut validator, inputs.addon_id());
    let filter = validate_asset_filter(&mut validator, inputs.asset_filter());

    if !validator.is_valid() {
        return Err(validator);
    }

    let (Ok(addon_id), Ok(repository), Some(asset_filter)) = (
        AddonId::try_from(inputs.addon_id()),
        RepositoryRef::try_from(inputs.repository()),
        filter,
    ) else {
        return Err(validator);
    };

    Ok(ValidatedInputs {
        addon_id,
        repository,
        filter: asset_filter,
        output_file: Utf8PathBuf::from(inputs.output_file()),
    })
}

/// Run the action against `source`.
///
/// # Errors
///
/// Returns [`ActionError::InvalidInputs`] carrying the validator report when
/// inputs are invalid or the manifest cannot be written, and the matching
/// variant when listing releases or serialization fails.
pub fn run(inputs: &Inputs, source: &dyn ReleaseSource) -> Result<RunOutcome> {
    let validated = validate_inputs(inputs).map_err(|validator| ActionError::InvalidInputs {
        report: validator.to_json(),
    })?;

    info!("Fetching releases...");
    let releases = source.list_releases(&validated.repository)?;

    info!("Generating manifest...");
    let manifest = generate_update_manifest(&releases, &validated.addon_id, &validated.filter);
    let manifest_json = manifest.to_json_pretty()?;
    let update_count = manifest
        .updates_for(validated.addon_id.as_str())
        .map_or(0, <[_]>::len);

    debug!(
        "Writing manifest: {manifest_json} to {}",
        validated.output_file
    );
    if let Err(err) = write_manifest(&validated.output_file, &manifest_json) {
        let mut validator = Validator::new();
        validator.add_error(
            field::OUTPUT_FILE,
            format!(
                "{} is not writable: {}",
                validated.output_file,
                err.io_error()
            ),
        );
        return Err(ActionError::InvalidInputs {
            report: validator.to_json(),
        });
    }

    Ok(RunOutcome {
        output_file: validated.output_file,
        update_count,
    })
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
