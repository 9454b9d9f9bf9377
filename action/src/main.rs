//! Update manifest action entrypoint.
//!
//! Reads the step inputs, lists the repository's releases, and writes the
//! Firefox update manifest. Diagnostics are emitted as workflow commands and
//! the manifest path is exposed as the `manifest` step output.

use clap::Parser;
use log::{LevelFilter, error, info};
use update_manifest_action::cli::Inputs;
use update_manifest_action::error::Result;
use update_manifest_action::github::GitHubClient;
use update_manifest_action::run::{RunOutcome, run};
use update_manifest_action::workflow::{init_logger, set_output};

fn main() {
    let inputs = Inputs::parse();
    if init_logger(LevelFilter::Debug).is_err() {
        // A logger is already installed; keep using it.
    }
    let exit_code = exit_code_for_run_result(execute(&inputs));
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn execute(inputs: &Inputs) -> Result<RunOutcome> {
    let client = GitHubClient::new(inputs.api_url.as_str(), inputs.github_token());
    let outcome = run(inputs, &client)?;
    set_output("manifest", outcome.output_file.as_str())?;
    info!("Successfully generated and written manifest");
    Ok(outcome)
}

fn exit_code_for_run_result(result: Result<RunOutcome>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err) => {
            error!("{err}");
            1
        }
    }
}
