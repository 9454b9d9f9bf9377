//! GitHub Actions entrypoint for update manifest generation.
//!
//! This crate wires the `update-manifest` core to its collaborators: inputs
//! read from flags or `INPUT_*` variables, the GitHub releases API, the
//! workflow command log, and the manifest file on disk. It is used by the
//! `update-manifest-action` binary and can be driven programmatically with a
//! stub release source for testing.
//!
//! # Modules
//!
//! - [`cli`] - Input definitions
//! - [`error`] - Top-level error type for a run
//! - [`github`] - Release listing via the GitHub REST API
//! - [`output`] - Manifest file writing
//! - [`run`] - Validate, fetch, generate, and write orchestration
//! - [`workflow`] - Workflow command logger and step outputs

pub mod cli;
pub mod error;
pub mod github;
pub mod output;
pub mod run;
pub mod workflow;
