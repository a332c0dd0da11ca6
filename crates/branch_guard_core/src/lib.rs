//! # Branch Guard Core
//!
//! Decides whether a pull request's base/head branch pairing follows the
//! branching convention of an organization:
//!
//! - pull requests opened against the trunk branch must come from `feature/`
//!   or `fix/` branches;
//! - `hotfix/` branches may only target the configured release branches.
//!
//! ## Architecture
//!
//! - [`PolicyConfiguration`] holds the rule parameters for one invocation.
//! - [`evaluate`] is the pure decision engine.
//! - [`dispatch`] turns a [`Decision`] into side effects through a [`Reporter`].
//! - [`run_gate`] ties an [`EventSource`] and a [`Reporter`] together.
//!
//! The hosting platform is only reached through the two collaborator traits,
//! so everything in this crate can be tested without network access.
//!
//! ## Examples
//!
//! ```
//! use branch_guard_core::{evaluate, ActionKind, Decision, PolicyConfiguration, PullRequestEvent, PullRequestId};
//!
//! let config = PolicyConfiguration::from_inputs(Some("main"), Some("release/1.0"))?;
//! let event = PullRequestEvent::new(ActionKind::Opened, "main", "bugfix/login", PullRequestId::new(1));
//!
//! assert_eq!(
//!     evaluate(&event, &config),
//!     Decision::deny("Branch name does not start with `feature/` or `fix/`.")
//! );
//! # Ok::<(), branch_guard_core::ConfigurationError>(())
//! ```

pub mod branch;
pub use branch::{normalize_branch_name, BranchPrefix};

pub mod config;
pub use config::PolicyConfiguration;

pub mod decision;
pub use decision::{Decision, RunStatus};

pub mod dispatcher;
pub use dispatcher::{dispatch, Reporter};

pub mod engine;
pub use engine::evaluate;

pub mod errors;
pub use errors::{ConfigurationError, Error, EventSourceError, GateResult, ReporterError};

pub mod event;
pub use event::{ActionKind, EventSource, PullRequestEvent, PullRequestId, TriggerEvent};

pub mod gate;
pub use gate::run_gate;

#[cfg(test)]
mod testing;
