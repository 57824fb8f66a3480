//! Ordered scenario checks against the Revue API
//!
//! The original ordering requirement (create feeds edit and delete) is
//! expressed as an explicit sequential list of steps executed by a runner,
//! with the shared revue id threaded through a context rather than held in
//! hidden global state.

pub mod context;
pub mod runner;
pub mod steps;

pub use context::ScenarioContext;
pub use runner::{ScenarioReport, Step, StepOutcome, run_checks};
pub use steps::checks;
