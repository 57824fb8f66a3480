//! revue-e2e
//!
//! End-to-end checks for the RevueCrafters Revue CRUD API.
//!
//! The suite authenticates once against the JWT login endpoint, then runs
//! seven ordered checks: create, list, edit and delete of a revue, followed
//! by three negative checks (empty create payload, edit and delete of ids
//! that never existed). The create check captures the new revue's id and
//! threads it to the dependent edit and delete checks through an explicit
//! [`ScenarioContext`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use revue_e2e::{RevueClient, ScenarioContext, checks, run_checks};
//!
//! let client = RevueClient::login(&config.api, email, password).await?;
//! let mut ctx = ScenarioContext::new(client);
//! let report = run_checks(&mut ctx, &checks()).await;
//! assert!(report.all_passed());
//! ```
//!
//! Configuration is layered: `revue-e2e.toml`, `REVUE_E2E_*` environment
//! variables and the `REVUE_BASE_URL` / `REVUE_EMAIL` / `REVUE_PASSWORD`
//! shorthands, then CLI flags.

pub mod api;
pub mod config;
pub mod error;
pub mod scenario;

// Re-export main types
pub use api::{ApiResponse, RevueClient, RevuePayload};
pub use config::{AppConfig, load_config};
pub use error::{AppError, Result};
pub use scenario::{ScenarioContext, ScenarioReport, checks, run_checks};
