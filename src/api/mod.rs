//! Revue API module
//!
//! Provides the HTTP client and payload types for the RevueCrafters REST API.

pub mod client;
pub mod types;

pub use client::{ApiResponse, RevueClient};
pub use types::{AuthResponse, Revue, RevuePayload};

/// Authentication endpoint (unauthenticated POST)
pub const AUTH_PATH: &str = "/api/User/Authentication";

/// Create a revue (authenticated POST)
pub const CREATE_PATH: &str = "/api/Revue/Create";

/// List all revues (authenticated GET)
pub const LIST_PATH: &str = "/api/Revue/All";

/// Edit a revue (authenticated PUT, `revueId` query parameter)
pub const EDIT_PATH: &str = "/api/Revue/Edit";

/// Delete a revue (authenticated DELETE, `revueId` query parameter)
pub const DELETE_PATH: &str = "/api/Revue/Delete";
