//! Scenario context threaded through the checks

use crate::api::RevueClient;
use crate::error::StepError;

/// Shared state for one scenario run
///
/// Holds the authenticated client and the id of the revue created by the
/// create check. The id is set once and read by the dependent edit and
/// delete checks; a run is not re-entrant without creating a new revue.
pub struct ScenarioContext {
    pub client: RevueClient,
    revue_id: Option<String>,
}

impl ScenarioContext {
    /// Wrap an authenticated client
    pub fn new(client: RevueClient) -> Self {
        Self {
            client,
            revue_id: None,
        }
    }

    /// Record the id captured by the create check
    pub fn set_revue_id(&mut self, id: String) {
        self.revue_id = Some(id);
    }

    /// The captured revue id
    ///
    /// Fails when the create check has not run or captured an empty id,
    /// keeping dependent checks from issuing requests with a blank
    /// `revueId` parameter.
    pub fn revue_id(&self) -> Result<&str, StepError> {
        self.revue_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(StepError::MissingRevueId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RevueClient;
    use crate::config::ApiConfig;

    fn context() -> ScenarioContext {
        let client = RevueClient::with_token(&ApiConfig::default(), "test-token").unwrap();
        ScenarioContext::new(client)
    }

    #[test]
    fn test_revue_id_missing_before_create() {
        let ctx = context();
        assert!(matches!(ctx.revue_id(), Err(StepError::MissingRevueId)));
    }

    #[test]
    fn test_revue_id_rejects_empty() {
        let mut ctx = context();
        ctx.set_revue_id(String::new());
        assert!(matches!(ctx.revue_id(), Err(StepError::MissingRevueId)));
    }

    #[test]
    fn test_revue_id_roundtrip() {
        let mut ctx = context();
        ctx.set_revue_id("abc123".to_string());
        assert_eq!(ctx.revue_id().unwrap(), "abc123");
    }
}
