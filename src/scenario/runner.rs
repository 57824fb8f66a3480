//! Sequential runner for the ordered checks

use crate::error::StepResult;
use crate::scenario::ScenarioContext;
use futures::future::BoxFuture;
use tracing::{info, warn};

/// A step function borrows the context for the duration of its request cycle
pub type StepFn = for<'a> fn(&'a mut ScenarioContext) -> BoxFuture<'a, StepResult>;

/// One named check
pub struct Step {
    name: &'static str,
    run: StepFn,
}

impl Step {
    pub fn new(name: &'static str, run: StepFn) -> Self {
        Self { name, run }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Outcome of one check
#[derive(Debug)]
pub struct StepOutcome {
    pub name: &'static str,
    /// `None` when the check passed
    pub failure: Option<String>,
}

impl StepOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Pass/fail report for a whole scenario run
#[derive(Debug, Default)]
pub struct ScenarioReport {
    outcomes: Vec<StepOutcome>,
}

impl ScenarioReport {
    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Execute the checks strictly in order
///
/// A failed check is recorded and the run continues with the next one;
/// there are no retries and no rollback of earlier side effects.
pub async fn run_checks(ctx: &mut ScenarioContext, steps: &[Step]) -> ScenarioReport {
    let mut report = ScenarioReport::default();

    for step in steps {
        info!(check = step.name, "running check");

        let failure = match (step.run)(ctx).await {
            Ok(()) => {
                info!(check = step.name, "check passed");
                None
            }
            Err(e) => {
                warn!(check = step.name, error = %e, "check failed");
                Some(e.to_string())
            }
        };

        report.outcomes.push(StepOutcome {
            name: step.name,
            failure,
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RevueClient;
    use crate::config::ApiConfig;
    use crate::error::StepError;

    fn context() -> ScenarioContext {
        let client = RevueClient::with_token(&ApiConfig::default(), "test-token").unwrap();
        ScenarioContext::new(client)
    }

    #[tokio::test]
    async fn test_runner_counts_outcomes() {
        let steps = vec![
            Step::new("always_passes", |_ctx| Box::pin(async { Ok(()) })),
            Step::new("always_fails", |_ctx| {
                Box::pin(async { Err(StepError::MissingRevueId) })
            }),
            Step::new("passes_after_failure", |_ctx| Box::pin(async { Ok(()) })),
        ];

        let mut ctx = context();
        let report = run_checks(&mut ctx, &steps).await;

        assert_eq!(report.len(), 3);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());

        // A failure does not stop the run
        assert!(report.outcomes()[2].passed());
        assert_eq!(report.outcomes()[1].name, "always_fails");
        assert!(
            report.outcomes()[1]
                .failure
                .as_deref()
                .unwrap()
                .contains("create check")
        );
    }

    #[tokio::test]
    async fn test_steps_see_context_mutations() {
        let steps = vec![
            Step::new("captures_id", |ctx| {
                Box::pin(async {
                    ctx.set_revue_id("abc123".to_string());
                    Ok(())
                })
            }),
            Step::new("reads_id", |ctx| {
                Box::pin(async {
                    ctx.revue_id()?;
                    Ok(())
                })
            }),
        ];

        let mut ctx = context();
        let report = run_checks(&mut ctx, &steps).await;
        assert!(report.all_passed());
    }
}
