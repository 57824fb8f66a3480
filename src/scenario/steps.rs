//! The seven ordered checks
//!
//! Order is load-bearing: the create check captures the id that the edit and
//! delete checks consume. The three negative checks use fabricated ids and
//! payloads, so they run last by convention but depend on nothing.

use crate::api::{ApiResponse, RevuePayload};
use crate::error::{StepError, StepResult};
use crate::scenario::ScenarioContext;
use crate::scenario::runner::Step;
use reqwest::StatusCode;
use serde_json::json;
use tracing::debug;

/// Id of a revue that was never created, used by the negative edit check
const MISSING_EDIT_ID: &str = "678";

/// Id of a revue that was never created, used by the negative delete check
const MISSING_DELETE_ID: &str = "789";

fn new_revue() -> RevuePayload {
    RevuePayload::new("New Revue", "", "Full Revue")
}

fn edited_revue() -> RevuePayload {
    RevuePayload::new("Edited Revue", "", "Edited description")
}

fn never_created_revue() -> RevuePayload {
    RevuePayload::new("New Edited Revue", "", "New Updated description")
}

/// The full ordered scenario
pub fn checks() -> Vec<Step> {
    vec![
        Step::new("create_revue_returns_ok", |ctx| {
            Box::pin(create_revue_returns_ok(ctx))
        }),
        Step::new("list_revues_returns_all", |ctx| {
            Box::pin(list_revues_returns_all(ctx))
        }),
        Step::new("edit_revue_returns_ok", |ctx| {
            Box::pin(edit_revue_returns_ok(ctx))
        }),
        Step::new("delete_revue_returns_ok", |ctx| {
            Box::pin(delete_revue_returns_ok(ctx))
        }),
        Step::new("create_revue_without_required_fields_is_rejected", |ctx| {
            Box::pin(create_revue_without_required_fields_is_rejected(ctx))
        }),
        Step::new("edit_missing_revue_is_rejected", |ctx| {
            Box::pin(edit_missing_revue_is_rejected(ctx))
        }),
        Step::new("delete_missing_revue_is_rejected", |ctx| {
            Box::pin(delete_missing_revue_is_rejected(ctx))
        }),
    ]
}

/// Create a revue, then capture the id of the newest entry from the list
/// endpoint for the dependent checks.
async fn create_revue_returns_ok(ctx: &mut ScenarioContext) -> StepResult {
    let response = ctx.client.create_revue(&new_revue()).await?;
    expect_status(&response, StatusCode::OK)?;
    expect_msg(&response, "Successfully created!")?;

    // The API appends new revues at the end of the list; the last entry is
    // the one just created. External contract assumption, not verified here.
    let revues = ctx.client.fetch_revues().await?;
    let last = revues.last().ok_or(StepError::MissingField("id"))?;
    if last.id.is_empty() {
        return Err(StepError::MissingField("id"));
    }

    debug!(revue_id = %last.id, "captured revue id");
    ctx.set_revue_id(last.id.clone());
    Ok(())
}

/// The list endpoint returns a non-empty JSON array.
async fn list_revues_returns_all(ctx: &mut ScenarioContext) -> StepResult {
    let response = ctx.client.list_revues().await?;
    expect_status(&response, StatusCode::OK)?;

    let revues = response
        .body
        .as_array()
        .ok_or_else(|| StepError::UnexpectedBody("expected a JSON array".to_string()))?;
    if revues.is_empty() {
        return Err(StepError::UnexpectedBody("revue list is empty".to_string()));
    }

    Ok(())
}

/// Edit the revue created earlier.
async fn edit_revue_returns_ok(ctx: &mut ScenarioContext) -> StepResult {
    let revue_id = ctx.revue_id()?.to_string();
    let response = ctx.client.edit_revue(&revue_id, &edited_revue()).await?;
    expect_status(&response, StatusCode::OK)?;
    expect_msg(&response, "Edited successfully")
}

/// Delete the revue created earlier. The captured id refers to a deleted
/// revue afterwards and must not be reused.
async fn delete_revue_returns_ok(ctx: &mut ScenarioContext) -> StepResult {
    let revue_id = ctx.revue_id()?.to_string();
    let response = ctx.client.delete_revue(&revue_id).await?;
    expect_status(&response, StatusCode::OK)?;
    expect_msg(&response, "The revue is deleted!")
}

/// Creating with an empty payload must be rejected; status only, the error
/// body shape is not part of the contract.
async fn create_revue_without_required_fields_is_rejected(
    ctx: &mut ScenarioContext,
) -> StepResult {
    let response = ctx.client.create_revue_raw(&json!({})).await?;
    expect_status(&response, StatusCode::BAD_REQUEST)
}

/// Editing a revue that never existed must be rejected with the canonical
/// error message.
async fn edit_missing_revue_is_rejected(ctx: &mut ScenarioContext) -> StepResult {
    let response = ctx
        .client
        .edit_revue(MISSING_EDIT_ID, &never_created_revue())
        .await?;
    expect_status(&response, StatusCode::BAD_REQUEST)?;
    expect_msg(&response, "There is no such revue!")
}

/// Deleting a revue that never existed must be rejected with the canonical
/// error message.
async fn delete_missing_revue_is_rejected(ctx: &mut ScenarioContext) -> StepResult {
    let response = ctx.client.delete_revue(MISSING_DELETE_ID).await?;
    expect_status(&response, StatusCode::BAD_REQUEST)?;
    expect_msg(&response, "There is no such revue!")
}

fn expect_status(response: &ApiResponse, expected: StatusCode) -> StepResult {
    if response.status != expected {
        return Err(StepError::UnexpectedStatus {
            expected: expected.as_u16(),
            actual: response.status.as_u16(),
        });
    }
    Ok(())
}

fn expect_msg(response: &ApiResponse, expected: &str) -> StepResult {
    match response.msg() {
        Some(actual) if actual == expected => Ok(()),
        Some(actual) => Err(StepError::UnexpectedMessage {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }),
        None => Err(StepError::MissingField("msg")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn response(status: StatusCode, body: Value) -> ApiResponse {
        ApiResponse { status, body }
    }

    #[test]
    fn test_checks_are_in_scenario_order() {
        let names: Vec<_> = checks().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "create_revue_returns_ok",
                "list_revues_returns_all",
                "edit_revue_returns_ok",
                "delete_revue_returns_ok",
                "create_revue_without_required_fields_is_rejected",
                "edit_missing_revue_is_rejected",
                "delete_missing_revue_is_rejected",
            ]
        );
    }

    #[test]
    fn test_expect_status() {
        let ok = response(StatusCode::OK, Value::Null);
        assert!(expect_status(&ok, StatusCode::OK).is_ok());
        assert!(matches!(
            expect_status(&ok, StatusCode::BAD_REQUEST),
            Err(StepError::UnexpectedStatus {
                expected: 400,
                actual: 200
            })
        ));
    }

    #[test]
    fn test_expect_msg() {
        let ok = response(StatusCode::OK, serde_json::json!({ "msg": "Edited successfully" }));
        assert!(expect_msg(&ok, "Edited successfully").is_ok());
        assert!(matches!(
            expect_msg(&ok, "The revue is deleted!"),
            Err(StepError::UnexpectedMessage { .. })
        ));

        let no_msg = response(StatusCode::OK, serde_json::json!({}));
        assert!(matches!(
            expect_msg(&no_msg, "anything"),
            Err(StepError::MissingField("msg"))
        ));
    }
}
