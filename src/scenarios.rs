//! The suite's scenarios, one function per endpoint check.
//!
//! Each function issues exactly one request, asserts the status literal and,
//! where the endpoint returns data, the body shape. Scenarios share nothing
//! but the client and can run in any order.

use crate::client::{ApiClient, ApiResponse};
use crate::error::{SuiteError, SuiteResult};
use crate::payload::{CreatedUser, NewUser};
use crate::reporting::{Feature, Scenario};
use crate::schemas::{self, SchemaKind};
use serde_json::Value;

/// Users fetched and deleted by the per-id scenarios
pub const USER_IDS: [u32; 3] = [1, 2, 3];

/// Listing page requested by [`list_users`]
pub const USERS_PAGE: u32 = 2;

/// Resource fetched by [`get_resource`] in the standard suite
pub const RESOURCE_ID: u32 = 5;

/// `GET /users?page={page}`: 200, has `data`, matches LIST_USER_SCHEMA
pub async fn list_users(client: &ApiClient, page: u32) -> SuiteResult<Value> {
    let scenario = Scenario::new(Feature::UserApi, "Get Users List");
    let path = format!("/users?page={page}");
    let result = read_listing(&scenario, client, &path, SchemaKind::UserList).await;
    scenario.finish(result)
}

/// `GET /users/{id}`: 200, matches USER_SCHEMA
pub async fn get_user(client: &ApiClient, id: u32) -> SuiteResult<Value> {
    let scenario = Scenario::new(Feature::UserApi, "Get Single User");
    let path = format!("/users/{id}");
    let result = read_single(&scenario, client, &path, SchemaKind::User).await;
    scenario.finish(result)
}

/// `POST /users`: 201, echoes the submitted name and job exactly
pub async fn create_user(client: &ApiClient, user: &NewUser) -> SuiteResult<CreatedUser> {
    let scenario = Scenario::new(Feature::UserApi, "Create User");
    let result = async {
        let response = scenario
            .step("Send POST request to /users", client.post_json("/users", user))
            .await?;

        scenario.check("Validate response status code", || {
            response.expect_status(201)
        })?;

        let body = scenario.check("Parse response body", || response.json())?;

        scenario.check("Validate response contains correct user name", || {
            expect_echo("name", &user.name, body.get("name"))
        })?;
        scenario.check("Validate response contains correct job", || {
            expect_echo("job", &user.job, body.get("job"))
        })?;

        Ok(CreatedUser::from_body(&body))
    }
    .await;
    scenario.finish(result)
}

/// `DELETE /users/{id}`: 204 with an empty body
pub async fn delete_user(client: &ApiClient, id: u32) -> SuiteResult<()> {
    let scenario = Scenario::new(Feature::UserApi, "Delete User");
    let result = async {
        let path = format!("/users/{id}");
        let response = scenario
            .step(&format!("Send DELETE request to {path}"), client.delete(&path))
            .await?;

        scenario.check("Validate response status code", || {
            response.expect_status(204)
        })?;
        scenario.check("Validate response body is empty", || {
            response.expect_empty_body()
        })
    }
    .await;
    scenario.finish(result)
}

/// `GET /unknown`: 200, has `data`, matches LIST_RESOURCE_SCHEMA
pub async fn list_resources(client: &ApiClient) -> SuiteResult<Value> {
    let scenario = Scenario::new(Feature::ResourceApi, "Get Resource List");
    let result = read_listing(&scenario, client, "/unknown", SchemaKind::ResourceList).await;
    scenario.finish(result)
}

/// `GET /unknown/{id}`: 200, matches RESOURCE_SCHEMA
pub async fn get_resource(client: &ApiClient, id: u32) -> SuiteResult<Value> {
    let scenario = Scenario::new(Feature::ResourceApi, "Get Single Resource");
    let path = format!("/unknown/{id}");
    let result = read_single(&scenario, client, &path, SchemaKind::Resource).await;
    scenario.finish(result)
}

async fn read_listing(
    scenario: &Scenario,
    client: &ApiClient,
    path: &str,
    kind: SchemaKind,
) -> SuiteResult<Value> {
    let body = fetch_ok(scenario, client, path).await?;

    scenario.check("Validate response contains 'data' field", || {
        if body.get("data").is_none() {
            return Err(SuiteError::missing_field("data"));
        }
        Ok(())
    })?;

    validate_body(scenario, kind, &body)?;
    Ok(body)
}

async fn read_single(
    scenario: &Scenario,
    client: &ApiClient,
    path: &str,
    kind: SchemaKind,
) -> SuiteResult<Value> {
    let body = fetch_ok(scenario, client, path).await?;
    validate_body(scenario, kind, &body)?;
    Ok(body)
}

async fn fetch_ok(scenario: &Scenario, client: &ApiClient, path: &str) -> SuiteResult<Value> {
    let response: ApiResponse = scenario
        .step(&format!("Send GET request to {path}"), client.get(path))
        .await?;

    scenario.check("Validate response status code", || response.expect_status(200))?;
    scenario.check("Parse response body", || response.json())
}

fn validate_body(scenario: &Scenario, kind: SchemaKind, body: &Value) -> SuiteResult<()> {
    scenario.check(&format!("Validate response matches {kind}"), || {
        schemas::validate(kind, body)
    })
}

/// Non-string echoes are mismatches reported by their JSON text
fn expect_echo(field: &str, expected: &str, actual: Option<&Value>) -> SuiteResult<()> {
    match actual {
        None => Err(SuiteError::missing_field(field)),
        Some(Value::String(actual)) if actual == expected => Ok(()),
        Some(Value::String(actual)) => Err(SuiteError::field_mismatch(field, expected, actual)),
        Some(other) => Err(SuiteError::field_mismatch(field, expected, other.to_string())),
    }
}
