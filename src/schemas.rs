//! Response shape contracts.
//!
//! Four JSON Schema documents, one per read endpoint. They check key presence
//! and primitive types only; extra keys are allowed and values are not range
//! or format checked.
//!
//! ```rust
//! use reqres_api_suite::schemas::{validate, SchemaKind};
//! use serde_json::json;
//!
//! let body = json!({"data": {"id": 2, "email": "janet.weaver@reqres.in",
//!                            "first_name": "Janet", "last_name": "Weaver"}});
//! assert!(validate(SchemaKind::User, &body).is_ok());
//! ```

use crate::error::{SchemaViolation, SuiteError, SuiteResult};
use crate::logging::log_debug;
use jsonschema::Validator;
use once_cell::sync::{Lazy, OnceCell};
use serde_json::{json, Value};

/// Single user detail: `GET /users/{id}`
pub static USER_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "data": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "email": {"type": "string"},
                    "first_name": {"type": "string"},
                    "last_name": {"type": "string"}
                },
                "required": ["id", "email", "first_name", "last_name"]
            }
        },
        "required": ["data"]
    })
});

/// User listing: `GET /users?page=N`
pub static LIST_USER_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "page": {"type": "integer"},
            "per_page": {"type": "integer"},
            "total": {"type": "integer"},
            "total_pages": {"type": "integer"},
            "data": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "integer"},
                        "email": {"type": "string"},
                        "first_name": {"type": "string"},
                        "last_name": {"type": "string"},
                        "avatar": {"type": "string"}
                    },
                    "required": ["id", "email", "first_name", "last_name", "avatar"]
                }
            }
        },
        "required": ["page", "per_page", "total", "total_pages", "data"]
    })
});

/// Single resource detail: `GET /unknown/{id}`
pub static RESOURCE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "data": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "name": {"type": "string"},
                    "year": {"type": "integer"},
                    "color": {"type": "string"},
                    "pantone_value": {"type": "string"}
                },
                "required": ["id", "name", "year", "color", "pantone_value"]
            }
        },
        "required": ["data"]
    })
});

/// Resource listing: `GET /unknown`
pub static LIST_RESOURCE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "page": {"type": "integer"},
            "per_page": {"type": "integer"},
            "total": {"type": "integer"},
            "total_pages": {"type": "integer"},
            "data": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "integer"},
                        "name": {"type": "string"},
                        "year": {"type": "integer"},
                        "color": {"type": "string"},
                        "pantone_value": {"type": "string"}
                    },
                    "required": ["id", "name", "year", "color", "pantone_value"]
                }
            }
        },
        "required": ["page", "per_page", "total", "total_pages", "data"]
    })
});

static USER_VALIDATOR: OnceCell<Validator> = OnceCell::new();
static LIST_USER_VALIDATOR: OnceCell<Validator> = OnceCell::new();
static RESOURCE_VALIDATOR: OnceCell<Validator> = OnceCell::new();
static LIST_RESOURCE_VALIDATOR: OnceCell<Validator> = OnceCell::new();

/// Identifies one of the four response contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    User,
    UserList,
    Resource,
    ResourceList,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 4] = [
        SchemaKind::User,
        SchemaKind::UserList,
        SchemaKind::Resource,
        SchemaKind::ResourceList,
    ];

    /// Name used in reports and step titles
    pub fn name(self) -> &'static str {
        match self {
            SchemaKind::User => "USER_SCHEMA",
            SchemaKind::UserList => "LIST_USER_SCHEMA",
            SchemaKind::Resource => "RESOURCE_SCHEMA",
            SchemaKind::ResourceList => "LIST_RESOURCE_SCHEMA",
        }
    }

    /// The JSON Schema document
    pub fn document(self) -> &'static Value {
        match self {
            SchemaKind::User => &*USER_SCHEMA,
            SchemaKind::UserList => &*LIST_USER_SCHEMA,
            SchemaKind::Resource => &*RESOURCE_SCHEMA,
            SchemaKind::ResourceList => &*LIST_RESOURCE_SCHEMA,
        }
    }

    fn cell(self) -> &'static OnceCell<Validator> {
        match self {
            SchemaKind::User => &USER_VALIDATOR,
            SchemaKind::UserList => &LIST_USER_VALIDATOR,
            SchemaKind::Resource => &RESOURCE_VALIDATOR,
            SchemaKind::ResourceList => &LIST_RESOURCE_VALIDATOR,
        }
    }

    /// Compiled validator, built on first use
    fn validator(self) -> SuiteResult<&'static Validator> {
        self.cell().get_or_try_init(|| {
            log_debug!(schema = self.name(), "Compiling response schema");
            jsonschema::validator_for(self.document()).map_err(|e| {
                SuiteError::configuration_error(format!(
                    "{} failed to compile: {e}",
                    self.name()
                ))
            })
        })
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Every violation of `kind` in `instance`, empty when it conforms
pub fn violations(kind: SchemaKind, instance: &Value) -> SuiteResult<Vec<SchemaViolation>> {
    let validator = kind.validator()?;
    Ok(validator
        .iter_errors(instance)
        .map(|error| SchemaViolation {
            path: error.instance_path.to_string(),
            message: error.to_string(),
        })
        .collect())
}

/// Check `instance` against `kind`
///
/// # Errors
///
/// Returns [`SuiteError::SchemaValidationFailed`] listing every offending
/// key or type.
pub fn validate(kind: SchemaKind, instance: &Value) -> SuiteResult<()> {
    let violations = violations(kind, instance)?;
    if violations.is_empty() {
        return Ok(());
    }
    Err(SuiteError::schema_validation_failed(kind.name(), violations))
}
