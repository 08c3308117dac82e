//! Request payloads and typed echoes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Camila", "Dmitri", "Elena", "Farah", "Gustavo", "Hana", "Ivan", "Julia",
    "Kenji", "Leila", "Marco", "Nadia", "Oscar", "Priya", "Quentin", "Rosa", "Samuel", "Tamar",
    "Umar", "Valeria", "Wesley", "Ximena", "Yusuf", "Zofia",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Bianchi", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hoffmann",
    "Ivanova", "Jensen", "Kowalski", "Lopez", "Moreau", "Nakamura", "O'Brien", "Petrov",
    "Quinn", "Rossi", "Schneider", "Tanaka", "Urquhart", "Varga", "Walsh", "Yamamoto", "Zimmer",
];

const JOBS: &[&str] = &[
    "Software engineer",
    "Data analyst",
    "Product manager",
    "Quality assurance engineer",
    "Technical writer",
    "Site reliability engineer",
    "Interior designer",
    "Civil engineer",
    "Pharmacist",
    "Veterinary surgeon",
    "Air traffic controller",
    "Marine biologist",
    "Landscape architect",
    "Sound technician",
    "Museum curator",
    "Paramedic",
    "Accountant",
    "Geologist",
    "Translator",
    "Chef",
];

/// Body of `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub job: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }

    /// Fresh person name and job title
    pub fn random() -> Self {
        Self::random_with(&mut fastrand::Rng::new())
    }

    /// Deterministic variant for a seeded generator
    pub fn random_with(rng: &mut fastrand::Rng) -> Self {
        let first = pick(rng, FIRST_NAMES);
        let last = pick(rng, LAST_NAMES);
        Self {
            name: format!("{first} {last}"),
            job: pick(rng, JOBS).to_string(),
        }
    }
}

fn pick<'a>(rng: &mut fastrand::Rng, words: &[&'a str]) -> &'a str {
    words[rng.usize(..words.len())]
}

/// Response of `POST /users`
///
/// The service echoes the submitted fields and adds an id and creation time.
/// Only the echoed fields are asserted, so this view never rejects a body:
/// echoes that are not strings and unparsable timestamps read as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedUser {
    pub name: Option<String>,
    pub job: Option<String>,
    /// Reqres returns a string id; other services may return a number
    pub id: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
}

impl CreatedUser {
    pub fn from_body(body: &Value) -> Self {
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            name: text("name"),
            job: text("job"),
            id: body.get("id").filter(|id| !id.is_null()).cloned(),
            created_at: body
                .get("createdAt")
                .and_then(Value::as_str)
                .and_then(|raw| raw.parse().ok()),
        }
    }
}
