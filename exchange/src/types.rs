//! JSON shapes exchanged with the backend API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A customer record as listed by `GET /api/customers`.
///
/// The backend owns these records; clients hold read-only snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique key, used both as list key and as the chat route parameter.
    #[serde(deserialize_with = "deserialize_customer_pk")]
    pub customer_pk: String,
    pub customer_name: String,
    pub customer_group: String,
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Optional structured error body returned with non-2xx statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Database keys arrive as integers; hand-edited fixtures sometimes use strings.
fn deserialize_customer_pk<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPk {
        Int(i64),
        Text(String),
    }

    Ok(match RawPk::deserialize(deserializer)? {
        RawPk::Int(value) => value.to_string(),
        RawPk::Text(value) => value,
    })
}
