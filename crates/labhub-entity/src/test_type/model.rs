//! Test type entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Expected JSON type of a single results field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultsField {
    Boolean,
    Number,
    String,
}

/// Declares which fields a result's `details` object must carry and
/// their expected types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsSchema {
    /// Field name to expected type.
    pub fields: BTreeMap<String, ResultsField>,
}

/// A kind of diagnostic test (e.g. an antibody panel).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestType {
    /// Unique test type identifier.
    pub id: Uuid,
    /// Human-readable name (unique).
    pub name: String,
    /// Schema the results details are validated against.
    pub results_schema: Json<ResultsSchema>,
    /// Permission required to attach results to tests of this type.
    pub needed_permission: Option<String>,
    /// When the test type was created.
    pub created_at: DateTime<Utc>,
}
