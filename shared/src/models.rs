//! Shared data models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clock::DateKey;

/// Field on the daily row that holds the remaining calorie budget.
pub const CALORIES_FIELD: &str = "Calories left today";

/// List-records response from Airtable.
///
/// `records` is required: a body without it is rejected instead of being read
/// as an empty day.
#[derive(Debug, Deserialize)]
pub struct RecordSet {
    pub records: Vec<Record>,
    /// Pagination cursor, present when more rows match the filter
    #[serde(default)]
    pub offset: Option<String>,
}

/// One Airtable row.
#[derive(Debug, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Raw value of the calorie field, if it is numeric.
    pub fn calories_left(&self) -> Option<f64> {
        self.fields.get(CALORIES_FIELD).and_then(Value::as_f64)
    }
}

impl RecordSet {
    /// Negated, rounded calorie value of the first row, or 0 when there is none.
    pub fn calories_left_today(&self) -> i64 {
        self.records
            .first()
            .and_then(Record::calories_left)
            .map(|v| (-v.round()) as i64)
            .unwrap_or(0)
    }
}

/// Successful response payload.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalorieResult {
    pub calories_left_today: i64,
    pub date: DateKey,
    pub records_found: usize,
}

impl CalorieResult {
    pub fn new(date: DateKey, records: &RecordSet) -> Self {
        Self {
            calories_left_today: records.calories_left_today(),
            date,
            records_found: records.records.len(),
        }
    }
}

/// Failure response payload.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub details: String,
}
