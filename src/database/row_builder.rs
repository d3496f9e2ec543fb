use serde_json::{Map, Value};
use tracing::trace;

use crate::{
    database::{CellValue, Row},
    error::{QueryError, QueryResult},
};

/// Turns parsed JSON objects into rows.
pub struct RowBuilder;

impl RowBuilder {
    /// Build a row with one column per key of `object`, in key order.
    ///
    /// Keys are used verbatim as column names, the empty key included.
    pub fn build(row_name: &str, object: &Map<String, Value>) -> Row {
        let mut row = Row::with_capacity(row_name, object.len());
        for (key, value) in object {
            if row.set(key.as_str(), CellValue::from_json(value)).is_some() {
                trace!(row = row_name, column = %key, "duplicate key, keeping the last value");
            }
        }
        row
    }

    /// Like [`RowBuilder::build`] but from a sequence of pairs that may repeat
    /// a key. A repeated key keeps its first position and takes the last value.
    pub fn build_pairs<'a, I>(row_name: &str, pairs: I) -> Row
    where
        I: IntoIterator<Item = (&'a str, &'a Value)>,
    {
        let mut row = Row::new(row_name);
        for (key, value) in pairs {
            if row.set(key, CellValue::from_json(value)).is_some() {
                trace!(row = row_name, column = %key, "duplicate key, keeping the last value");
            }
        }
        row
    }

    /// Object expansion (`AS *`): only a JSON object can be spread into columns.
    pub fn build_json(row_name: &str, value: &Value) -> QueryResult<Row> {
        match value {
            Value::Object(object) => Ok(Self::build(row_name, object)),
            other => Err(QueryError::malformed(format!(
                "cannot expand {} into columns, expected a JSON object",
                Self::describe(other)
            ))),
        }
    }

    fn describe(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}
