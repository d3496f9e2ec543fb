use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::database::{CellValue, ColumnName};

/// One record: a row name plus its columns in production order.
///
/// Column names are unique. Setting a name that is already present keeps the
/// column where it first appeared and replaces its value.
#[derive(Debug, Clone)]
pub struct Row {
    name: String,
    columns: IndexMap<ColumnName, CellValue>,
}

impl Row {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), columns: IndexMap::new() }
    }

    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self { name: name.into(), columns: IndexMap::with_capacity(capacity) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the previous value when the column already existed.
    pub fn set(&mut self, column: impl Into<ColumnName>, value: CellValue) -> Option<CellValue> {
        self.columns.insert(column.into(), value)
    }

    pub fn with(mut self, column: impl Into<ColumnName>, value: CellValue) -> Self {
        self.set(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.columns.get(column)
    }

    /// Exact lookup returning the stored name along with the value.
    pub fn get_entry(&self, column: &str) -> Option<(&ColumnName, &CellValue)> {
        self.columns.get_key_value(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &ColumnName> {
        self.columns.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnName, &CellValue)> {
        self.columns.iter()
    }

    /// Append every column of `other`, applying the usual overwrite rule.
    pub fn extend_from(&mut self, other: &Row) {
        for (column, value) in other.iter() {
            self.columns.insert(column.clone(), value.clone());
        }
    }

    /// JSON object view of the columns, keyed by the raw column names.
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(self.columns.len());
        for (column, value) in &self.columns {
            map.insert(column.as_str().to_string(), value.to_json());
        }
        Value::Object(map)
    }
}

/// Rows are equal when their names match and they hold the same columns in
/// the same order.
impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.columns.iter().eq(other.columns.iter())
    }
}

impl Eq for Row {}
