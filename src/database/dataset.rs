use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use crate::{
    database::{Row, RowBuilder},
    error::{QueryError, QueryResult},
};

/// Rows of a dataset, keyed by row name in the order they were first recorded.
pub(crate) struct InternalDataset {
    /// dataset name
    pub name: String,
    rows: IndexMap<String, Row>,
}

impl InternalDataset {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), rows: IndexMap::new() }
    }

    pub fn into_protected(self) -> Arc<RwLock<InternalDataset>> {
        Arc::new(RwLock::new(self))
    }

    /// Recording a row name twice merges the new columns into the stored row.
    pub fn record_row(&mut self, row: Row) {
        match self.rows.get_mut(row.name()) {
            Some(existing) => existing.extend_from(&row),
            None => {
                self.rows.insert(row.name().to_string(), row);
            }
        }
    }

    pub fn record_json(&mut self, row_name: &str, value: &Value) -> QueryResult<()> {
        let row = RowBuilder::build_json(row_name, value)?;
        self.record_row(row);
        Ok(())
    }

    pub fn load_from_json(&mut self, json_value: &Value) -> QueryResult<usize> {
        let Value::Object(rows) = json_value else {
            return Err(QueryError::malformed(
                "dataset load expects an object mapping row names to row objects",
            ));
        };

        // validate everything first so a bad entry doesn't leave a partial load
        let mut built = Vec::with_capacity(rows.len());
        for (row_name, value) in rows {
            built.push(RowBuilder::build_json(row_name, value)?);
        }

        let count = built.len();
        for row in built {
            self.record_row(row);
        }
        debug!(dataset = %self.name, rows = count, "loaded rows from json");
        Ok(count)
    }

    pub fn rows(&self) -> Vec<Row> {
        self.rows.values().cloned().collect()
    }

    pub fn get(&self, row_name: &str) -> Option<Row> {
        self.rows.get(row_name).cloned()
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn clear(&mut self) -> usize {
        let count = self.rows.len();
        self.rows.clear();
        count
    }
}

/// Shared handle to an in-memory dataset.
///
/// Cloning the handle is cheap and every clone sees the same rows.
#[derive(Clone)]
pub struct Dataset {
    pub(crate) dataset: Arc<RwLock<InternalDataset>>,
}

impl Dataset {
    pub fn new(name: &str) -> Self {
        Self { dataset: InternalDataset::new(name).into_protected() }
    }

    pub fn name(&self) -> String {
        self.dataset.read().name.clone()
    }

    /// Store a row under its own row name.
    pub fn record_row(&self, row: Row) {
        self.dataset.write().record_row(row)
    }

    /// Expand a JSON object into a row named `row_name` and store it.
    pub fn record_json(&self, row_name: &str, value: &Value) -> QueryResult<()> {
        self.dataset.write().record_json(row_name, value)
    }

    /// Load `{ "<row name>": { ...columns } , ... }`; returns the number of rows read.
    pub fn load_from_json(&self, json_value: &Value) -> QueryResult<usize> {
        self.dataset.write().load_from_json(json_value)
    }

    /// Snapshot of all rows in recording order.
    pub fn rows(&self) -> Vec<Row> {
        self.dataset.read().rows()
    }

    pub fn get(&self, row_name: &str) -> Option<Row> {
        self.dataset.read().get(row_name)
    }

    pub fn count(&self) -> usize {
        self.dataset.read().count()
    }

    pub fn clear(&self) -> usize {
        self.dataset.write().clear()
    }
}
