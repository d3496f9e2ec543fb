use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use tracing::debug;

use crate::{
    database::{Config, Dataset, Row},
    error::QueryResult,
    executor::{Executor, PlanExecutor, TableResult},
    parser::ast::Query,
    planner::PlanBuilder,
};

pub type Db = Arc<RwLock<InternalDb>>;

#[derive(Default)]
pub struct InternalDb {
    config: Config,
    datasets: HashMap<String, Dataset>,
}

impl InternalDb {
    pub fn into_protected(self) -> Db {
        Arc::new(RwLock::new(self))
    }

    fn new_db_with_config(config: Config) -> Self {
        Self { config, datasets: HashMap::new() }
    }

    pub fn create(&mut self, name: &str) -> Dataset {
        let dataset = Dataset::new(name);
        self.datasets.insert(name.to_string(), dataset.clone());
        dataset
    }

    pub fn get(&self, name: &str) -> Option<Dataset> {
        self.datasets.get(name).cloned()
    }

    pub fn list_datasets(&self) -> Vec<String> {
        let mut names = self.datasets.keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }
}

pub trait DbCommon {
    fn new_db() -> Self;
    fn new_db_with_config(config: Config) -> Self;
    fn config(&self) -> Config;
    /// Create (or replace) an empty dataset.
    fn create(&self, name: &str) -> Dataset;
    fn get(&self, name: &str) -> Option<Dataset>;
    fn list_datasets(&self) -> Vec<String>;
}

impl DbCommon for Db {
    fn new_db() -> Self {
        InternalDb::default().into_protected()
    }

    fn new_db_with_config(config: Config) -> Self {
        InternalDb::new_db_with_config(config).into_protected()
    }

    fn config(&self) -> Config {
        self.read().config.clone()
    }

    fn create(&self, name: &str) -> Dataset {
        self.write().create(name)
    }

    fn get(&self, name: &str) -> Option<Dataset> {
        self.read().get(name)
    }

    fn list_datasets(&self) -> Vec<String> {
        self.read().list_datasets()
    }
}

/// Supplies the rows of a named dataset to `FROM <name>`.
pub trait RowSource {
    fn rows_of(&self, dataset: &str) -> Option<Vec<Row>>;
}

impl RowSource for Db {
    fn rows_of(&self, dataset: &str) -> Option<Vec<Row>> {
        let dataset = self.read().get(dataset)?;
        Some(dataset.rows())
    }
}

pub trait DbRunner {
    /// Parse, plan and execute a query, returning its rows.
    fn query(&self, sql: &str) -> QueryResult<Vec<Row>>;
    /// Same as [`DbRunner::query`], rendered as a header plus one array per row.
    fn query_table(&self, sql: &str) -> QueryResult<TableResult>;
}

impl DbRunner for Db {
    fn query(&self, sql: &str) -> QueryResult<Vec<Row>> {
        let config = self.config();

        // 1) Parse
        let query = Query::try_from(sql)?;
        debug!(%query, "parsed query");

        // 2) Plan
        let plan = PlanBuilder::from_query(&query, &config)?;

        // 3) Execute
        let rows = PlanExecutor::new(plan).execute(self)?;
        debug!(rows = rows.len(), "query executed");
        Ok(rows)
    }

    fn query_table(&self, sql: &str) -> QueryResult<TableResult> {
        let rows = self.query(sql)?;
        Ok(TableResult::from_rows(&rows, &self.config()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{database::CellValue, error::QueryError};

    fn mk_db() -> Db {
        let db = Db::new_db();
        let ds = db.create("ds");
        ds.record_json("row1", &json!({"": 1, "x": "a"})).expect("object row");
        ds.record_json("row2", &json!({"": 2, "x": "b"})).expect("object row");
        db
    }

    #[test]
    fn db_create_get_and_list() {
        let db = mk_db();
        db.create("other");

        assert_eq!(db.list_datasets(), vec!["ds".to_string(), "other".to_string()]);
        assert!(db.get("ds").is_some());
        assert!(db.get("missing").is_none());
        assert_eq!(db.rows_of("ds").map(|rows| rows.len()), Some(2));
    }

    #[test]
    fn db_runner_scans_dataset() {
        let db = mk_db();

        let rows = DbRunner::query(&db, r#"SELECT "" FROM ds"#).expect("query should succeed");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name(), "row1");
        assert_eq!(rows[0].get(""), Some(&CellValue::Int(1)));
        assert_eq!(rows[1].get(""), Some(&CellValue::Int(2)));
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn db_runner_unknown_dataset() {
        let db = mk_db();

        match DbRunner::query(&db, "SELECT * FROM nope") {
            Err(QueryError::UnknownDataset(name)) => assert_eq!(name, "nope"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn db_runner_uses_configured_row_name() {
        let db = Db::new_db_with_config(Config::new().with_default_row_name("only"));

        let table = db.query_table("SELECT 1 AS one").expect("query should succeed");

        assert_eq!(table.to_json(), json!([["_rowName", "one"], ["only", 1]]));
    }
}
