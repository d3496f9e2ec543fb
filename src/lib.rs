pub mod parser;

pub mod planner;

pub mod executor;
pub use executor::{ProjectionResolver, TableResult};

pub mod database;
pub use database::{CellValue, ColumnName, Config, Dataset, Db, DbCommon, DbRunner, Row, RowBuilder};

pub mod error;
pub use error::{QueryError, QueryResult};
