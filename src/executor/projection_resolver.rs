use tracing::trace;

use crate::{
    database::{CellValue, ColumnName, Row},
    error::{QueryError, QueryResult},
    parser::ast::ColumnIdentifier,
    planner::ProjectionSpec,
};

/// Applies a [`ProjectionSpec`] to one source row.
///
/// When the source is a derived table the rows handed in are the inner
/// query's output rows, so the columns visible here are exactly the columns
/// that query produced.
pub struct ProjectionResolver;

impl ProjectionResolver {
    pub fn project(source: &Row, spec: &ProjectionSpec) -> QueryResult<Row> {
        match spec {
            ProjectionSpec::Star => Ok(source.clone()),
            ProjectionSpec::NamedColumn(column) => {
                let (name, value) = ProjectionResolver::resolve(source, column)?;
                Ok(Row::with_capacity(source.name(), 1).with(name.clone(), value.clone()))
            },
        }
    }

    /// Exact, case-sensitive lookup of a column written in query text.
    ///
    /// A bare identifier is never empty, so the empty column is only reachable
    /// through the quoted form `""`.
    pub fn resolve<'a>(source: &'a Row, column: &ColumnIdentifier) -> QueryResult<(&'a ColumnName, &'a CellValue)> {
        if column.name.is_empty() && !column.quoted {
            return Err(ProjectionResolver::unknown(source, column));
        }

        match source.get_entry(&column.name) {
            Some(entry) => Ok(entry),
            None => {
                trace!(row = source.name(), column = %column, "column not found");
                Err(ProjectionResolver::unknown(source, column))
            },
        }
    }

    fn unknown(source: &Row, column: &ColumnIdentifier) -> QueryError {
        QueryError::UnknownColumn {
            name: column.to_sql(),
            candidates: source.column_names().map(ColumnName::render).collect(),
        }
    }
}
