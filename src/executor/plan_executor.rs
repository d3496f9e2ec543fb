use tracing::{debug, trace};

use crate::{
    database::{Row, RowBuilder, RowSource},
    error::{QueryError, QueryResult},
    executor::{Eval, ExprValue, ProjectionResolver},
    planner::{LogicalPlan, ProjectionItem},
};

pub trait Executor {
    fn execute(&self, source: &dyn RowSource) -> QueryResult<Vec<Row>>;
}

pub struct PlanExecutor {
    plan: LogicalPlan,
}

impl Executor for PlanExecutor {
    fn execute(&self, source: &dyn RowSource) -> QueryResult<Vec<Row>> {
        Self::run_plan(&self.plan, source)
    }
}

impl PlanExecutor {
    pub fn new(plan: LogicalPlan) -> Self { Self { plan } }

    pub fn run_plan(plan: &LogicalPlan, source: &dyn RowSource) -> QueryResult<Vec<Row>> {
        match plan {
            LogicalPlan::SingleRow { row_name } => Ok(vec![Row::new(row_name.as_str())]),
            LogicalPlan::Scan { dataset } => {
                let rows = source.rows_of(dataset)
                    .ok_or_else(|| QueryError::UnknownDataset(dataset.clone()))?;
                debug!(dataset = %dataset, rows = rows.len(), "scanned dataset");
                Ok(rows)
            }
            LogicalPlan::Project { input, items } => {
                let rows = Self::run_plan(input, source)?;
                rows.iter()
                    .map(|row| Self::project_row(row, items))
                    .collect()
            }
        }
    }

    /// Output row for one source row: every item's columns appended in
    /// select-list order, under the source row's name.
    pub fn project_row(row: &Row, items: &[ProjectionItem]) -> QueryResult<Row> {
        let mut out = Row::new(row.name());

        for item in items {
            match item {
                ProjectionItem::Select { spec, alias } => {
                    let projected = ProjectionResolver::project(row, spec)?;
                    match alias {
                        Some(alias) => {
                            for (_, value) in projected.iter() {
                                out.set(alias.clone(), value.clone());
                            }
                        }
                        None => out.extend_from(&projected),
                    }
                }
                ProjectionItem::Expand(expr) => {
                    let value = Eval::eval_scalar(expr, row)?;
                    let expanded = match &value {
                        ExprValue::Document(document) => RowBuilder::build_json(row.name(), document)?,
                        ExprValue::Scalar(_) => RowBuilder::build_json(row.name(), &value.to_json())?,
                    };
                    trace!(row = row.name(), columns = expanded.len(), "expanded object");
                    out.extend_from(&expanded);
                }
                ProjectionItem::Computed { expr, name } => {
                    let value = Eval::eval_scalar(expr, row)?.into_cell(name)?;
                    out.set(name.clone(), value);
                }
            }
        }

        Ok(out)
    }
}
