use tracing::trace;

use crate::{
    database::{ColumnName, Config},
    error::{QueryError, QueryResult},
    parser::ast::{Alias, Collection, Query, ScalarExpr, SelectItem},
    planner::{LogicalPlan, ProjectionItem, ProjectionSpec},
};

pub struct PlanBuilder;

impl PlanBuilder {
    pub fn from_query(query: &Query, config: &Config) -> QueryResult<LogicalPlan> {
        let input = match &query.collection {
            None => LogicalPlan::SingleRow { row_name: config.default_row_name.clone() },
            Some(Collection::Dataset { name }) => LogicalPlan::Scan { dataset: name.clone() },
            Some(Collection::Query(inner)) => PlanBuilder::from_query(inner, config)?,
        };

        let items = query.projection
            .iter()
            .map(PlanBuilder::plan_item)
            .collect::<QueryResult<Vec<_>>>()?;

        trace!(items = items.len(), "planned projection");

        Ok(LogicalPlan::Project { input: Box::new(input), items })
    }

    fn plan_item(item: &SelectItem) -> QueryResult<ProjectionItem> {
        let planned = match (&item.expression, &item.alias) {
            (ScalarExpr::WildCard, None | Some(Alias::Star)) => {
                ProjectionItem::Select { spec: ProjectionSpec::Star, alias: None }
            },
            (ScalarExpr::WildCard, Some(Alias::Name(name))) => {
                return Err(QueryError::malformed(format!("wildcard can't be renamed to {}", ColumnName::new(name.as_str()))));
            },
            (expr, Some(Alias::Star)) => ProjectionItem::Expand(expr.clone()),
            (ScalarExpr::Column(column), alias) => ProjectionItem::Select {
                spec: ProjectionSpec::NamedColumn(column.clone()),
                alias: match alias {
                    Some(Alias::Name(name)) => Some(ColumnName::new(name.as_str())),
                    _ => None,
                },
            },
            (expr, Some(Alias::Name(name))) => ProjectionItem::Computed {
                expr: expr.clone(),
                name: ColumnName::new(name.as_str()),
            },
            (expr, None) => ProjectionItem::Computed {
                expr: expr.clone(),
                name: ColumnName::new(expr.to_sql()),
            },
        };

        Ok(planned)
    }
}
