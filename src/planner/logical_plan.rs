use crate::planner::ProjectionItem;

#[derive(Debug, Clone, PartialEq)]
pub enum LogicalPlan {
    /// One empty row, the source of a query without FROM.
    SingleRow {
        row_name: String,
    },

    /// Rows of a dataset, in insertion order.
    Scan {
        dataset: String,
    },

    /// Select list applied to every row of `input`.
    Project {
        input: Box<LogicalPlan>,
        items: Vec<ProjectionItem>,
    },
}

impl LogicalPlan {
    pub fn input(&self) -> Option<&LogicalPlan> {
        match self {
            LogicalPlan::Project { input, .. } => Some(input),
            _ => None,
        }
    }
}
