use std::fmt;

use crate::{database::ColumnName, parser::ast::{ColumnIdentifier, ScalarExpr}};

/// Which columns of a source row a projection keeps.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ProjectionSpec {
    /// Every column, in source order.
    Star,
    /// Exactly one existing column.
    NamedColumn(ColumnIdentifier),
}

impl ProjectionSpec {
    pub fn quoted(name: impl Into<String>) -> Self {
        ProjectionSpec::NamedColumn(ColumnIdentifier::quoted(name))
    }

    pub fn bare(name: impl Into<String>) -> Self {
        ProjectionSpec::NamedColumn(ColumnIdentifier::bare(name))
    }
}

impl fmt::Debug for ProjectionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionSpec::Star => write!(f, "Star"),
            ProjectionSpec::NamedColumn(column) => write!(f, "NamedColumn({:?})", column),
        }
    }
}

/// One planned entry of a select list, evaluated per source row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectionItem {
    Select { spec: ProjectionSpec, alias: Option<ColumnName> },
    /// `expr AS *`
    Expand(ScalarExpr),
    Computed { expr: ScalarExpr, name: ColumnName },
}
