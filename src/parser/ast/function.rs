use std::fmt;

use crate::parser::ast::ScalarExpr;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Function {
    pub name: String,
    pub args: Vec<ScalarExpr>,
}

impl Function {
    pub fn to_sql(&self) -> String {
        let args = self.args.iter().map(ScalarExpr::to_sql).collect::<Vec<_>>().join(", ");
        format!("{}({})", self.name, args)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn: {}", self.to_sql())
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self)
    }
}
