use serde_json::Value;

use crate::{
    database::{CellValue, ColumnName, Row},
    error::{QueryError, QueryResult},
    executor::ProjectionResolver,
    parser::ast::{Function, ScalarExpr},
};

/// Result of evaluating an expression: a cell value, or a JSON document that
/// only `AS *` knows how to store.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprValue {
    Scalar(CellValue),
    Document(Value),
}

impl ExprValue {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(_) | Value::Object(_) => ExprValue::Document(value),
            other => ExprValue::Scalar(CellValue::from_json(&other)),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ExprValue::Scalar(cell) => cell.to_json(),
            ExprValue::Document(value) => value.clone(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ExprValue::Scalar(cell) => cell.type_name(),
            ExprValue::Document(Value::Array(_)) => "array",
            ExprValue::Document(_) => "object",
        }
    }

    /// The value to store under `column`. Documents need `AS *`.
    pub fn into_cell(self, column: &ColumnName) -> QueryResult<CellValue> {
        match self {
            ExprValue::Scalar(cell) => Ok(cell),
            ExprValue::Document(_) => Err(QueryError::malformed(format!(
                "{} yields a JSON {}; use AS * to expand it into columns",
                column,
                self.type_name()
            ))),
        }
    }
}

pub struct Eval;

impl Eval {
    pub fn eval_scalar(expr: &ScalarExpr, row: &Row) -> QueryResult<ExprValue> {
        match expr {
            ScalarExpr::Literal(l) => Ok(ExprValue::Scalar(l.to_cell_value())),
            ScalarExpr::Column(c) => {
                let (_, value) = ProjectionResolver::resolve(row, c)?;
                Ok(ExprValue::Scalar(value.clone()))
            },
            ScalarExpr::Function(f) => Self::eval_scalar_function(f, row),
            ScalarExpr::WildCard => Err(QueryError::malformed("* is not a value")),
        }
    }

    fn eval_scalar_function(f: &Function, row: &Row) -> QueryResult<ExprValue> {
        let lname = f.name.to_ascii_lowercase();
        let args = f.args
            .iter()
            .map(|a| Self::eval_scalar(a, row))
            .collect::<QueryResult<Vec<_>>>()?;

        match (lname.as_str(), args.as_slice()) {
            ("parse_json", [ExprValue::Scalar(CellValue::String(text))]) => Self::parse_json(text),
            ("parse_json", _) => Err(QueryError::FunctionArgMismatch {
                name: f.name.clone(),
                expected: "(string)".to_string(),
                got: args.iter().map(|a| a.type_name().to_string()).collect(),
            }),
            _ => Err(QueryError::UnknownFunction(f.name.clone())),
        }
    }

    fn parse_json(text: &str) -> QueryResult<ExprValue> {
        let value: Value = serde_json::from_str(text)?;
        Ok(ExprValue::from_json(value))
    }
}
