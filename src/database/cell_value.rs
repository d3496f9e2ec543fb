use std::fmt;

use ordered_float::NotNan;
use serde_json::{Number, Value};

/// Scalar stored in a row cell.
///
/// Integers keep their exact value: anything that fits an `i64` is `Int`,
/// larger positive integers are `UInt`, everything else is `Float`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(NotNan<f64>),
    String(String),
}

impl CellValue {
    /// Convert a JSON scalar into a cell value.
    ///
    /// Arrays and nested objects have no scalar form and are kept as their
    /// compact JSON text.
    pub fn from_json(value: &Value) -> CellValue {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => Self::from_number(n),
            Value::String(s) => CellValue::String(s.clone()),
            Value::Array(_) | Value::Object(_) => CellValue::String(value.to_string()),
        }
    }

    fn from_number(n: &Number) -> CellValue {
        if let Some(i) = n.as_i64() {
            return CellValue::Int(i);
        }
        if let Some(u) = n.as_u64() {
            return CellValue::UInt(u);
        }
        // serde_json never yields NaN; fall back to null rather than panic
        n.as_f64()
            .and_then(|f| NotNan::new(f).ok())
            .map_or(CellValue::Null, CellValue::Float)
    }

    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Null => Value::Null,
            CellValue::Bool(b) => Value::Bool(*b),
            CellValue::Int(i) => Value::Number(Number::from(*i)),
            CellValue::UInt(u) => Value::Number(Number::from(*u)),
            CellValue::Float(f) => Number::from_f64(f.into_inner()).map_or(Value::Null, Value::Number),
            CellValue::String(s) => Value::String(s.clone()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) | CellValue::UInt(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::String(_) => "string",
        }
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        CellValue::from_json(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::UInt(u) => write!(f, "{}", u),
            CellValue::Float(n) => write!(f, "{}", n.into_inner()),
            CellValue::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl fmt::Debug for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "Null"),
            CellValue::Bool(_) => write!(f, "Bool({})", self),
            CellValue::Int(_) => write!(f, "Int({})", self),
            CellValue::UInt(_) => write!(f, "UInt({})", self),
            CellValue::Float(_) => write!(f, "Float({})", self),
            CellValue::String(_) => write!(f, "String({})", self),
        }
    }
}
