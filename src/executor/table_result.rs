use indexmap::IndexSet;
use serde::{ser::SerializeSeq, Serialize, Serializer};
use serde_json::Value;

use crate::database::{ColumnName, Config, Row};

/// Rows rendered as a table: a header line, then one line per row.
///
/// The first header cell is the row-name label; the others are the rendered
/// column names in the order they first appear across all rows. A row lacking
/// one of those columns gets `null` in that cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableResult {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl TableResult {
    pub fn from_rows(rows: &[Row], config: &Config) -> Self {
        let mut columns: IndexSet<&ColumnName> = IndexSet::new();
        for row in rows {
            columns.extend(row.column_names());
        }

        let mut header = Vec::with_capacity(columns.len() + 1);
        header.push(config.row_name_header.clone());
        header.extend(columns.iter().map(|column| column.render()));

        let rows = rows
            .iter()
            .map(|row| {
                let mut line = Vec::with_capacity(columns.len() + 1);
                line.push(Value::String(row.name().to_string()));
                line.extend(columns.iter().map(|column| {
                    row.get(column.as_str()).map_or(Value::Null, |value| value.to_json())
                }));
                line
            })
            .collect();

        Self { header, rows }
    }

    pub fn to_json(&self) -> Value {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(Value::Array(self.header.iter().cloned().map(Value::String).collect()));
        lines.extend(self.rows.iter().cloned().map(Value::Array));
        Value::Array(lines)
    }
}

impl Serialize for TableResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.rows.len() + 1))?;
        seq.serialize_element(&self.header)?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        database::{CellValue, Config, Row, RowBuilder},
        executor::TableResult,
    };

    #[test]
    fn test_empty_column_renders_quoted() {
        let row = RowBuilder::build_json("result", &json!({"": 5, "pwet": 10})).expect("object row");

        let table = TableResult::from_rows(&[row], &Config::default());

        assert_eq!(table.header, vec!["_rowName", "\"\"", "pwet"]);
        assert_eq!(table.to_json(), json!([["_rowName", "\"\"", "pwet"], ["result", 5, 10]]));
    }

    #[test]
    fn test_header_is_union_in_first_appearance_order() {
        let rows = vec![
            Row::new("a").with("x", CellValue::Int(1)),
            Row::new("b").with("y", CellValue::Bool(true)).with("x", CellValue::Int(2)),
        ];

        let table = TableResult::from_rows(&rows, &Config::default());

        assert_eq!(table.to_json(), json!([
            ["_rowName", "x", "y"],
            ["a", 1, null],
            ["b", 2, true]
        ]));
    }

    #[test]
    fn test_reserved_and_odd_names_are_quoted() {
        let row = Row::new("r")
            .with("select", CellValue::Null)
            .with("a b", CellValue::Null)
            .with("say \"hi\"", CellValue::Null);

        let table = TableResult::from_rows(&[row], &Config::default());

        assert_eq!(table.header, vec!["_rowName", "\"select\"", "\"a b\"", "\"say \"\"hi\"\"\""]);
    }

    #[test]
    fn test_custom_header_and_serialize() {
        let rows = vec![Row::new("r").with("v", CellValue::String("s".into()))];
        let config = Config::default().with_row_name_header("name");

        let table = TableResult::from_rows(&rows, &config);

        let text = serde_json::to_string(&table).expect("table serializes");
        assert_eq!(text, r#"[["name","v"],["r","s"]]"#);
    }

    #[test]
    fn test_no_rows() {
        let table = TableResult::from_rows(&[], &Config::default());

        assert_eq!(table.to_json(), json!([["_rowName"]]));
    }
}
