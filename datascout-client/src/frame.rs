use serde_json::{Map, Value};

/// Column-oriented view of a collection of player records.
///
/// Columns appear in first-observation order across the rows; a row missing
/// a key holds `Value::Null` in that column.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    columns: Vec<String>,
    values: Vec<Vec<Value>>,
    nrows: usize,
}

impl DataFrame {
    pub fn empty() -> DataFrame {
        DataFrame {
            columns: Vec::new(),
            values: Vec::new(),
            nrows: 0,
        }
    }

    /// Builds a frame from an envelope's `result` value. Anything that is
    /// not an array of objects materializes as an empty frame.
    pub fn from_result(result: &Value) -> DataFrame {
        match result {
            Value::Array(rows) => Self::from_rows(rows),
            _ => DataFrame::empty(),
        }
    }

    pub fn from_rows(rows: &[Value]) -> DataFrame {
        let records: Vec<&Map<String, Value>> =
            rows.iter().filter_map(Value::as_object).collect();

        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let values = columns
            .iter()
            .map(|column| {
                records
                    .iter()
                    .map(|record| record.get(column).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        DataFrame {
            columns,
            values,
            nrows: records.len(),
        }
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.columns.len())
    }

    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&[Value]> {
        let index = self.columns.iter().position(|c| c == name)?;
        Some(&self.values[index])
    }

    /// Reassembles one row as a record, in column order.
    pub fn row(&self, index: usize) -> Option<Map<String, Value>> {
        if index >= self.nrows {
            return None;
        }

        let mut record = Map::new();
        for (column, values) in self.columns.iter().zip(&self.values) {
            record.insert(column.clone(), values[index].clone());
        }
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_columns_in_first_observation_order() {
        let rows = vec![
            json!({"name": "A", "saves": 5}),
            json!({"saves": 3, "name": "B", "clean_sheets": 10}),
        ];
        let frame = DataFrame::from_rows(&rows);

        assert_eq!(frame.shape(), (2, 3));
        assert_eq!(frame.columns(), ["name", "saves", "clean_sheets"]);
        assert_eq!(frame.column("name").unwrap(), [json!("A"), json!("B")]);
        assert_eq!(frame.column("saves").unwrap(), [json!(5), json!(3)]);
    }

    #[test]
    fn pads_missing_keys_with_null() {
        let rows = vec![json!({"name": "A", "saves": 5}), json!({"name": "B"})];
        let frame = DataFrame::from_rows(&rows);

        assert_eq!(frame.column("saves").unwrap(), [json!(5), Value::Null]);
    }

    #[test]
    fn reassembles_rows() {
        let rows = vec![json!({"name": "A", "saves": 5})];
        let frame = DataFrame::from_rows(&rows);

        let row = frame.row(0).unwrap();
        assert_eq!(Value::Object(row), rows[0]);
        assert!(frame.row(1).is_none());
    }

    #[test]
    fn non_array_result_is_empty() {
        assert!(DataFrame::from_result(&json!("fallback text")).is_empty());
        assert!(DataFrame::from_result(&Value::Null).is_empty());
        assert_eq!(DataFrame::from_result(&json!([])), DataFrame::empty());
    }

    #[test]
    fn unknown_column_is_none() {
        let frame = DataFrame::from_rows(&[json!({"name": "A"})]);
        assert!(frame.column("saves").is_none());
    }
}
