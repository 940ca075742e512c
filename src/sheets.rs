// ===============================
// src/sheets.rs
// ===============================
use serde::Deserialize;
use serde_json::Value;

use crate::gateway::TableError;

// ---- Minimal Sheets v4 response models ----

#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
pub struct AppendResponse {
    #[serde(default)]
    pub updates: Option<UpdateSummary>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSummary {
    #[serde(rename = "updatedRange", default)]
    pub updated_range: Option<String>,
}

/// Cells arrive as numbers or as formatted strings depending on the render
/// option; accept both.
pub fn cell_to_i64(cell: &Value) -> Option<i64> {
    match cell {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn decode_row(cells: &[Value]) -> Result<Vec<i64>, TableError> {
    cells
        .iter()
        .map(|c| cell_to_i64(c).ok_or_else(|| TableError::BadCell(c.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_number_and_string_cells() {
        let cells = vec![json!(20), json!("21"), json!(" 22 "), json!(23.0), json!(-24), json!("0")];
        assert_eq!(decode_row(&cells).unwrap(), vec![20, 21, 22, 23, -24, 0]);
    }

    #[test]
    fn non_numeric_cell_is_an_error() {
        let cells = vec![json!(1), json!("thirty")];
        assert!(matches!(decode_row(&cells), Err(TableError::BadCell(_))));
    }

    #[test]
    fn value_range_parses_a_sheets_payload() {
        let body = r#"{
            "range": "stock!A1:F2",
            "majorDimension": "ROWS",
            "values": [["10","10","10","10","10","10"], [20,20,30,40,50,60]]
        }"#;
        let vr: ValueRange = serde_json::from_str(body).unwrap();
        let last = decode_row(vr.values.last().unwrap()).unwrap();
        assert_eq!(last, vec![20, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn missing_values_key_means_no_rows() {
        let vr: ValueRange = serde_json::from_str(r#"{"range":"stock!A1:F1"}"#).unwrap();
        assert!(vr.values.is_empty());
    }
}
