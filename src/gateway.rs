// ===============================
// src/gateway.rs
// ===============================
use std::sync::Mutex;

use ahash::AHashMap as HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("table `{0}` has no rows")]
    Empty(String),
    #[error("cell {0} is not a whole number")]
    BadCell(String),
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error {status}: {body}")]
    Api { status: reqwest::StatusCode, body: String },
}

/// Append/read contract for the remote tables. One gateway per process,
/// constructed in main and passed by reference into the run.
///
/// At-least-once semantics only: nothing ties the sales append to the
/// surplus append, so a failure between them leaves a sales row with no
/// matching surplus row.
pub trait TableGateway {
    async fn append_row(&self, table: &str, row: &[i64]) -> Result<(), TableError>;
    async fn get_last_row(&self, table: &str) -> Result<Vec<i64>, TableError>;
}

/// In-memory stand-in for the spreadsheet (TABLE_MODE=mock and tests).
#[derive(Debug, Default)]
pub struct MockTable {
    rows: Mutex<HashMap<String, Vec<Vec<i64>>>>,
}

impl MockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a row, e.g. the stock row a run expects to find.
    pub fn seed(&self, table: &str, row: &[i64]) {
        self.rows
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(row.to_vec());
    }

    pub fn rows_of(&self, table: &str) -> Vec<Vec<i64>> {
        self.rows
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }
}

impl TableGateway for MockTable {
    async fn append_row(&self, table: &str, row: &[i64]) -> Result<(), TableError> {
        self.seed(table, row);
        Ok(())
    }

    async fn get_last_row(&self, table: &str) -> Result<Vec<i64>, TableError> {
        self.rows
            .lock()
            .unwrap()
            .get(table)
            .and_then(|t| t.last())
            .cloned()
            .ok_or_else(|| TableError::Empty(table.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn last_row_is_the_most_recent_append() {
        let gw = MockTable::new();
        gw.append_row("stock", &[1, 1, 1, 1, 1, 1]).await.unwrap();
        gw.append_row("stock", &[2, 2, 2, 2, 2, 2]).await.unwrap();
        assert_eq!(gw.get_last_row("stock").await.unwrap(), vec![2; 6]);
    }

    #[tokio::test]
    async fn tables_are_independent() {
        let gw = MockTable::new();
        gw.append_row("sales", &[9, 9, 9, 9, 9, 9]).await.unwrap();
        assert!(matches!(
            gw.get_last_row("surplus").await,
            Err(TableError::Empty(_))
        ));
        assert_eq!(gw.rows_of("sales").len(), 1);
    }
}
