// ===============================
// src/domain.rs
// ===============================
use serde::{Deserialize, Serialize};

/// Number of product categories. Every table row is exactly this wide.
pub const ROW_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord(pub [i64; ROW_WIDTH]);
impl SalesRecord { pub fn as_row(&self) -> &[i64] { &self.0 } }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord(pub [i64; ROW_WIDTH]);
impl StockRecord {
    pub fn as_row(&self) -> &[i64] { &self.0 }

    /// Width-checked conversion from a raw gateway row. The remote table owns
    /// the stock data; a row that is not exactly ROW_WIDTH wide would break
    /// category alignment, so it is rejected here instead of truncated.
    pub fn from_row(row: &[i64]) -> Option<Self> {
        let cells: [i64; ROW_WIDTH] = row.try_into().ok()?;
        Some(Self(cells))
    }
}

/// Stock minus sales per category. Positive = leftover/waste, negative =
/// stock-out (demand beyond what was stocked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurplusRecord(pub [i64; ROW_WIDTH]);
impl SurplusRecord { pub fn as_row(&self) -> &[i64] { &self.0 } }
