// ===============================
// src/surplus.rs
// ===============================
use crate::domain::{SalesRecord, StockRecord, SurplusRecord, ROW_WIDTH};

/// Stock minus sales, position-wise. No clamping or rounding; the sign of
/// each cell is the information (waste vs stock-out).
pub fn calculate(stock: &StockRecord, sales: &SalesRecord) -> SurplusRecord {
    let mut cells = [0i64; ROW_WIDTH];
    for (i, (stocked, sold)) in stock.as_row().iter().zip(sales.as_row()).enumerate() {
        cells[i] = stocked - sold;
    }
    SurplusRecord(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_minus_sales_per_category() {
        let stock = StockRecord([50; ROW_WIDTH]);
        let sales = SalesRecord([10, 20, 30, 40, 50, 60]);
        assert_eq!(calculate(&stock, &sales).as_row(), &[40, 30, 20, 10, 0, -10]);
    }

    #[test]
    fn order_is_positional_not_sorted() {
        let stock = StockRecord([1, 100, 1, 100, 1, 100]);
        let sales = SalesRecord([1, 1, 1, 1, 1, 1]);
        assert_eq!(calculate(&stock, &sales).as_row(), &[0, 99, 0, 99, 0, 99]);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let stock = StockRecord([17, 3, 0, 99, -4, 12]);
        let sales = SalesRecord([5, 3, 8, 0, -4, 100]);
        assert_eq!(calculate(&stock, &sales), calculate(&stock, &sales));
    }
}
