// ===============================
// src/tally.rs
// ===============================
use thiserror::Error;
use tokio::io::AsyncBufRead;
use tracing::info;

use crate::collect;
use crate::config::Args;
use crate::domain::{StockRecord, SurplusRecord};
use crate::gateway::{TableError, TableGateway};
use crate::surplus;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("input: {0}")]
    Io(#[from] std::io::Error),
    #[error("table: {0}")]
    Table(#[from] TableError),
    #[error("stock row has {0} values, expected 6")]
    StockWidth(usize),
}

/// One full market-day run: collect sales, record them, derive the surplus
/// from the latest stock row, record that too.
///
/// The two appends are independent. If the stock read or the surplus append
/// fails, the sales row stays recorded and the error propagates.
pub async fn run<G, R>(gw: &G, args: &Args, input: &mut R) -> Result<SurplusRecord, TallyError>
where
    G: TableGateway,
    R: AsyncBufRead + Unpin,
{
    let sales = collect::collect_sales(input).await?;

    info!(table = %args.sales_table, "updating sales table");
    gw.append_row(&args.sales_table, sales.as_row()).await?;

    info!(table = %args.stock_table, "fetching latest stock row");
    let stock_row = gw.get_last_row(&args.stock_table).await?;
    let stock =
        StockRecord::from_row(&stock_row).ok_or(TallyError::StockWidth(stock_row.len()))?;

    let surplus = surplus::calculate(&stock, &sales);

    info!(table = %args.surplus_table, "updating surplus table");
    gw.append_row(&args.surplus_table, surplus.as_row()).await?;

    Ok(surplus)
}
