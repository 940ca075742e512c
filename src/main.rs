// ===============================
// src/main.rs
// ===============================
/*
=============================================================================
Project : stall_ledger_rust — daily sales tally for a sandwich stall
Module  : main.rs
Version : 0.3.0

Summary : Collects six comma-separated sales figures from the terminal,
          appends them to a remote spreadsheet, derives the surplus row
          (stock - sales) from the latest stock row, and appends that too.
          Table backend is selectable: in-memory mock or Google Sheets REST.
=============================================================================
*/
mod collect;
mod config;
mod domain;
mod gateway; // table contract + in-memory mock
mod gateway_sheets; // real Google Sheets v4 (REST)
mod sheets; // helper (wire models / row codec) for Sheets
mod surplus;
mod tally;

use tokio::io::BufReader;
use tracing::{error, info};

use crate::gateway::MockTable;
use crate::gateway_sheets::SheetsClient;

#[tokio::main]
async fn main() {
    // ---- Logging ----
    tracing_subscriber::fmt().with_env_filter("info").init();

    // ---- Load config ----
    let args = config::load();

    // ---- Human-friendly startup info ----
    let table_mode_str = match args.table_mode {
        config::TableMode::Mock => "mock",
        config::TableMode::Sheets => "sheets",
    };

    info!(
        table_mode = %table_mode_str,
        spreadsheet = %args.spreadsheet_id,
        sales = %args.sales_table,
        stock = %args.stock_table,
        surplus = %args.surplus_table,
        "startup config"
    );

    println!("Sandwich stall daily tally");

    let mut input = BufReader::new(tokio::io::stdin());

    // Gateway selected by mode; constructed once, passed by reference.
    let result = match args.table_mode {
        config::TableMode::Mock => {
            let gw = MockTable::new();
            gw.seed(&args.stock_table, &args.mock_stock_row);
            tally::run(&gw, &args, &mut input).await
        }
        config::TableMode::Sheets => {
            let gw = SheetsClient::new(&args);
            tally::run(&gw, &args, &mut input).await
        }
    };

    match result {
        Ok(surplus) => {
            info!(row = ?surplus.as_row(), "surplus recorded");
            println!("All tables updated. Surplus for the day: {:?}", surplus.as_row());
        }
        Err(e) => {
            error!(%e, "run failed");
            std::process::exit(1);
        }
    }
}
