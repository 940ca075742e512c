// ===============================
// src/config.rs
// ===============================
/*
=============================================================================
Project : stall_ledger_rust — daily sales tally for a sandwich stall
Module  : config.rs
Version : 0.3.0

Summary : Collects six comma-separated sales figures from the terminal,
          appends them to a remote spreadsheet, derives the surplus row
          (stock - sales) from the latest stock row, and appends that too.
          Table backend is selectable: in-memory mock or Google Sheets REST.
=============================================================================
*/
use std::{env, fs};

use dotenvy::dotenv;

use crate::domain::ROW_WIDTH;

/// Backend for the three tables (sales / stock / surplus)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableMode {
    Mock,
    Sheets,
}

impl TableMode {
    pub fn from_env(key: &str, default_mode: TableMode) -> TableMode {
        match env::var(key).unwrap_or_default().to_ascii_lowercase().as_str() {
            "mock"   => TableMode::Mock,
            "sheets" => TableMode::Sheets,
            _ => default_mode,
        }
    }

    pub fn default_rest_url(&self) -> &'static str {
        match self {
            TableMode::Mock   => "https://sheets.googleapis.com", // not contacted in mock mode
            TableMode::Sheets => "https://sheets.googleapis.com",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Args {
    pub table_mode: TableMode,

    // sheets backend
    pub sheets_rest_url: String,
    pub spreadsheet_id: String,
    pub sheets_token: Option<String>,

    // table names
    pub sales_table: String,
    pub stock_table: String,
    pub surplus_table: String,

    // mock backend
    pub mock_stock_row: Vec<i64>,
}

pub fn load() -> Args {
    // Make sure .env is read (so SPREADSHEET_ID, SHEETS_TOKEN etc. are loaded)
    let _ = dotenv();

    let table_mode = TableMode::from_env("TABLE_MODE", TableMode::Mock);

    let sheets_rest_url = env::var("SHEETS_REST_URL")
        .unwrap_or_else(|_| table_mode.default_rest_url().to_string());
    let spreadsheet_id = env::var("SPREADSHEET_ID").unwrap_or_default();
    let sheets_token = resolve_token();

    let sales_table = env::var("SALES_TABLE").unwrap_or_else(|_| "sales".to_string());
    let stock_table = env::var("STOCK_TABLE").unwrap_or_else(|_| "stock".to_string());
    let surplus_table = env::var("SURPLUS_TABLE").unwrap_or_else(|_| "surplus".to_string());

    // Seed row for mock mode: MOCK_STOCK_ROW=50,50,50,50,50,50
    let mock_stock_row: Vec<i64> = env::var("MOCK_STOCK_ROW")
        .ok()
        .map(|s| {
            s.split(',')
                .map(|x| x.trim())
                .filter(|x| !x.is_empty())
                .filter_map(|x| x.parse().ok())
                .collect()
        })
        .filter(|v: &Vec<i64>| v.len() == ROW_WIDTH)
        .unwrap_or_else(|| vec![50; ROW_WIDTH]);

    Args {
        table_mode,
        sheets_rest_url,
        spreadsheet_id,
        sheets_token,
        sales_table,
        stock_table,
        surplus_table,
        mock_stock_row,
    }
}

/// Bearer token from `SHEETS_TOKEN`, or the contents of the file named by
/// `SHEETS_TOKEN_FILE`. The credential artifact itself (how the token is
/// minted) is the sheet owner's business.
fn resolve_token() -> Option<String> {
    if let Ok(tok) = env::var("SHEETS_TOKEN") {
        if !tok.is_empty() {
            return Some(tok);
        }
    }
    let path = env::var("SHEETS_TOKEN_FILE").ok()?;
    fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}
