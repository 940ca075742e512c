// ===============================
// src/gateway_sheets.rs
// ===============================
use tracing::{error, info};

use crate::config::Args;
use crate::gateway::{TableError, TableGateway};
use crate::sheets::{decode_row, AppendResponse, ValueRange};

/// Google Sheets v4 REST gateway. One client per process; every call is an
/// independent round-trip, there is no session state on our side.
pub struct SheetsClient {
    http: reqwest::Client,
    rest_base: String,
    spreadsheet_id: String,
    token: String,
}

impl SheetsClient {
    pub fn new(args: &Args) -> Self {
        let token = args
            .sheets_token
            .clone()
            .expect("SHEETS_TOKEN (or SHEETS_TOKEN_FILE) missing");
        if args.spreadsheet_id.is_empty() {
            panic!("SPREADSHEET_ID missing");
        }
        Self {
            http: reqwest::Client::new(),
            rest_base: args.sheets_rest_url.trim_end_matches('/').to_string(),
            spreadsheet_id: args.spreadsheet_id.clone(),
            token,
        }
    }

    // A bare table name addresses the whole sheet; the API then appends
    // after the last non-empty row.
    fn values_url(&self, table: &str, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}{}",
            self.rest_base,
            self.spreadsheet_id,
            urlencoding::encode(table),
            suffix,
        )
    }
}

impl TableGateway for SheetsClient {
    async fn append_row(&self, table: &str, row: &[i64]) -> Result<(), TableError> {
        let url =
            self.values_url(table, ":append?valueInputOption=RAW&insertDataOption=INSERT_ROWS");
        let body = serde_json::json!({ "values": [row] });

        let rsp = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        if !rsp.status().is_success() {
            let code = rsp.status();
            let body = rsp.text().await.unwrap_or_default();
            error!(%code, %body, table, "append failed");
            return Err(TableError::Api { status: code, body });
        }

        let ack = rsp.json::<AppendResponse>().await?;
        let range = ack
            .updates
            .and_then(|u| u.updated_range)
            .unwrap_or_default();
        info!(table, %range, "row appended");
        Ok(())
    }

    async fn get_last_row(&self, table: &str) -> Result<Vec<i64>, TableError> {
        let url = self.values_url(table, "?valueRenderOption=UNFORMATTED_VALUE");

        let rsp = self.http.get(url).bearer_auth(&self.token).send().await?;
        if !rsp.status().is_success() {
            let code = rsp.status();
            let body = rsp.text().await.unwrap_or_default();
            error!(%code, %body, table, "read failed");
            return Err(TableError::Api { status: code, body });
        }

        let vr = rsp.json::<ValueRange>().await?;
        let last = vr
            .values
            .last()
            .ok_or_else(|| TableError::Empty(table.to_string()))?;
        decode_row(last)
    }
}
