// Responsible for all communication with the Google Sheets backend.

use anyhow::Context;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::time::Duration;

use crate::domain::record::Record;
use crate::infra::config;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

/// Subset of the service-account credential JSON the client needs.
#[derive(Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key: String,
}

// OAuth JWT-bearer assertion claims.
#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<JsonValue>>,
}

/// Read-only client for one worksheet of one spreadsheet.
///
/// Each `fetch_rows` call performs its own auth round-trip; no token is
/// cached between calls.
pub struct SheetsClient {
    http: reqwest::Client,
    sheet_id: String,
    worksheet: String,
    creds_json: String,
}

impl SheetsClient {
    pub fn new(sheet_id: String, worksheet: String, creds_json: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            sheet_id,
            worksheet,
            creds_json,
        })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(
            config::sheet_id(),
            config::sheet_worksheet(),
            config::google_creds_json(),
        )
    }

    /// Pulls all rows of the worksheet, mapping the header row onto each data
    /// row. Any network, auth, or decode failure is an `Err`; the caller
    /// decides what to fall back to.
    pub async fn fetch_rows(&self) -> anyhow::Result<Vec<Record>> {
        let token = self.access_token().await?;
        let url = format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}",
            self.sheet_id,
            urlencoding::encode(&self.worksheet)
        );
        let range: ValueRange = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .context("values request failed")?
            .error_for_status()
            .context("values request rejected")?
            .json()
            .await
            .context("invalid values response")?;

        Ok(rows_from_values(range.values))
    }

    /// Mints a service-account JWT and exchanges it for an access token.
    async fn access_token(&self) -> anyhow::Result<String> {
        let key: ServiceAccountKey =
            serde_json::from_str(&self.creds_json).context("invalid GOOGLE_CREDS_JSON")?;
        let now = Utc::now().timestamp();
        let claims = Claims {
            iss: &key.client_email,
            scope: SHEETS_SCOPE,
            aud: TOKEN_URL,
            iat: now,
            exp: now + 3600,
        };
        let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .context("invalid service-account private key")?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &signing_key)
            .context("failed to sign service-account assertion")?;

        let token: TokenResponse = self
            .http
            .post(TOKEN_URL)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .context("token request failed")?
            .error_for_status()
            .context("token request rejected")?
            .json()
            .await
            .context("invalid token response")?;

        Ok(token.access_token)
    }
}

/// Builds Records by zipping the header row with each data row.
///
/// Short rows pad with empty strings, cells beyond the header are dropped,
/// and rows that are entirely blank are skipped.
pub fn rows_from_values(values: Vec<Vec<JsonValue>>) -> Vec<Record> {
    let mut rows = values.into_iter();
    let header: Vec<String> = match rows.next() {
        Some(h) => h.iter().map(cell_to_string).collect(),
        None => return Vec::new(),
    };

    rows.filter_map(|cells| {
        let mut record = Record::new();
        for (i, col) in header.iter().enumerate() {
            let value = cells.get(i).map(cell_to_string).unwrap_or_default();
            record.push(col.clone(), value);
        }
        if record.is_blank() {
            None
        } else {
            Some(record)
        }
    })
    .collect()
}

fn cell_to_string(cell: &JsonValue) -> String {
    match cell {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
