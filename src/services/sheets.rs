//! Google Sheets store client: service-account auth, read-all and
//! append-row against one spreadsheet, one tab per resource.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::services::rows::{self, Record};

const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const SHEETS_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
    /// Store-side failure, carrying Google's own error message.
    #[error("sheets API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("authentication failed: {0}")]
    Auth(String),
}

/// Seam between handlers and the external tabular store.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// All data rows of a tab as normalized-key records; empty tab → empty vec.
    async fn get_rows(&self, tab: &str) -> Result<Vec<Record>, SheetsError>;
    /// Append one row after the existing data of a tab.
    async fn append_row(&self, tab: &str, values: Vec<String>) -> Result<(), SheetsError>;
}

#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key: String,
    #[serde(default = "default_token_uri")]
    token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".into()
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

struct CachedToken {
    access_token: String,
    /// Unix seconds after which the token is considered stale.
    expires_at: u64,
}

pub struct SheetsClient {
    http: Client,
    spreadsheet_id: String,
    key: ServiceAccountKey,
    signing_key: EncodingKey,
    token: Mutex<Option<CachedToken>>,
}

impl SheetsClient {
    /// Build the client and fetch an initial access token, so missing or
    /// malformed credentials surface as a startup error.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let raw = if let Some(inline) = &config.google_credentials_json {
            inline.clone()
        } else if let Some(path) = &config.google_application_credentials {
            std::fs::read_to_string(path)?
        } else {
            anyhow::bail!("Missing GOOGLE_CREDENTIALS_JSON or GOOGLE_APPLICATION_CREDENTIALS");
        };
        let key: ServiceAccountKey = serde_json::from_str(&raw)?;
        let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;

        let client = Self {
            http: Client::new(),
            spreadsheet_id: config.sheets_id.clone(),
            key,
            signing_key,
            token: Mutex::new(None),
        };
        client
            .access_token()
            .await
            .map_err(|e| anyhow::anyhow!("Sheets authentication failed: {e}"))?;
        Ok(client)
    }

    async fn access_token(&self) -> Result<String, SheetsError> {
        let now = unix_now();
        let mut guard = self.token.lock().await;
        if let Some(cached) = guard.as_ref() {
            if cached.expires_at > now {
                return Ok(cached.access_token.clone());
            }
        }

        let claims = Claims {
            iss: &self.key.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + 3600,
        };
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &self.signing_key)
            .map_err(|e| SheetsError::Auth(e.to_string()))?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Auth(format!("token endpoint {status}: {body}")));
        }

        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
            expires_in: u64,
        }
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SheetsError::Auth(e.to_string()))?;

        let access_token = token.access_token.clone();
        *guard = Some(CachedToken {
            access_token: token.access_token,
            // Refresh one minute early to avoid racing expiry mid-request.
            expires_at: now + token.expires_in.saturating_sub(60),
        });
        Ok(access_token)
    }

    async fn api_error(response: reqwest::Response) -> SheetsError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")?
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or(body);
        SheetsError::Api { status, message }
    }
}

#[async_trait]
impl SheetStore for SheetsClient {
    async fn get_rows(&self, tab: &str) -> Result<Vec<Record>, SheetsError> {
        let token = self.access_token().await?;
        let url = format!("{SHEETS_BASE}/{}/values/{}", self.spreadsheet_id, quote_tab(tab));
        let response = self.http.get(&url).bearer_auth(token).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        #[derive(Deserialize)]
        struct ValueRange {
            #[serde(default)]
            values: Vec<Vec<String>>,
        }
        let range: ValueRange = response.json().await?;
        Ok(rows::to_records(&range.values))
    }

    async fn append_row(&self, tab: &str, values: Vec<String>) -> Result<(), SheetsError> {
        let token = self.access_token().await?;
        let url = format!(
            "{SHEETS_BASE}/{}/values/{}:append",
            self.spreadsheet_id,
            quote_tab(tab)
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            // USER_ENTERED lets the sheet recognize numbers and dates
            // instead of storing everything as literal text.
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({ "values": [values] }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }
}

/// A1-notation tab reference: names outside plain `[A-Za-z0-9_]` must be
/// single-quoted, with embedded quotes doubled.
fn quote_tab(tab: &str) -> String {
    let plain = !tab.is_empty()
        && tab
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        tab.to_string()
    } else {
        format!("'{}'", tab.replace('\'', "''"))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
