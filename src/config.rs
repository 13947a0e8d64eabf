use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub sheets_id: String,
    /// Inline service-account JSON; takes precedence over the file path.
    pub google_credentials_json: Option<String>,
    pub google_application_credentials: Option<String>,
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; a single "*" entry allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| {
                "http://localhost:5500,http://127.0.0.1:5500,https://jd-marcia.netlify.app".into()
            })
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            sheets_id: required("SHEETS_ID")?,
            google_credentials_json: env::var("GOOGLE_CREDENTIALS_JSON")
                .ok()
                .filter(|s| !s.is_empty()),
            google_application_credentials: env::var("GOOGLE_APPLICATION_CREDENTIALS")
                .ok()
                .filter(|s| !s.is_empty()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "10000".into())
                .parse()?,
            allowed_origins,
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).map_err(|_| anyhow::anyhow!("Missing required env var: {}", key))
}
