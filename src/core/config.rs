use std::env;

use url::Url;

use crate::errors::ReviewError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

const DEFAULT_DB_HOST: &str = "db";
const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_DB_USER: &str = "root";
const DEFAULT_DB_NAME: &str = "danawa";

/// Where the `community_reviews` table lives.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseConfig {
    /// A complete connection URL, taken as-is from `DATABASE_URL`.
    Url(String),
    Params {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    },
}

impl DatabaseConfig {
    /// Connection URL including credentials.
    pub fn connect_url(&self) -> Result<String, ReviewError> {
        match self {
            DatabaseConfig::Url(url) => Ok(url.clone()),
            DatabaseConfig::Params {
                host,
                port,
                user,
                password,
                database,
            } => {
                let mut url = Url::parse(&format!("mysql://{host}:{port}/{database}"))
                    .map_err(|e| ReviewError::Config(format!("DB_HOST/DB_NAME: {e}")))?;
                url.set_username(user)
                    .map_err(|()| ReviewError::Config("DB_USER: cannot be set".to_string()))?;
                if !password.is_empty() {
                    url.set_password(Some(password)).map_err(|()| {
                        ReviewError::Config("DB_PASSWORD: cannot be set".to_string())
                    })?;
                }
                Ok(url.to_string())
            }
        }
    }

    /// Connection URL safe to log: the password is replaced with `***`.
    #[must_use]
    pub fn redacted_url(&self) -> String {
        let Ok(raw) = self.connect_url() else {
            return "<invalid database url>".to_string();
        };
        match Url::parse(&raw) {
            Ok(mut url) => {
                if url.password().is_some() {
                    let _ = url.set_password(Some("***"));
                }
                url.to_string()
            }
            Err(_) => "<invalid database url>".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub temperature: f32,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ReviewError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. The API key is checked first so a
    /// missing key is reported before anything else is validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReviewError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let google_api_key = var("GOOGLE_API_KEY").ok_or_else(|| {
            ReviewError::Config("GOOGLE_API_KEY environment variable is not set".to_string())
        })?;

        let temperature = match var("SUMMARY_TEMPERATURE") {
            Some(raw) => {
                let value: f32 = raw
                    .trim()
                    .parse()
                    .map_err(|e| ReviewError::Config(format!("SUMMARY_TEMPERATURE: {e}")))?;
                if !(0.0..=2.0).contains(&value) {
                    return Err(ReviewError::Config(format!(
                        "SUMMARY_TEMPERATURE: {value} is outside 0.0..=2.0"
                    )));
                }
                value
            }
            None => DEFAULT_TEMPERATURE,
        };

        let database = match var("DATABASE_URL") {
            Some(url) => DatabaseConfig::Url(url),
            None => DatabaseConfig::Params {
                host: var("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
                port: match var("DB_PORT") {
                    Some(raw) => raw
                        .trim()
                        .parse()
                        .map_err(|e| ReviewError::Config(format!("DB_PORT: {e}")))?,
                    None => DEFAULT_DB_PORT,
                },
                user: var("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                database: var("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            },
        };

        Ok(Self {
            google_api_key,
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: var("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            temperature,
            database,
        })
    }
}
