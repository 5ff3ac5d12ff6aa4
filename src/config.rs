use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    // External store
    pub store_api_base: String,
    pub store_base_id: String,
    pub store_api_key: String,

    // JWT
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,

    // Server
    pub host: String,
    pub port: u16,

    /// Runtime environment; the session cookie is secure-flagged only in
    /// "production".
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if exists

        Ok(Self {
            // External store
            store_api_base: env::var("STORE_API_BASE")
                .unwrap_or_else(|_| "https://api.airtable.com/v0".to_string()),
            store_base_id: env::var("STORE_BASE_ID")
                .map_err(|_| ConfigError::Missing("STORE_BASE_ID"))?,
            store_api_key: env::var("STORE_API_KEY")
                .map_err(|_| ConfigError::Missing("STORE_API_KEY"))?,

            // JWT (a missing signing secret is a startup error, not a fallback)
            jwt_secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("JWT_EXPIRATION_HOURS"))?,

            // Server
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,

            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid environment variable: {0}")]
    Invalid(&'static str),
}
