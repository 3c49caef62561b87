// Process configuration loaded from the environment

/// Runtime configuration.
///
/// The JWT secret is read here once and handed to `TokenService` at
/// construction; nothing else in the process touches the environment for
/// it, so tests and future rotation can supply their own.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: String,
    pub port: String,
}

impl Config {
    /// Read configuration from environment variables. `DATABASE_URL` and
    /// `JWT_SECRET` are required; host and port fall back to defaults.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in environment".to_string())?;
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set in environment".to_string())?;
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
