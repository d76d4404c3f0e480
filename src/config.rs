use std::env;

/// Runtime configuration, read from the environment once in `main` and passed
/// down by value. The signing secret in particular is never consulted again
/// after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://users_books.db?mode=rwc".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8000);

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| "uwuwuw".to_string());

        let token_ttl_secs = env::var("JWT_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(3600);

        Self {
            database_url,
            port,
            auth: AuthConfig {
                jwt_secret,
                token_ttl_secs,
            },
        }
    }
}
