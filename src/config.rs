use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub to: String,
    pub from: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl EmailConfig {
    /// Notifications go out only when switched on and a key is present.
    pub fn is_active(&self) -> bool {
        self.enabled && self.api_key.is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub db_name: String,
    pub email: EmailConfig,
    /// Empty means any origin.
    pub cors_origins: Vec<String>,
    pub host: String,
    pub port: u16,
    pub shutdown_grace_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let email = EmailConfig {
            enabled: non_empty("EMAIL_ENABLED")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            api_key: non_empty("RESEND_API_KEY"),
            to: non_empty("EMAIL_TO").unwrap_or_else(|| "Rupesh@Headquartersofdrinks.co.in".into()),
            from: non_empty("EMAIL_FROM").unwrap_or_else(|| "onboarding@resend.dev".into()),
            api_url: non_empty("EMAIL_API_URL")
                .unwrap_or_else(|| "https://api.resend.com".into())
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: non_empty("EMAIL_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(10),
        };

        let cors_origins = non_empty("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        // a wildcard anywhere in the list opens CORS to everyone
        let cors_origins = if cors_origins.iter().any(|o| o == "*") {
            Vec::new()
        } else {
            cors_origins
        };

        let db_name = non_empty("DB_NAME").unwrap_or_else(|| "hqd_drinks".into());
        anyhow::ensure!(
            db_name.len() <= 128,
            "DB_NAME must be at most 128 characters"
        );

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            db_name,
            email,
            cors_origins,
            host: non_empty("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: non_empty("APP_PORT")
                .and_then(|v| v.trim().parse::<u16>().ok())
                .unwrap_or(8080),
            shutdown_grace_secs: non_empty("SHUTDOWN_GRACE_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(5),
        })
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}
