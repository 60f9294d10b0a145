//! Startup configuration read from environment variables.
//!
//! Parsing goes through a lookup function so tests never touch the
//! process environment.

use crate::modules::admin::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    WeakJwtSecret,

    #[error("ADMIN_SESSION_EXPIRY must be between 60 and 604800 seconds")]
    SessionExpiryOutOfRange,

    #[error("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set")]
    MissingAdminCredential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnv {
    Development,
    Test,
    Production,
}

impl RunEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunEnv::Development => "development",
            RunEnv::Test => "test",
            RunEnv::Production => "production",
        }
    }
}

/// The admin password as configured.
#[derive(Clone, PartialEq)]
pub enum AdminCredential {
    /// Argon2id PHC string
    Hash(String),
    /// Development convenience; hashed once at startup
    Plain(String),
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminCredential::Hash(_) => f.write_str("Hash(..)"),
            AdminCredential::Plain(_) => f.write_str("Plain(..)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Clone, PartialEq)]
pub enum SmtpTransportConfig {
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Unauthenticated local catcher (Mailpit)
    Local { host: String, port: u16 },
}

impl std::fmt::Debug for SmtpTransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmtpTransportConfig::Relay { server, .. } => {
                f.debug_struct("Relay").field("server", server).finish()
            }
            SmtpTransportConfig::Local { host, port } => f
                .debug_struct("Local")
                .field("host", host)
                .field("port", port)
                .finish(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactConfig {
    pub inbox: String,
    pub from_email: String,
    pub transport: SmtpTransportConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: RunEnv,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub jwt: JwtConfig,
    pub admin_credential: AdminCredential,
    pub argon2: Argon2Settings,
    pub contact: Option<ContactConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let env = match get("RUST_ENV").as_deref() {
            None | Some("development") => RunEnv::Development,
            Some("test") => RunEnv::Test,
            Some("production") => RunEnv::Production,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "RUST_ENV",
                    value: other.to_string(),
                })
            }
        };

        let secret_key = required("JWT_SECRET")?;
        if secret_key.len() < 32 {
            return Err(ConfigError::WeakJwtSecret);
        }

        let session_expiry: i64 = parse_or(&get, "ADMIN_SESSION_EXPIRY", 86400)?;
        if !(60..=604800).contains(&session_expiry) {
            return Err(ConfigError::SessionExpiryOutOfRange);
        }

        let admin_credential = match (get("ADMIN_PASSWORD_HASH"), get("ADMIN_PASSWORD")) {
            (Some(hash), _) => AdminCredential::Hash(hash),
            (None, Some(plain)) => AdminCredential::Plain(plain),
            (None, None) => return Err(ConfigError::MissingAdminCredential),
        };

        let contact = match get("CONTACT_INBOX") {
            None => None,
            Some(inbox) => {
                let transport = if env == RunEnv::Test {
                    SmtpTransportConfig::Local {
                        host: get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                        port: parse_or(&get, "SMTP_PORT", 1025)?,
                    }
                } else {
                    SmtpTransportConfig::Relay {
                        server: required("SMTP_SERVER")?,
                        username: required("SMTP_USERNAME")?,
                        password: required("SMTP_PASSWORD")?,
                    }
                };

                Some(ContactConfig {
                    inbox,
                    from_email: required("EMAIL_FROM")?,
                    transport,
                })
            }
        };

        Ok(Self {
            env,
            host: required("HOST")?,
            port: parse_required(&get, "PORT")?,
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            jwt: JwtConfig {
                secret_key,
                issuer: get("JWT_ISSUER").unwrap_or_else(|| "campus_cms".to_string()),
                session_expiry,
            },
            admin_credential,
            argon2: Argon2Settings {
                memory_kib: parse_or(&get, "ARGON2_MEMORY_KIB", 4 * 1024)?,
                iterations: parse_or(&get, "ARGON2_ITERATIONS", 3)?,
                parallelism: parse_or(&get, "ARGON2_PARALLELISM", 1)?,
            },
            contact,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<G, T>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_required<G, T>(get: &G, key: &'static str) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = get(key).ok_or(ConfigError::Missing(key))?;
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}
