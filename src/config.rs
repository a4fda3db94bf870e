use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use filmapi_user::HashParams;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: HashParams,
    pub auth: AuthConfig,
    #[serde(default)]
    pub root: Option<RootConfig>,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub lifetime_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Mounts POST /auth/register-admin
    pub allow_admin_registration: bool,
}

/// Admin account created by `serve` when missing
#[derive(Debug, Deserialize, Clone)]
pub struct RootConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, JWT_SECRET, PORT)
    /// 2. Environment variables (FILMAPI__JWT__SECRET, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let defaults = HashParams::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3300)?
            .set_default("database.url", "sqlite:movies.db")?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.lifetime_seconds", 3600)?
            .set_default("password.memory_kib", i64::from(defaults.memory_kib))?
            .set_default("password.iterations", i64::from(defaults.iterations))?
            .set_default("password.parallelism", i64::from(defaults.parallelism))?
            .set_default("auth.allow_admin_registration", true)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FILMAPI")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(jwt_secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("jwt.secret", jwt_secret)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let baseline = HashParams::default();

        if self.jwt.secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }
        if self.jwt.lifetime_seconds == 0 {
            return Err("JWT lifetime_seconds must be greater than 0".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.password.memory_kib < baseline.memory_kib
            || self.password.iterations < baseline.iterations
            || self.password.parallelism < baseline.parallelism
        {
            return Err(format!(
                "Password work factor must be at least {} KiB, {} iterations, {} lanes",
                baseline.memory_kib, baseline.iterations, baseline.parallelism
            ));
        }
        if let Some(root) = &self.root {
            if root.username.trim().is_empty() || root.password.len() < 6 {
                return Err(
                    "Root account needs a username and a password of 6+ characters".to_string(),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3300,
            },
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections: 5,
            },
            jwt: JwtConfig {
                secret: "test_secret_key_minimum_32_characters_long".to_string(),
                lifetime_seconds: 3600,
            },
            password: HashParams::default(),
            auth: AuthConfig {
                allow_admin_registration: false,
            },
            root: None,
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_short_secret() {
        let mut config = valid_config();
        config.jwt.secret = "short".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_lifetime() {
        let mut config = valid_config();
        config.jwt.lifetime_seconds = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = valid_config();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_weak_work_factor() {
        let mut config = valid_config();
        config.password.memory_kib = 1024;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_root_short_password() {
        let mut config = valid_config();
        config.root = Some(RootConfig {
            username: "root".to_string(),
            password: "123".to_string(),
        });

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("filmapi.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 8080

[jwt]
secret = "file_secret_key_minimum_32_characters_long"

[auth]
allow_admin_registration = false

[root]
username = "root"
password = "root_password"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.to_str().unwrap().to_string())).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.jwt.lifetime_seconds, 3600);
        assert_eq!(config.password, HashParams::default());
        assert!(!config.auth.allow_admin_registration);
        assert_eq!(config.root.map(|r| r.username).as_deref(), Some("root"));
    }
}
