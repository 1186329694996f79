use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

pub const HOST_ENV: &str = "THOUSAND_RECIPES_SERVER_HOST";
pub const PORT_ENV: &str = "THOUSAND_RECIPES_SERVER_PORT";
pub const DIST_DIR_ENV: &str = "THOUSAND_RECIPES_DIST_DIR";

#[derive(Debug, Serialize, Deserialize)]
pub struct HTTPConfig {
    pub host: String,
    pub port: u16,
}

impl HTTPConfig {
    pub fn connection_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the trunk build of the frontend lives.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssetConfig {
    pub dist_dir: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub http_config: HTTPConfig,
    pub asset_config: AssetConfig,
}

impl AppConfig {
    pub fn load(path_str: &str) -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(File::new(path_str, config::FileFormat::Toml))
            .build()?;
        Self::from_config(&conf, |key| std::env::var(key).ok())
    }

    fn from_config(
        conf: &Config,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut http_config = conf.get::<HTTPConfig>("http")?;
        if let Some(host) = env(HOST_ENV) {
            info!("getting server host from env: {host}");
            http_config.host = host;
        } else {
            info!("getting server host from file");
        }
        if let Some(port) = env(PORT_ENV) {
            info!("getting server port from env: {port}");
            http_config.port = port.parse::<u16>().map_err(|_| {
                ConfigError::Message(format!("Failed to parse {PORT_ENV}: {port}"))
            })?;
        }

        let mut asset_config = conf.get::<AssetConfig>("assets")?;
        if let Some(dist_dir) = env(DIST_DIR_ENV) {
            info!("getting dist dir from env: {dist_dir}");
            asset_config.dist_dir = PathBuf::from(dist_dir);
        }

        Ok(AppConfig {
            http_config,
            asset_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::collections::HashMap;

    const CONFIG: &str = r#"
[http]
host = "127.0.0.1"
port = 8080

[assets]
dist_dir = "../frontend/dist"
"#;

    fn parsed() -> Config {
        Config::builder()
            .add_source(File::from_str(CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
    }

    #[test]
    fn reads_file_values() {
        let conf = AppConfig::from_config(&parsed(), |_| None).unwrap();
        assert_eq!(conf.http_config.connection_string(), "127.0.0.1:8080");
        assert_eq!(conf.asset_config.dist_dir, PathBuf::from("../frontend/dist"));
    }

    #[test]
    fn env_overrides_file() {
        let env = HashMap::from([
            (HOST_ENV, "0.0.0.0"),
            (PORT_ENV, "3000"),
            (DIST_DIR_ENV, "/srv/recipes"),
        ]);
        let conf = AppConfig::from_config(&parsed(), |key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(conf.http_config.connection_string(), "0.0.0.0:3000");
        assert_eq!(conf.asset_config.dist_dir, PathBuf::from("/srv/recipes"));
    }

    #[test]
    fn bad_port_is_rejected() {
        let result = AppConfig::from_config(&parsed(), |key| {
            (key == PORT_ENV).then(|| "eighty".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Message(_))));
    }

    #[test]
    fn shipped_config_loads() {
        let conf = AppConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config/config.toml"));
        assert!(conf.is_ok());
    }
}
