use crate::error::{Result, UserqlError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "userql.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserqlConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub graphql: GraphqlSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL IDE on `GET /`
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlSettings {
    #[serde(default = "default_persisted_queries")]
    pub persisted_queries: bool,

    #[serde(default = "default_persisted_query_cache_size")]
    pub persisted_query_cache_size: usize,

    /// Maximum selection depth, 0 disables the check
    #[serde(default = "default_depth_limit")]
    pub depth_limit: usize,

    /// Maximum query complexity, 0 disables the check
    #[serde(default = "default_complexity_limit")]
    pub complexity_limit: usize,
}

fn default_persisted_queries() -> bool {
    true
}

fn default_persisted_query_cache_size() -> usize {
    512
}

fn default_depth_limit() -> usize {
    16
}

fn default_complexity_limit() -> usize {
    0
}

impl Default for GraphqlSettings {
    fn default() -> Self {
        Self {
            persisted_queries: default_persisted_queries(),
            persisted_query_cache_size: default_persisted_query_cache_size(),
            depth_limit: default_depth_limit(),
            complexity_limit: default_complexity_limit(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl UserqlConfig {
    /// Loads configuration from `explicit` if given, otherwise from the
    /// nearest `userql.toml` at or above `start_path`. Falls back to defaults
    /// when no file is found.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(UserqlError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => match Self::find_config_file(start_path) {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: UserqlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = UserqlConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:4000");
        assert!(config.server.graphiql);
        assert!(config.graphql.persisted_queries);
        assert_eq!(config.graphql.persisted_query_cache_size, 512);
        assert_eq!(config.graphql.depth_limit, 16);
        assert_eq!(config.graphql.complexity_limit, 0);
        assert!(!config.logging.verbose);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = UserqlConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config, UserqlConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[server]\nport = 8080\n",
        )
        .unwrap();

        let config = UserqlConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.graphql, GraphqlSettings::default());
    }

    #[test]
    fn test_config_found_in_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[graphql]\npersisted_queries = false\ndepth_limit = 3\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = UserqlConfig::load(None, &nested).unwrap();
        assert!(!config.graphql.persisted_queries);
        assert_eq!(config.graphql.depth_limit, 3);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = UserqlConfig::load(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(matches!(err, UserqlError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = UserqlConfig::load(Some(&path), temp_dir.path()).unwrap_err();
        assert!(matches!(err, UserqlError::Toml(_)));
    }

    #[test]
    fn test_logging_section() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(&path, "[logging]\nverbose = true\nfile = \"logs/userql.log\"\n").unwrap();

        let config = UserqlConfig::load(Some(&path), temp_dir.path()).unwrap();
        assert!(config.logging.verbose);
        assert_eq!(config.logging.file, Some(PathBuf::from("logs/userql.log")));
    }
}
