use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = ".blogql.toml";

/// Database path that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub graphql: GraphqlSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite file, relative to the project root, or `:memory:`
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "blog.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseSettings {
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }

    pub fn resolve_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.path)
    }

    /// Where the data lives, for messages: the resolved file, or `:memory:`.
    pub fn location(&self, project_root: &Path) -> String {
        if self.is_in_memory() {
            self.path.clone()
        } else {
            self.resolve_path(project_root).display().to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve GraphiQL on `GET /graphql`
    #[serde(default = "default_playground")]
    pub playground: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_playground() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            playground: default_playground(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphqlSettings {
    /// Merge relation lookups of one execution tick into a single query
    #[serde(default)]
    pub batch_relations: bool,
}

impl BlogConfig {
    /// Walks up from `start_path` looking for `.blogql.toml`.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        if !config_path.exists() {
            return Err(BlogError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        let content = std::fs::read_to_string(config_path)?;
        let config: BlogConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| BlogError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(BlogError::NotInitialized);
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
