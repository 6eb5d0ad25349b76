use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub backtrace: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            backtrace: false,
        }
    }
}

/// OpenAI API access for both embeddings and chat completions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default = "default_openai_endpoint")]
    pub endpoint: String,
    /// API key; overridden by `OPENAI_API_KEY` when set.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    /// Model used to answer RAG queries.
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    /// Model used by the direct completion endpoint.
    #[serde(default = "default_completion_model")]
    pub completion_model: String,
}

fn default_openai_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-ada-002".to_string()
}

fn default_chat_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_completion_model() -> String {
    "gpt-4o-mini".to_string()
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_openai_endpoint(),
            api_key: String::new(),
            embedding_model: default_embedding_model(),
            chat_model: default_chat_model(),
            completion_model: default_completion_model(),
        }
    }
}

/// Pinecone vector index access. The index is pre-populated; ingestion is
/// handled elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PineconeConfig {
    /// API key; overridden by `PINECONE_API_KEY` when set.
    #[serde(default)]
    pub api_key: String,
    /// Data-plane host of the index, e.g.
    /// `https://blockchain-rag-xxxxxx.svc.us-east-1-aws.pinecone.io`.
    #[serde(default)]
    pub index_host: String,
    #[serde(default = "default_index_name")]
    pub index_name: String,
}

fn default_index_name() -> String {
    "blockchain-rag".to_string()
}

impl Default for PineconeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            index_host: String::new(),
            index_name: default_index_name(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub pinecone: PineconeConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(crate::ChainRagError::Io)?;

        let config: AppConfig =
            toml::from_str(&content).map_err(crate::ChainRagError::TomlParsing)?;

        Ok(config)
    }

    /// Load configuration from the default config file path, applying
    /// environment credential overrides.
    ///
    /// Missing credentials are not validated here; they surface as an
    /// upstream auth failure on the first query.
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        let mut config = if Path::new("config.toml").exists() {
            Self::from_file("config.toml")?
        } else if Path::new("config.example.toml").exists() {
            println!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")?
        } else {
            Err(crate::ChainRagError::Config(
                "No config file found. Please create config.toml or config.example.toml"
                    .to_string(),
            ))?
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Overlay provider credentials from the environment.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            self.openai.api_key = key;
        }
        if let Ok(key) = std::env::var("PINECONE_API_KEY") {
            self.pinecone.api_key = key;
        }
    }

    /// Get server host
    pub fn server_host(&self) -> &str {
        &self.server.host
    }

    /// Get server port
    pub fn server_port(&self) -> u16 {
        self.server.port
    }

    /// Get configured log level
    pub fn logging_level(&self) -> &str {
        &self.logging.level
    }

    /// Whether backtraces are enabled on errors
    pub fn logging_backtrace(&self) -> bool {
        self.logging.backtrace
    }

    /// Get OpenAI API endpoint
    pub fn openai_endpoint(&self) -> &str {
        &self.openai.endpoint
    }

    /// Get OpenAI API key
    pub fn openai_api_key(&self) -> &str {
        &self.openai.api_key
    }

    /// Get embedding model name
    pub fn embedding_model(&self) -> &str {
        &self.openai.embedding_model
    }

    /// Get RAG chat model name
    pub fn chat_model(&self) -> &str {
        &self.openai.chat_model
    }

    /// Get direct completion model name
    pub fn completion_model(&self) -> &str {
        &self.openai.completion_model
    }

    /// Get Pinecone API key
    pub fn pinecone_api_key(&self) -> &str {
        &self.pinecone.api_key
    }

    /// Get Pinecone index host
    pub fn pinecone_index_host(&self) -> &str {
        &self.pinecone.index_host
    }

    /// Get Pinecone index name
    pub fn pinecone_index_name(&self) -> &str {
        &self.pinecone.index_name
    }
}
