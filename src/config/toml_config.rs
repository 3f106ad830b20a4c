use crate::config::{validate_partition_key_path, MAX_BULK_SIZE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SeederError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub backend: BackendConfig,
    pub container: Option<ContainerConfig>,
    pub upload: Option<UploadConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub endpoint: String,
    pub key: String,
    pub database_id: String,
    pub container_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerConfig {
    pub partition_key_path: Option<String>,
    pub max_throughput: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub document_count: Option<usize>,
    pub bulk_size: Option<usize>,
    pub concurrent_uploads: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SeederError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SeederError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SEEDER_KEY})
    fn substitute_env_vars(content: &str) -> String {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").expect("static env-var pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.backend.endpoint
    }

    fn key(&self) -> &str {
        &self.backend.key
    }

    fn database_id(&self) -> &str {
        &self.backend.database_id
    }

    fn container_id(&self) -> &str {
        &self.backend.container_id
    }

    fn partition_key_path(&self) -> &str {
        self.container
            .as_ref()
            .and_then(|c| c.partition_key_path.as_deref())
            .unwrap_or("/Country")
    }

    fn max_throughput(&self) -> u32 {
        self.container
            .as_ref()
            .and_then(|c| c.max_throughput)
            .unwrap_or(10_000)
    }

    fn document_count(&self) -> usize {
        self.upload
            .as_ref()
            .and_then(|u| u.document_count)
            .unwrap_or(100_000)
    }

    fn bulk_size(&self) -> usize {
        self.upload
            .as_ref()
            .and_then(|u| u.bulk_size)
            .unwrap_or(MAX_BULK_SIZE)
    }

    fn concurrent_uploads(&self) -> usize {
        self.upload
            .as_ref()
            .and_then(|u| u.concurrent_uploads)
            .unwrap_or(1)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend.endpoint", &self.backend.endpoint)?;
        validate_non_empty_string("backend.key", &self.backend.key)?;
        validate_non_empty_string("backend.database_id", &self.backend.database_id)?;
        validate_non_empty_string("backend.container_id", &self.backend.container_id)?;
        validate_partition_key_path("container.partition_key_path", self.partition_key_path())?;
        validate_range("upload.bulk_size", self.bulk_size(), 1, MAX_BULK_SIZE)?;
        validate_positive_number("upload.document_count", self.document_count(), 1)?;
        validate_positive_number("upload.concurrent_uploads", self.concurrent_uploads(), 1)?;
        Ok(())
    }
}
