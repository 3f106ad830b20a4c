pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{
    self, validate_non_empty_string, validate_positive_number, validate_range, validate_url,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// The backend caps same-partition bulk requests at 100 operations.
pub const MAX_BULK_SIZE: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "doc-seeder")]
#[command(about = "Provision a document database and seed it with synthetic family records")]
pub struct CliConfig {
    /// Load configuration from a TOML file instead of CLI flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "https://localhost:8081")]
    pub endpoint: String,

    /// Access key for the storage backend
    #[arg(long, default_value = "")]
    pub key: String,

    #[arg(long, default_value = "FamilyDatabase")]
    pub database_id: String,

    #[arg(long, default_value = "Families")]
    pub container_id: String,

    #[arg(long, default_value = "/Country")]
    pub partition_key_path: String,

    #[arg(long, default_value = "10000")]
    pub max_throughput: u32,

    #[arg(long, default_value = "100000")]
    pub document_count: usize,

    #[arg(long, default_value = "100")]
    pub bulk_size: usize,

    #[arg(long, default_value = "1")]
    pub concurrent_uploads: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU/memory usage per phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn database_id(&self) -> &str {
        &self.database_id
    }

    fn container_id(&self) -> &str {
        &self.container_id
    }

    fn partition_key_path(&self) -> &str {
        &self.partition_key_path
    }

    fn max_throughput(&self) -> u32 {
        self.max_throughput
    }

    fn document_count(&self) -> usize {
        self.document_count
    }

    fn bulk_size(&self) -> usize {
        self.bulk_size
    }

    fn concurrent_uploads(&self) -> usize {
        self.concurrent_uploads
    }
}

impl validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("key", &self.key)?;
        validate_non_empty_string("database_id", &self.database_id)?;
        validate_non_empty_string("container_id", &self.container_id)?;
        validate_partition_key_path("partition_key_path", &self.partition_key_path)?;
        validate_range("bulk_size", self.bulk_size, 1, MAX_BULK_SIZE)?;
        validate_positive_number("document_count", self.document_count, 1)?;
        validate_positive_number("concurrent_uploads", self.concurrent_uploads, 1)?;
        validate_positive_number("max_throughput", self.max_throughput as usize, 1)?;
        Ok(())
    }
}

pub fn validate_partition_key_path(
    field_name: &str,
    path: &str,
) -> crate::utils::error::Result<()> {
    validate_non_empty_string(field_name, path)?;
    if !path.starts_with('/') {
        return Err(crate::utils::error::SeederError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Partition key path must start with '/'".to_string(),
        });
    }
    Ok(())
}
