pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http_store::HttpDocumentStore;
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::generator::RandomPersonGenerator;
pub use crate::core::seeder::{SeedReport, SeederEngine};
pub use crate::utils::error::{Result, SeederError};
