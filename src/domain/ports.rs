use crate::domain::model::{
    BulkOperation, ContainerDefinition, ContainerSpec, DatabaseDefinition, OperationResponse,
    Person,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 後端文件庫的抽象介面
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create the database if it does not exist; returns the existing
    /// definition when it already does.
    async fn create_database_if_not_exists(&self, id: &str) -> Result<DatabaseDefinition>;

    /// Read the database definition; fails if the database is absent.
    async fn read_database(&self, id: &str) -> Result<DatabaseDefinition>;

    /// Create the container if it does not exist; returns the existing
    /// definition when it already does.
    async fn create_container_if_not_exists(
        &self,
        database_id: &str,
        spec: &ContainerSpec,
    ) -> Result<ContainerDefinition>;

    /// Read the container definition; fails if the container is absent.
    async fn read_container(&self, database_id: &str, id: &str) -> Result<ContainerDefinition>;

    /// Submit a multi-operation request. Returns one response per
    /// operation, in submission order.
    async fn bulk(
        &self,
        database_id: &str,
        container_id: &str,
        operations: Vec<BulkOperation>,
    ) -> Result<Vec<OperationResponse>>;

    /// Run a read-only query and materialize all rows.
    async fn query(
        &self,
        database_id: &str,
        container_id: &str,
        sql: &str,
    ) -> Result<Vec<serde_json::Value>>;
}

/// Produces one synthetic record per call. Pluggable so tests can swap in
/// deterministic fixtures.
pub trait PersonGenerator: Send + Sync {
    fn generate(&self) -> Person;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn key(&self) -> &str;
    fn database_id(&self) -> &str;
    fn container_id(&self) -> &str;
    fn partition_key_path(&self) -> &str;
    fn max_throughput(&self) -> u32;
    fn document_count(&self) -> usize;
    fn bulk_size(&self) -> usize;
    fn concurrent_uploads(&self) -> usize;
}
