use crate::core::batch::into_batches;
use crate::core::limiter::run_bounded_all;
use crate::core::uploader::BatchUploader;
use crate::domain::model::{ContainerSpec, PartitionKeyDefinition, Person};
use crate::domain::ports::{ConfigProvider, DocumentStore, PersonGenerator};
use crate::utils::error::{Result, SeederError};
use crate::utils::monitor::SystemMonitor;
use std::time::{Duration, Instant};

/// 驗證查詢：取回前 100 個家庭的孩子
const VERIFY_QUERY: &str = "SELECT TOP 100 r.children FROM root r";

/// Summary of one completed seeding run.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub documents: usize,
    pub batches: usize,
    pub verified_rows: usize,
    pub elapsed: Duration,
}

/// Drives the full pipeline: provision → generate → batch → upload →
/// verify. Stages run strictly in sequence; only the upload stage fans
/// out, bounded by the configured concurrency.
pub struct SeederEngine<S: DocumentStore, G: PersonGenerator, C: ConfigProvider> {
    store: S,
    generator: G,
    config: C,
    monitor: SystemMonitor,
}

impl<S: DocumentStore, G: PersonGenerator, C: ConfigProvider> SeederEngine<S, G, C> {
    pub fn new(store: S, generator: G, config: C) -> Self {
        Self::new_with_monitoring(store, generator, config, false)
    }

    pub fn new_with_monitoring(store: S, generator: G, config: C, monitor_enabled: bool) -> Self {
        Self {
            store,
            generator,
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<SeedReport> {
        let started = Instant::now();
        println!("Starting bulk seed process...");

        self.provision().await?;
        self.monitor.log_phase("Provisioning");

        let document_count = self.config.document_count();
        println!("Generating {} documents...", document_count);
        let persons = self.generate_all(document_count);
        self.monitor.log_phase("Generation");

        let batches = into_batches(persons, self.config.bulk_size());
        let batch_count = batches.len();
        println!(
            "Uploading {} batches of up to {} documents ({} in flight)...",
            batch_count,
            self.config.bulk_size(),
            self.config.concurrent_uploads()
        );
        self.upload_all(batches).await?;
        println!("Uploaded {} batches", batch_count);
        self.monitor.log_phase("Upload");

        println!("Querying container: {}", self.config.container_id());
        let verified_rows = self.verify().await?;

        self.monitor.log_final_stats();
        Ok(SeedReport {
            documents: document_count,
            batches: batch_count,
            verified_rows,
            elapsed: started.elapsed(),
        })
    }

    /// Create-if-absent then read back, for the database and container.
    async fn provision(&self) -> Result<()> {
        let database_id = self.config.database_id();

        let database = self.store.create_database_if_not_exists(database_id).await?;
        tracing::info!("Created database: {}", database.id);

        let database = self.store.read_database(database_id).await?;
        tracing::info!("Reading database: {}", database.id);

        let spec = ContainerSpec {
            id: self.config.container_id().to_string(),
            partition_key: PartitionKeyDefinition::hash(self.config.partition_key_path()),
            max_throughput: self.config.max_throughput(),
        };
        let container = self
            .store
            .create_container_if_not_exists(database_id, &spec)
            .await?;
        tracing::info!("Created container: {}", container.id);

        let container = self
            .store
            .read_container(database_id, self.config.container_id())
            .await?;
        tracing::info!("Reading container: {}", container.id);

        Ok(())
    }

    fn generate_all(&self, count: usize) -> Vec<Person> {
        (0..count).map(|_| self.generator.generate()).collect()
    }

    async fn upload_all(&self, batches: Vec<Vec<Person>>) -> Result<()> {
        let uploader = BatchUploader::new(
            &self.store,
            self.config.database_id(),
            self.config.container_id(),
        );
        let total = batches.len();

        let tasks: Vec<_> = batches
            .iter()
            .enumerate()
            .map(|(index, batch)| {
                let uploader = &uploader;
                async move {
                    uploader.upload(batch).await?;
                    tracing::debug!("Uploaded batch {}/{}", index + 1, total);
                    Ok(())
                }
            })
            .collect();

        run_bounded_all(tasks, self.config.concurrent_uploads()).await?;
        Ok(())
    }

    async fn verify(&self) -> Result<usize> {
        let rows = self
            .store
            .query(
                self.config.database_id(),
                self.config.container_id(),
                VERIFY_QUERY,
            )
            .await
            .map_err(|error| match error {
                already @ SeederError::QueryError { .. } => already,
                other => SeederError::QueryError {
                    message: other.to_string(),
                },
            })?;

        for row in &rows {
            tracing::debug!("Query returned {}", row);
        }
        tracing::info!("Verification query returned {} rows", rows.len());

        Ok(rows.len())
    }
}
