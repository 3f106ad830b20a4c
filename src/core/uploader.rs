use crate::domain::model::{BulkOperation, Person};
use crate::domain::ports::DocumentStore;
use crate::utils::error::{Result, SeederError};

/// Status the backend reports for a successfully created document.
const STATUS_CREATED: u16 = 201;

/// Submits one batch as a single multi-operation request and fails loudly
/// when any operation in it was not created.
pub struct BatchUploader<'a, S: DocumentStore> {
    store: &'a S,
    database_id: &'a str,
    container_id: &'a str,
}

impl<'a, S: DocumentStore> BatchUploader<'a, S> {
    pub fn new(store: &'a S, database_id: &'a str, container_id: &'a str) -> Self {
        Self {
            store,
            database_id,
            container_id,
        }
    }

    /// Upload one batch. Every record becomes a create operation; the
    /// whole batch is rejected if any response is not 201. No retry.
    pub async fn upload(&self, batch: &[Person]) -> Result<()> {
        let operations = batch
            .iter()
            .map(BulkOperation::create)
            .collect::<Result<Vec<_>>>()?;
        let submitted = operations.len();

        let results = self
            .store
            .bulk(self.database_id, self.container_id, operations)
            .await?;

        let failed: Vec<_> = results
            .into_iter()
            .filter(|result| result.status_code != STATUS_CREATED)
            .collect();

        if !failed.is_empty() {
            return Err(SeederError::BulkRejectedError { submitted, failed });
        }

        Ok(())
    }
}
