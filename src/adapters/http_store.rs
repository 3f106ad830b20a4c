use crate::domain::model::{
    BulkOperation, ContainerDefinition, ContainerSpec, DatabaseDefinition, OperationResponse,
};
use crate::domain::ports::DocumentStore;
use crate::utils::error::{Result, SeederError};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    documents: Vec<serde_json::Value>,
}

/// REST implementation of the [`DocumentStore`] port.
///
/// Wire shape: `POST /dbs`, `GET /dbs/{id}`, `POST /dbs/{db}/colls`,
/// `GET /dbs/{db}/colls/{id}`, `POST .../bulk`, `POST .../query`, bearer
/// token credential on every request. Create-if-not-exists treats 409 as
/// "already there" and falls back to a read.
pub struct HttpDocumentStore {
    client: Client,
    endpoint: String,
    key: String,
}

impl HttpDocumentStore {
    pub fn new(endpoint: &str, key: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key: key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    async fn get_definition<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
        path: &str,
    ) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SeederError::ProvisioningError {
                resource: resource.to_string(),
                id: id.to_string(),
                message: format!("read returned status {}", response.status()),
            });
        }

        Ok(response.json().await?)
    }

    async fn create_or_conflict(
        &self,
        resource: &str,
        id: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<Option<Response>> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.key)
            .json(body)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(Some(response)),
            StatusCode::CONFLICT => Ok(None),
            status => Err(SeederError::ProvisioningError {
                resource: resource.to_string(),
                id: id.to_string(),
                message: format!("create returned status {}", status),
            }),
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn create_database_if_not_exists(&self, id: &str) -> Result<DatabaseDefinition> {
        let body = serde_json::json!({ "id": id });
        match self
            .create_or_conflict("database", id, "/dbs", &body)
            .await?
        {
            Some(response) => Ok(response.json().await?),
            // Already exists; hand back the stored definition.
            None => self.read_database(id).await,
        }
    }

    async fn read_database(&self, id: &str) -> Result<DatabaseDefinition> {
        self.get_definition("database", id, &format!("/dbs/{}", id))
            .await
    }

    async fn create_container_if_not_exists(
        &self,
        database_id: &str,
        spec: &ContainerSpec,
    ) -> Result<ContainerDefinition> {
        let body = serde_json::to_value(spec)?;
        let path = format!("/dbs/{}/colls", database_id);
        match self
            .create_or_conflict("container", &spec.id, &path, &body)
            .await?
        {
            Some(response) => Ok(response.json().await?),
            None => self.read_container(database_id, &spec.id).await,
        }
    }

    async fn read_container(&self, database_id: &str, id: &str) -> Result<ContainerDefinition> {
        self.get_definition(
            "container",
            id,
            &format!("/dbs/{}/colls/{}", database_id, id),
        )
        .await
    }

    async fn bulk(
        &self,
        database_id: &str,
        container_id: &str,
        operations: Vec<BulkOperation>,
    ) -> Result<Vec<OperationResponse>> {
        let path = format!("/dbs/{}/colls/{}/bulk", database_id, container_id);
        let response = self
            .client
            .post(self.url(&path))
            .bearer_auth(&self.key)
            .json(&operations)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SeederError::ProcessingError {
                message: format!("bulk request returned status {}", response.status()),
            });
        }

        Ok(response.json().await?)
    }

    async fn query(
        &self,
        database_id: &str,
        container_id: &str,
        sql: &str,
    ) -> Result<Vec<serde_json::Value>> {
        let path = format!("/dbs/{}/colls/{}/query", database_id, container_id);
        let response = self
            .client
            .post(self.url(&path))
            .bearer_auth(&self.key)
            .json(&serde_json::json!({ "query": sql }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SeederError::QueryError {
                message: format!("query returned status {}", response.status()),
            });
        }

        let body: QueryResponse = response.json().await?;
        Ok(body.documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{OperationType, PartitionKeyDefinition, Person};
    use httpmock::prelude::*;

    fn store_for(server: &MockServer) -> HttpDocumentStore {
        HttpDocumentStore::new(&server.base_url(), "secret-key")
    }

    #[tokio::test]
    async fn test_create_database_returns_definition_on_201() {
        let server = MockServer::start();
        let create_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/dbs")
                .header("authorization", "Bearer secret-key")
                .json_body(serde_json::json!({"id": "FamilyDatabase"}));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": "FamilyDatabase"}));
        });

        let store = store_for(&server);
        let database = store
            .create_database_if_not_exists("FamilyDatabase")
            .await
            .unwrap();

        create_mock.assert();
        assert_eq!(database.id, "FamilyDatabase");
    }

    #[tokio::test]
    async fn test_create_database_conflict_falls_back_to_read() {
        let server = MockServer::start();
        let create_mock = server.mock(|when, then| {
            when.method(POST).path("/dbs");
            then.status(409);
        });
        let read_mock = server.mock(|when, then| {
            when.method(GET).path("/dbs/FamilyDatabase");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": "FamilyDatabase"}));
        });

        let store = store_for(&server);
        let database = store
            .create_database_if_not_exists("FamilyDatabase")
            .await
            .unwrap();

        create_mock.assert();
        read_mock.assert();
        assert_eq!(database.id, "FamilyDatabase");
    }

    #[tokio::test]
    async fn test_create_database_is_idempotent_across_calls() {
        let server = MockServer::start();
        let create_mock = server.mock(|when, then| {
            when.method(POST).path("/dbs");
            then.status(409);
        });
        let read_mock = server.mock(|when, then| {
            when.method(GET).path("/dbs/FamilyDatabase");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": "FamilyDatabase"}));
        });

        let store = store_for(&server);
        let first = store
            .create_database_if_not_exists("FamilyDatabase")
            .await
            .unwrap();
        let second = store
            .create_database_if_not_exists("FamilyDatabase")
            .await
            .unwrap();

        create_mock.assert_hits(2);
        read_mock.assert_hits(2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_read_database_missing_is_provisioning_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/dbs/Missing");
            then.status(404);
        });

        let store = store_for(&server);
        let error = store.read_database("Missing").await.unwrap_err();

        assert!(matches!(error, SeederError::ProvisioningError { .. }));
        assert!(error.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_create_container_sends_partition_key_and_throughput() {
        let server = MockServer::start();
        let create_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/dbs/FamilyDatabase/colls")
                .json_body(serde_json::json!({
                    "id": "Families",
                    "partitionKey": {"kind": "Hash", "paths": ["/Country"]},
                    "maxThroughput": 10000
                }));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": "Families",
                    "partitionKey": {"kind": "Hash", "paths": ["/Country"]}
                }));
        });

        let store = store_for(&server);
        let spec = ContainerSpec {
            id: "Families".to_string(),
            partition_key: PartitionKeyDefinition::hash("/Country"),
            max_throughput: 10_000,
        };
        let container = store
            .create_container_if_not_exists("FamilyDatabase", &spec)
            .await
            .unwrap();

        create_mock.assert();
        assert_eq!(container.id, "Families");
        assert_eq!(container.partition_key.paths, vec!["/Country".to_string()]);
    }

    #[tokio::test]
    async fn test_bulk_submits_operations_and_parses_statuses() {
        let server = MockServer::start();
        let person: Person = serde_json::from_value(serde_json::json!({
            "id": "doc-1",
            "Country": "Kenya",
            "lastName": "Odhiambo",
            "parents": [{"firstName": "Akinyi"}],
            "children": [{
                "firstName": "Baraka",
                "gender": "Male",
                "jobTitle": "Senior Research Engineer",
                "pets": [{"givenName": "Coco"}]
            }],
            "address": {"state": "Iowa", "county": "Essex", "city": "Brookhaven"}
        }))
        .unwrap();
        let operations = vec![BulkOperation::create(&person).unwrap()];

        let bulk_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/dbs/FamilyDatabase/colls/Families/bulk")
                .json_body(serde_json::to_value(&operations).unwrap());
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"statusCode": 201}]));
        });

        let store = store_for(&server);
        let results = store
            .bulk("FamilyDatabase", "Families", operations.clone())
            .await
            .unwrap();

        bulk_mock.assert();
        assert_eq!(results, vec![OperationResponse { status_code: 201 }]);
        assert!(matches!(operations[0].operation_type, OperationType::Create));
    }

    #[tokio::test]
    async fn test_bulk_transport_failure_is_processing_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/dbs/FamilyDatabase/colls/Families/bulk");
            then.status(500);
        });

        let store = store_for(&server);
        let error = store
            .bulk("FamilyDatabase", "Families", Vec::new())
            .await
            .unwrap_err();

        assert!(matches!(error, SeederError::ProcessingError { .. }));
    }

    #[tokio::test]
    async fn test_query_materializes_documents() {
        let server = MockServer::start();
        let query_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/dbs/FamilyDatabase/colls/Families/query")
                .json_body(
                    serde_json::json!({"query": "SELECT TOP 100 r.children FROM root r"}),
                );
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "documents": [{"children": []}, {"children": []}]
                }));
        });

        let store = store_for(&server);
        let rows = store
            .query(
                "FamilyDatabase",
                "Families",
                "SELECT TOP 100 r.children FROM root r",
            )
            .await
            .unwrap();

        query_mock.assert();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_query_failure_is_query_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/dbs/FamilyDatabase/colls/Families/query");
            then.status(403);
        });

        let store = store_for(&server);
        let error = store
            .query("FamilyDatabase", "Families", "SELECT 1")
            .await
            .unwrap_err();

        assert!(matches!(error, SeederError::QueryError { .. }));
    }

    #[tokio::test]
    async fn test_endpoint_trailing_slash_is_normalized() {
        let server = MockServer::start();
        let read_mock = server.mock(|when, then| {
            when.method(GET).path("/dbs/FamilyDatabase");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": "FamilyDatabase"}));
        });

        let store = HttpDocumentStore::new(&format!("{}/", server.base_url()), "secret-key");
        store.read_database("FamilyDatabase").await.unwrap();
        read_mock.assert();
    }
}
