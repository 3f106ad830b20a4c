use serde::{Deserialize, Serialize};

/// 一筆合成的家庭記錄，對應後端的單一文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub parents: Vec<Parent>,
    pub children: Vec<Child>,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parent {
    #[serde(rename = "firstName")]
    pub first_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    #[serde(rename = "firstName")]
    pub first_name: String,
    pub gender: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub pets: Vec<Pet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(rename = "givenName")]
    pub given_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub state: String,
    pub county: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseDefinition {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerDefinition {
    pub id: String,
    #[serde(rename = "partitionKey")]
    pub partition_key: PartitionKeyDefinition,
}

/// 單一路徑的 Hash 分割鍵
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionKeyDefinition {
    pub kind: String,
    pub paths: Vec<String>,
}

impl PartitionKeyDefinition {
    pub fn hash(path: &str) -> Self {
        Self {
            kind: "Hash".to_string(),
            paths: vec![path.to_string()],
        }
    }
}

/// Container creation parameters: id, partition key and throughput ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub id: String,
    #[serde(rename = "partitionKey")]
    pub partition_key: PartitionKeyDefinition,
    #[serde(rename = "maxThroughput")]
    pub max_throughput: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OperationType {
    Create,
}

/// One entry of a bulk request: the action tag plus the document body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkOperation {
    #[serde(rename = "operationType")]
    pub operation_type: OperationType,
    #[serde(rename = "resourceBody")]
    pub resource_body: serde_json::Value,
}

impl BulkOperation {
    pub fn create(person: &Person) -> crate::utils::error::Result<Self> {
        Ok(Self {
            operation_type: OperationType::Create,
            resource_body: serde_json::to_value(person)?,
        })
    }
}

/// Per-operation outcome of a bulk request, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
