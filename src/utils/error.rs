use crate::domain::model::OperationResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeederError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Provisioning {resource} '{id}' failed: {message}")]
    ProvisioningError {
        resource: String,
        id: String,
        message: String,
    },

    #[error("Bulk upload rejected {} of {submitted} operations", failed.len())]
    BulkRejectedError {
        submitted: usize,
        failed: Vec<OperationResponse>,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Verification query failed: {message}")]
    QueryError { message: String },
}

pub type Result<T> = std::result::Result<T, SeederError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_rejected_error_reports_counts() {
        let err = SeederError::BulkRejectedError {
            submitted: 100,
            failed: vec![
                OperationResponse { status_code: 429 },
                OperationResponse { status_code: 409 },
            ],
        };
        assert_eq!(err.to_string(), "Bulk upload rejected 2 of 100 operations");
    }

    #[test]
    fn test_provisioning_error_names_resource() {
        let err = SeederError::ProvisioningError {
            resource: "container".to_string(),
            id: "Families".to_string(),
            message: "status 403".to_string(),
        };
        assert!(err.to_string().contains("container 'Families'"));
    }
}
